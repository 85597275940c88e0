use std::{io, path::PathBuf};

use thiserror::Error;

/// Install hints printed when the encoder can't be found.
pub const INSTALL_HINTS: [&str; 3] = [
    "macOS: brew install ffmpeg",
    "Ubuntu/Debian: sudo apt-get install ffmpeg",
    "Windows: Download from https://ffmpeg.org/download.html",
];

#[derive(Error, Debug)]
pub enum EncodeError {
    /// Input file is missing; nothing was launched.
    #[error("{kind} file '{}' does not exist", .path.display())]
    MissingInput { kind: InputKind, path: PathBuf },

    #[error("{tool} not found. Please install ffmpeg:")]
    ToolNotFound { tool: String },

    /// Encoder ran and returned non-zero (`code` is `None` when killed by a signal).
    #[error("{tool} exited with {}", describe_exit(.code))]
    EncodeFailed {
        tool: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("{source}")]
    Unexpected {
        tool: String,
        #[source]
        source: io::Error,
    },
}

impl EncodeError {
    /// Map a failed spawn to either `ToolNotFound` or `Unexpected`.
    pub fn from_spawn(tool: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => EncodeError::ToolNotFound {
                tool: tool.to_string(),
            },
            _ => EncodeError::Unexpected {
                tool: tool.to_string(),
                source: err,
            },
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("code {c}"),
        None => "a signal".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Image,
    Audio,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Image => write!(f, "Image"),
            InputKind::Audio => write!(f, "Audio"),
        }
    }
}

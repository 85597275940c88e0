use std::{
    ffi::{OsStr, OsString},
    path::PathBuf,
};

use clap::Args;

use super::{cmdline, ffmpeg_args, Runner, SystemRunner};
use crate::{
    error::{EncodeError, InputKind},
    utils,
};

#[derive(Args, Debug, Clone)]
#[group(skip)]
pub struct Opt {
    /// Path to the image file
    #[arg(required_unless_present = "completions", display_order = 0)]
    pub image: Option<PathBuf>,
    /// Path to the audio file (.mp3, .m4a, or other audio formats)
    #[arg(required_unless_present = "completions", display_order = 1)]
    pub audio: Option<PathBuf>,
    /// Output video file path {n}
    /// (default: same as image name with .mp4 extension in same directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// ffmpeg executable, looked up in PATH
    #[arg(long, default_value = "ffmpeg")]
    pub ffmpeg: OsString,
}

/// What the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    pub image: PathBuf,
    pub audio: PathBuf,
    pub output: Option<PathBuf>,
}

/// Validated inputs plus the output path that will be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub image: PathBuf,
    pub audio: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub output: PathBuf,
}

pub type EncodeResult = Result<Encoded, EncodeError>;

impl From<&Opt> for InputSpec {
    fn from(opt: &Opt) -> Self {
        // clap only lets these be absent together with --completions
        InputSpec {
            image: opt.image.clone().unwrap_or_default(),
            audio: opt.audio.clone().unwrap_or_default(),
            output: opt.output.clone(),
        }
    }
}

impl InputSpec {
    pub fn new(image: impl Into<PathBuf>, audio: impl Into<PathBuf>) -> Self {
        InputSpec {
            image: image.into(),
            audio: audio.into(),
            output: None,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Check inputs in order (image, then audio) and fill in the default output.
    pub fn resolve(self) -> Result<ResolvedPaths, EncodeError> {
        utils::check_input(InputKind::Image, &self.image)?;
        utils::check_input(InputKind::Audio, &self.audio)?;
        let output = match self.output {
            Some(o) => o,
            None => utils::default_output(&self.image),
        };
        Ok(ResolvedPaths {
            image: self.image,
            audio: self.audio,
            output,
        })
    }
}

/// Run the encoder once on already validated paths.
pub fn encode<R: Runner>(runner: &R, ffmpeg: &OsStr, paths: &ResolvedPaths) -> EncodeResult {
    let args = ffmpeg_args(&paths.image, &paths.audio, &paths.output);
    let tool = ffmpeg.to_string_lossy();
    tracing::debug!("{}", cmdline(ffmpeg, &args));

    let out = runner
        .run(ffmpeg, &args)
        .map_err(|e| EncodeError::from_spawn(&tool, e))?;
    tracing::debug!("{} exited with {:?}", tool, out.code);

    if out.success() {
        Ok(Encoded {
            output: paths.output.clone(),
        })
    } else {
        Err(EncodeError::EncodeFailed {
            tool: tool.into_owned(),
            code: out.code,
            stderr: out.stderr,
        })
    }
}

/// validate -> derive output -> build command -> execute -> interpret
pub fn run<R: Runner>(runner: &R, ffmpeg: &OsStr, spec: InputSpec) -> EncodeResult {
    run_with(runner, ffmpeg, spec, |_| {})
}

/// Same as [`run`], calling `before_encode` once the paths are validated.
pub fn run_with<R, F>(runner: &R, ffmpeg: &OsStr, spec: InputSpec, before_encode: F) -> EncodeResult
where
    R: Runner,
    F: FnOnce(&ResolvedPaths),
{
    let paths = spec.resolve()?;
    before_encode(&paths);
    encode(runner, ffmpeg, &paths)
}

pub fn main(opt: &Opt) -> EncodeResult {
    let encoded = run_with(&SystemRunner, &opt.ffmpeg, InputSpec::from(opt), |paths| {
        print_plan(paths);
        println!("\nRunning {}...", opt.ffmpeg.to_string_lossy());
    })?;
    println!("\nVideo successfully created: {}", encoded.output.display());
    Ok(encoded)
}

fn print_plan(paths: &ResolvedPaths) {
    println!("Creating video from:");
    println!("  Image: {}", paths.image.display());
    println!("  Audio: {}", paths.audio.display());
    println!("  Output: {}", paths.output.display());
}

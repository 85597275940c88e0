use std::{
    ffi::{OsStr, OsString},
    io,
    path::Path,
    process::{Command, Stdio},
};

pub mod video;

/// Loop the still image, h264 tuned for stills, aac 192k, stop at the end of the audio.
const STILL_IMAGE_ARGS: [&str; 12] = [
    "-c:v",
    "libx264",
    "-tune",
    "stillimage",
    "-c:a",
    "aac",
    "-b:a",
    "192k",
    "-pix_fmt",
    "yuv420p",
    "-shortest",
    "-y",
];

/// Full ffmpeg argument list for one image + one audio track.
pub fn ffmpeg_args(image: &Path, audio: &Path, output: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::with_capacity(20);
    args.extend(["-loop", "1", "-i"].map(OsString::from));
    args.push(image.as_os_str().to_owned());
    args.push("-i".into());
    args.push(audio.as_os_str().to_owned());
    args.extend(STILL_IMAGE_ARGS.map(OsString::from));
    args.push(output.as_os_str().to_owned());
    args
}

/// Exit status and captured stderr of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub code: Option<i32>,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait Runner {
    /// Run `program` to completion. Spawn failures are returned as-is.
    fn run(&self, program: &OsStr, args: &[OsString]) -> io::Result<ToolOutput>;
}

/// Spawns real processes found through `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, program: &OsStr, args: &[OsString]) -> io::Result<ToolOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;
        Ok(ToolOutput {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Render an argument list for logs.
pub fn cmdline(program: &OsStr, args: &[OsString]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(|a| a.as_os_str()))
        .map(|a| a.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

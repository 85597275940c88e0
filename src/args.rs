use clap::{ArgAction, Parser};
use clap_complete::Shell;

use crate::*;

/// Create a video from a static image and audio file using ffmpeg
#[derive(Parser, Clone, Debug)]
#[command(name = "img2vid", version, about)]
pub struct Opt {
    #[command(flatten)]
    pub video: gen::video::Opt,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}

impl Opt {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

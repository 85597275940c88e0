use std::{error::Error, io, process::ExitCode};

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use img2vid::{error::EncodeError, *};

fn main() -> Result<ExitCode, Box<dyn Error + Send + Sync>> {
    let opt = args::Opt::parse();

    tracing_subscriber::fmt()
        .with_max_level(opt.log_level())
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .try_init()?;

    if let Some(shell) = opt.completions {
        print_shell_completions(shell);
        return Ok(ExitCode::SUCCESS);
    }

    match gen::video::main(&opt.video) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            report(&e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn report(err: &EncodeError) {
    match err {
        EncodeError::MissingInput { .. } => eprintln!("Error: {}", err),
        EncodeError::ToolNotFound { .. } => {
            eprintln!("Error: {}", err);
            for hint in error::INSTALL_HINTS {
                eprintln!("  {}", hint);
            }
        }
        EncodeError::EncodeFailed { stderr, .. } => {
            tracing::info!("{}", err);
            eprintln!("\nError creating video:");
            eprintln!("{}", stderr);
        }
        EncodeError::Unexpected { .. } => eprintln!("Error: {}", err),
    }
}

fn print_shell_completions(shell: Shell) {
    generate(shell, &mut args::Opt::command(), "img2vid", &mut io::stdout());
}

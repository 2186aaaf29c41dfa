use anyhow::Result;
use ccgate::cli::{self, Cli};
use ccgate::commands::check;
use ccgate::config;
use ccgate::setup;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status when a fatal error stops the check before it completes
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    let cli = cli::parse_args();
    setup::init_logging(cli.verbosity);

    match run(&cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

// Resolve options from CLI and config file, then check
fn run(cli: &Cli) -> Result<usize> {
    let file_config = config::load_config(cli.config_file.as_deref())?;
    let mut options = file_config.merge_into(cli.check_options());

    if options.paths.is_empty() {
        options.paths.push(PathBuf::from("."));
    }

    check::check_project(&options)
}

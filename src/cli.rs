use crate::commands::check::{CheckOptions, ThresholdConfig};
use crate::core::Rank;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ccgate")]
#[command(about = "Fail the build when cyclomatic complexity exceeds rank thresholds", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Files or directories to analyze (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Worst rank allowed for any single block (A-F)
    #[arg(short = 'b', long = "max-absolute", value_name = "RANK")]
    pub max_absolute: Option<Rank>,

    /// Worst rank allowed for any module's average complexity (A-F)
    #[arg(short = 'm', long = "max-modules", value_name = "RANK")]
    pub max_modules: Option<Rank>,

    /// Worst rank allowed for the codebase's average complexity (A-F)
    #[arg(short = 'a', long = "max-average", value_name = "RANK")]
    pub max_average: Option<Rank>,

    /// Highest allowed codebase average complexity score
    #[arg(long = "max-average-num", value_name = "SCORE")]
    pub max_average_num: Option<f64>,

    /// Comma-separated glob patterns of files to exclude
    #[arg(short = 'e', long, value_name = "PATTERNS")]
    pub exclude: Option<String>,

    /// Comma-separated glob patterns of directories to ignore
    #[arg(short = 'i', long, value_name = "PATTERNS")]
    pub ignore: Option<String>,

    /// Do not count assert statements towards complexity
    #[arg(long = "no-assert")]
    pub no_assert: bool,

    /// Blocks exempt from the per-block check, as module:block[,module:block...]
    #[arg(long = "ignore-blocks", value_name = "SPEC")]
    pub ignore_blocks: Option<String>,

    /// Configuration file (default: nearest .ccgate.toml)
    #[arg(short = 'c', long = "config-file", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Path to the radon executable
    #[arg(long = "radon-bin", env = "CCGATE_RADON", value_name = "PATH")]
    pub radon_bin: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Options as given on the command line, before config file merging
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            paths: self.paths.clone(),
            exclude: self.exclude.clone(),
            ignore: self.ignore.clone(),
            no_assert: self.no_assert,
            thresholds: ThresholdConfig {
                max_absolute: self.max_absolute,
                max_modules: self.max_modules,
                max_average: self.max_average,
                max_average_num: self.max_average_num,
            },
            ignore_blocks: self.ignore_blocks.clone(),
            radon: self.radon_bin.clone(),
        }
    }
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}

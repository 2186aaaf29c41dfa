//! `.ccgate.toml` configuration.
//!
//! Every key is optional. Command line flags take precedence over the
//! file; see [`FileConfig::merge_into`].

mod loader;

pub use loader::{directory_ancestors, find_config, load_config, load_config_from_path, CONFIG_FILE_NAME};

use crate::commands::check::{CheckOptions, ThresholdConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub paths: Vec<PathBuf>,
    pub exclude: Option<String>,
    pub ignore: Option<String>,
    #[serde(default)]
    pub no_assert: bool,
    pub ignore_blocks: Option<String>,
    pub radon: Option<PathBuf>,
    #[serde(default)]
    pub thresholds: ThresholdConfig,
}

impl FileConfig {
    /// Fill every option the command line left unset from this file.
    pub fn merge_into(self, cli: CheckOptions) -> CheckOptions {
        let thresholds = ThresholdConfig {
            max_absolute: cli.thresholds.max_absolute.or(self.thresholds.max_absolute),
            max_modules: cli.thresholds.max_modules.or(self.thresholds.max_modules),
            max_average: cli.thresholds.max_average.or(self.thresholds.max_average),
            max_average_num: cli
                .thresholds
                .max_average_num
                .or(self.thresholds.max_average_num),
        };

        CheckOptions {
            paths: if cli.paths.is_empty() { self.paths } else { cli.paths },
            exclude: cli.exclude.or(self.exclude),
            ignore: cli.ignore.or(self.ignore),
            no_assert: cli.no_assert || self.no_assert,
            thresholds,
            ignore_blocks: cli.ignore_blocks.or(self.ignore_blocks),
            radon: cli.radon.or(self.radon),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rank;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_config() {
        let config: FileConfig = toml::from_str(indoc! {r#"
            paths = ["src"]
            exclude = "tests/*"
            ignore = "build,dist"
            no_assert = true
            ignore_blocks = "pkg/mod.py:handler"
            radon = "/opt/radon/bin/radon"

            [thresholds]
            max_absolute = "b"
            max_modules = "A"
            max_average = "A"
            max_average_num = 4.5
        "#})
        .unwrap();

        assert_eq!(
            config,
            FileConfig {
                paths: vec![PathBuf::from("src")],
                exclude: Some("tests/*".to_string()),
                ignore: Some("build,dist".to_string()),
                no_assert: true,
                ignore_blocks: Some("pkg/mod.py:handler".to_string()),
                radon: Some(PathBuf::from("/opt/radon/bin/radon")),
                thresholds: ThresholdConfig {
                    max_absolute: Some(Rank::B),
                    max_modules: Some(Rank::A),
                    max_average: Some(Rank::A),
                    max_average_num: Some(4.5),
                },
            }
        );
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(toml::from_str::<FileConfig>("max_absolute = \"B\"").is_err());
        assert!(toml::from_str::<FileConfig>("[thresholds]\nmax_block = \"B\"").is_err());
    }

    #[test]
    fn test_invalid_rank_is_rejected() {
        let err = toml::from_str::<FileConfig>("[thresholds]\nmax_absolute = \"G\"").unwrap_err();
        assert!(err.to_string().contains("invalid rank"));
    }

    #[test]
    fn test_cli_values_win_over_file() {
        let file = FileConfig {
            paths: vec![PathBuf::from("src")],
            exclude: Some("file-exclude".to_string()),
            thresholds: ThresholdConfig {
                max_absolute: Some(Rank::C),
                max_modules: Some(Rank::B),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CheckOptions {
            paths: vec![PathBuf::from("app")],
            exclude: Some("cli-exclude".to_string()),
            thresholds: ThresholdConfig {
                max_absolute: Some(Rank::A),
                ..Default::default()
            },
            ..Default::default()
        };

        let merged = file.merge_into(cli);

        assert_eq!(merged.paths, vec![PathBuf::from("app")]);
        assert_eq!(merged.exclude.as_deref(), Some("cli-exclude"));
        assert_eq!(merged.thresholds.max_absolute, Some(Rank::A));
        assert_eq!(merged.thresholds.max_modules, Some(Rank::B));
    }

    #[test]
    fn test_file_fills_unset_cli_values() {
        let file = FileConfig {
            paths: vec![PathBuf::from("src")],
            no_assert: true,
            ignore_blocks: Some("m:f".to_string()),
            thresholds: ThresholdConfig {
                max_average_num: Some(3.0),
                ..Default::default()
            },
            ..Default::default()
        };

        let merged = file.merge_into(CheckOptions::default());

        assert_eq!(merged.paths, vec![PathBuf::from("src")]);
        assert!(merged.no_assert);
        assert_eq!(merged.ignore_blocks.as_deref(), Some("m:f"));
        assert_eq!(merged.thresholds.max_average_num, Some(3.0));
    }
}

use crate::error::{KeyFitError, KfResult};
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub analysis: AnalysisParams,
    #[command(flatten)]
    pub report: ReportParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AnalysisParams {
    /// Look characters up as written instead of lower-casing first.
    #[arg(long, default_value_t = false)]
    pub case_sensitive: bool,

    /// Analyse layouts registered as disabled too.
    #[arg(long, default_value_t = false)]
    pub include_disabled: bool,

    /// Directory of extra .json/.csv layout definitions.
    #[arg(long)]
    pub layouts_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Hand,
    Finger,
    Distance,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportParams {
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Decimal places for percentages.
    #[arg(long, default_value_t = 2)]
    pub precision: usize,

    /// Order table rows by a normalized metric (ascending) instead of registry order.
    #[arg(long, value_enum)]
    pub sort_by: Option<SortKey>,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            precision: 2,
            sort_by: None,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            KeyFitError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Copies over only the values the user typed on the command line, so a
    /// config file is not clobbered by clap defaults.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(analysis.case_sensitive);
        update_if_present!(analysis.include_disabled);
        update_if_present!(analysis.layouts_dir);

        update_if_present!(report.format);
        update_if_present!(report.precision);
        update_if_present!(report.sort_by);
    }
}

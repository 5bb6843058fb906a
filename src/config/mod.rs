pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{OutputFormat, SafetyRules};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_INPUT_PATH: &str = "input.txt";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, clap::Parser)]
#[command(name = "report-safety")]
#[command(about = "Counts safe reports, with and without tolerating one bad level")]
pub struct CliConfig {
    /// Input file, one report per line
    #[arg(long)]
    pub input: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Optional TOML file with [input], [rules] and [output] tables
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges the optional config file under the command-line flags.
    pub fn resolve(&self) -> Result<RunConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        Ok(RunConfig::merge(file, self.input.clone(), self.format))
    }
}

/// Settings for a single evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub input_path: String,
    pub rules: SafetyRules,
    pub format: OutputFormat,
}

impl RunConfig {
    pub fn merge(file: TomlConfig, input: Option<String>, format: Option<OutputFormat>) -> Self {
        Self {
            input_path: input
                .or(file.input.path)
                .unwrap_or_else(|| DEFAULT_INPUT_PATH.to_string()),
            rules: file.rules,
            format: format.or(file.output.format).unwrap_or_default(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::merge(TomlConfig::default(), None, None)
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)?;
        self.rules.validate()
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn rules(&self) -> SafetyRules {
        self.rules
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

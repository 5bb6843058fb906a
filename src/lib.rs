pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalSource, toml_config::TomlConfig, RunConfig};
pub use core::{
    engine::{EngineOutput, SafetyEngine},
    pipeline::SafetyPipeline,
    safety::{is_safe, is_safe_2, is_safe_2_with, is_safe_with},
};
pub use domain::model::{OutputFormat, Report, ReportVerdict, SafetyRules, SafetySummary};
pub use utils::error::{Result, SafetyError};

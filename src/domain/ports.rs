use crate::domain::model::{OutputFormat, Report, SafetyRules, SafetySummary};
use crate::utils::error::Result;

pub trait ReportSource {
    /// Reads the whole input as text.
    fn read_to_string(&self, path: &str) -> Result<String>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn rules(&self) -> SafetyRules;
    fn output_format(&self) -> OutputFormat;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Report>>;
    fn transform(&self, reports: Vec<Report>) -> Result<SafetySummary>;
    fn load(&self, summary: &SafetySummary) -> Result<String>;
}

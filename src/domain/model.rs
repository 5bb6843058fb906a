use serde::{Deserialize, Serialize};

/// One input line: its 1-based line number and the levels on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub line: usize,
    pub levels: Vec<i64>,
}

impl Report {
    pub fn new(line: usize, levels: Vec<i64>) -> Self {
        Self { line, levels }
    }

    pub fn levels(&self) -> &[i64] {
        &self.levels
    }
}

/// Step bounds applied to every consecutive difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyRules {
    pub min_step: i64,
    pub max_step: i64,
}

impl Default for SafetyRules {
    fn default() -> Self {
        Self {
            min_step: 1,
            max_step: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `part1:  N` / `part2:  M`
    #[default]
    Text,
    Json,
    Csv,
    Tsv,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportVerdict {
    pub line: usize,
    pub levels: Vec<i64>,
    pub safe: bool,
    pub tolerant_safe: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySummary {
    pub part1: usize,
    pub part2: usize,
    pub total: usize,
    pub reports: Vec<ReportVerdict>,
}

impl SafetySummary {
    pub fn from_verdicts(reports: Vec<ReportVerdict>) -> Self {
        let part1 = reports.iter().filter(|v| v.safe).count();
        let part2 = reports.iter().filter(|v| v.tolerant_safe).count();
        Self {
            part1,
            part2,
            total: reports.len(),
            reports,
        }
    }
}

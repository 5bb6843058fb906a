use crate::core::ReportSource;
use crate::utils::error::{Result, SafetyError};
use std::fs;
use std::path::Path;

/// Reads input files relative to a base directory.
#[derive(Debug, Clone)]
pub struct LocalSource {
    base_path: String,
}

impl LocalSource {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Default for LocalSource {
    fn default() -> Self {
        Self::new(".".to_string())
    }
}

impl ReportSource for LocalSource {
    fn read_to_string(&self, path: &str) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);
        fs::read_to_string(&full_path).map_err(|source| SafetyError::IoError {
            path: full_path.display().to_string(),
            source,
        })
    }
}

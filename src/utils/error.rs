use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SafetyError {
    #[error("Failed to read '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: invalid level '{token}': {source}")]
    ParseError {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl SafetyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SafetyError::IoError { .. } | SafetyError::ParseError { .. } => ErrorCategory::Input,
            SafetyError::ConfigError { .. } | SafetyError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SafetyError::CsvError(_) | SafetyError::SerializationError(_) => {
                ErrorCategory::Rendering
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Rendering => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SafetyError::IoError { path, .. } => {
                format!("Check that '{}' exists and is readable", path)
            }
            SafetyError::ParseError { line, .. } => format!(
                "Line {} must contain integers separated by single spaces",
                line
            ),
            SafetyError::ConfigError { .. } => {
                "Check the TOML syntax of the configuration file".to_string()
            }
            SafetyError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and retry", field)
            }
            SafetyError::CsvError(_) | SafetyError::SerializationError(_) => {
                "Retry with --format text".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not load reports: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Rendering => format!("Could not render results: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SafetyError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error(token: &str) -> SafetyError {
        let source = token.parse::<i64>().unwrap_err();
        SafetyError::ParseError {
            line: 4,
            token: token.to_string(),
            source,
        }
    }

    #[test]
    fn test_parse_error_names_line_and_token() {
        let err = parse_error("x1");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.to_string().starts_with("Line 4: invalid level 'x1'"));
        assert!(err.recovery_suggestion().contains("Line 4"));
    }

    #[test]
    fn test_exit_codes_are_non_zero() {
        let io = SafetyError::IoError {
            path: "input.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(io.exit_code(), 1);
        assert!(io.user_friendly_message().contains("input.txt"));

        let config = SafetyError::InvalidConfigValueError {
            field: "rules.max_step".to_string(),
            value: "0".to_string(),
            reason: "too small".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(config.exit_code(), 1);

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let render = SafetyError::from(json);
        assert_eq!(render.severity(), ErrorSeverity::Critical);
        assert_eq!(render.exit_code(), 3);
    }
}

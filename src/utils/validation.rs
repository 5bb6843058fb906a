use crate::utils::error::{Result, SafetyError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(SafetyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SafetyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: i64, min_value: i64) -> Result<()> {
    if value < min_value {
        return Err(SafetyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SafetyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "input.txt").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "   ").is_err());
        assert!(validate_path("input", "in\0put.txt").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("rules.min_step", 1, 1).is_ok());
        assert!(validate_positive_number("rules.min_step", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("rules.max_step", 3, 1, i64::MAX).is_ok());
        assert!(validate_range("rules.max_step", 2, 3, 10).is_err());
    }
}

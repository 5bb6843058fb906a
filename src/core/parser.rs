use crate::domain::model::Report;
use crate::utils::error::{Result, SafetyError};

/// Parses one report per line, levels separated by single spaces.
///
/// Lines are trimmed first. Any token that is not a decimal integer fails
/// the whole parse, including the empty token left by a blank line or a
/// doubled space.
pub fn parse_reports(input: &str) -> Result<Vec<Report>> {
    input
        .lines()
        .enumerate()
        .map(|(index, line)| parse_line(index + 1, line))
        .collect()
}

pub fn parse_line(line_number: usize, line: &str) -> Result<Report> {
    let levels = line
        .trim()
        .split(' ')
        .map(|token| {
            token.parse::<i64>().map_err(|source| SafetyError::ParseError {
                line: line_number,
                token: token.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Report::new(line_number, levels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample_lines() {
        let reports = parse_reports("7 6 4 2 1\n1 2 7 8 9\n").unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0], Report::new(1, vec![7, 6, 4, 2, 1]));
        assert_eq!(reports[1].line, 2);
        assert_eq!(reports[1].levels(), &[1, 2, 7, 8, 9]);
    }

    #[test]
    fn test_trailing_whitespace_and_crlf_are_trimmed() {
        let reports = parse_reports("1 2 3  \r\n4 5\r\n").unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].levels, vec![1, 2, 3]);
        assert_eq!(reports[1].levels, vec![4, 5]);
    }

    #[test]
    fn test_negative_levels() {
        let report = parse_line(1, "-3 -1 0 +2").unwrap();
        assert_eq!(report.levels, vec![-3, -1, 0, 2]);
    }

    #[test]
    fn test_empty_input_has_no_reports() {
        assert!(parse_reports("").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_token_fails() {
        let err = parse_reports("1 2 3\n4 x 6\n").unwrap_err();
        match err {
            SafetyError::ParseError { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_line_fails() {
        let err = parse_reports("1 2 3\n\n4 5 6\n").unwrap_err();
        assert!(matches!(err, SafetyError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_double_space_fails() {
        let err = parse_line(1, "1  2").unwrap_err();
        assert!(matches!(err, SafetyError::ParseError { ref token, .. } if token.is_empty()));
    }
}

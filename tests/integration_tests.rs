use anyhow::Result;
use report_safety::{
    LocalSource, OutputFormat, RunConfig, SafetyEngine, SafetyError, SafetyPipeline, TomlConfig,
};
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = "7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

fn source_with_input(content: &str) -> Result<(TempDir, LocalSource)> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("input.txt"), content)?;
    let source = LocalSource::new(temp_dir.path().to_str().unwrap().to_string());
    Ok((temp_dir, source))
}

#[test]
fn test_end_to_end_sample_counts() -> Result<()> {
    let (_dir, source) = source_with_input(SAMPLE)?;

    let pipeline = SafetyPipeline::new(source, RunConfig::default());
    let mut engine = SafetyEngine::new(pipeline);
    let output = engine.run()?;

    assert_eq!(output.rendered, "part1:  2\npart2:  4\n");
    assert_eq!(output.summary.part1, 2);
    assert_eq!(output.summary.part2, 4);
    Ok(())
}

#[test]
fn test_end_to_end_with_monitoring() -> Result<()> {
    let (_dir, source) = source_with_input(SAMPLE)?;

    let pipeline = SafetyPipeline::new(source, RunConfig::default());
    let mut engine = SafetyEngine::new_with_monitoring(pipeline, true);

    assert_eq!(engine.run()?.rendered, "part1:  2\npart2:  4\n");
    Ok(())
}

#[test]
fn test_file_without_trailing_newline() -> Result<()> {
    let (_dir, source) = source_with_input(SAMPLE.trim_end())?;

    let pipeline = SafetyPipeline::new(source, RunConfig::default());
    let output = SafetyEngine::new(pipeline).run()?;

    assert_eq!(output.summary.total, 6);
    assert_eq!(output.rendered, "part1:  2\npart2:  4\n");
    Ok(())
}

#[test]
fn test_empty_file_counts_zero() -> Result<()> {
    let (_dir, source) = source_with_input("")?;

    let pipeline = SafetyPipeline::new(source, RunConfig::default());
    let output = SafetyEngine::new(pipeline).run()?;

    assert_eq!(output.rendered, "part1:  0\npart2:  0\n");
    Ok(())
}

#[test]
fn test_missing_input_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let source = LocalSource::new(temp_dir.path().to_str().unwrap().to_string());

    let pipeline = SafetyPipeline::new(source, RunConfig::default());
    let err = SafetyEngine::new(pipeline).run().unwrap_err();

    assert!(matches!(err, SafetyError::IoError { ref path, .. } if path.ends_with("input.txt")));
    assert_ne!(err.exit_code(), 0);
    Ok(())
}

#[test]
fn test_malformed_token_is_fatal() -> Result<()> {
    let (_dir, source) = source_with_input("1 2 3\n4 five 6\n")?;

    let pipeline = SafetyPipeline::new(source, RunConfig::default());
    let err = SafetyEngine::new(pipeline).run().unwrap_err();

    match err {
        SafetyError::ParseError { line, token, .. } => {
            assert_eq!(line, 2);
            assert_eq!(token, "five");
        }
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}

#[test]
fn test_config_file_drives_run() -> Result<()> {
    let (dir, source) = source_with_input("")?;
    fs::write(dir.path().join("reports.txt"), SAMPLE)?;
    let config_path = dir.path().join("rules.toml");
    fs::write(
        &config_path,
        r#"
[input]
path = "reports.txt"

[rules]
max_step = 4

[output]
format = "csv"
"#,
    )?;

    let config = RunConfig::merge(TomlConfig::from_file(&config_path)?, None, None);
    assert_eq!(config.format, OutputFormat::Csv);

    let pipeline = SafetyPipeline::new(source, config);
    let output = SafetyEngine::new(pipeline).run()?;

    // 9 7 6 2 1 has a step of 4, allowed here
    assert_eq!(output.summary.part1, 3);
    assert_eq!(output.summary.part2, 5);

    let lines: Vec<&str> = output.rendered.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "line,levels,safe,tolerant_safe");
    assert_eq!(lines[3], "3,9 7 6 2 1,true,true");
    Ok(())
}

#[test]
fn test_json_output_lists_every_report() -> Result<()> {
    let (_dir, source) = source_with_input(SAMPLE)?;

    let config = RunConfig {
        format: OutputFormat::Json,
        ..RunConfig::default()
    };
    let output = SafetyEngine::new(SafetyPipeline::new(source, config)).run()?;

    let value: serde_json::Value = serde_json::from_str(&output.rendered)?;
    assert_eq!(value["part1"], 2);
    assert_eq!(value["part2"], 4);
    assert_eq!(value["reports"].as_array().map(Vec::len), Some(6));
    assert_eq!(value["reports"][3]["tolerant_safe"], true);
    Ok(())
}

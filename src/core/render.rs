use crate::domain::model::{OutputFormat, SafetySummary};
use crate::utils::error::{Result, SafetyError};

pub fn render(summary: &SafetySummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(summary)),
        OutputFormat::Json => render_json(summary),
        OutputFormat::Csv => render_delimited(summary, b','),
        OutputFormat::Tsv => render_delimited(summary, b'\t'),
    }
}

pub fn render_text(summary: &SafetySummary) -> String {
    format!("part1:  {}\npart2:  {}\n", summary.part1, summary.part2)
}

fn render_json(summary: &SafetySummary) -> Result<String> {
    let mut json = serde_json::to_string_pretty(summary)?;
    json.push('\n');
    Ok(json)
}

fn render_delimited(summary: &SafetySummary, delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(["line", "levels", "safe", "tolerant_safe"])?;
    for verdict in &summary.reports {
        let levels = verdict
            .levels
            .iter()
            .map(|level| level.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writer.write_record([
            verdict.line.to_string(),
            levels,
            verdict.safe.to_string(),
            verdict.tolerant_safe.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SafetyError::CsvError(csv::Error::from(e.into_error())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

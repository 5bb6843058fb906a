use crate::core::parser::parse_reports;
use crate::core::render::render;
use crate::core::safety::{is_safe_2_with, is_safe_with};
use crate::core::{ConfigProvider, Pipeline, Report, ReportSource, ReportVerdict, SafetySummary};
use crate::utils::error::Result;

pub struct SafetyPipeline<S: ReportSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: ReportSource, C: ConfigProvider> SafetyPipeline<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }
}

impl<S: ReportSource, C: ConfigProvider> Pipeline for SafetyPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Report>> {
        let path = self.config.input_path();
        tracing::debug!("Reading reports from: {}", path);

        let input = self.source.read_to_string(path)?;
        let reports = parse_reports(&input)?;

        tracing::debug!("Parsed {} reports ({} bytes)", reports.len(), input.len());
        Ok(reports)
    }

    fn transform(&self, reports: Vec<Report>) -> Result<SafetySummary> {
        let rules = self.config.rules();
        tracing::debug!(
            "Classifying with step bounds {}..={}",
            rules.min_step,
            rules.max_step
        );

        let verdicts = reports
            .into_iter()
            .map(|report| {
                let safe = is_safe_with(report.levels(), &rules);
                let tolerant_safe = is_safe_2_with(report.levels(), &rules);
                tracing::trace!(
                    line = report.line,
                    safe,
                    tolerant_safe,
                    "classified report"
                );
                ReportVerdict {
                    line: report.line,
                    levels: report.levels,
                    safe,
                    tolerant_safe,
                }
            })
            .collect();

        Ok(SafetySummary::from_verdicts(verdicts))
    }

    fn load(&self, summary: &SafetySummary) -> Result<String> {
        let format = self.config.output_format();
        tracing::debug!("Rendering summary as {:?}", format);
        render(summary, format)
    }
}

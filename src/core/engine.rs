use crate::core::{Pipeline, SafetySummary};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Result of one engine run: the summary and its rendered form.
#[derive(Debug, Clone)]
pub struct EngineOutput {
    pub summary: SafetySummary,
    pub rendered: String,
}

pub struct SafetyEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> SafetyEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&mut self) -> Result<EngineOutput> {
        tracing::info!("Starting report safety evaluation");
        self.monitor.log_stats("Start");

        let reports = self.pipeline.extract()?;
        tracing::info!("Loaded {} reports", reports.len());
        self.monitor.log_stats("Extract");

        let summary = self.pipeline.transform(reports)?;
        tracing::info!(
            "Classified {} reports: {} safe, {} safe with one removal",
            summary.total,
            summary.part1,
            summary.part2
        );
        self.monitor.log_stats("Transform");

        let rendered = self.pipeline.load(&summary)?;
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(EngineOutput { summary, rendered })
    }
}

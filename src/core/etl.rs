use crate::domain::model::RunSummary;
use crate::domain::ports::{Pipeline, Reporter};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::default(),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    fn log_elapsed(&self, phase: &str, reporter: &dyn Reporter) {
        reporter.info(&self.monitor.stats().summary(phase));
    }

    /// Read, convert and save one patron file. Fatal errors propagate after
    /// the pipeline has reported them; nothing is retried.
    pub fn run(&self, reporter: &dyn Reporter) -> Result<RunSummary> {
        reporter.info("Initializing patron data converter...");

        // Extract
        let rows = self.pipeline.extract(reporter)?;
        let rows_read = rows.len();
        self.log_elapsed("Patron file read", reporter);

        // Transform
        let records = self.pipeline.transform(rows, reporter);
        reporter.info(&format!("{} patron records converted", records.len()));
        self.log_elapsed("Patron records converted", reporter);

        // Load
        let summary = self.pipeline.load(&records, reporter)?;
        self.log_elapsed("Patron records saved", reporter);

        Ok(RunSummary {
            rows_read,
            records_written: summary.records_written,
            output_path: summary.output_path,
        })
    }
}

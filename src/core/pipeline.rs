use crate::core::{driver, reader, writer};
use crate::domain::model::{InputRow, LoadSummary, OutputRecord};
use crate::domain::ports::{ConfigProvider, Pipeline, Reporter};
use crate::utils::error::{EtlError, Result};

fn report_fatal(reporter: &dyn Reporter, e: EtlError) -> EtlError {
    reporter.critical(&format!(
        "{} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    ));
    e
}

/// Patron CSV in, bulk-load NDJSON out, with paths taken from `C`.
pub struct PatronPipeline<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> PatronPipeline<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }
}

impl<C: ConfigProvider> Pipeline for PatronPipeline<C> {
    fn extract(&self, reporter: &dyn Reporter) -> Result<Vec<InputRow>> {
        let path = self.config.patron_file();
        reporter.info(&format!("Reading patron file... \"{}\"", path.display()));

        reader::read_patron_file(path).map_err(|e| report_fatal(reporter, e))
    }

    fn transform(&self, rows: Vec<InputRow>, reporter: &dyn Reporter) -> Vec<OutputRecord> {
        driver::run(rows, self.config.patron_file(), reporter)
    }

    fn load(&self, records: &[OutputRecord], reporter: &dyn Reporter) -> Result<LoadSummary> {
        let output_path = self.config.output_path();
        tracing::debug!("Writing {} records to {}", records.len(), output_path.display());

        let records_written = writer::write_ndjson(records, output_path)
            .map_err(|e| report_fatal(reporter, e))?;
        reporter.info(&format!(
            "Patron records saved to: {}",
            output_path.display()
        ));

        Ok(LoadSummary {
            records_written,
            output_path: output_path.to_path_buf(),
        })
    }
}

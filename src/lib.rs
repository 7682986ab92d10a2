pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use config::{load_settings, EnvConfig, Settings};
pub use core::{etl::EtlEngine, mapper::RecordMapper, pipeline::PatronPipeline};
pub use domain::model::{InputRow, OutputRecord, RunSummary};
pub use utils::error::{EtlError, Result};
pub use utils::logger::TracingReporter;

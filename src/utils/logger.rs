use crate::domain::ports::{ReportLevel, Reporter};
use crate::utils::error::Result;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

const LOG_TIME_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("patron_load=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("patron_load=info"))
    }
}

/// Installs the logger for a single run. Events go to `log_file` until the
/// returned guard is dropped; `verbose` also echoes them to stderr.
pub fn init_run_logger(log_file: &Path, verbose: bool) -> Result<DefaultGuard> {
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_timer(ChronoLocal::new(LOG_TIME_FORMAT.to_string()));

    let console_layer = verbose.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    let subscriber = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(file_layer)
        .with(console_layer);

    Ok(tracing::subscriber::set_default(subscriber))
}

/// Stderr-only logger used before the log directory is known.
pub fn init_console_logger(verbose: bool) -> DefaultGuard {
    let subscriber = tracing_subscriber::registry().with(env_filter(verbose)).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .compact(),
    );

    tracing::subscriber::set_default(subscriber)
}

/// Forwards run reports to whichever `tracing` subscriber is current.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, level: ReportLevel, message: &str) {
        match level {
            ReportLevel::Info => tracing::info!("{}", message),
            ReportLevel::Warning => tracing::warn!("{}", message),
            ReportLevel::Critical => tracing::error!(severity = "critical", "{}", message),
        }
    }
}

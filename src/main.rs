use chrono::Local;
use clap::Parser;
use patron_load::domain::ports::Reporter;
use patron_load::utils::{error::EtlError, logger};
use patron_load::{load_settings, CliArgs, EtlEngine, PatronPipeline, TracingReporter};

fn main() {
    let args = CliArgs::parse();
    let started = Local::now();
    let reporter = TracingReporter;

    // Settings decide where the log goes, so config errors are reported on stderr.
    let settings = {
        let _console = logger::init_console_logger(args.verbose);
        match load_settings(&args.env_file, &reporter) {
            Ok(settings) => settings,
            Err(e) => exit_with(&e),
        }
    };

    let log_file = settings.log_file_path(&started);
    println!("Saving log to: {}", log_file.display());
    let _guard = match logger::init_run_logger(&log_file, args.verbose) {
        Ok(guard) => guard,
        Err(e) => {
            let _console = logger::init_console_logger(args.verbose);
            reporter.critical(&format!("Cannot open log file {}: {}", log_file.display(), e));
            exit_with(&e);
        }
    };

    reporter.info("Beginning Log");
    for (field, value) in settings.entries() {
        reporter.info(&format!("Config - {} = {}", field, value));
    }
    if args.monitor {
        reporter.info("System monitoring enabled");
    }

    let pipeline = PatronPipeline::new(settings);
    let engine = EtlEngine::new_with_monitoring(pipeline, args.monitor);

    match engine.run(&reporter) {
        Ok(summary) => {
            reporter.info(&format!(
                "Patron records converted successfully: {} of {} rows written",
                summary.records_written, summary.rows_read
            ));
            println!("Output saved to: {}", summary.output_path.display());
        }
        // The pipeline has already reported the failure as critical.
        Err(e) => {
            reporter.info(&format!("Recovery suggestion: {}", e.recovery_suggestion()));
            exit_with(&e);
        }
    }
}

fn exit_with(e: &EtlError) -> ! {
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}

//! Demo: logs a burst of records and prints how long it took.
//!
//! Usage: `zlog [config.ini]`. Without a file, writes `logs/abc-<date>.log`
//! asynchronously with an error file and colored console output.

use std::{env, process::ExitCode, sync::Arc, time::Instant};

use zlog::{
    Config, Logger, LoggerConfig, log_debug, log_error, log_info, logger_info, set_default_logger,
};

const ITERATIONS: usize = 600;

fn main() -> ExitCode {
    let config = match env::args().nth(1) {
        Some(path) => match Config::load(&path).and_then(|c| LoggerConfig::from_config(&c)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => LoggerConfig::default()
            .with_file_prefix("logs/abc")
            .with_async(true)
            .with_error_file(true),
    };

    let logger = Arc::new(Logger::new(config));
    if set_default_logger(Arc::clone(&logger)).is_err() {
        eprintln!("default logger already installed");
        return ExitCode::FAILURE;
    }

    let started = Instant::now();
    for i in 0..ITERATIONS {
        log_debug!(; i, "debug line");
        log_info!("{i} info line");
        log_error!("{i} error line");
    }
    logger_info!(logger; "elapsed", format!("{:?}", started.elapsed()));

    logger.flush();
    ExitCode::SUCCESS
}

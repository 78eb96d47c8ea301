use std::fs::File;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a log file. Unset means stderr.
pub const LOG_FILE_ENV: &str = "MVI_SAMPLES_LOG";

/// Where log lines end up.
#[derive(Debug)]
enum LogTarget {
    Stderr,
    File(File),
}

/// Open the log file named by `path`, falling back to stderr when there is
/// none or it cannot be created.
fn open_target(path: Option<&str>) -> LogTarget {
    let Some(path) = path else {
        return LogTarget::Stderr;
    };

    match File::create(path) {
        Ok(file) => LogTarget::File(file),
        Err(err) => {
            eprintln!(
                "Warning: Failed to create log file {}: {}; logging to stderr",
                path, err
            );
            LogTarget::Stderr
        }
    }
}

/// Initialize tracing.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`. Output goes to
/// stderr unless `MVI_SAMPLES_LOG` names a file, in which case the file is
/// created (truncated) and used instead.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let log_path = std::env::var(LOG_FILE_ENV).ok();

    match open_target(log_path.as_deref()) {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .try_init();
        }
        LogTarget::File(file) => {
            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_level(true);

            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .try_init();
        }
    }
}

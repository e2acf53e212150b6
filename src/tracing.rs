//! Log output for the library and the replay binary.
//!
//! Filtering follows `RUST_LOG`, e.g. `RUST_LOG=inline_edit::dismiss=trace`
//! to watch dismissal decisions. With `--log-file`, everything at debug and
//! above also goes to `logs/inline-edit.log` in the config directory, one
//! file per day.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "inline-edit.log";

/// Install the global subscriber. Call once, before any other work.
///
/// Console logs go to stderr at `warn` unless `RUST_LOG` says otherwise, so
/// they never interleave with a transcript on stdout.
pub fn init(log_to_file: bool) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = log_to_file
        .then(|| match crate::config_paths::ensure_logs_dir() {
            Ok(dir) => Some(
                fmt::layer()
                    .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            ),
            Err(e) => {
                eprintln!("file logging disabled: {}", e);
                None
            }
        })
        .flatten();

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

use tracing_subscriber::filter::LevelFilter;

/// Logging configuration, built once from the command line and passed to
/// `init_logging`. Nothing reads verbosity from globals afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub json: bool,
}

impl LogConfig {
    /// Quiet default for day-to-day use: warnings and errors only
    pub fn production() -> Self {
        LogConfig {
            level: LevelFilter::WARN,
            json: json_requested(),
        }
    }

    pub fn debug() -> Self {
        LogConfig {
            level: LevelFilter::DEBUG,
            json: json_requested(),
        }
    }

    pub fn from_flags(debug: bool) -> Self {
        if debug {
            Self::debug()
        } else {
            Self::production()
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::production()
    }
}

fn json_requested() -> bool {
    std::env::var("LEETLOG_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Initialize structured logging with tracing.
/// Call once per process, before any command runs. `RUST_LOG` wins over the
/// level in `config` when set.
pub fn init_logging(config: LogConfig) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so command output on stdout stays clean
    let result = if config.json {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .json(),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("⚠️ Failed to set global tracing subscriber: {}", e);
        return;
    }

    tracing::debug!(level = %config.level, json = config.json, "Structured logging initialized");
}

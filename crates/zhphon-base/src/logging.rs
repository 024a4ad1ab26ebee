use {
    log::{LevelFilter, Log, Metadata, Record},
    once_cell::sync::Lazy,
    std::{io::Write, time::Instant},
};

/// Environment variable that overrides the default log level.
pub const LOG_ENV: &str = "ZHPHON_LOG";

static START: Lazy<Instant> = Lazy::new(Instant::now);

/// Logging settings resolved at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
}

impl Default for LogConfig {
    /// Debug builds log everything down to `Debug`, release builds stop at `Info`.
    fn default() -> Self {
        let level = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        Self { level }
    }
}

impl LogConfig {
    /// Read the level from `ZHPHON_LOG`, falling back to the build default.
    pub fn from_env() -> Self {
        match std::env::var(LOG_ENV) {
            Ok(value) => Self::from_level_str(&value).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Parse `error`, `warn`, `info`, `debug`, `trace` or `off` (case-insensitive).
    pub fn from_level_str(value: &str) -> Option<Self> {
        let level = match value.trim().to_ascii_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => return None,
        };
        Some(Self { level })
    }
}

/// A logger that writes one line per record to stderr.
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> Self {
        Lazy::force(&START);
        Self { level }
    }

    /// Render a record the way it is written to stderr, without the trailing newline.
    pub fn format_record(record: &Record) -> String {
        let elapsed = START.elapsed();
        format!(
            "{:>5}.{:03}s [{}] [thread:{:?}] {}:{} - {}",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
            record.level(),
            std::thread::current().id(),
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
            record.args()
        )
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = Self::format_record(record);
        let mut stderr = std::io::stderr().lock();
        // nowhere left to report a failed stderr write
        let _ = writeln!(stderr, "{}", line);
    }

    fn flush(&self) {
        std::io::stderr().flush().ok();
    }
}

/// Install a `StderrLogger` using `ZHPHON_LOG` or the build default.
///
/// Only the first call per process takes effect.
pub fn init_stderr_logger() {
    init_logger(LogConfig::from_env());
}

/// Install a `StderrLogger` at the configured level.
///
/// Only the first call per process takes effect.
pub fn init_logger(config: LogConfig) {
    if log::set_boxed_logger(Box::new(StderrLogger::new(config.level))).is_ok() {
        log::set_max_level(config.level);
    }
}

/// Log a fatal error and exit the process with status 1.
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
        $crate::log::logger().flush();
        std::process::exit(1);
    }};
}

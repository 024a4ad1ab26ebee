pub mod logging;

pub use logging::{LogConfig, StderrLogger, init_logger, init_stderr_logger};

// Re-export log crate so downstream crates can use zhphon_base::log::*
pub use log;

//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Human-readable formatting
//! - `RUST_LOG` overrides on top of the configured level
//! - Output on stderr, leaving stdout to command results

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::LoggerImpl;

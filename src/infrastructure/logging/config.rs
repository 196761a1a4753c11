/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Default level (trace, debug, info, warn, error) when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

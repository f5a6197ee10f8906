//! Environment and logging setup for the binary.
//!
//! `.env` is loaded first, then logging is configured from `log4rs.yml` when
//! that file exists, or from `CIDR_CALC_LOG` otherwise.

use crate::error::AppError;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::PathBuf;

pub const LOG_LEVEL_ENV: &str = "CIDR_CALC_LOG";
pub const LOG_CONFIG_ENV: &str = "CIDR_CALC_LOG_CONFIG";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Logging settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub config_file: PathBuf,
    pub level: LevelFilter,
}

impl LogSettings {
    pub fn from_env() -> LogSettings {
        Self::from_values(
            std::env::var(LOG_CONFIG_ENV).ok(),
            std::env::var(LOG_LEVEL_ENV).ok(),
        )
    }

    fn from_values(config_file: Option<String>, level: Option<String>) -> LogSettings {
        let level = level
            .and_then(|l| l.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Warn);
        LogSettings {
            config_file: PathBuf::from(
                config_file.unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string()),
            ),
            level,
        }
    }

    /// Console logging to stderr, so stdout carries only results.
    pub fn console_config(&self) -> Result<Config, AppError> {
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
            .build();

        Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(self.level))
            .map_err(|e| AppError::Logging(e.to_string()))
    }
}

/// Load `.env` and install the global logger.
pub fn init() -> Result<(), AppError> {
    dotenv::dotenv().ok();
    init_with(&LogSettings::from_env())
}

/// Install the global logger described by `settings`.
///
/// A config file that exists but does not parse is an error; it is never
/// replaced by the console fallback.
pub fn init_with(settings: &LogSettings) -> Result<(), AppError> {
    if settings.config_file.exists() {
        log4rs::init_file(&settings.config_file, Default::default())
            .map_err(|e| AppError::Logging(format!("{}: {e}", settings.config_file.display())))?;
    } else {
        log4rs::init_config(settings.console_config()?)
            .map_err(|e| AppError::Logging(e.to_string()))?;
    }
    log::debug!("logging configured: {settings:?}");
    Ok(())
}

//! Configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the
//! extractor is built.
//!
//! ```bash
//! export ENTITY_MAX_MENTION_LENGTH="20"
//! export ENTITY_MAX_TEXT_LENGTH="280"
//! export ENTITY_OFFSET_UNIT="utf16"
//! ```
//!
//! ## Optional Variables
//!
//! - `ENTITY_MAX_MENTION_LENGTH` - Mention body cap (default: 20, range: 1-255)
//! - `ENTITY_MAX_TEXT_LENGTH` - Reject texts longer than this many characters (default: unlimited)
//! - `ENTITY_OFFSET_UNIT` - Offset unit: `chars`, `bytes` or `utf16` (default: `chars`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

use crate::domain::entities::OffsetUnit;

/// Mention bodies longer than this are cut when no override is configured.
pub const DEFAULT_MAX_MENTION_LENGTH: usize = 20;

const MAX_MENTION_LENGTH_LIMIT: usize = 255;

/// Settings used by [`crate::extractor::EntityExtractor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Maximum number of body characters kept for a mention.
    pub max_mention_length: usize,
    /// Texts with more characters than this are rejected before scanning.
    pub max_text_length: Option<usize>,
    /// Unit of the reported `start`/`end` offsets.
    pub offset_unit: OffsetUnit,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_mention_length: DEFAULT_MAX_MENTION_LENGTH,
            max_text_length: None,
            offset_unit: OffsetUnit::Chars,
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
    pub max_mention_length: usize,
    pub max_text_length: Option<usize>,
    pub offset_unit: OffsetUnit,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `ENTITY_OFFSET_UNIT` names an unknown unit.
    pub fn from_env() -> Result<Self> {
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let max_mention_length = env::var("ENTITY_MAX_MENTION_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_MENTION_LENGTH);

        let max_text_length = env::var("ENTITY_MAX_TEXT_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok());

        let offset_unit = match env::var("ENTITY_OFFSET_UNIT") {
            Ok(value) => value
                .parse::<OffsetUnit>()
                .context("Failed to parse ENTITY_OFFSET_UNIT")?,
            Err(_) => OffsetUnit::default(),
        };

        Ok(Self {
            log_level,
            log_format,
            max_mention_length,
            max_text_length,
            offset_unit,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `max_mention_length` is outside 1-255
    /// - `max_text_length` is set to 0
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.max_mention_length == 0 || self.max_mention_length > MAX_MENTION_LENGTH_LIMIT {
            anyhow::bail!(
                "ENTITY_MAX_MENTION_LENGTH must be between 1 and {}, got {}",
                MAX_MENTION_LENGTH_LIMIT,
                self.max_mention_length
            );
        }

        if self.max_text_length == Some(0) {
            anyhow::bail!("ENTITY_MAX_TEXT_LENGTH must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Extractor settings derived from this configuration.
    pub fn extractor(&self) -> ExtractorConfig {
        ExtractorConfig {
            max_mention_length: self.max_mention_length,
            max_text_length: self.max_text_length,
            offset_unit: self.offset_unit,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Max mention length: {}", self.max_mention_length);
        match self.max_text_length {
            Some(max) => tracing::info!("  Max text length: {}", max),
            None => tracing::info!("  Max text length: unlimited"),
        }
        tracing::info!("  Offset unit: {:?}", self.offset_unit);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

impl Default for Config {
    fn default() -> Self {
        let extractor = ExtractorConfig::default();
        Self {
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            max_mention_length: extractor.max_mention_length,
            max_text_length: extractor.max_text_length,
            offset_unit: extractor.offset_unit,
        }
    }
}

/// Loads `.env` if present, then loads and validates configuration from
/// environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
pub fn load_from_env() -> Result<Config> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

use platerank_common::error::{PlateError, PlateResult};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_ROW_THRESHOLD: f64 = 50.0;
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rules_config_path: Option<PathBuf>,
    pub row_threshold: f64,
    pub top_n: usize,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rules_config_path: None,
            row_threshold: DEFAULT_ROW_THRESHOLD,
            top_n: DEFAULT_TOP_N,
            log_level: "info".to_owned(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present; every variable has a default.
    pub fn from_env() -> PlateResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        let row_threshold = parse_row_threshold(&get_var_or("ROW_THRESHOLD", "50"))?;
        let top_n = get_var_or("TOP_N", "5")
            .parse()
            .map_err(|e| PlateError::Config(format!("invalid TOP_N: {e}")))?;

        Ok(Self {
            rules_config_path: env::var("RULES_CONFIG_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            row_threshold,
            top_n,
            log_level: get_var_or("LOG_LEVEL", "info"),
        })
    }
}

/// Row thresholds are pixel distances: finite and non-negative.
pub fn parse_row_threshold(raw: &str) -> PlateResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| PlateError::Config(format!("invalid ROW_THRESHOLD: {e}")))?;
    if !value.is_finite() || value < 0.0 {
        return Err(PlateError::Config(format!(
            "ROW_THRESHOLD must be a finite non-negative number, got {value}"
        )));
    }
    Ok(value)
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use shared::domain::{DISPLAY_COLUMN_HEIGHT, STEP_INTERVAL_MS};

pub const DEFAULT_CONFIG_PATH: &str = "sortviz.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub step_interval_ms: u64,
    pub column_height: usize,
    pub seed: Option<u64>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            step_interval_ms: STEP_INTERVAL_MS,
            column_height: DISPLAY_COLUMN_HEIGHT,
            seed: None,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    step_interval_ms: Option<u64>,
    column_height: Option<usize>,
    seed: Option<u64>,
    log_filter: Option<String>,
}

/// Defaults, then the config file, then environment overrides. An explicit
/// `path` must exist; the default file is optional.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            settings.apply_file(&raw)?;
        }
        None => {
            if let Ok(raw) = fs::read_to_string(DEFAULT_CONFIG_PATH) {
                settings.apply_file(&raw)?;
            }
        }
    }

    settings.apply_env(|key| std::env::var(key).ok());
    Ok(settings.normalized())
}

impl Settings {
    fn apply_file(&mut self, raw: &str) -> anyhow::Result<()> {
        let file_cfg: FileSettings = toml::from_str(raw).context("invalid sortviz config")?;
        if let Some(v) = file_cfg.step_interval_ms {
            self.step_interval_ms = v;
        }
        if let Some(v) = file_cfg.column_height {
            self.column_height = v;
        }
        if let Some(v) = file_cfg.seed {
            self.seed = Some(v);
        }
        if let Some(v) = file_cfg.log_filter {
            self.log_filter = v;
        }
        Ok(())
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("SORTVIZ_STEP_INTERVAL_MS").and_then(|v| v.parse().ok()) {
            self.step_interval_ms = v;
        }
        if let Some(v) = lookup("APP__STEP_INTERVAL_MS").and_then(|v| v.parse().ok()) {
            self.step_interval_ms = v;
        }

        if let Some(v) = lookup("APP__COLUMN_HEIGHT").and_then(|v| v.parse().ok()) {
            self.column_height = v;
        }

        if let Some(v) = lookup("APP__SEED").and_then(|v| v.parse().ok()) {
            self.seed = Some(v);
        }

        if let Some(v) = lookup("RUST_LOG") {
            self.log_filter = v;
        }
        if let Some(v) = lookup("APP__LOG_FILTER") {
            self.log_filter = v;
        }
    }

    fn normalized(mut self) -> Self {
        self.step_interval_ms = self.step_interval_ms.max(1);
        self.column_height = self.column_height.max(1);
        self
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

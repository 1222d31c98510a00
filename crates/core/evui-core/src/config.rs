use crate::error::{AppError, AppResult};
use crate::format::{FMT_DIGITS, FMT_LIMIT, Formatter, money::DEFAULT_CURRENCY, number::MAX_DIGITS};
use crate::i18n::{Locale, Translator};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FormatConfig {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default = "default_fmt_limit")]
    pub fmt_limit: f64,
    #[serde(default = "default_fmt_digits")]
    pub fmt_digits: u32,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_fmt_limit() -> f64 {
    FMT_LIMIT
}

fn default_fmt_digits() -> u32 {
    FMT_DIGITS
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            fmt_limit: default_fmt_limit(),
            fmt_digits: default_fmt_digits(),
            currency: default_currency(),
        }
    }
}

impl FormatConfig {
    pub fn formatter(&self) -> Formatter {
        Formatter::from_config(self)
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.locale)
    }

    /// Updates one setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let invalid = |e: &dyn std::fmt::Display| {
            AppError::Config(format!("Invalid value '{}' for {}: {}", value, key, e))
        };
        match key {
            "locale" => self.locale = value.parse::<Locale>()?,
            "fmt_limit" => {
                let limit = value.parse::<f64>().map_err(|e| invalid(&e))?;
                if !limit.is_finite() || limit < 0.0 {
                    return Err(invalid(&"expected a non-negative number"));
                }
                self.fmt_limit = limit;
            }
            "fmt_digits" => {
                let digits = value.parse::<u32>().map_err(|e| invalid(&e))?;
                if digits > MAX_DIGITS {
                    return Err(invalid(&format!("expected at most {}", MAX_DIGITS)));
                }
                self.fmt_digits = digits;
            }
            "currency" => {
                let code = value.trim().to_ascii_uppercase();
                if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
                    return Err(invalid(&"expected an ISO 4217 code"));
                }
                self.currency = code;
            }
            _ => return Err(AppError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    /// Checks values that may have been edited by hand in `config.toml`.
    pub fn validate(&self) -> AppResult<()> {
        if !self.fmt_limit.is_finite() || self.fmt_limit < 0.0 {
            return Err(AppError::Config(format!(
                "fmt_limit must be a non-negative number, got {}",
                self.fmt_limit
            )));
        }
        if self.fmt_digits > MAX_DIGITS {
            return Err(AppError::Config(format!(
                "fmt_digits must be at most {}, got {}",
                MAX_DIGITS, self.fmt_digits
            )));
        }
        Ok(())
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
    pub config: FormatConfig,
}

impl ConfigManager {
    pub fn new(base_dir: &Path) -> AppResult<Self> {
        let config_path = base_dir.join("config.toml");
        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path).map_err(|e| AppError::Io {
                path: config_path.clone(),
                source: e,
            })?;
            toml::from_str::<FormatConfig>(&content)
                .map_err(|e| AppError::Config(e.to_string()))
                .and_then(|config| config.validate().map(|_| config))
                .unwrap_or_else(|e| {
                    warn!("Ignoring unreadable {}: {}", config_path.display(), e);
                    FormatConfig::default()
                })
        } else {
            FormatConfig::default()
        };

        if !config_path.exists() {
            if let Err(e) = std::fs::create_dir_all(base_dir)
                .map_err(AppError::IoGeneric)
                .and_then(|_| Self::save_to_path(&config, &config_path))
            {
                warn!("Failed to save default config: {}", e);
            }
        }

        Ok(Self {
            config_path,
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn save(&self) -> AppResult<()> {
        Self::save_to_path(&self.config, &self.config_path)
    }

    fn save_to_path(config: &FormatConfig, path: &Path) -> AppResult<()> {
        let content =
            toml::to_string_pretty(config).map_err(|e| AppError::Config(e.to_string()))?;

        // Atomic write: temp file in the same directory, then rename
        let parent = path.parent().unwrap_or(Path::new("."));
        let temp = tempfile::NamedTempFile::new_in(parent).map_err(AppError::IoGeneric)?;
        std::fs::write(temp.path(), &content).map_err(AppError::IoGeneric)?;
        temp.persist(path).map_err(|e| AppError::IoGeneric(e.error))?;
        Ok(())
    }

    pub fn update(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.config.set(key, value)?;
        self.save()
    }

    pub fn reset(&mut self) -> AppResult<()> {
        self.config = FormatConfig::default();
        self.save()
    }
}

use crate::error::{AppError, AppResult};
use std::path::PathBuf;

/// Overrides where `config.toml` lives.
pub const ENV_HOME: &str = "EVUI_HOME";

const HOME_DIR_NAME: &str = ".evui";

/// Directory holding the formatter settings: `$EVUI_HOME`, else `~/.evui`.
pub fn get_base_dir() -> AppResult<PathBuf> {
    match std::env::var_os(ENV_HOME) {
        Some(raw) => {
            let dir = PathBuf::from(raw);
            if dir.is_absolute() {
                Ok(dir)
            } else {
                Err(AppError::Config(format!(
                    "{} must be absolute, got {}",
                    ENV_HOME,
                    dir.display()
                )))
            }
        }
        None => dirs::home_dir()
            .map(|home| home.join(HOME_DIR_NAME))
            .ok_or_else(|| AppError::Config(format!("No home directory; set {}", ENV_HOME))),
    }
}

use crate::core::configure::app::{get_env_source, AppConfig};
use crate::infrastructure::error::AppResult;
use once_cell::sync::OnceCell;

pub const ENV_PREFIX: &str = "APP";

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Loads the configuration on first call and freezes it for the rest of the process.
pub fn init_config() -> AppResult<&'static AppConfig> {
    CONFIG.get_or_try_init(|| AppConfig::read(get_env_source(ENV_PREFIX)))
}

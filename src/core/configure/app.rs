use crate::core::configure::eligibility::EligibilityConfig;
use crate::core::configure::server::ServerConfig;
use crate::infrastructure::error::AppResult;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_PROFILE: &str = "dev";
pub const SETTINGS_DIR: &str = "settings";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub profile: String,
    pub server: ServerConfig,
    pub eligibility: EligibilityConfig,
}

impl AppConfig {
    /// Builds the configuration from defaults, `settings/base.toml`,
    /// `settings/{profile}.toml` and `APP__*` environment variables, in that order.
    pub fn read(env_src: Environment) -> AppResult<Self> {
        Self::read_from(Path::new(SETTINGS_DIR), env_src)
    }

    pub fn read_from(settings_dir: &Path, env_src: Environment) -> AppResult<Self> {
        let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| DEFAULT_PROFILE.to_string());
        let defaults = EligibilityConfig::default();

        let config: AppConfig = Config::builder()
            .set_default("profile", profile.clone())?
            .set_default("server.addr", "127.0.0.1")?
            .set_default("server.port", 8080_i64)?
            .set_default("eligibility.min_loan_amount", defaults.min_loan_amount)?
            .set_default("eligibility.max_loan_amount", defaults.max_loan_amount)?
            .set_default("eligibility.min_loan_period", i64::from(defaults.min_loan_period))?
            .set_default("eligibility.max_loan_period", i64::from(defaults.max_loan_period))?
            .set_default("eligibility.min_customer_age", i64::from(defaults.min_customer_age))?
            .set_default("eligibility.max_customer_age", i64::from(defaults.max_customer_age))?
            .add_source(File::from(settings_dir.join("base.toml")).required(false))
            .add_source(File::from(settings_dir.join(format!("{profile}.toml"))).required(false))
            .add_source(env_src)
            .build()?
            .try_deserialize()?;

        config.eligibility.validate()?;
        Ok(config)
    }
}

pub fn get_env_source(prefix: &str) -> Environment {
    Environment::with_prefix(prefix)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

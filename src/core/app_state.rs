use crate::application::loan::estonian_input_validator::EstonianInputValidator;
use crate::application::loan::input_validator_interface::InputValidatorInterface;
use crate::core::configure::app::AppConfig;
use crate::domain::identity::Clock;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub input_validator: Arc<dyn InputValidatorInterface>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_validator(config, Arc::new(EstonianInputValidator::default()))
    }

    pub fn with_clock(config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        Self::with_validator(config, Arc::new(EstonianInputValidator::with_clock(clock)))
    }

    pub fn with_validator(
        config: AppConfig,
        input_validator: Arc<dyn InputValidatorInterface>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            input_validator,
        }
    }
}

use crate::api::domain::business_rule_interface::check_rules;
use crate::application::loan::input_validator_interface::InputValidatorInterface;
use crate::core::configure::eligibility::EligibilityConfig;
use crate::domain::identity::{Clock, IdentityCodeAnalyzer, SystemClock};
use crate::domain::loan::loan_request::mask_personal_code;
use crate::domain::loan::rules::{
    CustomerMustBeAtLeastAge, CustomerMustNotExceedAge, LoanAmountMustBeWithinBounds,
    LoanPeriodMustBeWithinBounds,
};
use crate::infrastructure::error::{AppError, AppResult};
use crate::infrastructure::identity::EstonianPersonalCodeParser;
use std::sync::Arc;

pub const INVALID_PERSONAL_CODE_MESSAGE: &str = "Invalid personal ID code!";

#[derive(Clone)]
pub struct EstonianInputValidator {
    analyzer: Arc<dyn IdentityCodeAnalyzer>,
    clock: Arc<dyn Clock>,
}

impl Default for EstonianInputValidator {
    fn default() -> Self {
        Self::new(Arc::new(EstonianPersonalCodeParser), Arc::new(SystemClock))
    }
}

impl EstonianInputValidator {
    pub fn new(analyzer: Arc<dyn IdentityCodeAnalyzer>, clock: Arc<dyn Clock>) -> Self {
        Self { analyzer, clock }
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::new(Arc::new(EstonianPersonalCodeParser), clock)
    }
}

impl InputValidatorInterface for EstonianInputValidator {
    fn validate_request(
        &self,
        loan_amount: i64,
        loan_period: i32,
        config: &EligibilityConfig,
    ) -> AppResult<()> {
        check_rules(&[
            &LoanAmountMustBeWithinBounds {
                loan_amount,
                min_loan_amount: config.min_loan_amount,
                max_loan_amount: config.max_loan_amount,
            },
            &LoanPeriodMustBeWithinBounds {
                loan_period,
                min_loan_period: config.min_loan_period,
                max_loan_period: config.max_loan_period,
            },
        ])
    }

    fn validate_age(&self, personal_code: &str, config: &EligibilityConfig) -> AppResult<()> {
        let age = self
            .analyzer
            .parse_age(personal_code, self.clock.today())
            .map_err(|err| {
                log::debug!(
                    "Personal code {} failed to parse: {err}",
                    mask_personal_code(personal_code)
                );
                AppError::InvalidPersonalCode(INVALID_PERSONAL_CODE_MESSAGE.to_string())
            })?;

        check_rules(&[
            &CustomerMustBeAtLeastAge {
                age,
                minimum_age: config.min_customer_age,
            },
            &CustomerMustNotExceedAge {
                age,
                highest_allowed_age: config.highest_allowed_age(),
            },
        ])
    }
}

use crate::infrastructure::error::{AppError, AppResult};
use serde::Deserialize;

const MONTHS_IN_YEAR: i64 = 12;
/// Longest loan period the service accepts in its configuration, 100 years.
pub const LOAN_PERIOD_LIMIT: i32 = 1200;

/// Numeric bounds every loan request is checked against. All bounds are inclusive.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityConfig {
    pub min_loan_amount: i64,
    pub max_loan_amount: i64,
    pub min_loan_period: i32,
    pub max_loan_period: i32,
    pub min_customer_age: i32,
    pub max_customer_age: i32,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            min_loan_amount: 2000,
            max_loan_amount: 10000,
            min_loan_period: 12,
            max_loan_period: 60,
            min_customer_age: 18,
            max_customer_age: 80,
        }
    }
}

impl EligibilityConfig {
    /// Oldest age at which a customer may still apply: the maximum customer age
    /// minus the longest configured loan period, rounded up to whole years.
    pub fn highest_allowed_age(&self) -> i64 {
        let max_loan_period = i64::from(self.max_loan_period);
        let loan_years = (max_loan_period + MONTHS_IN_YEAR - 1).div_euclid(MONTHS_IN_YEAR);
        i64::from(self.max_customer_age) - loan_years
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.min_loan_amount < 0 || self.min_loan_period < 0 || self.min_customer_age < 0 {
            return Err(AppError::InvalidConfigError(
                "Eligibility bounds must not be negative".to_string(),
            ));
        }
        if self.min_loan_amount > self.max_loan_amount {
            return Err(AppError::InvalidConfigError(format!(
                "min_loan_amount ({}) is greater than max_loan_amount ({})",
                self.min_loan_amount, self.max_loan_amount
            )));
        }
        if self.min_loan_period > self.max_loan_period {
            return Err(AppError::InvalidConfigError(format!(
                "min_loan_period ({}) is greater than max_loan_period ({})",
                self.min_loan_period, self.max_loan_period
            )));
        }
        if self.min_customer_age > self.max_customer_age {
            return Err(AppError::InvalidConfigError(format!(
                "min_customer_age ({}) is greater than max_customer_age ({})",
                self.min_customer_age, self.max_customer_age
            )));
        }
        if self.max_loan_period > LOAN_PERIOD_LIMIT {
            return Err(AppError::InvalidConfigError(format!(
                "max_loan_period ({}) exceeds the limit of {LOAN_PERIOD_LIMIT} months",
                self.max_loan_period
            )));
        }
        if self.highest_allowed_age() < i64::from(self.min_customer_age) {
            return Err(AppError::InvalidConfigError(format!(
                "highest allowed age ({}) is below min_customer_age ({}), no applicant could pass",
                self.highest_allowed_age(),
                self.min_customer_age
            )));
        }
        Ok(())
    }
}

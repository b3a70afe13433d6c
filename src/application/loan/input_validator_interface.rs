use crate::core::configure::eligibility::EligibilityConfig;
use crate::domain::loan::LoanRequest;
use crate::infrastructure::error::AppResult;

/// Eligibility checks run before a loan request reaches the decision engine.
///
/// `validate_request` and `validate_age` cover disjoint rule sets and may be
/// called independently.
pub trait InputValidatorInterface: Send + Sync + 'static {
    /// Checks the requested amount, then the requested period, against the
    /// configured inclusive bounds.
    fn validate_request(
        &self,
        loan_amount: i64,
        loan_period: i32,
        config: &EligibilityConfig,
    ) -> AppResult<()>;

    /// Checks that the personal code is valid and that the age it encodes is
    /// inside the allowed range.
    fn validate_age(&self, personal_code: &str, config: &EligibilityConfig) -> AppResult<()>;

    fn validate(&self, request: &LoanRequest, config: &EligibilityConfig) -> AppResult<()> {
        self.validate_request(request.loan_amount, request.loan_period, config)?;
        self.validate_age(&request.personal_code, config)
    }
}

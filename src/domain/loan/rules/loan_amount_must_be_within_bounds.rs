use crate::api::domain::business_rule_interface::BusinessRuleInterface;
use crate::infrastructure::error::{AppError, AppResult};

pub struct LoanAmountMustBeWithinBounds {
    pub loan_amount: i64,
    pub min_loan_amount: i64,
    pub max_loan_amount: i64,
}

impl BusinessRuleInterface for LoanAmountMustBeWithinBounds {
    fn check_broken(&self) -> AppResult<()> {
        if !(self.min_loan_amount..=self.max_loan_amount).contains(&self.loan_amount) {
            return Err(AppError::InvalidLoanAmount("Invalid loan amount!".to_string()));
        }
        Ok(())
    }
}

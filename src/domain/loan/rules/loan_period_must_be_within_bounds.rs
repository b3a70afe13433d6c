use crate::api::domain::business_rule_interface::BusinessRuleInterface;
use crate::infrastructure::error::{AppError, AppResult};

pub struct LoanPeriodMustBeWithinBounds {
    pub loan_period: i32,
    pub min_loan_period: i32,
    pub max_loan_period: i32,
}

impl BusinessRuleInterface for LoanPeriodMustBeWithinBounds {
    fn check_broken(&self) -> AppResult<()> {
        if !(self.min_loan_period..=self.max_loan_period).contains(&self.loan_period) {
            return Err(AppError::InvalidLoanPeriod("Invalid loan period!".to_string()));
        }
        Ok(())
    }
}

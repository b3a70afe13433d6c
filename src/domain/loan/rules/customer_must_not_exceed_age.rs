use crate::api::domain::business_rule_interface::BusinessRuleInterface;
use crate::domain::identity::DerivedAge;
use crate::infrastructure::error::{AgeViolation, AppError, AppResult};

/// The customer must not outgrow the maximum customer age before the longest
/// configured loan period ends, regardless of the period actually requested.
pub struct CustomerMustNotExceedAge {
    pub age: DerivedAge,
    pub highest_allowed_age: i64,
}

impl BusinessRuleInterface for CustomerMustNotExceedAge {
    fn check_broken(&self) -> AppResult<()> {
        if i64::from(self.age.years) > self.highest_allowed_age {
            return Err(AppError::InvalidAge(AgeViolation::AboveMaximum));
        }
        Ok(())
    }
}

use crate::api::domain::business_rule_interface::BusinessRuleInterface;
use crate::domain::identity::DerivedAge;
use crate::infrastructure::error::{AgeViolation, AppError, AppResult};

pub struct CustomerMustBeAtLeastAge {
    pub age: DerivedAge,
    pub minimum_age: i32,
}

impl BusinessRuleInterface for CustomerMustBeAtLeastAge {
    fn check_broken(&self) -> AppResult<()> {
        if i64::from(self.age.years) < i64::from(self.minimum_age) {
            return Err(AppError::InvalidAge(AgeViolation::BelowMinimum));
        }
        Ok(())
    }
}

use crate::infrastructure::error::AppResult;

/// A single eligibility rule. `Ok(())` means the rule holds.
pub trait BusinessRuleInterface {
    fn check_broken(&self) -> AppResult<()>;
}

/// Checks the rules in order and reports the first broken one.
pub fn check_rules(rules: &[&dyn BusinessRuleInterface]) -> AppResult<()> {
    rules.iter().try_for_each(|rule| rule.check_broken())
}

mod customer_must_be_at_least_age;
mod customer_must_not_exceed_age;
mod loan_amount_must_be_within_bounds;
mod loan_period_must_be_within_bounds;

pub use customer_must_be_at_least_age::CustomerMustBeAtLeastAge;
pub use customer_must_not_exceed_age::CustomerMustNotExceedAge;
pub use loan_amount_must_be_within_bounds::LoanAmountMustBeWithinBounds;
pub use loan_period_must_be_within_bounds::LoanPeriodMustBeWithinBounds;

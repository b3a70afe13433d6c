pub mod identity;
pub mod loan;

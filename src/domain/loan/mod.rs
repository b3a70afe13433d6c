pub mod loan_request;
pub mod rules;

pub use loan_request::LoanRequest;

pub mod business_rule_interface;
pub mod loan;
pub mod server;

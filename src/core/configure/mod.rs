pub mod app;
pub mod eligibility;
pub mod server;

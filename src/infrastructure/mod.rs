pub mod constant;
pub mod error;
pub mod identity;

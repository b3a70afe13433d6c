pub mod estonian_personal_code;

pub use estonian_personal_code::{EstonianPersonalCode, EstonianPersonalCodeParser, Gender};

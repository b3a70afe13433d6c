pub mod estonian_input_validator;
pub mod input_validator_interface;

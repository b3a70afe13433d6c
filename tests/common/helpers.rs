#![allow(dead_code)]

use chrono::{Datelike, NaiveDate};
use loan_gateway::application::loan::estonian_input_validator::EstonianInputValidator;
use loan_gateway::core::configure::app::AppConfig;
use loan_gateway::core::configure::eligibility::EligibilityConfig;
use loan_gateway::core::configure::server::ServerConfig;
use loan_gateway::domain::identity::FixedClock;
use loan_gateway::infrastructure::error::{AppResult, ErrorKind};
use loan_gateway::infrastructure::identity::estonian_personal_code::check_digit;
use std::sync::Arc;

/// Evaluation date shared by every age-dependent test.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Config with 2000..=10000 amount, 12..=60 months and ages 18..=80.
pub fn eligibility_config() -> EligibilityConfig {
    EligibilityConfig::default()
}

pub fn app_config(eligibility: EligibilityConfig) -> AppConfig {
    AppConfig {
        profile: "test".to_string(),
        server: ServerConfig {
            addr: "127.0.0.1".to_string(),
            port: 0,
        },
        eligibility,
    }
}

pub fn fixed_validator() -> EstonianInputValidator {
    EstonianInputValidator::with_clock(Arc::new(FixedClock(today())))
}

/// Builds a valid Estonian personal code for the given birth date.
pub fn personal_code_for(birth_date: NaiveDate, male: bool, serial: u32) -> String {
    let century_digit = match (birth_date.year() / 100, male) {
        (18, true) => 1,
        (18, false) => 2,
        (19, true) => 3,
        (19, false) => 4,
        (20, true) => 5,
        (20, false) => 6,
        (21, true) => 7,
        (21, false) => 8,
        (century, _) => panic!("unsupported century {century}"),
    };
    let body = format!(
        "{century_digit}{:02}{:02}{:02}{:03}",
        birth_date.year() % 100,
        birth_date.month(),
        birth_date.day(),
        serial
    );
    let digits: Vec<u32> = body.chars().filter_map(|c| c.to_digit(10)).collect();
    format!("{body}{}", check_digit(&digits))
}

/// Code of an applicant who turns `years` old exactly on [`today`].
pub fn personal_code_aged(years: i32) -> String {
    let today = today();
    personal_code_for(date(today.year() - years, today.month(), today.day()), true, 1)
}

pub fn outcome_kind(result: AppResult<()>) -> Option<ErrorKind> {
    result.err().map(|err| err.kind())
}

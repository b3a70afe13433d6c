use chrono::{Datelike, Months, NaiveDate};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityCodeError {
    #[error("personal code must have {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("personal code must contain only digits")]
    NonNumeric,
    #[error("invalid century digit {0}")]
    InvalidCenturyDigit(u32),
    #[error("personal code does not encode a valid birth date")]
    InvalidBirthDate,
    #[error("invalid check digit: expected {expected}, got {actual}")]
    InvalidChecksum { expected: u32, actual: u32 },
    #[error("birth date {0} is in the future")]
    BirthDateInFuture(NaiveDate),
}

/// Calendar period elapsed between a birth date and the evaluation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedAge {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl DerivedAge {
    /// Returns `None` when `as_of` is before `birth_date`.
    ///
    /// A month only counts once its day-of-month is reached; for birthdays on days
    /// the target month lacks, the anniversary is clamped to that month's last day.
    pub fn between(birth_date: NaiveDate, as_of: NaiveDate) -> Option<Self> {
        if as_of < birth_date {
            return None;
        }
        let mut total_months = (as_of.year() - birth_date.year()) * 12
            + as_of.month() as i32
            - birth_date.month() as i32;
        if as_of.day() < birth_date.day() {
            total_months -= 1;
        }
        let total_months = u32::try_from(total_months).ok()?;
        let anniversary = birth_date.checked_add_months(Months::new(total_months))?;
        let days = u32::try_from((as_of - anniversary).num_days()).ok()?;

        Some(Self {
            years: total_months / 12,
            months: total_months % 12,
            days,
        })
    }
}

/// Jurisdiction-specific personal identity code parser.
pub trait IdentityCodeAnalyzer: Send + Sync {
    fn parse_age(&self, code: &str, as_of: NaiveDate) -> Result<DerivedAge, IdentityCodeError>;
}

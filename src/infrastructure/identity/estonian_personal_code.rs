use crate::domain::identity::{DerivedAge, IdentityCodeAnalyzer, IdentityCodeError};
use chrono::NaiveDate;
use std::str::FromStr;

pub const PERSONAL_CODE_LENGTH: usize = 11;

const ROUND_1_WEIGHTS: &[u32; 10] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const ROUND_2_WEIGHTS: &[u32; 10] = &[3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

/// A structurally valid Estonian personal code (`GYYMMDDSSSC`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstonianPersonalCode {
    birth_date: NaiveDate,
    gender: Gender,
    serial_number: u32,
}

impl EstonianPersonalCode {
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn serial_number(&self) -> u32 {
        self.serial_number
    }

    pub fn age_on(&self, as_of: NaiveDate) -> Result<DerivedAge, IdentityCodeError> {
        DerivedAge::between(self.birth_date, as_of)
            .ok_or(IdentityCodeError::BirthDateInFuture(self.birth_date))
    }
}

impl FromStr for EstonianPersonalCode {
    type Err = IdentityCodeError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let actual = code.chars().count();
        if actual != PERSONAL_CODE_LENGTH {
            return Err(IdentityCodeError::InvalidLength {
                expected: PERSONAL_CODE_LENGTH,
                actual,
            });
        }
        let digits = code
            .chars()
            .map(|c| c.to_digit(10))
            .collect::<Option<Vec<u32>>>()
            .ok_or(IdentityCodeError::NonNumeric)?;

        let century = match digits[0] {
            1 | 2 => 1800,
            3 | 4 => 1900,
            5 | 6 => 2000,
            7 | 8 => 2100,
            other => return Err(IdentityCodeError::InvalidCenturyDigit(other)),
        };
        let gender = if digits[0] % 2 == 1 {
            Gender::Male
        } else {
            Gender::Female
        };

        let year = century + (digits[1] * 10 + digits[2]) as i32;
        let month = digits[3] * 10 + digits[4];
        let day = digits[5] * 10 + digits[6];
        let birth_date =
            NaiveDate::from_ymd_opt(year, month, day).ok_or(IdentityCodeError::InvalidBirthDate)?;

        let expected = check_digit(&digits[..10]);
        let actual = digits[10];
        if expected != actual {
            return Err(IdentityCodeError::InvalidChecksum { expected, actual });
        }

        Ok(Self {
            birth_date,
            gender,
            serial_number: digits[7] * 100 + digits[8] * 10 + digits[9],
        })
    }
}

/// Two-stage mod 11 check digit over the first ten digits.
pub fn check_digit(digits: &[u32]) -> u32 {
    let weighted_sum = |weights: &[u32; 10]| -> u32 {
        digits.iter().zip(weights.iter()).map(|(d, w)| d * w).sum()
    };

    let mut checksum = weighted_sum(ROUND_1_WEIGHTS) % 11;
    if checksum == 10 {
        checksum = weighted_sum(ROUND_2_WEIGHTS) % 11;
        if checksum == 10 {
            checksum = 0;
        }
    }
    checksum
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EstonianPersonalCodeParser;

impl EstonianPersonalCodeParser {
    pub fn parse(&self, code: &str) -> Result<EstonianPersonalCode, IdentityCodeError> {
        code.parse()
    }
}

impl IdentityCodeAnalyzer for EstonianPersonalCodeParser {
    fn parse_age(&self, code: &str, as_of: NaiveDate) -> Result<DerivedAge, IdentityCodeError> {
        self.parse(code)?.age_on(as_of)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_estonian_personal_code() {
        let valid_ids = vec![
            // male, born 1985-07-30, serial 033
            ("38507300337", date(1985, 7, 30), Gender::Male, 33),
            // female, born 1993-05-05, serial 079
            ("49305050799", date(1993, 5, 5), Gender::Female, 79),
            // male, born 2015-01-01, serial 005
            ("51501010056", date(2015, 1, 1), Gender::Male, 5),
        ];
        for (id, birth_date, gender, serial) in valid_ids {
            let parsed = EstonianPersonalCodeParser
                .parse(id)
                .unwrap_or_else(|e| panic!("Expected {id} to be valid: {e}"));
            assert_eq!(parsed.birth_date(), birth_date);
            assert_eq!(parsed.gender(), gender);
            assert_eq!(parsed.serial_number(), serial);
        }
    }

    #[test]
    fn test_valid_estonian_personal_code_stage_2() {
        // stage 1 checksum would be 10, so stage 2 is used
        assert!(EstonianPersonalCodeParser.parse("50001010040").is_ok());
    }

    #[test]
    fn test_invalid_estonian_personal_code() {
        let cases = vec![
            (
                "38507300338",
                IdentityCodeError::InvalidChecksum { expected: 7, actual: 8 },
            ),
            (
                "3850730033",
                IdentityCodeError::InvalidLength { expected: 11, actual: 10 },
            ),
            (
                "385073003377",
                IdentityCodeError::InvalidLength { expected: 11, actual: 12 },
            ),
            ("3850730033A", IdentityCodeError::NonNumeric),
            ("3850730-337", IdentityCodeError::NonNumeric),
            ("98507300337", IdentityCodeError::InvalidCenturyDigit(9)),
            ("08507300337", IdentityCodeError::InvalidCenturyDigit(0)),
            // 1985-02-30 does not exist
            ("38502300337", IdentityCodeError::InvalidBirthDate),
            ("38513010337", IdentityCodeError::InvalidBirthDate),
        ];
        for (id, expected) in cases {
            assert_eq!(
                EstonianPersonalCodeParser.parse(id),
                Err(expected),
                "Unexpected result for {id}"
            );
        }
    }

    #[test]
    fn test_parse_age_rejects_future_birth_date() {
        let result = EstonianPersonalCodeParser.parse_age("51501010056", date(2014, 12, 31));
        assert_eq!(
            result,
            Err(IdentityCodeError::BirthDateInFuture(date(2015, 1, 1)))
        );
    }

    #[test]
    fn test_parse_age_counts_birthday_on_the_day() {
        let parser = EstonianPersonalCodeParser;
        let day_before = parser.parse_age("38507300337", date(2003, 7, 29)).unwrap();
        assert_eq!(
            day_before,
            DerivedAge { years: 17, months: 11, days: 29 }
        );
        let birthday = parser.parse_age("38507300337", date(2003, 7, 30)).unwrap();
        assert_eq!(birthday, DerivedAge { years: 18, months: 0, days: 0 });
    }

    #[test]
    fn test_parse_age_for_leap_day_birthday() {
        // male, born 2000-02-29, serial 001
        let code = "50002290013";
        let parser = EstonianPersonalCodeParser;
        assert_eq!(parser.parse(code).unwrap().birth_date(), date(2000, 2, 29));

        assert_eq!(
            parser.parse_age(code, date(2018, 2, 28)).unwrap(),
            DerivedAge { years: 17, months: 11, days: 30 }
        );
        assert_eq!(
            parser.parse_age(code, date(2018, 3, 1)).unwrap(),
            DerivedAge { years: 18, months: 0, days: 1 }
        );
        assert_eq!(
            parser.parse_age(code, date(2020, 2, 29)).unwrap(),
            DerivedAge { years: 20, months: 0, days: 0 }
        );
    }

    #[test]
    fn test_parse_age_for_end_of_month_birthday() {
        // female, born 2000-01-31, serial 002
        let code = "60001310025";
        let parser = EstonianPersonalCodeParser;

        assert_eq!(
            parser.parse_age(code, date(2000, 2, 28)).unwrap(),
            DerivedAge { years: 0, months: 0, days: 28 }
        );
        assert_eq!(
            parser.parse_age(code, date(2000, 3, 1)).unwrap(),
            DerivedAge { years: 0, months: 1, days: 1 }
        );
        assert_eq!(
            parser.parse_age(code, date(2001, 2, 28)).unwrap(),
            DerivedAge { years: 1, months: 0, days: 28 }
        );
    }
}

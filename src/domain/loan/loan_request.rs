/// Raw applicant input, checked once and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanRequest {
    pub personal_code: String,
    pub loan_amount: i64,
    pub loan_period: i32,
}

impl LoanRequest {
    pub fn new(personal_code: impl Into<String>, loan_amount: i64, loan_period: i32) -> Self {
        Self {
            personal_code: personal_code.into(),
            loan_amount,
            loan_period,
        }
    }

    /// Personal code with everything but the first digit hidden, for logs.
    pub fn masked_personal_code(&self) -> String {
        mask_personal_code(&self.personal_code)
    }
}

pub fn mask_personal_code(personal_code: &str) -> String {
    let mut chars = personal_code.chars();
    match chars.next() {
        Some(first) => std::iter::once(first).chain(chars.map(|_| '*')).collect(),
        None => String::new(),
    }
}

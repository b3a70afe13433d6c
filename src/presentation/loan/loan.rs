use crate::domain::loan::LoanRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoanValidationRequest {
    pub personal_code: String,
    pub loan_amount: i64,
    pub loan_period: i32,
}

impl From<LoanValidationRequest> for LoanRequest {
    fn from(value: LoanValidationRequest) -> Self {
        LoanRequest::new(value.personal_code, value.loan_amount, value.loan_period)
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedLoanSerializer {
    pub loan_amount: i64,
    pub loan_period: i32,
}

impl From<&LoanRequest> for ValidatedLoanSerializer {
    fn from(value: &LoanRequest) -> Self {
        ValidatedLoanSerializer {
            loan_amount: value.loan_amount,
            loan_period: value.loan_period,
        }
    }
}

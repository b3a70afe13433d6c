use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct EntityResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub total: i64,
}

/// Body returned for every rejected loan request.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResponse {
    pub loan_amount: Option<i64>,
    pub loan_period: Option<i32>,
    pub error_message: Option<String>,
}

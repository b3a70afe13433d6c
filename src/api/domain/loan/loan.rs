use crate::application::loan::input_validator_interface::InputValidatorInterface;
use crate::core::app_state::AppState;
use crate::core::response::{DecisionResponse, EntityResponse};
use crate::domain::loan::LoanRequest;
use crate::infrastructure::error::{AppError, AppResult};
use crate::presentation::loan::loan::{LoanValidationRequest, ValidatedLoanSerializer};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    post,
    path = "/v1/loan/validate",
    tags = ["loan_service"],
    request_body = LoanValidationRequest,
    responses(
        (status = 200, description = "Loan request passed validation", body = EntityResponse<ValidatedLoanSerializer>),
        (status = 400, description = "Bad request - invalid amount, period, personal code or age", body = DecisionResponse),
        (status = 500, description = "Internal server error", body = DecisionResponse)
    )
)]
pub async fn controller_validate_loan(
    State(state): State<AppState>,
    payload: Result<Json<LoanValidationRequest>, JsonRejection>,
) -> AppResult<Json<EntityResponse<ValidatedLoanSerializer>>> {
    let Json(request) = payload.map_err(|rejection| {
        log::warn!("Rejected malformed loan request: {}", rejection.body_text());
        AppError::from(rejection)
    })?;
    let request = LoanRequest::from(request);
    log::info!(
        "Validating loan request for {}: amount {}, period {}.",
        request.masked_personal_code(),
        request.loan_amount,
        request.loan_period
    );

    match state
        .input_validator
        .validate(&request, &state.config.eligibility)
    {
        Ok(()) => {
            log::info!("Loan request for {} passed validation.", request.masked_personal_code());
            Ok(Json(EntityResponse {
                message: "Loan request passed validation.".to_string(),
                data: Some(ValidatedLoanSerializer::from(&request)),
                total: 1,
            }))
        }
        Err(err) => {
            log::warn!(
                "Loan request for {} rejected ({}): {err}",
                request.masked_personal_code(),
                err.kind()
            );
            Err(err)
        }
    }
}

use crate::core::response::EntityResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/v1/server/health_check",
    tags = ["server_service"],
    responses(
        (status = 200, description = "Service is up", body = EntityResponse<String>),
    )
)]
pub async fn health_check() -> Json<EntityResponse<String>> {
    Json(EntityResponse {
        message: "Server is running.".to_string(),
        data: Some("ok".to_string()),
        total: 1,
    })
}

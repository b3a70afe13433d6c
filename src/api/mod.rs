use crate::core::app_state::AppState;
use axum::http::{StatusCode, Uri};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
pub mod domain;

pub fn build_routes() -> OpenApiRouter<AppState> {
    let server_routes = OpenApiRouter::new().routes(routes!(domain::server::health_check));

    let loan_routes =
        OpenApiRouter::new().routes(routes!(domain::loan::loan::controller_validate_loan));

    OpenApiRouter::new()
        .merge(loan_routes)
        .merge(server_routes)
        .fallback(handler_404)
}

pub async fn handler_404(uri: Uri) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("No route for {uri}"))
}

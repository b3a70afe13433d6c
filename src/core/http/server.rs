use crate::api::build_routes;
use crate::core::app_state::AppState;
use crate::core::configure::app::AppConfig;
use crate::infrastructure::error::{AppError, AppResult};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(info(title = "Loan gateway", description = "Loan request eligibility validation"))]
pub struct ApiDoc;

pub fn build_app(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(build_routes())
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub struct AppServer {
    pub state: AppState,
    listener: TcpListener,
}

impl AppServer {
    pub async fn new(config: AppConfig) -> AppResult<Self> {
        let addr = config
            .server
            .get_socket_addr()
            .map_err(|e| AppError::InvalidConfigError(format!("Invalid server address: {e}")))?;
        let listener = TcpListener::bind(addr).await?;
        let state = AppState::new(config);
        Ok(Self { state, listener })
    }

    pub async fn run(self) -> AppResult<()> {
        let local_addr = self.listener.local_addr()?;
        log::info!("Listening on http://{local_addr}, swagger at /swagger-ui.");
        axum::serve(self.listener, build_app(self.state)).await?;
        Ok(())
    }
}

use log::{error, info};
use loan_gateway::core::http::server::AppServer;
use loan_gateway::infrastructure::constant::init_config;
use loan_gateway::infrastructure::error::AppResult;

#[tokio::main]
async fn main() -> AppResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(true)
        .init();

    let config = init_config()?.clone();
    info!(
        "Loaded profile {} with eligibility bounds {:?}.",
        config.profile, config.eligibility
    );
    let server = AppServer::new(config).await?;
    info!("Starting server...");

    if let Err(e) = server.run().await {
        error!("HTTP Server error: {:?}", e);
        return Err(e);
    }

    Ok(())
}

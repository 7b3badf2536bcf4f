use std::sync::Arc;
use std::net::SocketAddr;
use sendero_api::{app, AppState, PromptBook};
use sendero_catalog::PricingEngine;
use sendero_order::ToolRegistry;
use sendero_store::{app_config::Config, HttpAgentClient, JsonFileReservationRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sendero_api=debug,sendero_order=debug,sendero_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Starting Sendero API on port {}", config.server.port);
    tracing::info!("Reservations stored in {}", config.store.path.display());

    let repository = Arc::new(JsonFileReservationRepository::new(config.store.path.clone()));
    let pricing = PricingEngine::new(config.pricing.clone())?;

    let prompts = PromptBook::new(config.agent.country.clone());
    let tool_definitions = serde_json::to_value(ToolRegistry::definitions())?;
    let agent = HttpAgentClient::new(&config.agent, prompts.system_prompt(), tool_definitions)?;

    let app_state = AppState::new(repository, pricing, Arc::new(agent), prompts);
    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

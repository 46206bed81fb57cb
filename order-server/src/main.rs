use order_server::{Config, Server, ServerState, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment first: .env, then logging
    dotenv::dotenv().ok();
    logger::init_logger();

    tracing::info!("Casina Farms order server starting...");

    let config = Config::from_env();
    let state = ServerState::initialize(&config).await?;

    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}

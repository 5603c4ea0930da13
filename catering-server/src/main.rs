use catering_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env, then configuration
    let _ = dotenv::dotenv();
    let config = Config::from_env();

    // 2. Work directory and logging
    setup_environment(&config)?;
    print_banner();

    tracing::info!(
        environment = %config.environment,
        quantity_mode = config.default_quantity_mode.as_str(),
        "Catering server starting..."
    );

    // 3. Database and shared state
    let state = ServerState::initialize(&config).await?;

    // 4. HTTP server
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = catmap_api::config::config();
    tracing::info!("Starting catmap API in {:?} mode", config.environment);

    // Apply pending migrations when the database is reachable. A failure is
    // logged rather than fatal: endpoints that never touch the database
    // (check-token, validation rejections) still work without one.
    if let Err(e) = catmap_api::database::manager::DatabaseManager::migrate().await {
        tracing::warn!("skipping migrations, database unavailable: {}", e);
    }

    let app = catmap_api::app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("CATMAP_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    println!("🐈 catmap API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server")?;
    Ok(())
}

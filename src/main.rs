use pusaka::{AdminAuth, AppState, Config, HeritageCatalog, HttpServer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    info!("Pusaka heritage catalog v{}", pusaka::version());

    let catalog = HeritageCatalog::open(&config.data_path);
    info!("catalog holds {} statements", catalog.store().len());

    let auth = AdminAuth::new(&config.admin_username, &config.admin_password);
    let state = AppState::new(catalog, auth);

    let server = HttpServer::new(state, config.address.clone(), config.port);
    server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("server error: {e}"))?;

    Ok(())
}

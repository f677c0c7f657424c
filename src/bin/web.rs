use log::info;
use molecules::server::{self, AppState};
use molecules::{Config, Result};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Serving on http://{}", listener.local_addr()?);
    info!("models from {}", config.models_dir.display());
    server::serve(listener, AppState::new(config.models_dir)).await
}

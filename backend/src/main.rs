use backend::{AppError, AppState, app, config::Config};
use common::{Directory, account::AccountStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    info!("{config:?}");

    let accounts = AccountStore::open(&config.db_path)?;
    let state = AppState::new(Directory::seeded(), accounts, config.cookie_key());
    let app = app(state, &config.allowed_origin)?;

    let listener = tokio::net::TcpListener::bind(config.bind).await?;

    info!("Running server on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

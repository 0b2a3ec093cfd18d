use std::{env, net::SocketAddr, path::Path};

use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use service::Repositories;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

/// Browser frontends call the API cross-origin without credentials.
fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// `config.toml` (or `CONFIG_PATH`) when present, otherwise env vars only.
pub fn load_config() -> Result<AppConfig, StartupError> {
    let path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let mut cfg = if Path::new(&path).exists() {
        configs::load_from_file(&path).map_err(|e| StartupError::InvalidConfig(e.to_string()))?
    } else {
        info!(%path, "config file not found, using environment");
        AppConfig::from_env()
    };
    cfg.normalize_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(cfg)
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

async fn connect_database(cfg: &AppConfig) -> Result<DatabaseConnection, StartupError> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.server.run_migrations {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Any(anyhow::anyhow!("migrate up: {e}")))?;
        info!("migrations applied");
    }
    Ok(db)
}

/// Router over a SeaORM-backed state; also used by the end-to-end tests.
pub fn build_app(db: DatabaseConnection) -> Router {
    let state = ServerState::new(Repositories::seaorm(db));
    routes::build_router(state, build_cors())
}

/// Public entry: load config, connect, migrate and serve until the task is dropped.
/// The caller installs the tracing subscriber.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    let cfg = load_config()?;
    let addr = bind_addr(&cfg)?;
    let db = connect_database(&cfg).await?;
    let app = build_app(db);

    info!(%addr, "starting car rental api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

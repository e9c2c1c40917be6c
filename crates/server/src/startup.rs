use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, ServerConfig, StorageBackend};
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::routes::{self, ServerState};
use service::customer::{CustomerRepository, InMemoryCustomerRepository, SeaOrmCustomerRepository};

fn load_bind_addr(cfg: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.host, cfg.port).parse()?)
}

/// Construct the storage backend selected in config and wrap it in the router state.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let repo: Arc<dyn CustomerRepository> = match cfg.storage.backend {
        StorageBackend::Memory => {
            warn!("using in-memory customer storage; data is lost on restart");
            Arc::new(InMemoryCustomerRepository::new())
        }
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            models::db::test_connection(&db).await?;
            if cfg.database.auto_migrate {
                migration::Migrator::up(&db, None).await?;
                info!("database migrations applied");
            }
            Arc::new(SeaOrmCustomerRepository::new(db))
        }
    };
    Ok(ServerState::new(repo))
}

pub fn build_app(cfg: &AppConfig, state: ServerState) -> anyhow::Result<Router> {
    let cors = routes::build_cors(&cfg.cors.allowed_origin)?;
    Ok(routes::build_router(state, cors))
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// Resolves on Ctrl+C.
pub async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}

/// Public entry: build the app from `cfg` and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app = build_app(&cfg, state)?;

    let addr = load_bind_addr(&cfg.server)?;
    info!(%addr, backend = ?cfg.storage.backend, allowed_origin = %cfg.cors.allowed_origin, "starting customer api");
    let listener = TcpListener::bind(addr).await?;
    serve(listener, app, shutdown_signal()).await
}

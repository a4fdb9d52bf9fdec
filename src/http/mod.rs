use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing, Router, Server};
use tokio::signal;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::repository::team::{MongoDbRepository, Repository};

mod crests;
mod errors;
mod teams;

pub use errors::ApiError;

pub struct AppState {
    pub repo: Arc<dyn Repository>,
    pub crest_dir: PathBuf,
}

/// Builds the application routes. The `/by-id` and `/teams` families are the
/// same operations keyed by identifier or by slug. `PUT /:id` and
/// `DELETE /:id` are the older identifier routes, still served for existing
/// clients.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", routing::get(teams::find_all).post(teams::create))
        .route(
            "/:id",
            routing::put(teams::update_by_id).delete(teams::delete_by_id),
        )
        .route(
            "/by-id/:id",
            routing::get(teams::find_by_id)
                .put(teams::update_by_id)
                .delete(teams::delete_by_id),
        )
        .route(
            "/teams/:slug",
            routing::get(teams::find_by_slug)
                .put(teams::update_by_slug)
                .delete(teams::delete_by_slug),
        )
        .route("/teams/:slug/crest", routing::get(crests::find_by_slug))
        .route("/crests/:file", routing::get(crests::find_by_file))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    log::info!("Connecting to database {}", config.database_name);

    let repo = Arc::new(
        MongoDbRepository::new(&config.database_url, &config.database_name, 50).await?,
    );

    let state = Arc::new(AppState {
        repo,
        crest_dir: config.crest_dir,
    });

    log::info!("Listening on port {}", config.port);

    Server::try_bind(&SocketAddr::from(([0, 0, 0, 0], config.port)))?
        .serve(router(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            log::error!("failed to listen for ctrl+c: {}", err);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => log::error!("failed to listen for SIGTERM: {}", err),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => log::info!("Received ctrl+c, shutting down"),
        _ = terminate => log::info!("Received SIGTERM, shutting down"),
    }
}

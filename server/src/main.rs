mod app;
mod config;
mod routes;
mod state;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use crate::routes::api::load_standings_file;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let state = AppState::from_env();
    tracing::info!(
        site_dir = %state.site_dir().display(),
        data_dir = %state.data_dir().display(),
        "Serving standings site"
    );

    // The page still loads without a valid document; the browser shows its
    // error markup in that case.
    match load_standings_file(&state.standings_path()).await {
        Ok(doc) => {
            tracing::info!(
                players = doc.players.len(),
                teams = doc.team_records.len(),
                last_updated = %doc.last_updated,
                "Standings document loaded"
            );
            let missing = doc.missing_team_records();
            if !missing.is_empty() {
                tracing::warn!(?missing, "standings reference teams without records");
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "standings document is not valid yet");
        }
    }

    let app = app::build_app(state);

    let addr = format!("0.0.0.0:{}", config::server_port());
    tracing::info!("Pool standings server listening on {addr}");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "failed to bind TCP listener");
            return;
        }
    };
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server failed");
    }

    tracing::info!("Server shut down gracefully");
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => tracing::info!("Ctrl+C received, stopping"),
        Err(e) => {
            tracing::error!(error = %e, "failed to listen for Ctrl+C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}

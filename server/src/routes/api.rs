use std::path::Path;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use hoops_pool_shared::{LoadError, StandingsDocument, parse_standings};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StandingsHealth {
    pub status: &'static str,
    pub players: usize,
    pub teams: usize,
    pub last_updated: NaiveDate,
    /// Teams listed by players with no entry in `team_records`; the player
    /// grid cannot render while this is non-empty.
    pub missing_team_records: Vec<String>,
}

impl StandingsHealth {
    pub fn from_document(doc: &StandingsDocument) -> Self {
        let missing_team_records = doc.missing_team_records();
        Self {
            status: if missing_team_records.is_empty() {
                "ok"
            } else {
                "degraded"
            },
            players: doc.players.len(),
            teams: doc.team_records.len(),
            last_updated: doc.last_updated,
            missing_team_records,
        }
    }
}

/// Read and validate the standings document the way the browser would see it.
pub async fn load_standings_file(path: &Path) -> Result<StandingsDocument, LoadError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| LoadError::Fetch(format!("{}: {e}", path.display())))?;
    parse_standings(&text)
}

pub async fn health(State(state): State<AppState>) -> Response {
    let path = state.standings_path();
    match load_standings_file(&path).await {
        Ok(doc) => {
            let report = StandingsHealth::from_document(&doc);
            if !report.missing_team_records.is_empty() {
                warn!(
                    missing = ?report.missing_team_records,
                    "standings reference teams without records"
                );
            }
            Json(report).into_response()
        }
        Err(e) => {
            warn!(error = %e, path = %path.display(), "standings document failed validation");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "error",
                    "error": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

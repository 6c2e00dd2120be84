use hoops_pool_shared::{LoadError, StandingsDocument, parse_standings};

use crate::config::STANDINGS_PATH;

/// Fetch and parse the standings document. One attempt, no retry.
pub async fn fetch_standings() -> Result<StandingsDocument, LoadError> {
    let resp = gloo_net::http::Request::get(STANDINGS_PATH)
        .send()
        .await
        .map_err(|e| LoadError::Fetch(e.to_string()))?;

    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| LoadError::Parse(e.to_string()))?;
    parse_standings(&body)
}

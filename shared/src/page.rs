use std::fmt;

use crate::format::format_last_updated;
use crate::render::{
    LOAD_ERROR_MARKUP, RenderError, RenderOptions, render_leaderboard, render_player_details,
};
use crate::standings::{LoadError, StandingsDocument};

pub const LAST_UPDATED_ID: &str = "lastUpdated";
pub const LEADERBOARD_ID: &str = "leaderboardTable";
pub const PLAYER_GRID_ID: &str = "playerGrid";

/// The three page containers the renderer writes into. Every write replaces
/// the container's full content.
pub trait StandingsView {
    fn set_text(&self, container_id: &str, text: &str);
    fn set_inner_html(&self, container_id: &str, html: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageError {
    Load(LoadError),
    Render(RenderError),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "error loading standings: {e}"),
            Self::Render(e) => write!(f, "error rendering standings: {e}"),
        }
    }
}

impl std::error::Error for PageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Render(e) => Some(e),
        }
    }
}

impl From<LoadError> for PageError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

impl From<RenderError> for PageError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

/// One full render pass: header, leaderboard, then player grid.
///
/// A load failure only replaces the leaderboard with [`LOAD_ERROR_MARKUP`];
/// the header and player grid keep whatever they showed before. A detail
/// failure leaves the already written header and leaderboard in place and
/// does not touch the grid.
pub fn render_standings<V: StandingsView + ?Sized>(
    view: &V,
    loaded: Result<StandingsDocument, LoadError>,
    options: &RenderOptions,
) -> Result<(), PageError> {
    let doc = match loaded {
        Ok(doc) => doc,
        Err(e) => {
            view.set_inner_html(LEADERBOARD_ID, LOAD_ERROR_MARKUP);
            return Err(e.into());
        }
    };

    view.set_text(LAST_UPDATED_ID, &format_last_updated(doc.last_updated));
    view.set_inner_html(LEADERBOARD_ID, &render_leaderboard(&doc.players)?);

    let grid = render_player_details(&doc.players, &doc.team_records, options)?;
    view.set_inner_html(PLAYER_GRID_ID, &grid);
    Ok(())
}

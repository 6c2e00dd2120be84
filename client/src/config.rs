use hoops_pool_shared::{RenderOptions, default_logo_table};

pub use hoops_pool_shared::STANDINGS_PATH;

/// Show team logos next to each team in the player grid.
pub const SHOW_TEAM_LOGOS: bool = true;

pub fn render_options() -> RenderOptions {
    if SHOW_TEAM_LOGOS {
        RenderOptions::with_logos(default_logo_table())
    } else {
        RenderOptions::default()
    }
}

pub mod format;
pub mod logos;
pub mod page;
pub mod render;
pub mod standings;

pub use format::EarningsClass;
pub use logos::{LogoTable, default_logo_table};
pub use page::{PageError, StandingsView, render_standings};
pub use render::{LOAD_ERROR_MARKUP, RenderError, RenderOptions};
pub use standings::*;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{STANDINGS_FILE, data_dir, site_dir};

#[derive(Debug, Clone)]
pub struct AppState {
    /// Built client bundle (index.html, wasm, js, css).
    site_dir: Arc<PathBuf>,
    /// Directory served under `/data`, holding the standings document.
    data_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(site_dir: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            site_dir: Arc::new(site_dir.into()),
            data_dir: Arc::new(data_dir.into()),
        }
    }

    pub fn from_env() -> Self {
        Self::new(site_dir(), data_dir())
    }

    pub fn standings_path(&self) -> PathBuf {
        self.data_dir.join(STANDINGS_FILE)
    }

    pub fn site_dir(&self) -> &Path {
        self.site_dir.as_path()
    }

    pub fn data_dir(&self) -> &Path {
        self.data_dir.as_path()
    }
}

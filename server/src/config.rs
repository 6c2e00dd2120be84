use std::path::PathBuf;

pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_SITE_DIR: &str = "client/dist";
pub const DEFAULT_DATA_DIR: &str = "data";

/// File name of the standings document inside the data directory.
pub const STANDINGS_FILE: &str = "standings.json";

pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_SERVER_PORT)
}

pub fn site_dir() -> PathBuf {
    dir_from_env("SITE_DIR", DEFAULT_SITE_DIR)
}

pub fn data_dir() -> PathBuf {
    dir_from_env("DATA_DIR", DEFAULT_DATA_DIR)
}

fn dir_from_env(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

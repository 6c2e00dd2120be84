use std::collections::HashMap;

/// Team display name -> logo image URL.
pub type LogoTable = HashMap<String, String>;

pub const LOGO_CDN_BASE: &str = "https://a.espncdn.com/i/teamlogos/nba/500";

/// Display names used by the standings file, paired with the CDN's team slug.
pub const NBA_TEAM_SLUGS: [(&str, &str); 30] = [
    ("76ers", "phi"),
    ("Bucks", "mil"),
    ("Bulls", "chi"),
    ("Cavaliers", "cle"),
    ("Celtics", "bos"),
    ("Clippers", "lac"),
    ("Grizzlies", "mem"),
    ("Hawks", "atl"),
    ("Heat", "mia"),
    ("Hornets", "cha"),
    ("Jazz", "utah"),
    ("Kings", "sac"),
    ("Knicks", "ny"),
    ("Lakers", "lal"),
    ("Magic", "orl"),
    ("Mavericks", "dal"),
    ("Nets", "bkn"),
    ("Nuggets", "den"),
    ("Pacers", "ind"),
    ("Pelicans", "no"),
    ("Pistons", "det"),
    ("Raptors", "tor"),
    ("Rockets", "hou"),
    ("Spurs", "sa"),
    ("Suns", "phx"),
    ("Thunder", "okc"),
    ("Timberwolves", "min"),
    ("Trail Blazers", "por"),
    ("Warriors", "gs"),
    ("Wizards", "wsh"),
];

pub fn logo_url_for_slug(slug: &str) -> String {
    format!("{LOGO_CDN_BASE}/{slug}.png")
}

pub fn default_logo_table() -> LogoTable {
    NBA_TEAM_SLUGS
        .iter()
        .map(|(team, slug)| ((*team).to_string(), logo_url_for_slug(slug)))
        .collect()
}

pub fn logo_url<'a>(table: &'a LogoTable, team: &str) -> Option<&'a str> {
    table.get(team).map(String::as_str)
}

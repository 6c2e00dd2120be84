use std::fmt;

use askama::Template;

use crate::format::{EarningsClass, format_earnings, format_record};
use crate::logos::{LogoTable, logo_url};
use crate::standings::{PlayerMap, TeamRecordMap, ranked_players};

/// Markup that replaces the leaderboard when the standings cannot be loaded.
pub const LOAD_ERROR_MARKUP: &str =
    r#"<p class="error">Error loading data. Please try again later.</p>"#;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    /// When set, each team entry in the player grid gets a logo image.
    pub logos: Option<LogoTable>,
}

impl RenderOptions {
    pub fn with_logos(logos: LogoTable) -> Self {
        Self { logos: Some(logos) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    MissingTeamRecord { player: String, team: String },
    Template(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTeamRecord { player, team } => {
                write!(f, "no team record for {team:?} (listed by {player:?})")
            }
            Self::Template(e) => write!(f, "template error: {e}"),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<askama::Error> for RenderError {
    fn from(e: askama::Error) -> Self {
        Self::Template(e.to_string())
    }
}

struct LeaderboardRow<'a> {
    rank: usize,
    name: &'a str,
    record: String,
    earnings_class: &'static str,
    earnings: String,
}

#[derive(Template)]
#[template(path = "leaderboard.html")]
struct LeaderboardTemplate<'a> {
    rows: Vec<LeaderboardRow<'a>>,
}

struct TeamEntry<'a> {
    name: &'a str,
    record: String,
    logo: Option<&'a str>,
}

struct PlayerCard<'a> {
    name: &'a str,
    earnings_class: &'static str,
    earnings: String,
    record: String,
    teams: Vec<TeamEntry<'a>>,
}

#[derive(Template)]
#[template(path = "player_grid.html")]
struct PlayerGridTemplate<'a> {
    cards: Vec<PlayerCard<'a>>,
}

pub fn render_leaderboard(players: &PlayerMap) -> Result<String, RenderError> {
    let rows = ranked_players(players)
        .into_iter()
        .map(|player| LeaderboardRow {
            rank: player.rank,
            name: player.name,
            record: format_record(player.record.wins, player.record.losses),
            earnings_class: EarningsClass::classify(player.record.earnings).as_str(),
            earnings: format_earnings(player.record.earnings),
        })
        .collect();

    Ok(LeaderboardTemplate { rows }.render()?)
}

/// Render one card per player. Any team missing from `team_records` fails the
/// whole grid; no partial output is returned.
pub fn render_player_details(
    players: &PlayerMap,
    team_records: &TeamRecordMap,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let mut cards = Vec::with_capacity(players.len());

    for player in ranked_players(players) {
        let mut teams = Vec::with_capacity(player.record.teams.len());
        for team in &player.record.teams {
            let record = team_records
                .get(team)
                .ok_or_else(|| RenderError::MissingTeamRecord {
                    player: player.name.to_string(),
                    team: team.clone(),
                })?;
            teams.push(TeamEntry {
                name: team,
                record: format_record(record.wins, record.losses),
                logo: options
                    .logos
                    .as_ref()
                    .and_then(|table| logo_url(table, team)),
            });
        }

        cards.push(PlayerCard {
            name: player.name,
            earnings_class: EarningsClass::classify(player.record.earnings).as_str(),
            earnings: format_earnings(player.record.earnings),
            record: format_record(player.record.wins, player.record.losses),
            teams,
        });
    }

    Ok(PlayerGridTemplate { cards }.render()?)
}

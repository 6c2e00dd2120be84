use std::collections::{BTreeSet, HashMap};
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub type PlayerMap = HashMap<String, PlayerRecord>;
pub type TeamRecordMap = HashMap<String, TeamRecord>;

/// Relative path the browser loads the standings document from.
pub const STANDINGS_PATH: &str = "data/standings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsDocument {
    #[serde(deserialize_with = "deserialize_standings_date")]
    pub last_updated: NaiveDate,
    pub players: PlayerMap,
    pub team_records: TeamRecordMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub wins: u32,
    pub losses: u32,
    pub earnings: f64,
    #[serde(default)]
    pub teams: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
}

/// A player in display order. `rank` is the 1-based position on the page,
/// not a stored identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedPlayer<'a> {
    pub rank: usize,
    pub name: &'a str,
    pub record: &'a PlayerRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    Fetch(String),
    Status(u16),
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(e) => write!(f, "fetch error: {e}"),
            Self::Status(code) => write!(f, "HTTP {code}"),
            Self::Parse(e) => write!(f, "parse error: {e}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl StandingsDocument {
    /// Team names referenced by some player but absent from `team_records`.
    pub fn missing_team_records(&self) -> Vec<String> {
        self.players
            .values()
            .flat_map(|player| player.teams.iter())
            .filter(|team| !self.team_records.contains_key(team.as_str()))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

pub fn parse_standings(text: &str) -> Result<StandingsDocument, LoadError> {
    serde_json::from_str(text).map_err(|e| LoadError::Parse(e.to_string()))
}

/// Accepts a calendar date (`2024-03-15`) or an RFC 3339 timestamp, whose UTC
/// date is used.
pub fn parse_standings_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

fn deserialize_standings_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_standings_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid last_updated date: {raw:?}")))
}

/// Players sorted by earnings descending. Equal earnings fall back to the
/// player name so the order never depends on map iteration.
pub fn ranked_players(players: &PlayerMap) -> Vec<RankedPlayer<'_>> {
    let mut entries: Vec<(&str, &PlayerRecord)> = players
        .iter()
        .map(|(name, record)| (name.as_str(), record))
        .collect();

    // `+ 0.0` folds -0.0 into 0.0; both display as `+$0.00`.
    entries.sort_by(|a, b| {
        (b.1.earnings + 0.0)
            .total_cmp(&(a.1.earnings + 0.0))
            .then_with(|| a.0.cmp(b.0))
    });

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, (name, record))| RankedPlayer {
            rank: idx + 1,
            name,
            record,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "last_updated": "2024-03-15",
        "players": {
            "Alice": {"wins": 50, "losses": 40, "earnings": 2.5, "teams": ["Celtics", "Magic"]},
            "Bob": {"wins": 40, "losses": 52, "earnings": -3.0, "teams": ["Pistons"]},
            "Cara": {"wins": 45, "losses": 45, "earnings": 0, "teams": ["Heat"]}
        },
        "team_records": {
            "Celtics": {"wins": 30, "losses": 10},
            "Magic": {"wins": 20, "losses": 30},
            "Pistons": {"wins": 40, "losses": 52},
            "Heat": {"wins": 45, "losses": 45}
        }
    }"#;

    fn player(earnings: f64) -> PlayerRecord {
        PlayerRecord {
            wins: 0,
            losses: 0,
            earnings,
            teams: Vec::new(),
        }
    }

    #[test]
    fn parses_sample_document() {
        let doc = parse_standings(SAMPLE).expect("sample should parse");
        assert_eq!(
            doc.last_updated,
            NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
        );
        assert_eq!(doc.players.len(), 3);
        assert_eq!(doc.players["Alice"].teams, vec!["Celtics", "Magic"]);
        assert_eq!(
            doc.team_records["Pistons"],
            TeamRecord {
                wins: 40,
                losses: 52
            }
        );
    }

    #[test]
    fn parses_rfc3339_timestamp_as_utc_date() {
        assert_eq!(
            parse_standings_date("2024-03-15T23:30:00-05:00"),
            NaiveDate::from_ymd_opt(2024, 3, 16)
        );
        assert_eq!(
            parse_standings_date(" 2024-03-15 "),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_standings_date("March 15"), None);
    }

    #[test]
    fn malformed_documents_are_parse_errors() {
        assert!(matches!(
            parse_standings("not json"),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(
            parse_standings(r#"{"last_updated": "yesterday", "players": {}, "team_records": {}}"#),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(
            parse_standings(r#"{"last_updated": "2024-03-15", "players": {}}"#),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn missing_teams_list_defaults_to_empty() {
        let doc = parse_standings(
            r#"{"last_updated": "2024-03-15",
                "players": {"Solo": {"wins": 1, "losses": 2, "earnings": 1.25}},
                "team_records": {}}"#,
        )
        .expect("document without teams should parse");
        assert!(doc.players["Solo"].teams.is_empty());
    }

    #[test]
    fn ranks_by_earnings_descending() {
        let doc = parse_standings(SAMPLE).expect("sample should parse");
        let ranked = ranked_players(&doc.players);
        let names: Vec<_> = ranked.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Alice", "Cara", "Bob"]);
        let ranks: Vec<_> = ranked.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn equal_earnings_order_by_name() {
        let mut players = PlayerMap::new();
        players.insert("Zed".to_string(), player(5.0));
        players.insert("Amy".to_string(), player(5.0));
        players.insert("Moe".to_string(), player(7.5));

        let names: Vec<_> = ranked_players(&players).iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Moe", "Amy", "Zed"]);
    }

    #[test]
    fn signed_zero_earnings_tie_on_name() {
        let doc = parse_standings(
            r#"{"last_updated": "2024-03-15",
                "players": {
                    "Zed": {"wins": 0, "losses": 0, "earnings": 0.0},
                    "Amy": {"wins": 0, "losses": 0, "earnings": -0.0},
                    "Lee": {"wins": 0, "losses": 0, "earnings": -0.25}
                },
                "team_records": {}}"#,
        )
        .expect("signed zero should parse");

        let names: Vec<_> = ranked_players(&doc.players).iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Amy", "Zed", "Lee"]);
    }

    #[test]
    fn negative_win_loss_counts_are_rejected() {
        assert!(matches!(
            parse_standings(
                r#"{"last_updated": "2024-03-15",
                    "players": {"Neg": {"wins": -1, "losses": 0, "earnings": 0}},
                    "team_records": {}}"#,
            ),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn empty_player_map_ranks_nothing() {
        assert!(ranked_players(&PlayerMap::new()).is_empty());
    }

    #[test]
    fn reports_missing_team_records_once_each() {
        let mut doc = parse_standings(SAMPLE).expect("sample should parse");
        assert!(doc.missing_team_records().is_empty());

        doc.team_records.remove("Magic");
        if let Some(bob) = doc.players.get_mut("Bob") {
            bob.teams.push("Magic".to_string());
            bob.teams.push("Suns".to_string());
        }
        assert_eq!(doc.missing_team_records(), vec!["Magic", "Suns"]);
    }

    #[test]
    fn load_error_messages() {
        assert_eq!(LoadError::Status(404).to_string(), "HTTP 404");
        assert_eq!(
            LoadError::Fetch("offline".into()).to_string(),
            "fetch error: offline"
        );
        assert_eq!(
            LoadError::Parse("eof".into()).to_string(),
            "parse error: eof"
        );
    }
}

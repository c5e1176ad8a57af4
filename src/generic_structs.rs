use std::collections::HashMap;
use std::fmt;

/// Player id -> points scored so far in the current gameweek
pub type LivePlayerPoints = HashMap<u32, i32>;

/// Player id -> short display name (`web_name` in the FPL api)
pub type PlayerNames = HashMap<u32, String>;

/// One team in the classic league, as reported by the standings page
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueEntry {
    pub entry: u64,
    pub entry_name: String,
    pub player_name: String,
    /// Total before the live gameweek is added
    pub total: i32,
    /// Official league rank, before the live gameweek is worked in
    pub rank: u32,
}

/// One player in a team's lineup for a gameweek
#[derive(Debug, Clone, PartialEq)]
pub struct Pick {
    pub element: u32,
    /// 0 on the bench, 1 playing, 2 captain, 3 triple captain
    pub multiplier: i32,
    pub is_captain: bool,
    pub is_vice_captain: bool,
}

/// What the picks endpoint gives back for one entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPicks {
    pub picks: Vec<Pick>,
    pub active_chip: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Chip {
    None,
    Active(String),
    /// The picks could not be fetched, so we do not know
    Unavailable,
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Chip::None => write!(f, "-"),
            Chip::Active(tag) => write!(f, "{}", tag),
            Chip::Unavailable => write!(f, "N/A"),
        }
    }
}

/// A league entry with the live gameweek worked in. Rebuilt every refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedEntry {
    pub entry: LeagueEntry,
    pub live_points: i32,
    /// `entry.total + live_points`, what the leaderboard is sorted on
    pub combined: i32,
    pub chip: Chip,
    pub captain: Option<String>,
    pub vice_captain: Option<String>,
    pub picks: Vec<Pick>,
}

impl EnrichedEntry {
    pub fn captain_name(&self) -> &str {
        self.captain.as_deref().unwrap_or("N/A")
    }

    pub fn vice_captain_name(&self) -> &str {
        self.vice_captain.as_deref().unwrap_or("N/A")
    }
}

/// Outcome of the most recent refresh
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Idle,
    Fetching,
    Updated(chrono::DateTime<chrono::Local>),
    Failed(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Status::Idle => write!(f, "Waiting for first update"),
            Status::Fetching => write!(f, "Fetching live league data..."),
            Status::Updated(when) => write!(f, "Live updated: {}", when.format("%H:%M:%S")),
            Status::Failed(_) => write!(f, "Error loading FPL data"),
        }
    }
}

/// Everything the match sidebar shows
#[derive(Debug, Clone, Default)]
pub struct Matchday {
    pub ongoing: Vec<Game>,
    pub upcoming: Vec<Game>,
    pub finished: Vec<Game>,
}

/// One game of football, possibly future, past, or present
#[derive(Debug, Clone)]
pub struct Game {
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub status: GameStatus,
    pub home_scorers: Vec<String>,
    pub away_scorers: Vec<String>,
}

impl Game {
    fn kick_off(&self) -> String {
        self.start_time
            .with_timezone(&chrono::Local)
            .format("%H:%M")
            .to_string()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.status {
            GameStatus::Ended => write!(
                f,
                "{home} {home_score} - {away_score} {away}",
                home = self.home_team,
                home_score = self.home_score.unwrap_or(0),
                away_score = self.away_score.unwrap_or(0),
                away = self.away_team
            ),
            GameStatus::Upcoming => write!(
                f,
                "{} vs {} (Kick-off: {})",
                self.home_team,
                self.away_team,
                self.kick_off()
            ),
            GameStatus::Ongoing(_) => write!(
                f,
                "{} {} - {} {} (Kick-off: {})",
                self.home_team,
                self.home_score.unwrap_or(0),
                self.away_score.unwrap_or(0),
                self.away_team,
                self.kick_off()
            ),
            GameStatus::Postponed => {
                write!(f, "(postponed) {} - {}", self.home_team, self.away_team)
            }
            GameStatus::Cancelled => {
                write!(f, "(cancelled) {} - {}", self.home_team, self.away_team)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameStatus {
    Upcoming,
    Ongoing(String),
    Ended,
    Postponed,
    Cancelled,
}

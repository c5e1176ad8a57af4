//! <https://www.football-data.org/documentation/api>
//!
//! Needs an api key, sent along as `X-Auth-Token`.

use super::error::FetchError;
use super::generic_structs::*;
use log::debug;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.football-data.org/v4";

#[derive(Debug, Clone)]
pub struct MatchClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    competition: String,
}

impl MatchClient {
    pub fn new(base_url: &str, api_key: &str, competition: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            competition: competition.to_string(),
        }
    }

    /// Live, upcoming and finished games of the competition, all three asked for at once.
    pub async fn get_matchday(&self) -> Result<Matchday, FetchError> {
        let (ongoing, upcoming, finished) = tokio::try_join!(
            self.fetch_status("LIVE"),
            self.fetch_status("SCHEDULED"),
            self.fetch_status("FINISHED"),
        )?;
        Ok(Matchday {
            ongoing: parse_matches(ongoing),
            upcoming: parse_matches(upcoming),
            finished: parse_matches(finished),
        })
    }

    async fn fetch_status(&self, status: &str) -> Result<ParseMatches, FetchError> {
        let url = format!(
            "{}/matches?competitions={}&status={}",
            self.base_url, self.competition, status
        );
        debug!("Fetching data from {}", url);
        let resp = self
            .client
            .get(&url)
            .header("X-Auth-Token", &self.api_key)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(FetchError::Status {
                url,
                status: resp.status(),
            });
        }
        let content = resp.text().await?;
        let parsed = serde_json::from_str(&content)?;
        Ok(parsed)
    }
}

fn parse_matches(parsed: ParseMatches) -> Vec<Game> {
    parsed
        .matches
        .into_iter()
        .map(|m| {
            let (home_scorers, away_scorers) = m.scorers();
            Game {
                status: GameStatus::parse_from_football_data(&m.status),
                start_time: m.utc_date,
                home_score: m.score.full_time.home,
                away_score: m.score.full_time.away,
                home_team: m.home_team.name,
                away_team: m.away_team.name,
                home_scorers,
                away_scorers,
            }
        })
        .collect()
}

#[derive(Deserialize, Debug)]
struct ParseMatches {
    // default catches situations where there is no "matches"
    #[serde(default)]
    matches: Vec<ParseMatch>,
}
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ParseMatch {
    utc_date: chrono::DateTime<chrono::Utc>,
    status: String,
    home_team: ParseTeam,
    away_team: ParseTeam,
    score: ParseScore,
    // Not every plan of the api includes goals
    #[serde(default)]
    goals: Vec<ParseGoal>,
}
#[derive(Deserialize, Debug)]
struct ParseTeam {
    id: u64,
    name: String,
}
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ParseScore {
    full_time: ParseFullTime,
}
#[derive(Deserialize, Debug)]
struct ParseFullTime {
    home: Option<u8>,
    away: Option<u8>,
}
#[derive(Deserialize, Debug)]
struct ParseGoal {
    team: ParseGoalTeam,
    scorer: ParseScorer,
}
#[derive(Deserialize, Debug)]
struct ParseGoalTeam {
    id: u64,
}
#[derive(Deserialize, Debug)]
struct ParseScorer {
    name: String,
}

impl ParseMatch {
    fn scorers(&self) -> (Vec<String>, Vec<String>) {
        let by_team = |team_id: u64| {
            self.goals
                .iter()
                .filter(|g| g.team.id == team_id)
                .map(|g| g.scorer.name.to_owned())
                .collect()
        };
        (by_team(self.home_team.id), by_team(self.away_team.id))
    }
}

impl GameStatus {
    fn parse_from_football_data(s: &str) -> Self {
        match s {
            "SCHEDULED" | "TIMED" => GameStatus::Upcoming,
            "FINISHED" | "AWARDED" => GameStatus::Ended,
            "POSTPONED" | "SUSPENDED" => GameStatus::Postponed,
            "CANCELLED" => GameStatus::Cancelled,
            // IN_PLAY, PAUSED, LIVE
            t => GameStatus::Ongoing(t.to_owned()),
        }
    }
}

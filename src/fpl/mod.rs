//! <https://fantasy.premierleague.com/api/>
//!
//! Every endpoint used here is public, no login needed.

use super::error::FetchError;
use super::generic_structs::*;
use async_trait::async_trait;
use log::{debug, trace, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::future::Future;

pub const DEFAULT_BASE_URL: &str = "https://fantasy.premierleague.com/api/";

/// 50 entries a page, so 10,000 entries at most
const MAX_STANDINGS_PAGES: u32 = 200;

/// The five things a refresh needs to know about the league. Implemented by
/// [FplClient] for the real api.
#[async_trait]
pub trait LeagueSource {
    /// Id of the gameweek flagged as current
    async fn current_event(&self) -> Result<u32, FetchError>;
    async fn standings(&self, league_id: u64) -> Result<Vec<LeagueEntry>, FetchError>;
    async fn live_points(&self, event: u32) -> Result<LivePlayerPoints, FetchError>;
    async fn player_names(&self) -> Result<PlayerNames, FetchError>;
    async fn picks(&self, entry: u64, event: u32) -> Result<EntryPicks, FetchError>;
}

#[derive(Debug, Clone)]
pub struct FplClient {
    client: reqwest::Client,
    base_url: String,
}

impl FplClient {
    pub fn new(base_url: &str) -> Self {
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Fetching data from {}", url);
        let resp = self.client.get(&url).send().await?;
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

    async fn bootstrap(&self) -> Result<ParseBootstrap, FetchError> {
        self.get("bootstrap-static/").await
    }
}

#[async_trait]
impl LeagueSource for FplClient {
    async fn current_event(&self) -> Result<u32, FetchError> {
        self.bootstrap().await?.current_event()
    }

    /// Walks every standings page, the api hands them out 50 at a time.
    async fn standings(&self, league_id: u64) -> Result<Vec<LeagueEntry>, FetchError> {
        let entries = walk_standings(|page| async move {
            let path = format!(
                "leagues-classic/{}/standings/?page_standings={}",
                league_id, page
            );
            self.get::<ParseStandings>(&path).await
        })
        .await?;
        debug!("League {} has {} entries", league_id, entries.len());
        Ok(entries)
    }

    async fn live_points(&self, event: u32) -> Result<LivePlayerPoints, FetchError> {
        let parsed: ParseLive = self.get(&format!("event/{}/live/", event)).await?;
        Ok(parsed.into_points())
    }

    async fn player_names(&self) -> Result<PlayerNames, FetchError> {
        Ok(self.bootstrap().await?.into_names())
    }

    async fn picks(&self, entry: u64, event: u32) -> Result<EntryPicks, FetchError> {
        let parsed: ParsePicks = self
            .get(&format!("entry/{}/event/{}/picks/", entry, event))
            .await?;
        trace!("Picks for {}: {:?}", entry, parsed);
        Ok(parsed.into_entry_picks())
    }
}

#[derive(Deserialize, Debug)]
struct ParseBootstrap {
    events: Vec<ParseEvent>,
    // default catches a trimmed down response without players
    #[serde(default)]
    elements: Vec<ParsePlayer>,
}
#[derive(Deserialize, Debug)]
struct ParseEvent {
    id: u32,
    #[serde(default)]
    is_current: bool,
}
#[derive(Deserialize, Debug)]
struct ParsePlayer {
    id: u32,
    web_name: String,
}

impl ParseBootstrap {
    fn current_event(&self) -> Result<u32, FetchError> {
        self.events
            .iter()
            .find(|e| e.is_current)
            .map(|e| e.id)
            .ok_or(FetchError::NoCurrentEvent)
    }

    fn into_names(self) -> PlayerNames {
        self.elements
            .into_iter()
            .map(|p| (p.id, p.web_name))
            .collect()
    }
}

/// Asks for page 1, 2, ... until a page says there is nothing after it, or
/// until [MAX_STANDINGS_PAGES] have been read.
async fn walk_standings<F, Fut>(mut fetch_page: F) -> Result<Vec<LeagueEntry>, FetchError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<ParseStandings, FetchError>>,
{
    let mut entries = vec![];
    for page in 1..=MAX_STANDINGS_PAGES {
        let parsed = fetch_page(page).await?;
        let has_next = parsed.standings.has_next;
        entries.extend(parsed.into_entries());
        if !has_next {
            return Ok(entries);
        }
    }
    warn!(
        "Standings still had more pages after {}, stopping there",
        MAX_STANDINGS_PAGES
    );
    Ok(entries)
}

#[derive(Deserialize, Debug)]
struct ParseStandings {
    standings: ParseStandingsPage,
}
#[derive(Deserialize, Debug)]
struct ParseStandingsPage {
    #[serde(default)]
    has_next: bool,
    results: Vec<ParseStanding>,
}
#[derive(Deserialize, Debug)]
struct ParseStanding {
    entry: u64,
    entry_name: String,
    player_name: String,
    total: i32,
    #[serde(default)]
    rank: u32,
}

impl ParseStandings {
    fn into_entries(self) -> Vec<LeagueEntry> {
        self.standings
            .results
            .into_iter()
            .map(|s| LeagueEntry {
                entry: s.entry,
                entry_name: s.entry_name,
                player_name: s.player_name,
                total: s.total,
                rank: s.rank,
            })
            .collect()
    }
}

#[derive(Deserialize, Debug)]
struct ParseLive {
    elements: Vec<ParseLiveElement>,
}
#[derive(Deserialize, Debug)]
struct ParseLiveElement {
    id: u32,
    stats: ParseLiveStats,
}
#[derive(Deserialize, Debug)]
struct ParseLiveStats {
    total_points: i32,
}

impl ParseLive {
    fn into_points(self) -> LivePlayerPoints {
        self.elements
            .into_iter()
            .map(|e| (e.id, e.stats.total_points))
            .collect()
    }
}

#[derive(Deserialize, Debug)]
struct ParsePicks {
    active_chip: Option<String>,
    picks: Vec<ParsePick>,
}
#[derive(Deserialize, Debug)]
struct ParsePick {
    element: u32,
    multiplier: i32,
    #[serde(default)]
    is_captain: bool,
    #[serde(default)]
    is_vice_captain: bool,
}

impl ParsePicks {
    fn into_entry_picks(self) -> EntryPicks {
        EntryPicks {
            active_chip: self.active_chip,
            picks: self
                .picks
                .into_iter()
                .map(|p| Pick {
                    element: p.element,
                    multiplier: p.multiplier,
                    is_captain: p.is_captain,
                    is_vice_captain: p.is_vice_captain,
                })
                .collect(),
        }
    }
}

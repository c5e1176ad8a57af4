//! One refresh of the live league table, and the state kept between refreshes.

use super::aggregate::{enrich_entry, rank_leaderboard};
use super::error::FetchError;
use super::footballdata::MatchClient;
use super::fpl::LeagueSource;
use super::generic_structs::*;
use futures::stream::{self, StreamExt};
use log::{debug, error, info};

/// How many picks requests are in flight at once during a refresh
pub const DEFAULT_PICKS_CONCURRENCY: usize = 8;

pub struct LeagueLive<S> {
    source: S,
    league_id: u64,
    picks_concurrency: usize,
    /// Current gameweek, looked up once and kept until [LeagueLive::invalidate_event]
    event: Option<u32>,
    leaderboard: Vec<EnrichedEntry>,
    status: Status,
}

impl<S: LeagueSource + Sync> LeagueLive<S> {
    pub fn new(source: S, league_id: u64) -> Self {
        Self {
            source,
            league_id,
            picks_concurrency: DEFAULT_PICKS_CONCURRENCY,
            event: None,
            leaderboard: vec![],
            status: Status::Idle,
        }
    }

    /// Limit the number of picks requests running at the same time. At least one.
    pub fn with_picks_concurrency(mut self, limit: usize) -> Self {
        self.picks_concurrency = limit.max(1);
        self
    }

    /// Runs one refresh. On failure the previous leaderboard stays as it was and
    /// only the status changes.
    pub async fn update(&mut self) -> Result<(), FetchError> {
        self.status = Status::Fetching;
        match self.fetch_leaderboard().await {
            Ok(ranked) => {
                info!(
                    "League {} updated, {} entries",
                    self.league_id,
                    ranked.len()
                );
                self.leaderboard = ranked;
                self.status = Status::Updated(chrono::Local::now());
                Ok(())
            }
            Err(e) => {
                error!("League {} update failed: {}", self.league_id, e);
                self.status = Status::Failed(e.to_string());
                Err(e)
            }
        }
    }

    async fn fetch_leaderboard(&mut self) -> Result<Vec<EnrichedEntry>, FetchError> {
        let event = self.current_event().await?;
        let source = &self.source;

        let (entries, live, names) = tokio::try_join!(
            source.standings(self.league_id),
            source.live_points(event),
            source.player_names(),
        )?;
        debug!(
            "Gameweek {}: {} entries, {} live players, {} names",
            event,
            entries.len(),
            live.len(),
            names.len()
        );

        // buffered keeps the standings order, ties in the ranking depend on it
        let live = &live;
        let names = &names;
        let enriched: Vec<EnrichedEntry> = stream::iter(entries)
            .map(|entry| async move {
                let picks = source.picks(entry.entry, event).await;
                enrich_entry(entry, picks, live, names)
            })
            .buffered(self.picks_concurrency)
            .collect()
            .await;

        Ok(rank_leaderboard(enriched))
    }

    async fn current_event(&mut self) -> Result<u32, FetchError> {
        match self.event {
            Some(event) => Ok(event),
            None => {
                let event = self.source.current_event().await?;
                debug!("Current gameweek is {}", event);
                self.event = Some(event);
                Ok(event)
            }
        }
    }

    /// Forget the cached gameweek, the next update looks it up again.
    pub fn invalidate_event(&mut self) {
        self.event = None;
    }

    pub fn event(&self) -> Option<u32> {
        self.event
    }

    /// First entry is the current leader
    pub fn leaderboard(&self) -> &[EnrichedEntry] {
        &self.leaderboard
    }

    pub fn status(&self) -> &Status {
        &self.status
    }
}

/// The league table plus the match sidebar.
pub struct Dashboard<S> {
    pub league: LeagueLive<S>,
    matches: Option<MatchClient>,
    /// None until the first successful league update, or when there is no match client
    matchday: Option<Result<Matchday, FetchError>>,
}

impl<S: LeagueSource + Sync> Dashboard<S> {
    pub fn new(league: LeagueLive<S>, matches: Option<MatchClient>) -> Self {
        Self {
            league,
            matches,
            matchday: None,
        }
    }

    /// League first. Matches are only refreshed after the league went through,
    /// and their failure stays in the sidebar.
    pub async fn refresh(&mut self) {
        if self.league.update().await.is_err() {
            return;
        }
        if let Some(client) = &self.matches {
            let matchday = client.get_matchday().await;
            if let Err(e) = &matchday {
                error!("Match update failed: {}", e);
            }
            self.matchday = Some(matchday);
        }
    }

    pub fn matchday(&self) -> Option<&Result<Matchday, FetchError>> {
        self.matchday.as_ref()
    }
}

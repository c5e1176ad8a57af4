mod aggregate;
pub mod config;
mod error;
pub mod footballdata;
pub mod fpl;
mod generic_structs;
pub mod live;
pub mod render;

pub use aggregate::{compute_live_points, enrich_entry, rank_leaderboard};
pub use config::Config;
pub use error::FetchError;
pub use generic_structs::*;

/// The live leaderboard of one league, fetched once.
pub async fn get_live_leaderboard(config: &Config) -> Result<Vec<EnrichedEntry>, FetchError> {
    let client = fpl::FplClient::new(&config.fpl_base_url);
    let mut league = live::LeagueLive::new(client, config.league_id);
    league.update().await?;
    Ok(league.leaderboard().to_vec())
}

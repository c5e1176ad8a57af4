use fpl_live::footballdata::MatchClient;
use fpl_live::fpl::FplClient;
use fpl_live::live::{Dashboard, LeagueLive};
use fpl_live::{render, Config};
use log::{info, warn};
use tokio::time::{interval, MissedTickBehavior};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Run with RUST_LOG=debug for the requests being made
    env_logger::init();

    let config = Config::from_env()?;
    info!("Loaded configuration: {:?}", config);

    let league = LeagueLive::new(FplClient::new(&config.fpl_base_url), config.league_id);
    let matches = match &config.football_data.api_key {
        Some(key) => Some(MatchClient::new(
            &config.football_data.base_url,
            key,
            &config.football_data.competition,
        )),
        None => {
            warn!("FOOTBALL_DATA_KEY not set, leaving out the matches");
            None
        }
    };
    let mut dashboard = Dashboard::new(league, matches);

    // Refreshes run one after the other. A slow one makes us skip ticks
    // instead of starting a second refresh next to it.
    let mut ticker = interval(config.refresh_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        ticker.tick().await;
        dashboard.refresh().await;
        display(&dashboard);
    }
}

fn display(dashboard: &Dashboard<FplClient>) {
    println!("{}", dashboard.league.status());
    print!("{}", render::render_leaderboard(dashboard.league.leaderboard()));
    if let Some(matchday) = dashboard.matchday() {
        println!();
        print!("{}", render::render_matches(matchday));
    }
    println!();
}

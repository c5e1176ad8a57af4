//! One refresh of the live league table, printed once.

use fpl_live::Config;

#[tokio::main]
async fn main() {
    // Run with RUST_LOG=trace cargo run --example one_refresh
    env_logger::init();

    let config = Config::from_env().expect("Bad configuration");
    let leaderboard = fpl_live::get_live_leaderboard(&config)
        .await
        .expect("Could not load the league");
    print!("{}", fpl_live::render::render_leaderboard(&leaderboard));
}

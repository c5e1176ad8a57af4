//! Example of fetching the match sidebar and showing the raw result.

use fpl_live::footballdata::{MatchClient, DEFAULT_BASE_URL};

#[tokio::main]
async fn main() {
    // Run with FOOTBALL_DATA_KEY=... RUST_LOG=debug cargo run --example matches
    env_logger::init();

    let key = std::env::var("FOOTBALL_DATA_KEY").expect("FOOTBALL_DATA_KEY not set");
    let client = MatchClient::new(DEFAULT_BASE_URL, &key, "PL");
    let matchday = client.get_matchday().await;
    println!("{:#?}", matchday);
}

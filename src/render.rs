//! Plain text output for the terminal.

use super::error::FetchError;
use super::generic_structs::*;
use std::fmt::Write;

/// The league table, leader marked with a `*`. "Was" is the official rank
/// before the live gameweek.
pub fn render_leaderboard(entries: &[EnrichedEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4} {:>4} {:<40} {:<22} {:>6} {:>5} {:>8}",
        "#", "Was", "Team", "Manager", "Total", "Live", "Combined"
    );
    for (idx, team) in entries.iter().enumerate() {
        let marker = if idx == 0 { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{}{:<3} {:>4} {:<40} {:<22} {:>6} {:>5} {:>8}",
            marker,
            idx + 1,
            team.entry.rank,
            team.entry.entry_name,
            team.entry.player_name,
            team.entry.total,
            team.live_points,
            team.combined,
        );
        let _ = writeln!(
            out,
            "     Captain: {} (VC: {})  Chip: {}",
            team.captain_name(),
            team.vice_captain_name(),
            team.chip
        );
    }
    out
}

/// The match sidebar. Empty sections are left out.
pub fn render_matches(matchday: &Result<Matchday, FetchError>) -> String {
    let matchday = match matchday {
        Ok(matchday) => matchday,
        Err(e) => return format!("Error loading matches: {}\n", e),
    };
    let mut out = String::new();
    if !matchday.ongoing.is_empty() {
        let _ = writeln!(out, "Ongoing Matches");
        for game in &matchday.ongoing {
            let _ = writeln!(out, ">>> {}", game);
        }
    }
    if !matchday.upcoming.is_empty() {
        let _ = writeln!(out, "Upcoming Matches");
        for game in &matchday.upcoming {
            let _ = writeln!(out, ">>> {}", game);
        }
    }
    if !matchday.finished.is_empty() {
        let _ = writeln!(out, "Finished Matches (Goal Scorers)");
        for game in &matchday.finished {
            let _ = writeln!(out, ">>> {}", game);
            let _ = writeln!(out, ">>>>>> Home scorers: {}", scorers(&game.home_scorers));
            let _ = writeln!(out, ">>>>>> Away scorers: {}", scorers(&game.away_scorers));
        }
    }
    out
}

fn scorers(names: &[String]) -> String {
    if names.is_empty() {
        String::from("-")
    } else {
        names.join(", ")
    }
}

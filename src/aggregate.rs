//! Turning picks and live player points into the live leaderboard.

use super::error::FetchError;
use super::generic_structs::*;

/// Sum of every pick's live points times its multiplier. Players that have no
/// entry in `live` have not scored and count as 0. Saturates instead of
/// overflowing on nonsense multipliers.
pub fn compute_live_points(picks: &[Pick], live: &LivePlayerPoints) -> i32 {
    picks.iter().fold(0i32, |total, pick| {
        let points = live.get(&pick.element).copied().unwrap_or(0);
        total.saturating_add(points.saturating_mul(pick.multiplier))
    })
}

/// Works the live gameweek into one entry. A failed picks fetch only degrades
/// this entry: no live points and nothing known about chip or captaincy.
pub fn enrich_entry(
    entry: LeagueEntry,
    picks: Result<EntryPicks, FetchError>,
    live: &LivePlayerPoints,
    names: &PlayerNames,
) -> EnrichedEntry {
    match picks {
        Ok(EntryPicks { picks, active_chip }) => {
            let live_points = compute_live_points(&picks, live);
            let captain = find_name(&picks, names, |p| p.is_captain);
            let vice_captain = find_name(&picks, names, |p| p.is_vice_captain);
            let chip = match active_chip {
                Some(tag) if !tag.is_empty() => Chip::Active(tag),
                _ => Chip::None,
            };
            EnrichedEntry {
                combined: entry.total.saturating_add(live_points),
                entry,
                live_points,
                chip,
                captain,
                vice_captain,
                picks,
            }
        }
        Err(e) => {
            log::warn!("Could not get picks for entry {}: {}", entry.entry, e);
            EnrichedEntry {
                combined: entry.total,
                entry,
                live_points: 0,
                chip: Chip::Unavailable,
                captain: None,
                vice_captain: None,
                picks: vec![],
            }
        }
    }
}

fn find_name<F>(picks: &[Pick], names: &PlayerNames, flag: F) -> Option<String>
where
    F: Fn(&Pick) -> bool,
{
    let pick = picks.iter().find(|p| flag(p))?;
    names.get(&pick.element).cloned()
}

/// Highest combined first. Equal scores keep the order they came in.
pub fn rank_leaderboard(mut entries: Vec<EnrichedEntry>) -> Vec<EnrichedEntry> {
    entries.sort_by(|a, b| b.combined.cmp(&a.combined));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pick(element: u32, multiplier: i32) -> Pick {
        Pick {
            element,
            multiplier,
            is_captain: false,
            is_vice_captain: false,
        }
    }

    fn entry(id: u64, total: i32) -> LeagueEntry {
        LeagueEntry {
            entry: id,
            entry_name: format!("Team {}", id),
            player_name: format!("Manager {}", id),
            total,
            rank: 0,
        }
    }

    fn names() -> PlayerNames {
        let mut names = PlayerNames::new();
        names.insert(1, String::from("Salah"));
        names.insert(2, String::from("Haaland"));
        names.insert(3, String::from("Saka"));
        names
    }

    #[test]
    fn empty_picks_score_nothing() {
        let mut live = LivePlayerPoints::new();
        live.insert(1, 10);
        assert_eq!(compute_live_points(&[], &live), 0);
    }

    #[test]
    fn captain_doubles() {
        let mut live = LivePlayerPoints::new();
        live.insert(7, 6);
        assert_eq!(compute_live_points(&[pick(7, 2)], &live), 12);
    }

    #[test]
    fn unknown_player_counts_as_zero() {
        let mut live = LivePlayerPoints::new();
        live.insert(1, 5);
        let picks = vec![pick(1, 1), pick(99, 3)];
        assert_eq!(compute_live_points(&picks, &live), 5);
    }

    #[test]
    fn bench_does_not_count() {
        let mut live = LivePlayerPoints::new();
        live.insert(1, 5);
        live.insert(2, 8);
        let picks = vec![pick(1, 1), pick(2, 0)];
        assert_eq!(compute_live_points(&picks, &live), 5);
    }

    #[test]
    fn huge_multiplier_saturates() {
        let mut live = LivePlayerPoints::new();
        live.insert(1, 20);
        live.insert(2, 5);
        let picks = vec![pick(1, i32::MAX / 10), pick(2, 1)];
        assert_eq!(compute_live_points(&picks, &live), i32::MAX);

        let enriched = enrich_entry(
            entry(1, 100),
            Ok(EntryPicks {
                picks,
                active_chip: None,
            }),
            &live,
            &names(),
        );
        assert_eq!(enriched.combined, i32::MAX);
    }

    #[test]
    fn enrich_adds_live_points() {
        let mut live = LivePlayerPoints::new();
        live.insert(1, 4);
        live.insert(2, 9);
        let mut captain = pick(2, 2);
        captain.is_captain = true;
        let mut vice = pick(1, 1);
        vice.is_vice_captain = true;
        let picks = EntryPicks {
            picks: vec![vice, captain],
            active_chip: Some(String::from("bboost")),
        };

        let enriched = enrich_entry(entry(1, 100), Ok(picks), &live, &names());
        assert_eq!(enriched.live_points, 22);
        assert_eq!(enriched.combined, 122);
        assert_eq!(enriched.chip, Chip::Active(String::from("bboost")));
        assert_eq!(enriched.captain_name(), "Haaland");
        assert_eq!(enriched.vice_captain_name(), "Salah");
    }

    #[test]
    fn enrich_without_chip_or_captain() {
        let live = LivePlayerPoints::new();
        let picks = EntryPicks {
            picks: vec![pick(3, 1)],
            active_chip: None,
        };
        let enriched = enrich_entry(entry(1, 40), Ok(picks), &live, &names());
        assert_eq!(enriched.combined, 40);
        assert_eq!(enriched.chip, Chip::None);
        assert_eq!(enriched.captain, None);
        assert_eq!(enriched.captain_name(), "N/A");
        assert_eq!(enriched.chip.to_string(), "-");
    }

    #[test]
    fn failed_picks_keep_prior_total() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut live = LivePlayerPoints::new();
        live.insert(1, 10);
        let enriched = enrich_entry(
            entry(5, 321),
            Err(FetchError::Status {
                url: String::from("http://localhost/entry/5/event/8/picks/"),
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            }),
            &live,
            &names(),
        );
        assert_eq!(enriched.live_points, 0);
        assert_eq!(enriched.combined, 321);
        assert_eq!(enriched.chip, Chip::Unavailable);
        assert_eq!(enriched.captain_name(), "N/A");
        assert_eq!(enriched.vice_captain_name(), "N/A");
        assert!(enriched.picks.is_empty());
    }

    #[test]
    fn ranking_puts_live_leader_first() {
        let mut live = LivePlayerPoints::new();
        live.insert(1, 10);
        live.insert(2, 5);
        let a = enrich_entry(
            entry(1, 50),
            Ok(EntryPicks {
                picks: vec![pick(1, 1)],
                active_chip: None,
            }),
            &live,
            &names(),
        );
        let b = enrich_entry(
            entry(2, 60),
            Ok(EntryPicks {
                picks: vec![pick(2, 1)],
                active_chip: None,
            }),
            &live,
            &names(),
        );
        assert_eq!(a.combined, 60);
        assert_eq!(b.combined, 65);

        let ranked = rank_leaderboard(vec![a, b]);
        assert_eq!(ranked[0].entry.entry, 2);
        assert_eq!(ranked[1].entry.entry, 1);
    }

    #[test]
    fn ranking_is_stable_on_ties() {
        let live = LivePlayerPoints::new();
        let names = names();
        let entries: Vec<_> = [(1, 70), (2, 80), (3, 70), (4, 70)]
            .iter()
            .map(|&(id, total)| {
                enrich_entry(entry(id, total), Ok(EntryPicks::default()), &live, &names)
            })
            .collect();
        let ranked: Vec<u64> = rank_leaderboard(entries)
            .iter()
            .map(|e| e.entry.entry)
            .collect();
        assert_eq!(ranked, vec![2, 1, 3, 4]);
    }

    fn picks_strategy() -> impl Strategy<Value = Vec<Pick>> {
        prop::collection::vec((0u32..40, 0i32..4), 0..15)
            .prop_map(|raw| raw.into_iter().map(|(e, m)| pick(e, m)).collect())
    }

    fn live_strategy() -> impl Strategy<Value = LivePlayerPoints> {
        prop::collection::hash_map(0u32..30, 0i32..25, 0..30)
    }

    proptest! {
        #[test]
        fn live_points_ignore_pick_order(picks in picks_strategy(), live in live_strategy()) {
            let forward = compute_live_points(&picks, &live);
            let mut reversed = picks.clone();
            reversed.reverse();
            prop_assert_eq!(forward, compute_live_points(&reversed, &live));
            prop_assert!(forward >= 0);
        }

        #[test]
        fn ranking_never_increases(totals in prop::collection::vec(0i32..500, 0..20)) {
            let live = LivePlayerPoints::new();
            let names = PlayerNames::new();
            let entries = totals
                .iter()
                .enumerate()
                .map(|(i, &t)| {
                    let picks = Ok(EntryPicks::default());
                    enrich_entry(entry(i as u64, t), picks, &live, &names)
                })
                .collect();
            let ranked = rank_leaderboard(entries);
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].combined >= pair[1].combined);
                if pair[0].combined == pair[1].combined {
                    prop_assert!(pair[0].entry.entry < pair[1].entry.entry);
                }
            }
        }
    }
}

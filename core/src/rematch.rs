//! §4.3: split a team list into game-sized groups, minimizing repeat
//! opponents from each team's recorded history.
//!
//! Grounded on the shift-encoded permutation search in the original
//! `tournament/utils.go`'s `avoidRematches`: enumerate a superset of
//! orderings via a per-position shift vector, partition each candidate at
//! precomputed split points, and keep the lowest-cost partition seen,
//! short-circuiting the moment a zero-cost one turns up.

use std::collections::HashMap;

/// opponent history a team brings into the partitioner.
pub trait RematchHistory {
    /// positions (within the slice passed to [`partition`]) of this team's
    /// past opponents, in chronological order (oldest first) — the cost
    /// weighting favors keeping the most recent opponents apart.
    fn prior_opponents(&self) -> &[usize];
}

/// hard cap on the shift-vector search so a large team list can't blow the
/// budget; the search returns the best partition found within this many
/// candidates rather than running the full (factorial-ish) enumeration.
const MAX_ITERATIONS: usize = 20_000;

/// partition `teams` into `ceil(n / group_size)` groups, earlier groups of
/// size `group_size`, trailing groups short by one, preferring groupings
/// with the least shared-history cost. Returns groups as index lists into
/// `teams`.
pub fn partition<T: RematchHistory>(teams: &[T], group_size: usize) -> Vec<Vec<usize>> {
    assert!(group_size >= 1);
    let n = teams.len();
    if n == 0 {
        return Vec::new();
    }

    let mut cost_map: HashMap<(usize, usize), i64> = HashMap::new();
    for (a, team) in teams.iter().enumerate() {
        for (i, &b) in team.prior_opponents().iter().enumerate() {
            cost_map.insert((a, b), (i + 1) as i64);
        }
    }

    let game_count = n.div_ceil(group_size);
    let short_games = game_count * group_size - n;
    let mut splits = vec![0usize; game_count];
    let mut index = 0usize;
    for split in splits.iter_mut().take(game_count - short_games) {
        index += group_size;
        *split = index;
    }
    for split in splits.iter_mut().skip(game_count - short_games) {
        index += group_size - 1;
        *split = index;
    }

    let break_point = group_size.min(game_count);

    let base: Vec<usize> = (0..n).collect();
    let mut shifts = vec![0usize; n];
    let mut min_cost = i64::MAX;
    let mut best: Vec<Vec<usize>> = Vec::new();
    let mut iterations = 0usize;

    while shifts[0] < shifts.len() {
        if iterations >= MAX_ITERATIONS {
            break;
        }
        if shifts[0] < break_point && min_cost <= game_count as i64 {
            break;
        }

        let mut working = base.clone();
        for (i, &shift) in shifts.iter().enumerate() {
            working.swap(i, i + shift);
        }

        let mut groups = Vec::with_capacity(game_count);
        let mut start = 0;
        for &end in &splits {
            groups.push(working[start..end].to_vec());
            start = end;
        }

        let mut cost = 0i64;
        for group in &groups {
            for (gi, &a) in group.iter().enumerate() {
                for (gj, &b) in group.iter().enumerate() {
                    if gi == gj {
                        continue;
                    }
                    cost += cost_map.get(&(a, b)).copied().unwrap_or(0);
                }
            }
        }

        if cost < min_cost {
            min_cost = cost;
            best = groups;
        }
        if cost == 0 {
            break;
        }

        iterations += 1;

        for i in (0..shifts.len()).rev() {
            if i == 0 || shifts[i] < shifts.len() - i - 1 {
                shifts[i] += 1;
                break;
            }
            shifts[i] = 0;
        }
    }

    if best.is_empty() {
        let mut start = 0;
        for &end in &splits {
            best.push(base[start..end].to_vec());
            start = end;
        }
    }

    best
}

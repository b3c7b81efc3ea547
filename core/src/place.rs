//! place/score arithmetic: the sign-encoded tie marker is load-bearing across
//! every driver — switching encodings breaks double-elim's "who won Finals"
//! inference.

use crate::entity::game::Game;
use crate::entity::is_bye_team;
use std::cmp::Ordering;

/// decode a places[i] value: `p` if `p >= 0`, else `-(p + 1)`.
/// Two-way tie for first is encoded as either `0` or `-1`, both decoding to rank 0.
pub fn flip(p: i64) -> i64 {
    if p >= 0 {
        p
    } else {
        -(p + 1)
    }
}

/// ascending-by-score comparator over decoded places/scores
pub fn less_by_score(a: i64, b: i64) -> Ordering {
    flip(a).cmp(&flip(b))
}

/// whether the team at `index` in `game` is a winner: the game must be
/// Completed, the team must not be a BYE, and fewer than `advancing` other
/// teams may outrank it (ties broken by index: an earlier index wins a tie).
pub fn is_winner(game: &Game, index: usize, advancing: u32) -> bool {
    use crate::status::Status;

    if game.status() != Status::Completed {
        return false;
    }
    if is_bye_team(game.teams()[index].as_ref()) {
        return false;
    }
    let places = game.places();
    if places.len() != game.teams().len() {
        return false;
    }
    let rank = flip(places[index]);
    let mut ahead_of_us = 0;
    for (i, &p) in places.iter().enumerate() {
        if i == index {
            continue;
        }
        let other = flip(p);
        if rank > other || (rank == other && index > i) {
            ahead_of_us += 1;
        }
    }
    ahead_of_us < advancing as usize
}

/// derive places from parallel scores: unique scores get monotone places
/// `0, 1, 2, ...`; a score shared by >= 2 teams gets a tie marker so a solo
/// finisher is distinguishable from a tied one downstream.
pub fn finalize_scored(scores: &[i64]) -> Vec<i64> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    // descending by score: highest score finishes first (place 0)
    order.sort_by(|&a, &b| scores[b].cmp(&scores[a]));

    let mut places = vec![0i64; scores.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i + 1;
        while j < order.len() && scores[order[j]] == scores[order[i]] {
            j += 1;
        }
        let tied = j - i;
        if tied == 1 {
            places[order[i]] = i as i64;
        } else {
            // tie marker: place `i` (0-indexed rank) encoded as a negative value.
            // rank 0 ties encode as -1 so place `0` stays reserved for a solo winner.
            let encoded = -(i as i64) - 1;
            for &idx in &order[i..j] {
                places[idx] = encoded;
            }
        }
        i = j;
    }
    places
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_decodes_tie_markers() {
        assert_eq!(flip(0), 0);
        assert_eq!(flip(-1), 0);
        assert_eq!(flip(-2), 1);
        assert_eq!(flip(3), 3);
    }

    #[test]
    fn finalize_scored_unique_scores_are_monotone() {
        let places = finalize_scored(&[30, 10, 20]);
        assert_eq!(places, vec![0, 2, 1]);
    }

    #[test]
    fn finalize_scored_ties_share_encoded_place() {
        // three-team game [10, 10, 5]: top two tie for first, encoded place {0, 0, 2}
        let places = finalize_scored(&[10, 10, 5]);
        assert_eq!(flip(places[0]), 0);
        assert_eq!(flip(places[1]), 0);
        assert_eq!(flip(places[2]), 2);
        assert!(places[0] < 0 && places[1] < 0, "tie must be sign-encoded");
    }

    #[test]
    fn finalize_scored_tie_not_at_first_place() {
        let places = finalize_scored(&[30, 10, 10]);
        assert_eq!(flip(places[0]), 0);
        assert_eq!(flip(places[1]), 1);
        assert_eq!(flip(places[2]), 1);
    }
}

//! per-format scheduling drivers (§4.4–§4.8), each wrapping a
//! [`crate::base_tournament::BaseTournament`].

pub mod compass_draw;
pub mod double_elimination;
pub mod group_play;
pub mod round_robin;
pub mod single_elimination;

pub use compass_draw::CompassDrawDriver;
pub use double_elimination::DoubleEliminationDriver;
pub use group_play::GroupPlayDriver;
pub use round_robin::RoundRobinDriver;
pub use single_elimination::SingleEliminationDriver;

use crate::entity::{Round, Team};
use crate::rematch::RematchHistory;
use crate::utils::id_version::ObjectIdVersion;
use std::collections::HashMap;
use uuid::Uuid;

/// a team's opponent history, chronological, built by scanning the rounds
/// played so far — teams carry no history field of their own, so drivers
/// derive it on demand from the games each team has appeared in.
pub struct TeamHistory(Vec<usize>);

impl RematchHistory for TeamHistory {
    fn prior_opponents(&self) -> &[usize] {
        &self.0
    }
}

/// build one [`TeamHistory`] per entry of `teams`, indexed the same way,
/// from every game played across `rounds` so far.
pub fn build_histories(teams: &[Team], rounds: &[Round]) -> Vec<TeamHistory> {
    let index_of: HashMap<Uuid, usize> = teams
        .iter()
        .enumerate()
        .filter_map(|(i, t)| t.get_id().map(|id| (id, i)))
        .collect();

    let mut histories: Vec<Vec<usize>> = vec![Vec::new(); teams.len()];
    for round in rounds {
        for game in round.games() {
            let present: Vec<usize> = game
                .teams()
                .iter()
                .filter_map(|t| t.as_ref())
                .filter_map(|t| t.get_id())
                .filter_map(|id| index_of.get(&id).copied())
                .collect();
            for &a in &present {
                for &b in &present {
                    if a != b {
                        histories[a].push(b);
                    }
                }
            }
        }
    }
    histories.into_iter().map(TeamHistory).collect()
}

//! §4.4: every-plays-every schedule across a computed round count.
//!
//! Grounded on `tournament/roundRobin.go`.

use crate::base_tournament::BaseTournament;
use crate::driver::TournamentDriver;
use crate::drivers::build_histories;
use crate::entity::{Game, Round};
use crate::errors::{CoreError, CoreResult};
use crate::rematch::partition;
use crate::status::Status;
use crate::utils::id_version::ObjectIdVersion;
use async_trait::async_trait;

pub struct RoundRobinDriver {
    base: BaseTournament,
}

impl RoundRobinDriver {
    pub fn new(base: BaseTournament) -> Self {
        RoundRobinDriver { base }
    }

    /// how many other teams each team must play, divided by how many of
    /// those can be played per round; one extra round if teams don't split
    /// evenly into games of `gameSize`.
    fn total_rounds(&self) -> usize {
        let n = self.base.teams().len();
        let g = (self.base.meta().game_size() as usize).max(2);
        let mut total = (n.saturating_sub(1)).div_ceil(g - 1);
        if (n / g) * g != n {
            total += 1;
        }
        total
    }
}

#[async_trait]
impl TournamentDriver for RoundRobinDriver {
    fn base(&self) -> &BaseTournament {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseTournament {
        &mut self.base
    }

    async fn next_round(&mut self) -> CoreResult<&Round> {
        self.base.mark_ongoing().await?;
        let rounds_so_far = self.base.rounds().len();
        if rounds_so_far > 0 {
            let last = self.base.last_round().expect("rounds_so_far > 0");
            if last.status() != Status::Completed {
                return Err(CoreError::PreviousRoundNotCompleted);
            }
            if rounds_so_far >= self.total_rounds() {
                self.base.complete().await?;
                return Err(CoreError::AllMatchesPlayed);
            }
        }

        let game_size = self.base.meta().game_size() as usize;
        let histories = build_histories(self.base.teams(), self.base.rounds());
        let groups = partition(&histories, game_size);

        let tournament_id = self.base.meta().get_id().unwrap_or_default();
        let teams = self.base.teams().to_vec();
        let mut round = Round::new(tournament_id, rounds_so_far as u32, Vec::new());
        for group in groups {
            let game_teams = group.into_iter().map(|i| Some(teams[i].clone())).collect();
            // round_id is assigned by storage once the round itself is persisted
            round.add_game(Game::new(uuid::Uuid::nil(), game_teams));
        }

        self.base.push_round(round).await
    }

    fn bracket_order(&self) -> Vec<String> {
        vec![String::new()]
    }
}

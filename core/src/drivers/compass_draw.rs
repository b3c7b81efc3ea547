//! §4.7: sixteen-division drift — losers migrate by a round-specific
//! division step each round.
//!
//! Grounded on `tournament/compassDraw.go`. The sixteen division names and
//! the `compassDivisions` drift table are carried over unchanged; the
//! hard-wired `math/rand.Shuffle` call becomes the injected [`Shuffler`] port
//! so callers can supply a deterministic ordering.

use crate::base_tournament::BaseTournament;
use crate::driver::TournamentDriver;
use crate::entity::{Game, Round, Team};
use crate::errors::{CoreError, CoreResult};
use crate::place::flip;
use crate::ports::shuffle::Shuffler;
use crate::status::Status;
use crate::utils::id_version::ObjectIdVersion;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// second element of each round's entry is the drift applied to that
/// round's non-advancing teams.
const COMPASS_DIVISIONS: [&[usize]; 5] = [
    &[0],
    &[0, 8],
    &[0, 4, 8, 12],
    &[0, 2, 4, 6, 8, 10, 12, 14],
    &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
];

pub const COMPASS_DIVISION_NAMES: [&str; 16] = [
    "East",
    "East-northeast",
    "Northeast",
    "North-northeast",
    "North",
    "North-northwest",
    "Northwest",
    "West-northwest",
    "West",
    "West-southwest",
    "Southwest",
    "South-southwest",
    "South",
    "South-southeast",
    "Southeast",
    "East-southeast",
];

pub struct CompassDrawDriver {
    base: BaseTournament,
    shuffler: Arc<dyn Shuffler>,
    division_assignments: HashMap<String, usize>,
}

impl CompassDrawDriver {
    pub fn new(base: BaseTournament, shuffler: Arc<dyn Shuffler>) -> Self {
        CompassDrawDriver {
            base,
            shuffler,
            division_assignments: HashMap::new(),
        }
    }

    fn divisions_of(&self, teams: &[Team]) -> Vec<Vec<Team>> {
        let mut by_division: Vec<Vec<Team>> = vec![Vec::new(); 16];
        for team in teams {
            let division = *self.division_assignments.get(team.name()).unwrap_or(&0);
            by_division[division].push(team.clone());
        }
        by_division
    }
}

#[async_trait]
impl TournamentDriver for CompassDrawDriver {
    fn base(&self) -> &BaseTournament {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseTournament {
        &mut self.base
    }

    async fn next_round(&mut self) -> CoreResult<&Round> {
        self.base.mark_ongoing().await?;
        let game_size = self.base.meta().game_size() as usize;
        let advancing = self.base.meta().advancing() as usize;
        let tournament_id = self.base.meta().get_id().unwrap_or_default();
        let existing_rounds = self.base.rounds().len();

        if existing_rounds == 0 {
            // all teams start in division 0 (East)
        } else {
            let last = self.base.last_round().expect("existing_rounds > 0");
            if last.status() != Status::Completed {
                return Err(CoreError::PreviousRoundNotCompleted);
            }
            if existing_rounds >= COMPASS_DIVISIONS.len() {
                return Err(CoreError::TooManyRounds);
            }

            let drift = COMPASS_DIVISIONS[existing_rounds][1];
            for game in last.games() {
                let mut ranked: Vec<(usize, i64)> = game
                    .places()
                    .iter()
                    .enumerate()
                    .map(|(i, &p)| (i, flip(p)))
                    .collect();
                ranked.sort_by_key(|&(_, rank)| rank);
                for &(i, _) in ranked.iter().skip(advancing) {
                    if let Some(team) = &game.teams()[i] {
                        let entry = self
                            .division_assignments
                            .entry(team.name().to_string())
                            .or_insert(0);
                        *entry += drift;
                    }
                }
            }
        }

        let by_division = self.divisions_of(self.base.teams());
        let half = game_size / 2;
        if by_division[0].len() <= half {
            self.base.complete().await?;
            return Err(CoreError::NotEnoughTeams);
        }

        let round_number = existing_rounds as u32;
        let mut round = Round::new(tournament_id, round_number, Vec::new());

        for (division, group) in by_division.into_iter().enumerate() {
            if group.len() <= half {
                continue;
            }
            let order = self.shuffler.shuffle_indices(group.len());
            let shuffled: Vec<Team> = order.into_iter().map(|i| group[i].clone()).collect();
            for chunk in shuffled.chunks(game_size.max(1)) {
                let teams: Vec<Option<Team>> = chunk.iter().cloned().map(Some).collect();
                let mut game = Game::new(Uuid::nil(), teams);
                game.set_bracket(COMPASS_DIVISION_NAMES[division]);
                round.add_game(game);
            }
        }

        self.base.push_round(round).await
    }

    fn bracket_order(&self) -> Vec<String> {
        COMPASS_DIVISION_NAMES
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

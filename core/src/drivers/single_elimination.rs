//! §4.5: single-loss bracket; seeds round 1, advances winners.
//!
//! Grounded on `tournament/singleElimination.go`.

use crate::base_tournament::BaseTournament;
use crate::driver::TournamentDriver;
use crate::drivers::build_histories;
use crate::entity::{is_bye_team, Game, Round, Team};
use crate::errors::{CoreError, CoreResult};
use crate::place::flip;
use crate::rematch::partition;
use crate::seeding::seed_bracket;
use crate::status::Status;
use crate::utils::id_version::ObjectIdVersion;
use async_trait::async_trait;
use uuid::Uuid;

pub struct SingleEliminationDriver {
    base: BaseTournament,
}

impl SingleEliminationDriver {
    pub fn new(base: BaseTournament) -> Self {
        SingleEliminationDriver { base }
    }

    fn first_round_teams(&self) -> Vec<Option<Team>> {
        if self.base.meta().is_seeded() {
            seed_bracket(self.base.teams())
        } else {
            let histories = build_histories(self.base.teams(), &[]);
            let game_size = self.base.meta().game_size() as usize;
            let groups = partition(&histories, game_size);
            let teams = self.base.teams();
            groups
                .into_iter()
                .flatten()
                .map(|i| Some(teams[i].clone()))
                .collect()
        }
    }

    /// winners of the last round's games, in rank order within each game,
    /// preserving game order across the round.
    fn surviving_teams(&self, last_round: &Round) -> Vec<Team> {
        let advancing = self.base.meta().advancing() as usize;
        let mut survivors = Vec::new();
        for game in last_round.games() {
            let mut ranked: Vec<(usize, i64)> = game
                .places()
                .iter()
                .enumerate()
                .map(|(i, &p)| (i, flip(p)))
                .collect();
            ranked.sort_by_key(|&(_, rank)| rank);
            let mut taken = 0usize;
            for (i, _) in ranked {
                if taken >= advancing {
                    break;
                }
                if let Some(team) = &game.teams()[i] {
                    if !is_bye_team(Some(team)) {
                        survivors.push(team.clone());
                        taken += 1;
                    }
                }
            }
        }
        survivors
    }
}

#[async_trait]
impl TournamentDriver for SingleEliminationDriver {
    fn base(&self) -> &BaseTournament {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseTournament {
        &mut self.base
    }

    async fn next_round(&mut self) -> CoreResult<&Round> {
        self.base.mark_ongoing().await?;
        let game_size = self.base.meta().game_size() as usize;

        let teams: Vec<Option<Team>> = if self.base.rounds().is_empty() {
            self.first_round_teams()
        } else {
            let last = self.base.last_round().expect("checked non-empty");
            if last.status() != Status::Completed {
                return Err(CoreError::PreviousRoundNotCompleted);
            }
            self.surviving_teams(last).into_iter().map(Some).collect()
        };

        if teams.len() < game_size {
            self.base.complete().await?;
            return Err(CoreError::NotEnoughTeams);
        }

        let tournament_id = self.base.meta().get_id().unwrap_or_default();
        let round_number = self.base.rounds().len() as u32;
        let mut round = Round::new(tournament_id, round_number, Vec::new());

        let num_games = teams.len() / game_size;
        for i in 0..num_games {
            let slice = teams[i * game_size..(i + 1) * game_size].to_vec();
            let mut game = Game::new(Uuid::nil(), slice);
            game.set_bracket("Main");
            round.add_game(game);
        }

        self.base.push_round(round).await
    }

    fn bracket_order(&self) -> Vec<String> {
        vec!["Main".to_string()]
    }
}

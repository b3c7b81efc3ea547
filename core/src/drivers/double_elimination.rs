//! §4.6: two-bracket state machine with winners/losers queues and a final
//! (possibly doubled) round.
//!
//! Grounded on `tournament/doubleElimination.go`. The phase bookkeeping is
//! translated from the original's `roundType` state machine; round-building
//! follows the documented bracket semantics rather than the source's
//! literal (and shadowed-variable) round-size arithmetic.

use crate::base_tournament::BaseTournament;
use crate::driver::TournamentDriver;
use crate::entity::{is_bye_game, is_bye_team, Game, Round, Team};
use crate::errors::{CoreError, CoreResult};
use crate::place::flip;
use crate::seeding::seed_bracket;
use crate::status::Status;
use crate::utils::id_version::ObjectIdVersion;
use async_trait::async_trait;
use uuid::Uuid;

const WINNING_BRACKET: &str = "Winning Bracket";
const LOSING_BRACKET: &str = "Losing Bracket";
const FINALS: &str = "Finals";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    First,
    LMajor,
    LMinor,
    NoL,
    Final,
    FinalExtra,
}

pub struct DoubleEliminationDriver {
    base: BaseTournament,
    phase: Phase,
    play_in: usize,
    winner_queue: Vec<Team>,
    loser_queue: Vec<Team>,
}

fn floor_pow2(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let mut p = 1usize;
    while p * 2 <= n {
        p *= 2;
    }
    p
}

fn rank_non_bye(game: &Game) -> Vec<Team> {
    let mut scored: Vec<(Team, i64)> = Vec::new();
    for (i, &p) in game.places().iter().enumerate() {
        if i >= game.teams().len() {
            break;
        }
        if let Some(team) = &game.teams()[i] {
            if !is_bye_team(Some(team)) {
                scored.push((team.clone(), flip(p)));
            }
        }
    }
    scored.sort_by_key(|&(_, rank)| rank);
    scored.into_iter().map(|(t, _)| t).collect()
}

/// emit a game per chunk that actually needs one played; a chunk with at
/// most `advancing` real teams is vacuous (its lone real team has nobody
/// left to play), so it's skipped and that team returned to advance
/// directly instead of waiting on a game that would never get scored.
fn emit_chunked_games(
    round: &mut Round,
    teams: &[Option<Team>],
    game_size: usize,
    bracket: &str,
    advancing: usize,
) -> Vec<Team> {
    let mut auto_advanced = Vec::new();
    for chunk in teams.chunks(game_size.max(1)) {
        if is_bye_game(chunk, advancing as u32) {
            auto_advanced.extend(
                chunk
                    .iter()
                    .filter_map(|t| t.clone())
                    .filter(|t| !is_bye_team(Some(t))),
            );
            continue;
        }
        let mut game = Game::new(Uuid::nil(), chunk.to_vec());
        game.set_bracket(bracket);
        round.add_game(game);
    }
    auto_advanced
}

fn shuffle_losers_in_place(teams: &mut [Team]) {
    let half = teams.len() / 2;
    let mut i = 0;
    while i < half {
        teams.swap(i, i + half);
        i += 2;
    }
}

impl DoubleEliminationDriver {
    pub fn new(base: BaseTournament) -> Self {
        let n = base.teams().len();
        let play_in = n - floor_pow2(n);
        DoubleEliminationDriver {
            base,
            phase: Phase::First,
            play_in,
            winner_queue: Vec::new(),
            loser_queue: Vec::new(),
        }
    }

    fn find_prior_bracket(&self, team_id: Uuid, before_index: usize) -> Option<String> {
        for round in self.base.rounds()[..before_index].iter().rev() {
            for game in round.games() {
                if game.index_of(team_id).is_some() {
                    return Some(game.bracket().to_string());
                }
            }
        }
        None
    }
}

#[async_trait]
impl TournamentDriver for DoubleEliminationDriver {
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

        let mut winning_teams: Vec<Option<Team>> = Vec::new();
        let mut losing_teams: Vec<Team> = Vec::new();

        let existing_rounds = self.base.rounds().len();

        if existing_rounds == 0 {
            let ranked = self.base.teams().to_vec();
            winning_teams = if self.base.meta().is_seeded() {
                seed_bracket(&ranked)
            } else {
                let ideal = ranked.len().next_power_of_two();
                let mut padded: Vec<Option<Team>> = ranked.into_iter().map(Some).collect();
                padded.resize(ideal, None);
                padded
            };
        } else {
            if self.phase == Phase::First {
                self.phase = Phase::LMajor;
            }

            let last = self.base.last_round().expect("existing_rounds > 0");
            if last.status() != Status::Completed {
                return Err(CoreError::PreviousRoundNotCompleted);
            }

            let mut local_losing_queue: Vec<Team> = Vec::new();
            let mut terminate = false;

            for game in last.games() {
                let ranked = rank_non_bye(game);
                match game.bracket() {
                    WINNING_BRACKET => {
                        for t in ranked.iter().take(advancing) {
                            self.winner_queue.push(t.clone());
                        }
                        for t in ranked.iter().skip(advancing) {
                            local_losing_queue.push(t.clone());
                        }
                    }
                    LOSING_BRACKET => {
                        for t in ranked.iter().take(advancing) {
                            self.loser_queue.push(t.clone());
                        }
                    }
                    FINALS => {
                        if let Some(winner) = ranked.first() {
                            let winner_id = winner.get_id().unwrap_or_default();
                            let prior = self.find_prior_bracket(winner_id, existing_rounds - 1);
                            match prior.as_deref() {
                                Some(LOSING_BRACKET) => {
                                    self.phase = Phase::FinalExtra;
                                    for t in ranked.iter().take(advancing) {
                                        self.winner_queue.push(t.clone());
                                    }
                                    for t in ranked.iter().skip(advancing) {
                                        local_losing_queue.push(t.clone());
                                    }
                                }
                                _ => terminate = true,
                            }
                        }
                    }
                    _ => {}
                }
            }

            if terminate {
                self.base.complete().await?;
                return Err(CoreError::TooManyRounds);
            }

            self.loser_queue.extend(local_losing_queue);

            if existing_rounds == 1 {
                winning_teams = self.winner_queue.drain(..).map(Some).collect();
                let losers_size = self.loser_queue.len();
                let play_in = self.play_in.min(losers_size / 2);
                for i in 0..play_in {
                    losing_teams.push(self.loser_queue[i].clone());
                    losing_teams.push(self.loser_queue[losers_size - 1 - i].clone());
                }
                if play_in > 0 {
                    self.loser_queue = self.loser_queue[play_in..losers_size - play_in].to_vec();
                }
            } else if !matches!(self.phase, Phase::Final | Phase::FinalExtra) {
                match self.phase {
                    Phase::First | Phase::NoL | Phase::LMinor => self.phase = Phase::LMajor,
                    Phase::LMajor => self.phase = Phase::LMinor,
                    _ => {}
                }
                if self.loser_queue.is_empty() {
                    self.phase = Phase::NoL;
                }

                if self.loser_queue.len() > game_size / 2 {
                    losing_teams = std::mem::take(&mut self.loser_queue);
                }
                if self.winner_queue.len() > advancing {
                    winning_teams = std::mem::take(&mut self.winner_queue)
                        .into_iter()
                        .map(Some)
                        .collect();
                }

                if winning_teams.is_empty()
                    && losing_teams.is_empty()
                    && ((self.winner_queue.len() <= advancing
                        && self.loser_queue.len() <= advancing)
                        || (self.winner_queue.is_empty() && self.loser_queue.len() == game_size))
                {
                    self.phase = Phase::Final;
                }
            }
        }

        let round_number = existing_rounds as u32;
        let mut round = Round::new(tournament_id, round_number, Vec::new());

        if matches!(self.phase, Phase::Final | Phase::FinalExtra) {
            let mut all: Vec<Option<Team>> = std::mem::take(&mut self.winner_queue)
                .into_iter()
                .map(Some)
                .collect();
            all.extend(std::mem::take(&mut self.loser_queue).into_iter().map(Some));
            let mut game = Game::new(Uuid::nil(), all);
            game.set_bracket(FINALS);
            round.add_game(game);
        } else {
            let half = game_size / 2;

            if winning_teams.len() > advancing {
                let advanced = emit_chunked_games(
                    &mut round,
                    &winning_teams,
                    game_size,
                    WINNING_BRACKET,
                    advancing,
                );
                self.winner_queue.extend(advanced);
            }

            if self.phase == Phase::LMinor && !losing_teams.is_empty() && existing_rounds != 2 {
                shuffle_losers_in_place(&mut losing_teams);
            }

            if losing_teams.len() > half {
                let losing_opts: Vec<Option<Team>> = losing_teams.into_iter().map(Some).collect();
                let advanced = emit_chunked_games(
                    &mut round,
                    &losing_opts,
                    game_size,
                    LOSING_BRACKET,
                    advancing,
                );
                self.loser_queue.extend(advanced);
            }
        }

        self.base.push_round(round).await
    }

    fn bracket_order(&self) -> Vec<String> {
        vec![
            WINNING_BRACKET.to_string(),
            LOSING_BRACKET.to_string(),
            FINALS.to_string(),
        ]
    }
}

//! §4.8: composes independently-driven child tournaments into a single
//! virtual tournament; advances every child by one round atomically and
//! fans out status transitions.
//!
//! Grounded on `tournament/groupCompetition.go`'s `GroupCompetition`/
//! `groupRound`.

use crate::base_tournament::BaseTournament;
use crate::driver::{Driver, TournamentDriver};
use crate::entity::Round;
use crate::errors::{CoreError, CoreResult};
use crate::status::Status;
use crate::utils::id_version::ObjectIdVersion;
use async_trait::async_trait;

pub struct GroupPlayDriver {
    base: BaseTournament,
    children: Vec<Driver>,
}

impl GroupPlayDriver {
    pub fn new(base: BaseTournament, children: Vec<Driver>) -> Self {
        GroupPlayDriver { base, children }
    }
}

#[async_trait]
impl TournamentDriver for GroupPlayDriver {
    fn base(&self) -> &BaseTournament {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseTournament {
        &mut self.base
    }

    async fn next_round(&mut self) -> CoreResult<&Round> {
        self.base.mark_ongoing().await?;
        let tournament_id = self.base.meta().get_id().unwrap_or_default();
        let round_number = self.base.rounds().len() as u32;
        let mut combined = Round::new(tournament_id, round_number, Vec::new());

        for child in &mut self.children {
            if let Some(last) = child.base().last_round() {
                if last.status() != Status::Completed {
                    return Err(CoreError::PreviousRoundNotCompleted);
                }
            }
            let child_name = child.base().meta().name().to_string();
            let child_round = child.next_round().await?;
            let prefix = format!("{}:", child_name);
            for game in child_round.games() {
                let mut relabeled = game.clone();
                let label = relabeled.bracket().to_string();
                if !label.starts_with(&prefix) {
                    relabeled.set_bracket(format!("{prefix}{label}"));
                }
                combined.add_game(relabeled);
            }
        }

        Ok(self.base.append_round_local(combined))
    }

    /// fans out to every child instead of starting a round of its own.
    async fn start_round(&mut self) -> CoreResult<()> {
        for child in &mut self.children {
            child.start_round().await?;
        }
        Ok(())
    }

    /// fans out to every child instead of finalizing a round of its own.
    async fn set_final(&mut self) -> CoreResult<()> {
        for child in &mut self.children {
            child.set_final().await?;
        }
        Ok(())
    }

    fn bracket_order(&self) -> Vec<String> {
        self.children
            .iter()
            .flat_map(|child| {
                let name = child.base().meta().name().to_string();
                child
                    .bracket_order()
                    .into_iter()
                    .map(move |bracket| format!("{name}:{bracket}"))
            })
            .collect()
    }
}

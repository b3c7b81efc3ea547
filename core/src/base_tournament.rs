//! the storage-backed aggregate every driver wraps: tournament metadata,
//! its team roster, and the rounds produced so far.

use crate::entity::{Round, Team, TournamentMeta};
use crate::errors::CoreResult;
use crate::ports::storage::StoragePort;
use crate::status::Status;
use std::sync::Arc;
use tracing::debug;

/// tournament metadata, teams and rounds, plus the storage port persisting
/// them. Drivers borrow this mutably to compute and persist each round;
/// the core never locks or clones the storage handle beyond an `Arc`.
pub struct BaseTournament {
    meta: TournamentMeta,
    teams: Vec<Team>,
    rounds: Vec<Round>,
    storage: Arc<dyn StoragePort>,
}

impl BaseTournament {
    pub fn new(meta: TournamentMeta, teams: Vec<Team>, storage: Arc<dyn StoragePort>) -> Self {
        BaseTournament {
            meta,
            teams,
            rounds: Vec::new(),
            storage,
        }
    }

    pub fn meta(&self) -> &TournamentMeta {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut TournamentMeta {
        &mut self.meta
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn last_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    /// the active round, mutable: callers record scores/places on its games
    /// here before calling `set_final`.
    pub fn last_round_mut(&mut self) -> Option<&mut Round> {
        self.rounds.last_mut()
    }

    pub fn storage(&self) -> &Arc<dyn StoragePort> {
        &self.storage
    }

    /// move the tournament to Ongoing, persisting the transition, if this
    /// is its first round.
    pub async fn mark_ongoing(&mut self) -> CoreResult<()> {
        if self.meta.status() == Status::New {
            self.meta.set_status(Status::Ongoing);
            self.meta = self.storage.save_tournament(&self.meta).await?;
        }
        Ok(())
    }

    /// append a driver-computed round, persist it, and move the tournament
    /// to Ongoing on its first round.
    pub async fn push_round(&mut self, round: Round) -> CoreResult<&Round> {
        self.mark_ongoing().await?;
        let saved = self.storage.save_round(&round).await?;
        debug!(
            tournament = %self.meta.name(),
            round = saved.number(),
            games = saved.games().len(),
            "round persisted"
        );
        self.rounds.push(saved);
        Ok(self.rounds.last().expect("just pushed"))
    }

    /// append a round that a group-play aggregator assembled from its
    /// children's already-persisted rounds, without persisting it again.
    pub fn append_round_local(&mut self, round: Round) -> &Round {
        self.rounds.push(round);
        self.rounds.last().expect("just pushed")
    }

    /// move the active round (and its games) to Ongoing, idempotently.
    pub async fn start_round(&mut self) -> CoreResult<()> {
        let storage = Arc::clone(&self.storage);
        if let Some(round) = self.rounds.last_mut() {
            round.start();
            let saved = storage.save_round(round).await?;
            *round = saved;
        }
        Ok(())
    }

    /// finalize every completed game on the active round, then lock the round.
    pub async fn set_final(&mut self) -> CoreResult<()> {
        let storage = Arc::clone(&self.storage);
        if let Some(round) = self.rounds.last_mut() {
            round.set_final()?;
            for game in round.games() {
                storage.save_game(game).await?;
            }
            let saved = storage.save_round(round).await?;
            *round = saved;
        }
        Ok(())
    }

    /// terminate the tournament: mark Completed and persist.
    pub async fn complete(&mut self) -> CoreResult<()> {
        self.meta.set_status(Status::Completed);
        self.meta = self.storage.save_tournament(&self.meta).await?;
        debug!(tournament = %self.meta.name(), "tournament completed");
        Ok(())
    }
}

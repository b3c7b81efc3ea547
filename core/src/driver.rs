//! §9 "interface polymorphism over concrete classes": a capability trait
//! plus a sum type of concrete drivers, rather than deep inheritance.

use crate::base_tournament::BaseTournament;
use crate::drivers::{
    CompassDrawDriver, DoubleEliminationDriver, GroupPlayDriver, RoundRobinDriver,
    SingleEliminationDriver,
};
use crate::entity::Round;
use crate::errors::CoreResult;
use async_trait::async_trait;

/// capability set every scheduling format implements.
#[async_trait]
pub trait TournamentDriver: Send + Sync {
    fn base(&self) -> &BaseTournament;
    fn base_mut(&mut self) -> &mut BaseTournament;

    /// compute, persist, and return the next round, or a terminal error if
    /// the tournament is over (the tournament status is already Completed
    /// by the time the error is returned).
    async fn next_round(&mut self) -> CoreResult<&Round>;

    /// display ordering of this driver's bracket labels.
    fn bracket_order(&self) -> Vec<String>;

    /// move the active round to Ongoing.
    async fn start_round(&mut self) -> CoreResult<()> {
        self.base_mut().start_round().await
    }

    /// finalize the active round from its games' recorded results.
    async fn set_final(&mut self) -> CoreResult<()> {
        self.base_mut().set_final().await
    }

    /// the round currently being played, if any.
    fn active_stage(&self) -> Option<&Round> {
        self.base().last_round()
    }
}

/// sum type over the five concrete drivers; the caller matches on format
/// once, at construction, and is otherwise polymorphic over this enum.
pub enum Driver {
    RoundRobin(RoundRobinDriver),
    SingleElim(SingleEliminationDriver),
    DoubleElim(DoubleEliminationDriver),
    CompassDraw(CompassDrawDriver),
    GroupPlay(GroupPlayDriver),
}

impl Driver {
    pub fn base(&self) -> &BaseTournament {
        match self {
            Driver::RoundRobin(d) => d.base(),
            Driver::SingleElim(d) => d.base(),
            Driver::DoubleElim(d) => d.base(),
            Driver::CompassDraw(d) => d.base(),
            Driver::GroupPlay(d) => d.base(),
        }
    }

    pub fn base_mut(&mut self) -> &mut BaseTournament {
        match self {
            Driver::RoundRobin(d) => d.base_mut(),
            Driver::SingleElim(d) => d.base_mut(),
            Driver::DoubleElim(d) => d.base_mut(),
            Driver::CompassDraw(d) => d.base_mut(),
            Driver::GroupPlay(d) => d.base_mut(),
        }
    }

    pub async fn next_round(&mut self) -> CoreResult<&Round> {
        match self {
            Driver::RoundRobin(d) => d.next_round().await,
            Driver::SingleElim(d) => d.next_round().await,
            Driver::DoubleElim(d) => d.next_round().await,
            Driver::CompassDraw(d) => d.next_round().await,
            Driver::GroupPlay(d) => d.next_round().await,
        }
    }

    pub async fn start_round(&mut self) -> CoreResult<()> {
        match self {
            Driver::RoundRobin(d) => d.start_round().await,
            Driver::SingleElim(d) => d.start_round().await,
            Driver::DoubleElim(d) => d.start_round().await,
            Driver::CompassDraw(d) => d.start_round().await,
            Driver::GroupPlay(d) => d.start_round().await,
        }
    }

    pub async fn set_final(&mut self) -> CoreResult<()> {
        match self {
            Driver::RoundRobin(d) => d.set_final().await,
            Driver::SingleElim(d) => d.set_final().await,
            Driver::DoubleElim(d) => d.set_final().await,
            Driver::CompassDraw(d) => d.set_final().await,
            Driver::GroupPlay(d) => d.set_final().await,
        }
    }

    pub fn bracket_order(&self) -> Vec<String> {
        match self {
            Driver::RoundRobin(d) => d.bracket_order(),
            Driver::SingleElim(d) => d.bracket_order(),
            Driver::DoubleElim(d) => d.bracket_order(),
            Driver::CompassDraw(d) => d.bracket_order(),
            Driver::GroupPlay(d) => d.bracket_order(),
        }
    }
}

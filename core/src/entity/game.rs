//! a single competitive event within a round

use crate::entity::is_bye_team;
use crate::entity::team::Team;
use crate::errors::{CoreError, CoreResult};
use crate::place::finalize_scored;
use crate::status::Status;
use crate::utils::id_version::{IdVersion, ObjectIdVersion};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// a game: an ordered sequence of teams (BYE slots are `None`), with
/// index-aligned scores and places once scored/finalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    id_version: IdVersion,
    round_id: Uuid,
    teams: Vec<Option<Team>>,
    scores: Vec<i64>,
    places: Vec<i64>,
    arena_id: Option<Uuid>,
    bracket: String,
    status: Status,
}

impl ObjectIdVersion for Game {
    fn get_id_version(&self) -> IdVersion {
        self.id_version
    }
    fn set_id_version(&mut self, id_version: IdVersion) {
        self.id_version = id_version;
    }
}

impl Game {
    pub fn new(round_id: Uuid, teams: Vec<Option<Team>>) -> Self {
        Game {
            id_version: IdVersion::New,
            round_id,
            teams,
            scores: Vec::new(),
            places: Vec::new(),
            arena_id: None,
            bracket: String::new(),
            status: Status::New,
        }
    }

    pub fn round_id(&self) -> Uuid {
        self.round_id
    }

    pub fn teams(&self) -> &[Option<Team>] {
        &self.teams
    }

    pub fn scores(&self) -> &[i64] {
        &self.scores
    }

    pub fn places(&self) -> &[i64] {
        &self.places
    }

    pub fn arena_id(&self) -> Option<Uuid> {
        self.arena_id
    }

    pub fn set_arena_id(&mut self, arena_id: Option<Uuid>) -> &mut Self {
        self.arena_id = arena_id;
        self
    }

    pub fn bracket(&self) -> &str {
        &self.bracket
    }

    pub fn set_bracket(&mut self, bracket: impl Into<String>) -> &mut Self {
        self.bracket = bracket.into();
        self
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn start(&mut self) -> &mut Self {
        if self.status == Status::New {
            self.status = Status::Ongoing;
        }
        self
    }

    pub fn is_bye_slot(&self, index: usize) -> bool {
        is_bye_team(self.teams[index].as_ref())
    }

    /// index of `team` among this game's teams, matched by id
    pub fn index_of(&self, team_id: Uuid) -> Option<usize> {
        self.teams.iter().position(|t| {
            t.as_ref()
                .and_then(|t| t.get_id())
                .map(|id| id == team_id)
                .unwrap_or(false)
        })
    }

    /// record per-team scores; array length must equal team count — a
    /// length mismatch is a hard error, not a silent no-op.
    pub fn set_scores(&mut self, scores: Vec<i64>) -> CoreResult<&mut Self> {
        if scores.len() != self.teams.len() {
            return Err(CoreError::ScoreLengthMismatch {
                expected: self.teams.len(),
                actual: scores.len(),
            });
        }
        self.scores = scores;
        Ok(self)
    }

    /// record per-team places directly; only meaningful for unscored tournaments.
    pub fn set_places(&mut self, places: Vec<i64>) -> CoreResult<&mut Self> {
        if places.len() != self.teams.len() {
            return Err(CoreError::ScoreLengthMismatch {
                expected: self.teams.len(),
                actual: places.len(),
            });
        }
        self.places = places;
        Ok(self)
    }

    /// finalize: derive places from scores if scored, otherwise require places to
    /// already be populated by the caller, then lock the game as Completed.
    pub fn set_final(&mut self) -> CoreResult<&mut Self> {
        if !self.scores.is_empty() {
            self.places = finalize_scored(&self.scores);
        } else if self.places.is_empty() {
            return Err(CoreError::GameNotReady);
        }
        self.status = Status::Completed;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn team(tid: Uuid, name: &str) -> Team {
        let mut t = Team::new(tid, name, vec![Uuid::new_v4()]);
        t.set_id_version(IdVersion::existing(Uuid::new_v4(), 0));
        t
    }

    #[test]
    fn set_scores_rejects_length_mismatch() {
        let tid = Uuid::new_v4();
        let mut g = Game::new(
            Uuid::new_v4(),
            vec![Some(team(tid, "a")), Some(team(tid, "b"))],
        );
        let err = g.set_scores(vec![1]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::ScoreLengthMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn set_final_without_scores_or_places_errors() {
        let tid = Uuid::new_v4();
        let mut g = Game::new(
            Uuid::new_v4(),
            vec![Some(team(tid, "a")), Some(team(tid, "b"))],
        );
        assert!(matches!(g.set_final(), Err(CoreError::GameNotReady)));
    }

    #[test]
    fn set_final_derives_places_from_scores() {
        let tid = Uuid::new_v4();
        let mut g = Game::new(
            Uuid::new_v4(),
            vec![
                Some(team(tid, "a")),
                Some(team(tid, "b")),
                Some(team(tid, "c")),
            ],
        );
        g.set_scores(vec![10, 10, 5]).unwrap();
        g.set_final().unwrap();
        assert_eq!(g.status(), Status::Completed);
        assert_eq!(g.places().len(), 3);
    }
}

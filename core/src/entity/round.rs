//! a batch of games created together and completed before the next round

use crate::entity::game::Game;
use crate::errors::CoreResult;
use crate::status::Status;
use crate::utils::id_version::{IdVersion, ObjectIdVersion};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    id_version: IdVersion,
    tournament_id: Uuid,
    number: u32,
    games: Vec<Game>,
    status: Status,
}

impl ObjectIdVersion for Round {
    fn get_id_version(&self) -> IdVersion {
        self.id_version
    }
    fn set_id_version(&mut self, id_version: IdVersion) {
        self.id_version = id_version;
    }
}

impl Round {
    pub fn new(tournament_id: Uuid, number: u32, games: Vec<Game>) -> Self {
        Round {
            id_version: IdVersion::New,
            tournament_id,
            number,
            games,
            status: Status::New,
        }
    }

    pub fn tournament_id(&self) -> Uuid {
        self.tournament_id
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn games_mut(&mut self) -> &mut [Game] {
        &mut self.games
    }

    pub fn add_game(&mut self, game: Game) -> &mut Self {
        self.games.push(game);
        self
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// idempotent: move this round (and its games) to Ongoing
    pub fn start(&mut self) -> &mut Self {
        if self.status == Status::New {
            self.status = Status::Ongoing;
        }
        for game in &mut self.games {
            game.start();
        }
        self
    }

    /// finalize every game that carries recorded results, then lock the round.
    /// The caller is expected to have already recorded scores/places on each
    /// game; a game with neither is a caller error (propagated from `Game::set_final`).
    pub fn set_final(&mut self) -> CoreResult<&mut Self> {
        for game in &mut self.games {
            if game.status() != Status::Completed {
                game.set_final()?;
            }
        }
        self.status = Status::Completed;
        Ok(self)
    }
}

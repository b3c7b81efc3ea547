//! base parameters of a tournament

use crate::errors::{CoreError, CoreResult};
use crate::status::Status;
use crate::utils::id_version::{IdVersion, ObjectIdVersion};
use displaydoc::Display;
use serde::{Deserialize, Serialize};

/// scheduling format; selects which driver runs the tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Format {
    /// single elimination
    SingleElim,
    /// double elimination
    DoubleElim,
    /// round robin
    RoundRobin,
    /// compass draw
    CompassDraw,
    /// swiss
    Swiss,
    /// group play
    GroupPlay,
}

/// a tournament's format, roster rules, and scoring/seeding configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentMeta {
    id_version: IdVersion,
    competition_id: Option<uuid::Uuid>,
    name: String,
    format: Format,
    seeded: bool,
    scored: bool,
    game_size: u32,
    advancing: u32,
    status: Status,
    metadata: Vec<u8>,
}

impl ObjectIdVersion for TournamentMeta {
    fn get_id_version(&self) -> IdVersion {
        self.id_version
    }
    fn set_id_version(&mut self, id_version: IdVersion) {
        self.id_version = id_version;
    }
}

impl TournamentMeta {
    pub fn new(
        name: impl Into<String>,
        format: Format,
        seeded: bool,
        scored: bool,
        game_size: u32,
        advancing: u32,
    ) -> CoreResult<Self> {
        if game_size < 2 {
            return Err(CoreError::InvalidParameters(format!(
                "gameSize must be >= 2, got {game_size}"
            )));
        }
        if advancing < 1 {
            return Err(CoreError::InvalidParameters(format!(
                "advancing must be >= 1, got {advancing}"
            )));
        }
        Ok(TournamentMeta {
            id_version: IdVersion::New,
            competition_id: None,
            name: name.into(),
            format,
            seeded,
            scored,
            game_size,
            advancing,
            status: Status::New,
            metadata: Vec::new(),
        })
    }

    pub fn competition_id(&self) -> Option<uuid::Uuid> {
        self.competition_id
    }

    pub fn set_competition_id(&mut self, competition_id: Option<uuid::Uuid>) -> &mut Self {
        self.competition_id = competition_id;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    pub fn is_scored(&self) -> bool {
        self.scored
    }

    pub fn game_size(&self) -> u32 {
        self.game_size
    }

    pub fn advancing(&self) -> u32 {
        self.advancing
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_status(&mut self, status: Status) -> &mut Self {
        self.status = status;
        self
    }

    pub fn metadata(&self) -> &[u8] {
        &self.metadata
    }

    pub fn set_metadata(&mut self, metadata: Vec<u8>) -> &mut Self {
        self.metadata = metadata;
        self
    }
}

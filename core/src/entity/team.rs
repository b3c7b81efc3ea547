//! a team (or solo athlete) competing in a tournament

use crate::utils::id_version::{IdVersion, ObjectIdVersion};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// a team: an ordered roster of players, unique by name within its tournament.
///
/// An empty roster is the BYE placeholder (see [`crate::entity::is_bye_team`]).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Team {
    id_version: IdVersion,
    tournament_id: Uuid,
    name: String,
    player_ids: Vec<Uuid>,
    metadata: Vec<u8>,
}

impl ObjectIdVersion for Team {
    fn get_id_version(&self) -> IdVersion {
        self.id_version
    }
    fn set_id_version(&mut self, id_version: IdVersion) {
        self.id_version = id_version;
    }
}

impl Team {
    pub fn new(tournament_id: Uuid, name: impl Into<String>, player_ids: Vec<Uuid>) -> Self {
        Team {
            id_version: IdVersion::New,
            tournament_id,
            name: name.into(),
            player_ids,
            metadata: Vec::new(),
        }
    }

    /// a named BYE placeholder: no players
    pub fn bye(tournament_id: Uuid, name: impl Into<String>) -> Self {
        Team::new(tournament_id, name, Vec::new())
    }

    pub fn tournament_id(&self) -> Uuid {
        self.tournament_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn players(&self) -> &[Uuid] {
        &self.player_ids
    }

    pub fn metadata(&self) -> &[u8] {
        &self.metadata
    }

    pub fn set_metadata(&mut self, metadata: Vec<u8>) -> &mut Self {
        self.metadata = metadata;
        self
    }
}

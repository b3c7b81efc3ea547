//! a participant; teams are made of players

use crate::utils::id_version::{IdVersion, ObjectIdVersion};
use serde::{Deserialize, Serialize};

/// a player, unique by name within a storage
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Player {
    id_version: IdVersion,
    name: String,
    metadata: Vec<u8>,
}

impl ObjectIdVersion for Player {
    fn get_id_version(&self) -> IdVersion {
        self.id_version
    }
    fn set_id_version(&mut self, id_version: IdVersion) {
        self.id_version = id_version;
    }
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            id_version: IdVersion::New,
            name: name.into(),
            metadata: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn metadata(&self) -> &[u8] {
        &self.metadata
    }

    pub fn set_metadata(&mut self, metadata: Vec<u8>) -> &mut Self {
        self.metadata = metadata;
        self
    }
}

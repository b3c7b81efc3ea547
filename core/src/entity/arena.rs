//! a place where games are held

use crate::utils::id_version::{IdVersion, ObjectIdVersion};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Arena {
    id_version: IdVersion,
    competition_id: Option<Uuid>,
    name: String,
}

impl ObjectIdVersion for Arena {
    fn get_id_version(&self) -> IdVersion {
        self.id_version
    }
    fn set_id_version(&mut self, id_version: IdVersion) {
        self.id_version = id_version;
    }
}

impl Arena {
    pub fn new(name: impl Into<String>) -> Self {
        Arena {
            id_version: IdVersion::New,
            competition_id: None,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn competition_id(&self) -> Option<Uuid> {
        self.competition_id
    }

    pub fn set_competition_id(&mut self, competition_id: Option<Uuid>) -> &mut Self {
        self.competition_id = competition_id;
        self
    }
}

//! a named collection of tournaments and arenas

use crate::utils::id_version::{IdVersion, ObjectIdVersion};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Competition {
    id_version: IdVersion,
    name: String,
}

impl ObjectIdVersion for Competition {
    fn get_id_version(&self) -> IdVersion {
        self.id_version
    }
    fn set_id_version(&mut self, id_version: IdVersion) {
        self.id_version = id_version;
    }
}

impl Competition {
    pub fn new(name: impl Into<String>) -> Self {
        Competition {
            id_version: IdVersion::New,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

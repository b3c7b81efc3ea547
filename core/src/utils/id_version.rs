//! identity assigned by storage on first persistence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// id and optimistic-lock version of a persisted entity.
///
/// Entities start out `New` (no identity yet). Storage assigns an id and a
/// version number `0` on first save; every subsequent save must present the
/// previously returned version and receives the next one back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IdVersion {
    #[default]
    New,
    Existing {
        id: Uuid,
        version: u32,
    },
}

impl IdVersion {
    pub fn existing(id: Uuid, version: u32) -> Self {
        IdVersion::Existing { id, version }
    }

    pub fn get_id(&self) -> Option<Uuid> {
        match self {
            IdVersion::New => None,
            IdVersion::Existing { id, .. } => Some(*id),
        }
    }

    pub fn get_version(&self) -> Option<u32> {
        match self {
            IdVersion::New => None,
            IdVersion::Existing { version, .. } => Some(*version),
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, IdVersion::New)
    }
}

/// types carrying an `IdVersion`
pub trait ObjectIdVersion {
    fn get_id_version(&self) -> IdVersion;
    fn set_id_version(&mut self, id_version: IdVersion);

    fn get_id(&self) -> Option<Uuid> {
        self.get_id_version().get_id()
    }
    fn get_version(&self) -> Option<u32> {
        self.get_id_version().get_version()
    }
}

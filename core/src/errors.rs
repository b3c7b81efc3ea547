//! error taxonomy for the scheduling core

use displaydoc::Display;
use thiserror::Error;

/// errors surfaced by the storage adapter
#[derive(Debug, Error, Display)]
pub enum StorageError {
    /// entity not found
    NotFound,
    /// optimistic lock conflict: expected version {expected}, entity is at {actual}
    OptimisticLockConflict { expected: u32, actual: u32 },
    /// unique constraint violation{0:?}
    UniqueViolation(Option<String>),
    /// foreign key violation{0:?}
    ForeignKeyViolation(Option<String>),
    /// check constraint violation{0:?}
    CheckViolation(Option<String>),
    /// transient storage failure, retrying may succeed
    SerializationFailure,
    /// storage error: {0}
    Other(#[from] anyhow::Error),
}

/// errors surfaced by the scheduling core
#[derive(Debug, Error, Display)]
pub enum CoreError {
    /// previous round not completed
    PreviousRoundNotCompleted,
    /// all matches played
    AllMatchesPlayed,
    /// not enough teams for another round
    NotEnoughTeams,
    /// too many rounds
    TooManyRounds,
    /// score/place array length mismatch: expected {expected} entries, got {actual}
    ScoreLengthMismatch { expected: usize, actual: usize },
    /// game has neither scores nor places set
    GameNotReady,
    /// invalid tournament parameters: {0}
    InvalidParameters(String),
    /// storage error: {0}
    Storage(#[from] StorageError),
}

impl CoreError {
    /// whether this error terminates the tournament (status already moved to Completed)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CoreError::AllMatchesPlayed | CoreError::NotEnoughTeams | CoreError::TooManyRounds
        )
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
pub type StorageResult<T> = Result<T, StorageError>;

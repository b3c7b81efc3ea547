//! tri-state lifecycle shared by Tournament, Round, and Game

use displaydoc::Display;
use serde::{Deserialize, Serialize};

/// monotone lifecycle: New -> Ongoing -> Completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum Status {
    /// new
    #[default]
    New,
    /// ongoing
    Ongoing,
    /// completed
    Completed,
}

impl Status {
    /// true if `next` is reachable from `self` by zero or one forward step
    pub fn can_advance_to(self, next: Status) -> bool {
        use Status::*;
        matches!(
            (self, next),
            (New, New)
                | (New, Ongoing)
                | (Ongoing, Ongoing)
                | (Ongoing, Completed)
                | (Completed, Completed)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotone_transitions_allowed() {
        assert!(Status::New.can_advance_to(Status::Ongoing));
        assert!(Status::Ongoing.can_advance_to(Status::Completed));
    }

    #[test]
    fn backward_transitions_rejected() {
        assert!(!Status::Ongoing.can_advance_to(Status::New));
        assert!(!Status::Completed.can_advance_to(Status::Ongoing));
    }
}

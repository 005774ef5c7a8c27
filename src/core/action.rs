//! Host actions and their history.
//!
//! Every discrete event the host feeds into a session is an `HostAction`.
//! The session records each one with the tick it arrived on so a run can be
//! inspected or replayed from its seed.

use serde::{Deserialize, Serialize};

use super::BoardPosition;

/// A discrete event sent by the host (one click = one action).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum HostAction {
    /// Select (highlight) a tile.
    SelectTile(BoardPosition),
    /// Move onto the selected tile.
    ConfirmMove,
    /// Spend a probe to measure the selected zone from a distance.
    ActivateProbe,
    /// Phase-rotate the selected zone by `percent * π`.
    PhaseRotate { percent: f32 },
}

/// A recorded action with ordering metadata.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: HostAction,

    /// Host tick the action arrived on.
    pub tick: u64,

    /// Sequence number across the whole session.
    pub sequence: u64,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: HostAction, tick: u64, sequence: u64) -> Self {
        Self {
            action,
            tick,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        let a1 = HostAction::SelectTile(BoardPosition::new(1, 2));
        let a2 = HostAction::SelectTile(BoardPosition::new(1, 2));
        let a3 = HostAction::SelectTile(BoardPosition::new(2, 1));

        assert_eq!(a1, a2);
        assert_ne!(a1, a3);
        assert_ne!(a1, HostAction::ConfirmMove);
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(HostAction::PhaseRotate { percent: 0.5 }, 3, 5);

        assert_eq!(record.tick, 3);
        assert_eq!(record.sequence, 5);
        assert_eq!(record.action, HostAction::PhaseRotate { percent: 0.5 });
    }

    #[test]
    fn test_sequence_past_u32() {
        let sequence = u64::from(u32::MAX) + 1;
        let record = ActionRecord::new(HostAction::ConfirmMove, 0, sequence);
        assert_eq!(record.sequence, sequence);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.sequence, sequence);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(HostAction::SelectTile(BoardPosition::new(4, 0)), 2, 3);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}

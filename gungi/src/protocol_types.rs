use serde::{Deserialize, Serialize};

/// One externally supplied game action.
///
/// The core never chooses placements or moves on its own; drivers feed it
/// a sequence of these records via
/// [`GameEngine::apply`](crate::GameEngine::apply). Coordinates and
/// vectors are in the acting player's own frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Leave standby and open the placement phase.
    Start,
    /// Drop the piece at index `piece` onto the column `(x, z)`.
    Place { piece: usize, x: i8, z: i8 },
    /// Move the piece at index `piece` by `(dx, dz)`.
    Move { piece: usize, dx: i8, dz: i8 },
    /// Close placement and open the running phase.
    BeginRunning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_records_round_trip() {
        let actions = vec![
            Action::Start,
            Action::Place {
                piece: 14,
                x: 4,
                z: 0,
            },
            Action::BeginRunning,
            Action::Move {
                piece: 14,
                dx: 0,
                dz: 1,
            },
        ];
        let json = serde_json::to_string(&actions).unwrap();
        let back: Vec<Action> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, actions);
    }

    #[test]
    fn action_records_use_a_type_tag() {
        let action: Action = serde_json::from_str(r#"{"type":"place","piece":3,"x":4,"z":0}"#)
            .unwrap();
        assert_eq!(
            action,
            Action::Place {
                piece: 3,
                x: 4,
                z: 0
            }
        );
    }
}

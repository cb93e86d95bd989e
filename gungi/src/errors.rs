use crate::{Phase, Point3};

/// A coordinate outside the 9×9×3 grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OffBoard {
    pub x: i8,
    pub z: i8,
    pub y: i8,
}

impl OffBoard {
    pub(crate) fn at(point: Point3) -> Self {
        Self {
            x: point.x,
            z: point.z,
            y: point.y,
        }
    }
}

impl std::error::Error for OffBoard {}

impl std::fmt::Display for OffBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "coordinate ({}, {}, {}) is outside the 9x9x3 board",
            self.x, self.z, self.y
        )
    }
}

/// The error type for [`Player::drop_piece`](crate::Player::drop_piece).
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalDrop {
    NoSuchPiece { index: usize },
    AlreadyPlaced { index: usize },
    OffBoard(OffBoard),
    ColumnFull { x: i8, z: i8 },
}

impl std::error::Error for IllegalDrop {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalDrop::OffBoard(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalDrop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalDrop::NoSuchPiece { index } => {
                write!(f, "piece index {} names no piece in this player's store", index)
            }
            IllegalDrop::AlreadyPlaced { index } => {
                write!(f, "the piece at index {} is already on the board", index)
            }
            IllegalDrop::OffBoard(_) => write!(f, "the drop target is off the board"),
            IllegalDrop::ColumnFull { x, z } => {
                write!(f, "column ({}, {}) has no open tier", x, z)
            }
        }
    }
}

/// The error type for [`Player::move_piece`](crate::Player::move_piece).
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalMove {
    NoSuchPiece { index: usize },
    NotOnBoard { index: usize },
    OffBoard(OffBoard),
    OccupiedByOwnPiece { point: Point3 },
    OccupiedByOpponent { point: Point3 },
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::OffBoard(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::NoSuchPiece { index } => {
                write!(f, "piece index {} names no piece in this player's store", index)
            }
            IllegalMove::NotOnBoard { index } => {
                write!(f, "the piece at index {} is not on the board", index)
            }
            IllegalMove::OffBoard(_) => write!(f, "the destination is off the board"),
            IllegalMove::OccupiedByOwnPiece { point } => write!(
                f,
                "destination ({}, {}, {}) holds one of the player's own pieces",
                point.x, point.z, point.y
            ),
            IllegalMove::OccupiedByOpponent { point } => write!(
                f,
                "destination ({}, {}, {}) holds an opponent piece that has not been captured",
                point.x, point.z, point.y
            ),
        }
    }
}

/// The error type for [`Player::transfer`](crate::Player::transfer).
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalTransfer {
    NoSuchPiece { index: usize },
    StillOnBoard { index: usize },
}

impl std::error::Error for IllegalTransfer {}

impl std::fmt::Display for IllegalTransfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalTransfer::NoSuchPiece { index } => {
                write!(f, "piece index {} names no piece in this player's store", index)
            }
            IllegalTransfer::StillOnBoard { index } => {
                write!(f, "the piece at index {} is still bound to the board", index)
            }
        }
    }
}

/// The error type for one engine action.
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalAction {
    /// The action is gated to another phase.
    WrongPhase { phase: Phase },
    /// The placement rules rejected the drop.
    NotPlaceable,
    /// The movement rules rejected the move.
    NotMovable,
    Drop(IllegalDrop),
    Move(IllegalMove),
    Transfer(IllegalTransfer),
}

impl std::error::Error for IllegalAction {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalAction::Drop(err) => Some(err),
            IllegalAction::Move(err) => Some(err),
            IllegalAction::Transfer(err) => Some(err),
            _ => None,
        }
    }
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Standby => "standby",
        Phase::Placement => "placement",
        Phase::Running => "running",
    }
}

impl std::fmt::Display for IllegalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalAction::WrongPhase { phase } => {
                write!(f, "the action is not legal in the {} phase", phase_name(*phase))
            }
            IllegalAction::NotPlaceable => write!(f, "the placement rules reject this drop"),
            IllegalAction::NotMovable => write!(f, "the movement rules reject this move"),
            IllegalAction::Drop(_) => write!(f, "could not drop the piece"),
            IllegalAction::Move(_) => write!(f, "could not move the piece"),
            IllegalAction::Transfer(_) => write!(f, "could not hand over the captured piece"),
        }
    }
}

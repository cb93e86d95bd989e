//! Stateless legality predicates over board, player and phase.
//!
//! Every predicate returns a definite boolean and mutates nothing;
//! rejection is expected user input, not a fault. Structural errors (bad
//! indices, bad coordinates) also come out as `false` here — the mutating
//! operations report them precisely.

use crate::{Board, Head, Offset, Phase, Player, Point3, BOARD_DEPTH, PLACEMENT_ROWS, TIER_COUNT};

/// Whether the player may drop the piece at `index` onto the column of
/// `point` (absolute coordinates) in the given phase.
pub fn valid_drop(
    board: &Board,
    player: &Player,
    index: usize,
    point: Point3,
    phase: Phase,
) -> bool {
    let Some(owned) = player.piece(index) else {
        return false;
    };
    if owned.is_placed() {
        return false;
    }
    let column = point.column();
    if !column.in_bounds() {
        return false;
    }
    match phase {
        Phase::Standby => false,
        Phase::Placement => {
            let depth = player.orientation().to_relative(point).z;
            if !(0..PLACEMENT_ROWS).contains(&depth) {
                return false;
            }
            if owned.piece.head() == Head::Soldier
                && own_soldier_in_file(board, player, column.x)
            {
                return false;
            }
            matches!(board.has_open_tier(column), Ok(true))
        }
        Phase::Running => {
            // Reinforcement drops share the running-phase legality layer
            // with moves; until that layer exists only the structural
            // screens apply.
            matches!(board.has_open_tier(column), Ok(true))
        }
    }
}

/// Whether the player may move the piece at `index` by `offset` in the
/// given phase.
///
/// This is the running-phase extension point: moveset membership, path
/// blocking and check detection belong here and are not implemented yet.
/// Today the predicate gates on the phase and applies the structural
/// screens only.
pub fn valid_move(
    board: &Board,
    player: &Player,
    index: usize,
    offset: Offset,
    phase: Phase,
) -> bool {
    if phase != Phase::Running {
        return false;
    }
    let Some(owned) = player.piece(index) else {
        return false;
    };
    let Some(from) = owned.position() else {
        return false;
    };
    let to = from.offset_by(player.orientation().orient(offset));
    if !to.in_bounds() {
        return false;
    }
    // TODO: check the offset against the active face's move patterns, walk
    // the path for blockers, and detect self-check.
    match board.get(to) {
        Ok(Some(other)) => other.owner != player.seat(),
        Ok(None) => true,
        Err(_) => false,
    }
}

// A Soldier of the acting player somewhere in the file `x`, within that
// player's placement band, at any tier. Opponent Soldiers do not count.
fn own_soldier_in_file(board: &Board, player: &Player, x: i8) -> bool {
    for z in 0..BOARD_DEPTH {
        let depth = player.orientation().to_relative(Point3::new(x, z, 0)).z;
        if !(0..PLACEMENT_ROWS).contains(&depth) {
            continue;
        }
        for y in 0..TIER_COUNT {
            let Ok(Some(slot)) = board.get(Point3::new(x, z, y)) else {
                continue;
            };
            if slot.owner != player.seat() {
                continue;
            }
            if let Some(owned) = player.piece(slot.index) {
                if owned.piece.head() == Head::Soldier {
                    return true;
                }
            }
        }
    }
    false
}

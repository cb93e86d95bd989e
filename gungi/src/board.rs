use serde::{Deserialize, Serialize};

use crate::{Column, OffBoard, Point3, Seat, Tier, BOARD_DEPTH, BOARD_WIDTH, TIER_COUNT};

/// Total number of board slots.
pub const SLOT_COUNT: usize =
    BOARD_WIDTH as usize * BOARD_DEPTH as usize * TIER_COUNT as usize;

/// Reference from a board slot to a piece in one player's store.
///
/// The board never owns pieces; it publishes who stands where.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRef {
    pub owner: Seat,
    pub index: usize,
}

/// The 9×9×3 playing field.
///
/// Every slot holds either a [`PieceRef`] or nothing. An occupied slot
/// corresponds to exactly one bound piece whose recorded position equals
/// the slot's coordinate; the mutating operations on
/// [`Player`](crate::Player) keep the two in sync.
#[derive(Clone, Debug)]
pub struct Board {
    slots: [Option<PieceRef>; SLOT_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            slots: [None; SLOT_COUNT],
        }
    }

    /// Linearizes a point; the single formula that point and flat indexing
    /// share.
    pub fn flat_index(point: Point3) -> Result<usize, OffBoard> {
        if !point.in_bounds() {
            return Err(OffBoard::at(point));
        }
        Ok((point.y as usize * BOARD_DEPTH as usize + point.z as usize) * BOARD_WIDTH as usize
            + point.x as usize)
    }

    /// Inverse of [`Board::flat_index`].
    pub fn point_at(flat: usize) -> Option<Point3> {
        if flat >= SLOT_COUNT {
            return None;
        }
        let x = (flat % BOARD_WIDTH as usize) as i8;
        let z = ((flat / BOARD_WIDTH as usize) % BOARD_DEPTH as usize) as i8;
        let y = (flat / (BOARD_WIDTH as usize * BOARD_DEPTH as usize)) as i8;
        Some(Point3::new(x, z, y))
    }

    pub fn get(&self, point: Point3) -> Result<Option<PieceRef>, OffBoard> {
        Ok(self.slots[Self::flat_index(point)?])
    }

    pub fn set(&mut self, point: Point3, piece: Option<PieceRef>) -> Result<(), OffBoard> {
        self.slots[Self::flat_index(point)?] = piece;
        Ok(())
    }

    /// The first open tier of a column, bottom up, or `None` when the
    /// column is full.
    pub fn lowest_open_tier(&self, column: Column) -> Result<Option<Tier>, OffBoard> {
        if !column.in_bounds() {
            return Err(OffBoard::at(column.at_tier(Tier::First)));
        }
        for tier in Tier::ALL {
            if self.get(column.at_tier(tier))?.is_none() {
                return Ok(Some(tier));
            }
        }
        Ok(None)
    }

    pub fn has_open_tier(&self, column: Column) -> Result<bool, OffBoard> {
        Ok(self.lowest_open_tier(column)?.is_some())
    }

    /// All occupied slots, for read-only consumers such as a display.
    pub fn pieces(&self) -> impl Iterator<Item = (Point3, PieceRef)> + '_ {
        self.slots.iter().enumerate().filter_map(|(flat, slot)| {
            let piece = (*slot)?;
            let point = Self::point_at(flat)?;
            Some((point, piece))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

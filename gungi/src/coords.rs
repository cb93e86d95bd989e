use serde::{Deserialize, Serialize};

/// Number of files (the `x` axis).
pub const BOARD_WIDTH: i8 = 9;
/// Number of rows (the `z` axis).
pub const BOARD_DEPTH: i8 = 9;
/// Number of stacking levels per column (the `y` axis).
pub const TIER_COUNT: i8 = 3;
/// Rows from a player's near edge in which placement drops are legal.
pub const PLACEMENT_ROWS: i8 = 3;

/// A position on the board: file `x`, row `z`, stacking level `y`.
///
/// A piece that is in a player's hand has no position at all
/// (`Option<Point3>` rather than a reserved coordinate).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point3 {
    pub x: i8,
    pub z: i8,
    pub y: i8,
}

impl Point3 {
    pub const fn new(x: i8, z: i8, y: i8) -> Self {
        Self { x, z, y }
    }

    /// Projects the point down onto its column.
    pub fn column(self) -> Column {
        Column {
            x: self.x,
            z: self.z,
        }
    }

    pub fn in_bounds(self) -> bool {
        (0..BOARD_WIDTH).contains(&self.x)
            && (0..BOARD_DEPTH).contains(&self.z)
            && (0..TIER_COUNT).contains(&self.y)
    }

    /// The point reached by travelling `offset` in the plane. The tier is
    /// kept; the result may lie outside the board.
    pub fn offset_by(self, offset: Offset) -> Point3 {
        Point3::new(self.x + offset.dx, self.z + offset.dz, self.y)
    }
}

/// A column of the board: the 2-D projection of a [`Point3`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    pub x: i8,
    pub z: i8,
}

impl Column {
    pub const fn new(x: i8, z: i8) -> Self {
        Self { x, z }
    }

    /// Lifts the column back into three dimensions at the given tier.
    pub fn at_tier(self, tier: Tier) -> Point3 {
        Point3::new(self.x, self.z, tier.level())
    }

    pub fn in_bounds(self) -> bool {
        (0..BOARD_WIDTH).contains(&self.x) && (0..BOARD_DEPTH).contains(&self.z)
    }
}

/// A planar move vector in a player's own frame: `dz > 0` is toward the
/// opponent's edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    pub dx: i8,
    pub dz: i8,
}

impl Offset {
    pub const fn new(dx: i8, dz: i8) -> Self {
        Self { dx, dz }
    }
}

/// One of three stacking levels at a column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    First,
    Second,
    Third,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::First, Tier::Second, Tier::Third];

    /// The `y` coordinate of this tier.
    pub fn level(self) -> i8 {
        match self {
            Tier::First => 0,
            Tier::Second => 1,
            Tier::Third => 2,
        }
    }

    pub fn from_level(level: i8) -> Option<Tier> {
        match level {
            0 => Some(Tier::First),
            1 => Some(Tier::Second),
            2 => Some(Tier::Third),
            _ => None,
        }
    }
}

/// Which board edge a player treats as near.
///
/// All player-facing coordinates are relative (row 0 is the player's own
/// near edge); the board stores absolute coordinates, which coincide with
/// the positive player's relative ones.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Positive,
    Negative,
}

impl Orientation {
    /// Converts a relative point to an absolute one. Negative mirrors both
    /// planar axes (`x ↦ 8 − x`, `z ↦ 8 − z`); the tier is unchanged.
    /// The mapping is its own inverse, so it stays on the grid.
    pub fn to_absolute(self, point: Point3) -> Point3 {
        match self {
            Orientation::Positive => point,
            Orientation::Negative => Point3::new(
                BOARD_WIDTH - 1 - point.x,
                BOARD_DEPTH - 1 - point.z,
                point.y,
            ),
        }
    }

    /// Converts an absolute point back into this player's frame.
    pub fn to_relative(self, point: Point3) -> Point3 {
        // Mirroring is an involution, so the same map goes both ways.
        self.to_absolute(point)
    }

    /// Mirrors a move vector into the absolute frame. A direction carries
    /// no edge offset, so this is plain negation.
    pub fn orient(self, offset: Offset) -> Offset {
        match self {
            Orientation::Positive => offset,
            Orientation::Negative => Offset::new(-offset.dx, -offset.dz),
        }
    }
}

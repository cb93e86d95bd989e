//! The rank and movement catalog.
//!
//! Pure data: for every face identity and tier there is a fixed slice of
//! movement patterns, and for every identity a combat rank. Directions are
//! in the owning player's frame; north faces the opponent. A pattern is a
//! single step, optionally chained with one follow-up step for the
//! jumping pieces.

use serde::{Deserialize, Serialize};

use crate::{Face, Head, Offset, Piece, Tail, Tier};

/// Eight compass directions in the owning player's frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The unit offset of this direction.
    pub fn offset(self) -> Offset {
        match self {
            Direction::North => Offset::new(0, 1),
            Direction::NorthEast => Offset::new(1, 1),
            Direction::East => Offset::new(1, 0),
            Direction::SouthEast => Offset::new(1, -1),
            Direction::South => Offset::new(0, -1),
            Direction::SouthWest => Offset::new(-1, -1),
            Direction::West => Offset::new(-1, 0),
            Direction::NorthWest => Offset::new(-1, 1),
        }
    }
}

/// How far a step may travel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reach {
    /// Up to this many squares, at least one.
    Steps(u8),
    /// Any number of squares.
    Slide,
}

/// One directed step of a movement pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStep {
    pub direction: Direction,
    pub reach: Reach,
}

/// A movement pattern: one step, optionally chained with a second.
///
/// The chained form covers the jumping pieces; there is never a third
/// link, so patterns are plain values rather than a linked structure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePattern {
    pub first: MoveStep,
    pub then: Option<MoveStep>,
}

const fn step(direction: Direction, count: u8) -> MovePattern {
    MovePattern {
        first: MoveStep {
            direction,
            reach: Reach::Steps(count),
        },
        then: None,
    }
}

const fn slide(direction: Direction) -> MovePattern {
    MovePattern {
        first: MoveStep {
            direction,
            reach: Reach::Slide,
        },
        then: None,
    }
}

const fn hop(first: Direction, then: Direction) -> MovePattern {
    MovePattern {
        first: MoveStep {
            direction: first,
            reach: Reach::Steps(1),
        },
        then: Some(MoveStep {
            direction: then,
            reach: Reach::Steps(1),
        }),
    }
}

use Direction::{East, North, NorthEast, NorthWest, South, SouthEast, SouthWest, West};

/// One step in every direction; shared by every piece that moves like the
/// commander somewhere in its table.
const KING_RING: &[MovePattern] = &[
    step(North, 1),
    step(NorthEast, 1),
    step(East, 1),
    step(SouthEast, 1),
    step(South, 1),
    step(SouthWest, 1),
    step(West, 1),
    step(NorthWest, 1),
];

const GOLD_RING: &[MovePattern] = &[
    step(North, 1),
    step(NorthEast, 1),
    step(NorthWest, 1),
    step(East, 1),
    step(West, 1),
    step(South, 1),
];

const CAPTAIN_T2: &[MovePattern] = &[
    step(North, 2),
    step(NorthEast, 2),
    step(NorthWest, 2),
    step(East, 1),
    step(West, 1),
    step(South, 1),
];
const CAPTAIN_T3: &[MovePattern] = &[
    slide(North),
    step(NorthEast, 1),
    step(East, 1),
    step(SouthEast, 1),
    step(South, 1),
    step(SouthWest, 1),
    step(West, 1),
    step(NorthWest, 1),
];

const SAMURAI_T1: &[MovePattern] = &[step(North, 1), step(NorthEast, 1), step(NorthWest, 1)];
const SAMURAI_T2: &[MovePattern] = &[step(North, 2), step(NorthEast, 1), step(NorthWest, 1)];
const SAMURAI_T3: &[MovePattern] = &[step(North, 2), step(NorthEast, 2), step(NorthWest, 2)];

const NINJA_T1: &[MovePattern] = &[hop(North, NorthEast), hop(North, NorthWest)];
const NINJA_T2: &[MovePattern] = &[
    hop(North, NorthEast),
    hop(North, NorthWest),
    hop(East, NorthEast),
    hop(West, NorthWest),
];
const NINJA_T3: &[MovePattern] = &[
    hop(North, NorthEast),
    hop(North, NorthWest),
    hop(East, NorthEast),
    hop(West, NorthWest),
    hop(South, SouthEast),
    hop(South, SouthWest),
];

const HIDDEN_DRAGON_T1: &[MovePattern] = &[slide(North), slide(East), slide(South), slide(West)];
const HIDDEN_DRAGON_T2: &[MovePattern] = &[
    step(North, 1),
    step(East, 1),
    step(South, 1),
    step(West, 1),
];

const PRODIGY_T1: &[MovePattern] = &[
    slide(NorthEast),
    slide(NorthWest),
    slide(SouthEast),
    slide(SouthWest),
];
const PRODIGY_T2: &[MovePattern] = &[
    step(NorthEast, 1),
    step(NorthWest, 1),
    step(SouthEast, 1),
    step(SouthWest, 1),
];

const ARCHER_T1: &[MovePattern] = &[step(North, 2), step(East, 1), step(West, 1)];
const ARCHER_T2: &[MovePattern] = &[step(North, 2), step(NorthEast, 2), step(NorthWest, 2)];
const ARCHER_T3: &[MovePattern] = &[
    step(North, 2),
    step(NorthEast, 2),
    step(NorthWest, 2),
    step(East, 2),
    step(West, 2),
];

const SOLDIER_T1: &[MovePattern] = &[step(North, 1)];
const SOLDIER_T2: &[MovePattern] = &[step(North, 1), step(NorthEast, 1), step(NorthWest, 1)];
const SOLDIER_T3: &[MovePattern] = &[step(North, 2), step(East, 1), step(West, 1)];

const DRAGON_KING_T1: &[MovePattern] = &[
    slide(North),
    slide(East),
    slide(South),
    slide(West),
    step(NorthEast, 1),
    step(SouthEast, 1),
    step(SouthWest, 1),
    step(NorthWest, 1),
];
const DRAGON_KING_T2: &[MovePattern] = &[
    step(North, 2),
    step(East, 2),
    step(South, 2),
    step(West, 2),
    step(NorthEast, 1),
    step(SouthEast, 1),
    step(SouthWest, 1),
    step(NorthWest, 1),
];

const LANCE_T1: &[MovePattern] = &[slide(North)];
const LANCE_T2: &[MovePattern] = &[step(North, 2)];
const LANCE_T3: &[MovePattern] = &[step(North, 1), step(NorthEast, 1), step(NorthWest, 1)];

const PHOENIX_T1: &[MovePattern] = &[
    slide(North),
    slide(NorthEast),
    slide(East),
    slide(SouthEast),
    slide(South),
    slide(SouthWest),
    slide(West),
    slide(NorthWest),
];
const PHOENIX_T2: &[MovePattern] = &[
    slide(NorthEast),
    slide(NorthWest),
    step(North, 1),
    step(East, 1),
    step(South, 1),
    step(West, 1),
];

const JOUNIN_T1: &[MovePattern] = &[hop(North, NorthEast), hop(North, NorthWest), step(South, 1)];
const JOUNIN_T2: &[MovePattern] = &[
    hop(North, NorthEast),
    hop(North, NorthWest),
    hop(East, NorthEast),
    hop(West, NorthWest),
    step(South, 1),
];
const JOUNIN_T3: &[MovePattern] = &[
    hop(North, NorthEast),
    hop(North, NorthWest),
    hop(East, NorthEast),
    hop(West, NorthWest),
    hop(South, SouthEast),
    hop(South, SouthWest),
    step(South, 1),
];

const ARROW_T1: &[MovePattern] = &[step(North, 1), step(SouthEast, 1), step(SouthWest, 1)];
const ARROW_T2: &[MovePattern] = &[step(North, 2), step(SouthEast, 1), step(SouthWest, 1)];
const ARROW_T3: &[MovePattern] = &[
    step(North, 2),
    step(East, 1),
    step(West, 1),
    step(SouthEast, 1),
    step(SouthWest, 1),
];

const PIKE_T1: &[MovePattern] = &[step(North, 2), step(South, 1)];
const PIKE_T2: &[MovePattern] = &[step(North, 3), step(South, 1)];
const PIKE_T3: &[MovePattern] = &[
    step(North, 3),
    step(East, 1),
    step(West, 1),
    step(South, 1),
];

const PISTOL_T1: &[MovePattern] = &[
    step(NorthEast, 1),
    step(SouthEast, 1),
    step(SouthWest, 1),
    step(NorthWest, 1),
];
const PISTOL_T2: &[MovePattern] = &[
    step(North, 1),
    step(East, 1),
    step(South, 1),
    step(West, 1),
];

const SILVER_T1: &[MovePattern] = &[
    step(North, 1),
    step(NorthEast, 1),
    step(NorthWest, 1),
    step(SouthEast, 1),
    step(SouthWest, 1),
];

const BRONZE_T1: &[MovePattern] = &[step(East, 1), step(West, 1)];
const BRONZE_T2: &[MovePattern] = &[step(North, 1), step(East, 1), step(West, 1)];
const BRONZE_T3: &[MovePattern] = &[
    step(North, 1),
    step(East, 1),
    step(West, 1),
    step(South, 1),
];

/// The move patterns of a head identity at the given tier.
pub fn head_moves(head: Head, tier: Tier) -> &'static [MovePattern] {
    match (head, tier) {
        (Head::Commander, _) => KING_RING,
        (Head::Captain, Tier::First) => KING_RING,
        (Head::Captain, Tier::Second) => CAPTAIN_T2,
        (Head::Captain, Tier::Third) => CAPTAIN_T3,
        (Head::Samurai, Tier::First) => SAMURAI_T1,
        (Head::Samurai, Tier::Second) => SAMURAI_T2,
        (Head::Samurai, Tier::Third) => SAMURAI_T3,
        (Head::Ninja, Tier::First) => NINJA_T1,
        (Head::Ninja, Tier::Second) => NINJA_T2,
        (Head::Ninja, Tier::Third) => NINJA_T3,
        // TODO: fill in the catapult and fortress tables once their rules
        // are settled; both stand immobile until then.
        (Head::Catapult, _) | (Head::Fortress, _) => &[],
        (Head::HiddenDragon, Tier::First) => HIDDEN_DRAGON_T1,
        (Head::HiddenDragon, Tier::Second) => HIDDEN_DRAGON_T2,
        (Head::HiddenDragon, Tier::Third) => KING_RING,
        (Head::Prodigy, Tier::First) => PRODIGY_T1,
        (Head::Prodigy, Tier::Second) => PRODIGY_T2,
        (Head::Prodigy, Tier::Third) => KING_RING,
        (Head::Archer, Tier::First) => ARCHER_T1,
        (Head::Archer, Tier::Second) => ARCHER_T2,
        (Head::Archer, Tier::Third) => ARCHER_T3,
        (Head::Soldier, Tier::First) => SOLDIER_T1,
        (Head::Soldier, Tier::Second) => SOLDIER_T2,
        (Head::Soldier, Tier::Third) => SOLDIER_T3,
    }
}

/// The move patterns of a tail identity at the given tier.
pub fn tail_moves(tail: Tail, tier: Tier) -> &'static [MovePattern] {
    match (tail, tier) {
        (Tail::DragonKing, Tier::First) => DRAGON_KING_T1,
        (Tail::DragonKing, Tier::Second) => DRAGON_KING_T2,
        (Tail::DragonKing, Tier::Third) => KING_RING,
        (Tail::Lance, Tier::First) => LANCE_T1,
        (Tail::Lance, Tier::Second) => LANCE_T2,
        (Tail::Lance, Tier::Third) => LANCE_T3,
        (Tail::Phoenix, Tier::First) => PHOENIX_T1,
        (Tail::Phoenix, Tier::Second) => PHOENIX_T2,
        (Tail::Phoenix, Tier::Third) => KING_RING,
        (Tail::Jounin, Tier::First) => JOUNIN_T1,
        (Tail::Jounin, Tier::Second) => JOUNIN_T2,
        (Tail::Jounin, Tier::Third) => JOUNIN_T3,
        (Tail::Arrow, Tier::First) => ARROW_T1,
        (Tail::Arrow, Tier::Second) => ARROW_T2,
        (Tail::Arrow, Tier::Third) => ARROW_T3,
        (Tail::Pike, Tier::First) => PIKE_T1,
        (Tail::Pike, Tier::Second) => PIKE_T2,
        (Tail::Pike, Tier::Third) => PIKE_T3,
        (Tail::Gold, _) => GOLD_RING,
        (Tail::Pistol, Tier::First) => PISTOL_T1,
        (Tail::Pistol, Tier::Second) => PISTOL_T2,
        (Tail::Pistol, Tier::Third) => KING_RING,
        (Tail::Silver, Tier::First | Tier::Second) => SILVER_T1,
        (Tail::Silver, Tier::Third) => GOLD_RING,
        (Tail::Bronze, Tier::First) => BRONZE_T1,
        (Tail::Bronze, Tier::Second) => BRONZE_T2,
        (Tail::Bronze, Tier::Third) => BRONZE_T3,
    }
}

impl Head {
    /// Combat rank, consumed by capture adjudication. The commander has
    /// none; its capture decides the game.
    pub fn rank(self) -> Option<u8> {
        match self {
            Head::Commander => None,
            Head::Captain => Some(12),
            Head::Samurai => Some(10),
            Head::Ninja | Head::HiddenDragon => Some(8),
            Head::Catapult | Head::Fortress => Some(6),
            Head::Prodigy | Head::Archer => Some(4),
            Head::Soldier => Some(2),
        }
    }
}

impl Tail {
    /// Combat rank, consumed by capture adjudication.
    pub fn rank(self) -> u8 {
        match self {
            Tail::DragonKing => 12,
            Tail::Lance | Tail::Phoenix => 10,
            Tail::Jounin => 8,
            Tail::Arrow | Tail::Pike | Tail::Gold => 6,
            Tail::Pistol | Tail::Silver => 4,
            Tail::Bronze => 2,
        }
    }
}

impl Piece {
    /// The move patterns of the active face at the given tier.
    pub fn moves(&self, tier: Tier) -> &'static [MovePattern] {
        match self.active_face() {
            Face::Head => head_moves(self.head(), tier),
            Face::Tail => match self.tail() {
                Some(tail) => tail_moves(tail, tier),
                None => &[],
            },
        }
    }

    /// Combat rank of the active face.
    pub fn rank(&self) -> Option<u8> {
        match self.active_face() {
            Face::Head => self.head().rank(),
            Face::Tail => self.tail().map(Tail::rank),
        }
    }
}

/// The identity a catalog record belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Identity {
    Head(Head),
    Tail(Tail),
}

/// One enumerable catalog record, keyed by identity and tier, so an
/// external component can persist the move tables without reaching into
/// the catalog.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct CatalogEntry {
    pub identity: Identity,
    pub tier: Tier,
    pub patterns: &'static [MovePattern],
}

/// Enumerates every (identity, tier) record of the catalog.
pub fn entries() -> impl Iterator<Item = CatalogEntry> {
    let heads = Head::ALL.iter().flat_map(|&head| {
        Tier::ALL.iter().map(move |&tier| CatalogEntry {
            identity: Identity::Head(head),
            tier,
            patterns: head_moves(head, tier),
        })
    });
    let tails = Tail::ALL.iter().flat_map(|&tail| {
        Tier::ALL.iter().map(move |&tier| CatalogEntry {
            identity: Identity::Tail(tail),
            tier,
            patterns: tail_moves(tail, tier),
        })
    });
    heads.chain(tails)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_ranks() {
        let expected = [
            (Head::Commander, None),
            (Head::Captain, Some(12)),
            (Head::Samurai, Some(10)),
            (Head::Ninja, Some(8)),
            (Head::HiddenDragon, Some(8)),
            (Head::Catapult, Some(6)),
            (Head::Fortress, Some(6)),
            (Head::Prodigy, Some(4)),
            (Head::Archer, Some(4)),
            (Head::Soldier, Some(2)),
        ];
        for (head, rank) in expected {
            assert_eq!(head.rank(), rank, "{:?}", head);
        }
    }

    #[test]
    fn tail_ranks() {
        let expected = [
            (Tail::DragonKing, 12),
            (Tail::Lance, 10),
            (Tail::Phoenix, 10),
            (Tail::Jounin, 8),
            (Tail::Arrow, 6),
            (Tail::Pike, 6),
            (Tail::Gold, 6),
            (Tail::Pistol, 4),
            (Tail::Silver, 4),
            (Tail::Bronze, 2),
        ];
        for (tail, rank) in expected {
            assert_eq!(tail.rank(), rank, "{:?}", tail);
        }
    }

    #[test]
    fn catapult_and_fortress_tables_are_open() {
        for tier in Tier::ALL {
            assert!(head_moves(Head::Catapult, tier).is_empty());
            assert!(head_moves(Head::Fortress, tier).is_empty());
        }
    }

    #[test]
    fn every_other_identity_can_move_at_every_tier() {
        for head in Head::ALL {
            if matches!(head, Head::Catapult | Head::Fortress) {
                continue;
            }
            for tier in Tier::ALL {
                assert!(!head_moves(head, tier).is_empty(), "{:?} {:?}", head, tier);
            }
        }
        for tail in Tail::ALL {
            for tier in Tier::ALL {
                assert!(!tail_moves(tail, tier).is_empty(), "{:?} {:?}", tail, tier);
            }
        }
    }

    #[test]
    fn patterns_are_well_formed() {
        // Bounded reaches travel at least one square; a chained follow-up
        // never slides.
        for entry in entries() {
            for pattern in entry.patterns {
                if let Reach::Steps(count) = pattern.first.reach {
                    assert!(count >= 1);
                }
                if let Some(then) = pattern.then {
                    assert!(matches!(then.reach, Reach::Steps(_)));
                }
            }
        }
    }

    #[test]
    fn catalog_enumerates_every_identity_and_tier() {
        let records: Vec<CatalogEntry> = entries().collect();
        assert_eq!(records.len(), 60);
        for head in Head::ALL {
            for tier in Tier::ALL {
                assert!(records
                    .iter()
                    .any(|e| e.identity == Identity::Head(head) && e.tier == tier));
            }
        }
        for tail in Tail::ALL {
            for tier in Tier::ALL {
                assert!(records
                    .iter()
                    .any(|e| e.identity == Identity::Tail(tail) && e.tier == tier));
            }
        }
    }

    #[test]
    fn directions_are_distinct_unit_offsets() {
        let mut seen = Vec::new();
        for direction in Direction::ALL {
            let offset = direction.offset();
            assert!((-1..=1).contains(&offset.dx));
            assert!((-1..=1).contains(&offset.dz));
            assert!(offset != Offset::new(0, 0));
            assert!(!seen.contains(&offset));
            seen.push(offset);
        }
        assert_eq!(Direction::North.offset(), Offset::new(0, 1));
    }

    #[test]
    fn soldier_starts_with_a_single_forward_step() {
        assert_eq!(
            head_moves(Head::Soldier, Tier::First),
            &[MovePattern {
                first: MoveStep {
                    direction: Direction::North,
                    reach: Reach::Steps(1),
                },
                then: None,
            }]
        );
    }
}

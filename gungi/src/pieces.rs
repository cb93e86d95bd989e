use serde::{Deserialize, Serialize};

/// One of the two sides of the table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub fn opponent(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

/// The front-face identity of a piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Head {
    Commander,
    Captain,
    Samurai,
    Ninja,
    Catapult,
    Fortress,
    HiddenDragon,
    Prodigy,
    Archer,
    Soldier,
}

impl Head {
    pub const ALL: [Head; 10] = [
        Head::Commander,
        Head::Captain,
        Head::Samurai,
        Head::Ninja,
        Head::Catapult,
        Head::Fortress,
        Head::HiddenDragon,
        Head::Prodigy,
        Head::Archer,
        Head::Soldier,
    ];
}

/// The back-face identity of a piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tail {
    DragonKing,
    Lance,
    Phoenix,
    Jounin,
    Arrow,
    Pike,
    Gold,
    Pistol,
    Silver,
    Bronze,
}

impl Tail {
    pub const ALL: [Tail; 10] = [
        Tail::DragonKing,
        Tail::Lance,
        Tail::Phoenix,
        Tail::Jounin,
        Tail::Arrow,
        Tail::Pike,
        Tail::Gold,
        Tail::Pistol,
        Tail::Silver,
        Tail::Bronze,
    ];
}

/// Which face of a piece is currently up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    Head,
    Tail,
}

/// A two-faced game piece.
///
/// The identities are fixed for the piece's lifetime; only the active face
/// changes. The commander has no tail face, so flipping it activates a face
/// with no rank and no moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    head: Head,
    tail: Option<Tail>,
    active: Face,
}

impl Piece {
    pub fn new(head: Head, tail: Option<Tail>) -> Self {
        Self {
            head,
            tail,
            active: Face::Head,
        }
    }

    pub fn head(&self) -> Head {
        self.head
    }

    pub fn tail(&self) -> Option<Tail> {
        self.tail
    }

    pub fn active_face(&self) -> Face {
        self.active
    }

    /// Turns the piece over.
    pub fn flip(&mut self) {
        self.active = match self.active {
            Face::Head => Face::Tail,
            Face::Tail => Face::Head,
        };
    }

    // Captured pieces enter their new owner's hand head side up.
    pub(crate) fn turn_head_up(&mut self) {
        self.active = Face::Head;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tier;

    #[test]
    fn opponent_is_an_involution() {
        assert_eq!(Seat::One.opponent(), Seat::Two);
        assert_eq!(Seat::Two.opponent().opponent(), Seat::Two);
    }

    #[test]
    fn flip_toggles_the_active_face() {
        let mut piece = Piece::new(Head::Archer, Some(Tail::Arrow));
        assert_eq!(piece.active_face(), Face::Head);
        piece.flip();
        assert_eq!(piece.active_face(), Face::Tail);
        piece.flip();
        assert_eq!(piece.active_face(), Face::Head);
    }

    #[test]
    fn flipped_commander_has_no_rank_and_no_moves() {
        let mut commander = Piece::new(Head::Commander, None);
        piece_is_live(&commander);
        commander.flip();
        assert_eq!(commander.rank(), None);
        for tier in Tier::ALL {
            assert!(commander.moves(tier).is_empty());
        }
    }

    fn piece_is_live(piece: &Piece) {
        assert!(!piece.moves(Tier::First).is_empty());
    }
}

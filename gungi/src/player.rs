use crate::{
    Board, Head, IllegalDrop, IllegalMove, IllegalTransfer, Offset, Orientation, Piece, PieceRef,
    Point3, Seat, Tail,
};

/// The standard piece set, as (head, tail, count) triples. 23 pieces.
pub const STANDARD_SET: [(Head, Option<Tail>, usize); 12] = [
    (Head::Commander, None, 1),
    (Head::Captain, Some(Tail::Pistol), 2),
    (Head::Samurai, Some(Tail::Pike), 2),
    (Head::Ninja, Some(Tail::Jounin), 3),
    (Head::Catapult, Some(Tail::Lance), 1),
    (Head::Fortress, Some(Tail::Lance), 1),
    (Head::HiddenDragon, Some(Tail::DragonKing), 1),
    (Head::Prodigy, Some(Tail::Phoenix), 1),
    (Head::Archer, Some(Tail::Arrow), 2),
    (Head::Soldier, Some(Tail::Gold), 1),
    (Head::Soldier, Some(Tail::Silver), 1),
    (Head::Soldier, Some(Tail::Bronze), 7),
];

/// A piece together with its board binding.
///
/// `position` is `None` while the piece is in its owner's hand.
#[derive(Clone, Debug)]
pub struct OwnedPiece {
    pub piece: Piece,
    position: Option<Point3>,
}

impl OwnedPiece {
    fn in_hand(piece: Piece) -> Self {
        Self {
            piece,
            position: None,
        }
    }

    pub fn position(&self) -> Option<Point3> {
        self.position
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }
}

/// One side's pieces and orientation.
///
/// The store starts with the 23 pieces of [`STANDARD_SET`] and is indexed
/// by the `index` the board publishes in its [`PieceRef`]s. A slot is only
/// ever vacated by [`Player::transfer`], never reused, so indices held by
/// the board stay valid for the whole game; captured pieces are appended
/// to the receiving player's store.
#[derive(Clone, Debug)]
pub struct Player {
    seat: Seat,
    orientation: Orientation,
    pieces: Vec<Option<OwnedPiece>>,
}

impl Player {
    pub fn new(seat: Seat, orientation: Orientation) -> Self {
        let mut pieces = Vec::with_capacity(23);
        for (head, tail, count) in STANDARD_SET {
            for _ in 0..count {
                pieces.push(Some(OwnedPiece::in_hand(Piece::new(head, tail))));
            }
        }
        Self {
            seat,
            orientation,
            pieces,
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn piece(&self, index: usize) -> Option<&OwnedPiece> {
        self.pieces.get(index)?.as_ref()
    }

    pub fn piece_mut(&mut self, index: usize) -> Option<&mut OwnedPiece> {
        self.pieces.get_mut(index)?.as_mut()
    }

    /// All pieces currently owned by this player, with their indices.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, &OwnedPiece)> {
        self.pieces
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| Some((index, slot.as_ref()?)))
    }

    /// The unplaced part of the store.
    pub fn hand(&self) -> impl Iterator<Item = (usize, &OwnedPiece)> {
        self.pieces().filter(|(_, piece)| !piece.is_placed())
    }

    /// Drops an unplaced piece onto the board.
    ///
    /// The target is in this player's own frame; its tier component is
    /// ignored and the piece binds at the lowest open tier of the target
    /// column. On success the new position is returned and published into
    /// the board.
    pub fn drop_piece(
        &mut self,
        board: &mut Board,
        index: usize,
        target: Point3,
    ) -> Result<Point3, IllegalDrop> {
        let orientation = self.orientation;
        let seat = self.seat;
        let slot = self
            .pieces
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(IllegalDrop::NoSuchPiece { index })?;
        if slot.position.is_some() {
            return Err(IllegalDrop::AlreadyPlaced { index });
        }
        let column = orientation.to_absolute(target).column();
        let tier = board
            .lowest_open_tier(column)
            .map_err(IllegalDrop::OffBoard)?
            .ok_or(IllegalDrop::ColumnFull {
                x: column.x,
                z: column.z,
            })?;
        let point = column.at_tier(tier);
        board
            .set(point, Some(PieceRef { owner: seat, index }))
            .map_err(IllegalDrop::OffBoard)?;
        slot.position = Some(point);
        Ok(point)
    }

    /// Moves a bound piece by a planar vector in this player's own frame.
    ///
    /// The tier is kept. The destination slot must be empty: the engine
    /// captures an opponent piece off the destination before delegating
    /// here, so meeting one is caller misuse, reported as an error.
    pub fn move_piece(
        &mut self,
        board: &mut Board,
        index: usize,
        offset: Offset,
    ) -> Result<Point3, IllegalMove> {
        let orientation = self.orientation;
        let seat = self.seat;
        let slot = self
            .pieces
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(IllegalMove::NoSuchPiece { index })?;
        let from = slot.position.ok_or(IllegalMove::NotOnBoard { index })?;
        let to = from.offset_by(orientation.orient(offset));
        match board.get(to).map_err(IllegalMove::OffBoard)? {
            Some(other) if other.owner == seat => {
                return Err(IllegalMove::OccupiedByOwnPiece { point: to })
            }
            Some(_) => return Err(IllegalMove::OccupiedByOpponent { point: to }),
            None => {}
        }
        board.set(from, None).map_err(IllegalMove::OffBoard)?;
        board
            .set(to, Some(PieceRef { owner: seat, index }))
            .map_err(IllegalMove::OffBoard)?;
        slot.position = Some(to);
        Ok(to)
    }

    /// Reassigns an unplaced piece to the opponent (capture and reuse).
    ///
    /// Returns the piece's index in the receiving store. The vacated slot
    /// stays in place, so the indices of the remaining pieces do not
    /// shift; the piece arrives head side up.
    pub fn transfer(&mut self, index: usize, other: &mut Player) -> Result<usize, IllegalTransfer> {
        match self.pieces.get(index).and_then(Option::as_ref) {
            None => return Err(IllegalTransfer::NoSuchPiece { index }),
            Some(piece) if piece.is_placed() => {
                return Err(IllegalTransfer::StillOnBoard { index })
            }
            Some(_) => {}
        }
        let Some(mut owned) = self.pieces[index].take() else {
            return Err(IllegalTransfer::NoSuchPiece { index });
        };
        owned.piece.turn_head_up();
        other.pieces.push(Some(owned));
        Ok(other.pieces.len() - 1)
    }

    // Takes a bound piece off the board without changing ownership; the
    // engine's capture path lifts the victim before transferring it.
    pub(crate) fn lift(&mut self, board: &mut Board, index: usize) -> Result<(), IllegalMove> {
        let slot = self
            .pieces
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(IllegalMove::NoSuchPiece { index })?;
        let point = slot.position.ok_or(IllegalMove::NotOnBoard { index })?;
        board.set(point, None).map_err(IllegalMove::OffBoard)?;
        slot.position = None;
        Ok(())
    }
}

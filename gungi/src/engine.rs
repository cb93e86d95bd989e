use serde::{Deserialize, Serialize};

use crate::{
    rules, Action, Board, IllegalAction, IllegalMove, Offset, Orientation, Player, Point3, Seat,
};

/// Which stage of the game is in progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Standby,
    Placement,
    Running,
}

/// Drives one game: the phase state machine, turn alternation, and the
/// capture bookkeeping between the two players.
///
/// One logical thread of control per engine. Mutating calls must not run
/// concurrently with each other or with reads; the engine takes no locks,
/// that discipline is the caller's contract. Every call returns or fails
/// immediately.
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    players: [Player; 2],
    phase: Phase,
    current: Seat,
}

fn seat_index(seat: Seat) -> usize {
    match seat {
        Seat::One => 0,
        Seat::Two => 1,
    }
}

impl GameEngine {
    /// A fresh game: standby phase, empty board, both piece sets in hand.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: [
                Player::new(Seat::One, Orientation::Positive),
                Player::new(Seat::Two, Orientation::Negative),
            ],
            phase: Phase::Standby,
            current: Seat::One,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat_index(seat)]
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Leaves standby and opens placement, player one to act.
    pub fn start(&mut self) -> Result<(), IllegalAction> {
        if self.phase != Phase::Standby {
            return Err(IllegalAction::WrongPhase { phase: self.phase });
        }
        self.phase = Phase::Placement;
        self.current = Seat::One;
        Ok(())
    }

    /// Closes placement and opens the running phase.
    ///
    /// The transition is an explicit caller decision; the engine never
    /// infers it from the board or the hands.
    pub fn begin_running(&mut self) -> Result<(), IllegalAction> {
        if self.phase != Phase::Placement {
            return Err(IllegalAction::WrongPhase { phase: self.phase });
        }
        self.phase = Phase::Running;
        Ok(())
    }

    /// Drops one of the current player's pieces onto the column of
    /// `target`, given in that player's own frame.
    ///
    /// On success the turn passes to the opponent; on failure nothing
    /// changes.
    pub fn place_on_board(
        &mut self,
        index: usize,
        target: Point3,
    ) -> Result<Point3, IllegalAction> {
        if self.phase == Phase::Standby {
            return Err(IllegalAction::WrongPhase { phase: self.phase });
        }
        let seat = self.current;
        let i = seat_index(seat);
        let absolute = self.players[i].orientation().to_absolute(target);
        if !rules::valid_drop(&self.board, &self.players[i], index, absolute, self.phase) {
            return Err(IllegalAction::NotPlaceable);
        }
        let landed = self.players[i]
            .drop_piece(&mut self.board, index, target)
            .map_err(IllegalAction::Drop)?;
        self.current = seat.opponent();
        Ok(landed)
    }

    /// Moves one of the current player's pieces by `offset`, given in that
    /// player's own frame. Legal only while the game is running.
    ///
    /// An opponent piece on the destination is captured: lifted off the
    /// board and transferred into the mover's hand before the mover lands.
    /// On success the turn passes to the opponent.
    pub fn move_piece(&mut self, index: usize, offset: Offset) -> Result<Point3, IllegalAction> {
        if self.phase != Phase::Running {
            return Err(IllegalAction::WrongPhase { phase: self.phase });
        }
        let seat = self.current;
        let i = seat_index(seat);
        if !rules::valid_move(&self.board, &self.players[i], index, offset, self.phase) {
            return Err(IllegalAction::NotMovable);
        }
        let from = match self.players[i].piece(index).and_then(|p| p.position()) {
            Some(point) => point,
            None => return Err(IllegalAction::Move(IllegalMove::NotOnBoard { index })),
        };
        let to = from.offset_by(self.players[i].orientation().orient(offset));
        let destination = self
            .board
            .get(to)
            .map_err(|err| IllegalAction::Move(IllegalMove::OffBoard(err)))?;
        if let Some(target_ref) = destination {
            if target_ref.owner == seat {
                return Err(IllegalAction::Move(IllegalMove::OccupiedByOwnPiece {
                    point: to,
                }));
            }
            let [one, two] = &mut self.players;
            let (capturer, victim) = match seat {
                Seat::One => (one, two),
                Seat::Two => (two, one),
            };
            victim
                .lift(&mut self.board, target_ref.index)
                .map_err(IllegalAction::Move)?;
            victim
                .transfer(target_ref.index, capturer)
                .map_err(IllegalAction::Transfer)?;
        }
        let landed = self.players[i]
            .move_piece(&mut self.board, index, offset)
            .map_err(IllegalAction::Move)?;
        self.current = seat.opponent();
        Ok(landed)
    }

    /// Applies one externally supplied action record.
    pub fn apply(&mut self, action: Action) -> Result<(), IllegalAction> {
        match action {
            Action::Start => self.start(),
            Action::BeginRunning => self.begin_running(),
            Action::Place { piece, x, z } => {
                self.place_on_board(piece, Point3::new(x, z, 0)).map(|_| ())
            }
            Action::Move { piece, dx, dz } => {
                self.move_piece(piece, Offset::new(dx, dz)).map(|_| ())
            }
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Head, PieceRef};

    // Store indices in a fresh player, per the standard set's order.
    const COMMANDER: usize = 0;
    const SOLDIER_GOLD: usize = 14;
    const SOLDIER_SILVER: usize = 15;
    const SOLDIER_BRONZE: usize = 16;

    #[test]
    fn start_is_the_only_exit_from_standby() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.phase(), Phase::Standby);
        assert_eq!(
            engine.place_on_board(COMMANDER, Point3::new(4, 0, 0)),
            Err(IllegalAction::WrongPhase {
                phase: Phase::Standby
            })
        );
        assert_eq!(
            engine.begin_running(),
            Err(IllegalAction::WrongPhase {
                phase: Phase::Standby
            })
        );
        engine.start().unwrap();
        assert_eq!(engine.phase(), Phase::Placement);
        assert_eq!(engine.current_seat(), Seat::One);
        assert_eq!(
            engine.start(),
            Err(IllegalAction::WrongPhase {
                phase: Phase::Placement
            })
        );
    }

    #[test]
    fn moves_are_rejected_before_running() {
        let mut engine = GameEngine::new();
        engine.start().unwrap();
        assert_eq!(
            engine.move_piece(COMMANDER, Offset::new(0, 1)),
            Err(IllegalAction::WrongPhase {
                phase: Phase::Placement
            })
        );
    }

    #[test]
    fn turns_alternate_strictly() {
        let mut engine = GameEngine::new();
        engine.start().unwrap();
        for n in 0..8 {
            let expected = if n % 2 == 0 { Seat::One } else { Seat::Two };
            assert_eq!(engine.current_seat(), expected);
            // Both players place their piece n on their own file n.
            engine
                .place_on_board(n, Point3::new(n as i8, 0, 0))
                .unwrap();
        }
        assert_eq!(engine.current_seat(), Seat::One);
    }

    #[test]
    fn opening_placement_scenario() {
        let mut engine = GameEngine::new();
        engine.start().unwrap();

        // Player one: commander onto column (4, 0).
        assert_eq!(
            engine
                .place_on_board(COMMANDER, Point3::new(4, 0, 0))
                .unwrap(),
            Point3::new(4, 0, 0)
        );
        // Player two: the mirrored (4, 0) is the absolute (4, 8).
        assert_eq!(
            engine
                .place_on_board(COMMANDER, Point3::new(4, 0, 0))
                .unwrap(),
            Point3::new(4, 8, 0)
        );

        // Player one holds a Soldier in file 4, then tries a second one.
        engine
            .place_on_board(SOLDIER_GOLD, Point3::new(4, 1, 0))
            .unwrap();
        engine.place_on_board(1, Point3::new(3, 0, 0)).unwrap();
        assert_eq!(
            engine.place_on_board(SOLDIER_SILVER, Point3::new(4, 2, 0)),
            Err(IllegalAction::NotPlaceable)
        );
        // The failed drop changed nothing: still player one's turn, piece
        // still in hand.
        assert_eq!(engine.current_seat(), Seat::One);
        assert_eq!(engine.phase(), Phase::Placement);
        assert!(!engine
            .player(Seat::One)
            .piece(SOLDIER_SILVER)
            .unwrap()
            .is_placed());
    }

    #[test]
    fn running_moves_capture_by_transfer() {
        let mut engine = GameEngine::new();
        engine.start().unwrap();
        // Soldiers face each other in file 4: absolute (4, 2) and (4, 6).
        engine
            .place_on_board(SOLDIER_BRONZE, Point3::new(4, 2, 0))
            .unwrap();
        engine
            .place_on_board(SOLDIER_BRONZE, Point3::new(4, 2, 0))
            .unwrap();
        engine.begin_running().unwrap();

        engine
            .move_piece(SOLDIER_BRONZE, Offset::new(0, 1))
            .unwrap(); // one: (4,2) -> (4,3)
        engine
            .move_piece(SOLDIER_BRONZE, Offset::new(0, 1))
            .unwrap(); // two: (4,6) -> (4,5)
        engine
            .move_piece(SOLDIER_BRONZE, Offset::new(0, 1))
            .unwrap(); // one: (4,3) -> (4,4)
        let landed = engine
            .move_piece(SOLDIER_BRONZE, Offset::new(0, 1))
            .unwrap(); // two takes on (4,4)
        assert_eq!(landed, Point3::new(4, 4, 0));

        // The victim changed hands: vacated in player one's store,
        // appended unplaced and head up to player two's.
        assert!(engine.player(Seat::One).piece(SOLDIER_BRONZE).is_none());
        assert_eq!(engine.player(Seat::One).pieces().count(), 22);
        assert_eq!(engine.player(Seat::Two).pieces().count(), 24);
        let captured = engine.player(Seat::Two).piece(23).unwrap();
        assert!(!captured.is_placed());
        assert_eq!(captured.piece.head(), Head::Soldier);

        assert_eq!(
            engine.board().get(Point3::new(4, 4, 0)).unwrap(),
            Some(PieceRef {
                owner: Seat::Two,
                index: SOLDIER_BRONZE
            })
        );
        assert_eq!(engine.current_seat(), Seat::One);
    }

    #[test]
    fn reinforcement_drops_are_legal_while_running() {
        let mut engine = GameEngine::new();
        engine.start().unwrap();
        engine.place_on_board(0, Point3::new(0, 0, 0)).unwrap();
        engine.place_on_board(0, Point3::new(0, 0, 0)).unwrap();
        engine.begin_running().unwrap();
        // Row 5 is far outside the placement band.
        let landed = engine.place_on_board(1, Point3::new(4, 5, 0)).unwrap();
        assert_eq!(landed, Point3::new(4, 5, 0));
    }

    #[test]
    fn scripted_actions_drive_the_engine() {
        let mut engine = GameEngine::new();
        engine.apply(Action::Start).unwrap();
        engine
            .apply(Action::Place {
                piece: COMMANDER,
                x: 4,
                z: 0,
            })
            .unwrap();
        engine
            .apply(Action::Place {
                piece: COMMANDER,
                x: 4,
                z: 0,
            })
            .unwrap();
        engine.apply(Action::BeginRunning).unwrap();
        assert_eq!(engine.phase(), Phase::Running);
        assert_eq!(
            engine.apply(Action::Start),
            Err(IllegalAction::WrongPhase {
                phase: Phase::Running
            })
        );
    }
}

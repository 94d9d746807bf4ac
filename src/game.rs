//! Game structure.

use std::fmt::{self, Display};

use crate::board::Board;
use crate::coretypes::Move;
use crate::error::{self, ErrorKind};
use crate::movelist::MoveHistory;

/// Game contains information for an in progress game:
/// The base board the game started from, the sequence of moves that were
/// played, and the current board.
///
/// Replaying the history against the base always reproduces the current
/// board, which is what `Game::new` verifies.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game {
    pub base_board: Board,
    pub moves: MoveHistory,
    pub board: Board,
}

impl Game {
    /// Create a new Game from a base board and a sequence of moves.
    /// This generates the current board by applying the sequence of moves to
    /// the base. If a move in the move history is illegal, Err is returned.
    pub fn new(base_board: Board, moves: MoveHistory) -> error::Result<Self> {
        let mut board = base_board;

        for move_ in &moves {
            board = board
                .try_move(*move_)
                .map_err(|_| ErrorKind::GameIllegalMove)?;
        }

        Ok(Self {
            base_board,
            moves,
            board,
        })
    }

    /// Create a new game on the empty tournament-sized board.
    pub fn start_position() -> Self {
        Self::from(Board::default())
    }

    /// Play a move in this game, appending it to the history.
    pub fn make_move(&mut self, move_: Move) -> error::Result<()> {
        let next = self.board.try_move(move_)?;

        self.moves
            .try_push(move_)
            .map_err(|_| ErrorKind::MoveHistoryExceeded)?;
        self.board = next;
        Ok(())
    }

    /// Returns true if the game is over, with the active player isolated.
    pub fn is_over(&self) -> bool {
        self.board.is_terminal()
    }
}

/// Convert a board to a Game with no past moves.
impl From<Board> for Game {
    fn from(board: Board) -> Self {
        Self::new(board, MoveHistory::new()).unwrap()
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::Coord;

    #[test]
    fn replay_reproduces_board() {
        let mut game = Game::from(Board::new(4, 4).unwrap());
        game.make_move(Move::Place(Coord::new(0, 0))).unwrap();
        game.make_move(Move::Place(Coord::new(3, 3))).unwrap();
        game.make_move(Move::Slide {
            from: Coord::new(0, 0),
            to: Coord::new(0, 3),
        })
        .unwrap();

        let replayed = Game::new(game.base_board, game.moves.clone()).unwrap();
        assert_eq!(replayed.board, game.board);
    }

    #[test]
    fn illegal_history_is_rejected() {
        let mut moves = MoveHistory::new();
        moves.push(Move::Place(Coord::new(0, 0)));
        moves.push(Move::Place(Coord::new(0, 0)));

        assert!(Game::new(Board::new(3, 3).unwrap(), moves).is_err());
    }

    #[test]
    fn make_move_rejects_illegal() {
        let mut game = Game::from(Board::new(3, 3).unwrap());
        game.make_move(Move::Place(Coord::new(1, 1))).unwrap();

        let err = game.make_move(Move::Place(Coord::new(1, 1)));
        assert!(err.is_err());
        // Failed moves leave the game untouched.
        assert_eq!(game.moves.len(), 1);
    }
}

//! Search engine for the board game Isolation.
//!
//! Two players share a grid. Each turn the active player moves like a chess
//! queen, permanently blocking the cell it lands on; a player with no legal
//! move loses. The engine chooses moves with depth-limited minimax,
//! alpha-beta pruning, and time-bounded iterative deepening.

pub mod bitboard;
pub mod board;
pub mod coretypes;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub(crate) mod movegen;
pub mod movelist;
pub mod notation;
pub mod perft;
pub mod search;
pub mod timeman;

pub use board::Board;
pub use coretypes::{Coord, Move, Player, Score};
pub use engine::{Engine, EngineBuilder};
pub use game::Game;
pub use notation::Notation;
pub use timeman::Mode;

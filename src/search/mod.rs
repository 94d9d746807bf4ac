//! Search functions.

mod alpha_beta;
mod ids;
mod minimax;

pub use alpha_beta::*;
pub use ids::*;
pub use minimax::*;

use std::fmt::{self, Display};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use crate::board::Board;
use crate::coretypes::{Move, Player, PlyKind, Score};
use crate::eval::EvalFn;
use crate::game::Game;
use crate::timeman::Mode;

/// Check the clock and stopper flag once per this many visited nodes, so a
/// deep iteration cannot overrun its deadline by an unbounded margin.
pub(crate) const NODES_PER_CHECK: u64 = 1024;

/// How a decision concluded, reported for every search.
///
/// A true timeout, where the selector never answers before the harness's
/// deadline, is observed on the harness side; `OutOfTime` here covers the
/// engine-side case of a search stopped before any depth fully completed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Termination {
    /// At least one depth fully completed and the best move is legal.
    Completed,
    /// The root had no legal moves, the game is lost.
    Forfeit,
    /// Stopped before completing depth 1, the best move is a legal fallback.
    OutOfTime,
}

/// The results found from running a search on some root board.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move to make for the board discovered from search,
    /// or the forfeit sentinel when the root has no legal moves.
    pub best_move: Move,
    /// Score of making the best move, relative to the root player.
    pub score: Score,
    /// The player to move for the root board that was searched.
    pub player: Player,
    /// Depth in plies that was fully searched.
    pub depth: PlyKind,
    /// Total number of nodes visited in the search.
    pub nodes: u64,
    /// Total time elapsed from the start to the end of the search.
    pub elapsed: Duration,
    /// Flag that indicates this search was aborted.
    pub stopped: bool,
}

impl SearchResult {
    /// Get average nodes per second of search.
    pub fn nps(&self) -> f64 {
        (self.nodes as f64 / self.elapsed.as_secs_f64()).round()
    }

    /// Returns true if the root player has a proven win.
    pub fn is_proven_win(&self) -> bool {
        self.score.is_win()
    }

    /// How this decision concluded.
    pub fn termination(&self) -> Termination {
        if self.best_move.is_forfeit() {
            Termination::Forfeit
        } else if self.stopped && self.depth == 0 {
            Termination::OutOfTime
        } else {
            Termination::Completed
        }
    }

    /// Result for a root with no legal moves. The evaluator is never
    /// consulted, the position is a proven loss for the root player.
    pub(crate) fn forfeit(player: Player, start_time: Instant) -> Self {
        Self {
            best_move: Move::Forfeit,
            score: Score::LOSS,
            player,
            depth: 0,
            nodes: 0,
            elapsed: start_time.elapsed(),
            stopped: false,
        }
    }
}

impl Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "SearchResult {{")?;
        writeln!(f, "    best_move: {}", self.best_move)?;
        writeln!(f, "    score    : {}", self.score)?;
        writeln!(f, "    player   : {}", self.player)?;
        writeln!(f, "    depth    : {}", self.depth)?;
        writeln!(f, "    nodes    : {}", self.nodes)?;
        writeln!(f, "    nps      : {}", self.nps())?;
        writeln!(
            f,
            "    elapsed  : {}.{:03}s",
            self.elapsed.as_secs(),
            self.elapsed.subsec_millis()
        )?;
        writeln!(f, "    stopped  : {}", self.stopped)?;
        writeln!(f, "}}")
    }
}

/// Cooperative cancellation state threaded through a single search call.
///
/// Search is a plain depth-first recursion; the only way it can end early is
/// by noticing, between node visits, that its deadline passed or that an
/// external caller raised the stopper flag. Once `stopped` is set the
/// recursion unwinds immediately and the partial result is discarded by the
/// caller in favor of the last fully completed depth.
pub(crate) struct SearchControl {
    mode: Mode,
    start_time: Instant,
    stopper: Arc<AtomicBool>,
    target_ply: PlyKind,
    pub(crate) nodes: u64,
    pub(crate) stopped: bool,
}

impl SearchControl {
    pub(crate) fn new(
        mode: Mode,
        start_time: Instant,
        stopper: Arc<AtomicBool>,
        target_ply: PlyKind,
    ) -> Self {
        Self {
            mode,
            start_time,
            stopper,
            target_ply,
            nodes: 0,
            stopped: false,
        }
    }

    /// Control for a search that only an external stopper can end early.
    pub(crate) fn unlimited(stopper: Arc<AtomicBool>, target_ply: PlyKind) -> Self {
        Self::new(Mode::infinite(), Instant::now(), stopper, target_ply)
    }

    /// Count a visited node.
    pub(crate) fn visit(&mut self) {
        self.nodes += 1;
    }

    /// Returns true once the search should unwind. The clock and the stopper
    /// are polled every `NODES_PER_CHECK` nodes; the sticky `stopped` flag is
    /// free to read in between.
    pub(crate) fn should_stop(&mut self) -> bool {
        if self.stopped {
            return true;
        }
        if self.nodes % NODES_PER_CHECK == 0 {
            self.stopped = self.stopper.load(Ordering::Relaxed)
                || self.mode.stop(self.target_ply, self.start_time);
        }
        self.stopped
    }
}

/// Isolation engine primary board search function. Runs a time-bounded
/// iterative-deepening alpha-beta search and blocks until it finishes.
pub fn search(board: Board, mode: Mode, eval: EvalFn, start_time: Option<Instant>) -> SearchResult {
    let start_time = start_time.unwrap_or_else(Instant::now);
    ids(
        board,
        mode,
        eval,
        start_time,
        Arc::new(AtomicBool::new(false)),
        false,
    )
}

/// Isolation engine non-blocking search function. This runs the search on a
/// separate thread. When the search has been completed, it returns the value
/// by sending it over the given Sender.
///
/// # Arguments
///
/// * `game`: State of the current active game
/// * `mode`: Mode of search determines when the search stops and how deep it searches
/// * `eval`: Evaluation applied at cutoff depth
/// * `stopper`: Tell search to stop early from an external source
/// * `debug`: When true prints extra debugging information
/// * `sender`: Channel to send search result over
pub fn search_nonblocking<P, T>(
    game: P,
    mode: Mode,
    eval: EvalFn,
    start_time: Option<Instant>,
    stopper: Arc<AtomicBool>,
    debug: bool,
    sender: mpsc::Sender<T>,
) -> thread::JoinHandle<()>
where
    T: 'static + Send + From<SearchResult>,
    P: Into<Game>,
{
    let start_time = start_time.unwrap_or_else(Instant::now);
    let game: Game = game.into();
    let board = game.board;

    thread::spawn(move || {
        let search_result = ids(board, mode, eval, start_time, stopper, debug);
        sender.send(search_result.into()).unwrap();
    })
}

//! Engine struct acts as a simplified API for the various parts of the isolation engine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use crate::coretypes::Move;
use crate::error::{self, ErrorKind};
use crate::eval::{self, EvalFn};
use crate::game::Game;
use crate::search::{self, SearchResult};
use crate::timeman::Mode;

/// EngineBuilder allows for parameters of an Engine to be set and built once,
/// avoiding repeating initialization steps of making then changing an Engine.
///
/// Default values:
///
/// * `game`: empty tournament-sized board
/// * `eval`: improved mobility differential
/// * `debug`: false
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    game: Game,
    eval: EvalFn,
    debug: bool,
}

impl EngineBuilder {
    /// Create a new default EngineBuilder.
    pub fn new() -> Self {
        Self {
            game: Game::start_position(),
            eval: eval::improved_score,
            debug: false,
        }
    }

    /// Create and return a new Engine.
    pub fn build(&self) -> Engine {
        Engine {
            game: self.game.clone(),
            eval: self.eval,
            stopper: Arc::new(AtomicBool::new(false)),
            debug: self.debug,
            search_handle: None,
        }
    }

    /// Set the Engine's initial game state.
    pub fn game(mut self, game: Game) -> Self {
        self.game = game;
        self
    }

    /// Set the engine's evaluation function.
    pub fn eval(mut self, eval: EvalFn) -> Self {
        self.eval = eval;
        self
    }

    /// Set whether the engine begins in debug mode.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Engine wraps up all parameters required for running any kind of search.
/// It is stateful because the game being played needs to be tracked across
/// decisions.
///
/// If a new game is going to be started, the engine needs to be told so.
pub struct Engine {
    // Search fields
    game: Game,
    eval: EvalFn,
    stopper: Arc<AtomicBool>,
    debug: bool,

    // Meta fields
    search_handle: Option<JoinHandle<()>>,
}

impl Engine {
    pub fn new() -> Self {
        EngineBuilder::new().build()
    }

    /// Returns reference to current game of engine.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns reference to current debug flag of engine.
    pub fn debug(&self) -> &bool {
        &self.debug
    }

    /// Set the game or board for evaluation.
    pub fn set_game<T: Into<Game>>(&mut self, game: T) {
        self.game = game.into();
    }

    /// Update the engine's debug parameter.
    pub fn set_debug(&mut self, new_debug: bool) {
        self.debug = new_debug;
    }

    /// Update the engine's evaluation function.
    pub fn set_eval(&mut self, eval: EvalFn) {
        self.eval = eval;
    }

    /// Informs engine that next search will be from a new game.
    pub fn new_game(&mut self) {
        self.game = Game::start_position();
    }

    /// Play a move in the engine's current game.
    pub fn make_move(&mut self, move_: Move) -> error::Result<()> {
        self.game.make_move(move_)
    }

    /// The player contract: given a wall-clock budget, return a decision
    /// holding a legal move, or the forfeit sentinel when none exists.
    pub fn best_move(&mut self, movetime: Duration) -> SearchResult {
        self.search_sync(Mode::movetime(movetime, None))
    }

    /// Run a blocking search.
    pub fn search_sync(&mut self, mode: Mode) -> SearchResult {
        // Block until a search is ready to run.
        self.stop();
        self.wait();
        self.unstop();

        let (sender, receiver) = mpsc::channel();
        self.search(mode, sender).unwrap();
        self.wait();
        receiver.recv().unwrap()
    }

    /// Run a non-blocking search.
    /// The engine only runs one search at a time, so if it is not ready, it fails to begin.
    /// If the engine is available for searching, it ensures its stopper is unset.
    pub fn search<T>(&mut self, mode: Mode, sender: Sender<T>) -> error::Result<()>
    where
        T: From<SearchResult> + Send + 'static,
    {
        if self.search_handle.is_none() {
            self.unstop();

            let handle = search::search_nonblocking(
                self.game.clone(),
                mode,
                self.eval,
                None,
                Arc::clone(&self.stopper),
                self.debug,
                sender,
            );
            self.search_handle = Some(handle);

            Ok(())
        } else {
            Err((ErrorKind::EngineAlreadySearching, "failed to begin search").into())
        }
    }

    /// Informs the active search to stop searching as soon as possible.
    pub fn stop(&self) {
        self.stopper.store(true, Ordering::Relaxed);
    }

    /// Resets stopper flag.
    pub fn unstop(&self) {
        self.stopper.store(false, Ordering::Relaxed);
    }

    /// Engine blocks thread until search is completed.
    pub fn wait(&mut self) {
        let handle_opt = self.search_handle.take();

        if let Some(handle) = handle_opt {
            handle.join().unwrap();
        }
    }

    /// Returns true if the engine is ready to start a search.
    /// Only one search may run at a time, so if a search is in progress, engine is not ready.
    pub fn ready(&self) -> bool {
        self.search_handle.is_none()
    }

    /// Consumes and shuts down the Engine. Signals any threads to stop
    /// searching and waits for internal resources to close first.
    /// The engine will normally close up properly when dropped,
    /// however this function provides a way to do it explicitly
    /// directly from the API.
    pub fn shutdown(self) {}
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.stop();
        self.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::search::Termination;

    #[test]
    fn best_move_is_legal_and_playable() {
        let mut engine = EngineBuilder::new()
            .game(Game::from(Board::new(4, 4).unwrap()))
            .build();

        let result = engine.best_move(Duration::from_millis(20));
        assert_eq!(result.termination(), Termination::Completed);
        assert!(engine.game().board.is_legal_move(result.best_move));

        engine.make_move(result.best_move).unwrap();
        assert_eq!(engine.game().moves.len(), 1);
    }

    #[test]
    fn ready_after_sync_search() {
        let mut engine = Engine::new();
        assert!(engine.ready());
        let _ = engine.search_sync(Mode::depth(2, None));
        assert!(engine.ready());
    }

    #[test]
    fn engine_plays_game_to_completion() {
        let mut engine = EngineBuilder::new()
            .game(Game::from(Board::new(3, 3).unwrap()))
            .build();

        loop {
            let result = engine.best_move(Duration::from_millis(10));
            match result.termination() {
                Termination::Forfeit => break,
                _ => engine.make_move(result.best_move).unwrap(),
            }
        }

        assert!(engine.game().is_over());
    }
}

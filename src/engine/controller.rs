//! Engine controller implementation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use chess::{ChessMove, Color};
use log::{debug, info, warn};
use parking_lot::Mutex;

use super::{EngineError, EngineOptions, GameStatus};
use crate::board::{evaluate, search, Game, SearchResult};

/// Search thread stack size (32 MB)
const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;

const SEARCH_THREAD_NAME: &str = "chessbot-search";

/// Holds the busy flag for as long as it lives.
struct BusyGuard {
    busy: Arc<AtomicBool>,
}

impl BusyGuard {
    fn claim(busy: &Arc<AtomicBool>) -> Result<Self, EngineError> {
        busy.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| EngineError::Busy)?;
        Ok(BusyGuard {
            busy: Arc::clone(busy),
        })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

/// A search running on its own thread.
pub struct SearchJob {
    handle: JoinHandle<Result<SearchResult<ChessMove>, EngineError>>,
}

impl SearchJob {
    /// Whether the search thread has finished
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the search thread and return its result
    pub fn wait(self) -> Result<SearchResult<ChessMove>, EngineError> {
        self.handle
            .join()
            .map_err(|_| EngineError::WorkerPanicked)?
    }
}

/// Engine controller managing search and game state
pub struct EngineController {
    /// Game shared with search threads
    game: Arc<Mutex<Game>>,
    /// Set while a search runs
    busy: Arc<AtomicBool>,
    options: EngineOptions,
    /// Side played by the human
    player_color: Color,
}

impl Default for EngineController {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

impl EngineController {
    /// Create a new engine controller at the starting position
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        EngineController {
            game: Arc::new(Mutex::new(Game::new())),
            busy: Arc::new(AtomicBool::new(false)),
            options,
            player_color: Color::White,
        }
    }

    #[must_use]
    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Set the search depth used by later searches. Returns the stored
    /// (clamped) depth.
    pub fn set_depth(&mut self, depth: u32) -> u32 {
        let depth = self.options.set_depth(depth);
        debug!("search depth set to {depth}");
        depth
    }

    /// Check if a search is running
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn player_color(&self) -> Color {
        self.player_color
    }

    /// Whether it is the engine's turn rather than the player's
    #[must_use]
    pub fn engine_to_move(&self) -> bool {
        self.game.lock().side_to_move() != self.player_color
    }

    /// Reset to the starting position with the human playing `player_color`
    pub fn new_game(&mut self, player_color: Color) -> Result<(), EngineError> {
        let _guard = BusyGuard::claim(&self.busy)?;
        *self.game.lock() = Game::new();
        self.player_color = player_color;
        info!("new game, player has {player_color:?}");
        Ok(())
    }

    /// Replace the current game
    pub fn set_position(&self, game: Game) -> Result<(), EngineError> {
        let _guard = BusyGuard::claim(&self.busy)?;
        debug!("position set to {game}");
        *self.game.lock() = game;
        Ok(())
    }

    /// Copy of the current game
    #[must_use]
    pub fn game(&self) -> Game {
        self.game.lock().clone()
    }

    #[must_use]
    pub fn fen(&self) -> String {
        self.game.lock().to_fen()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.game.lock())
    }

    /// Static evaluation of the current position, from White's point of view
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        evaluate(&*self.game.lock())
    }

    #[must_use]
    pub fn is_legal_move(&self, mv: ChessMove) -> bool {
        self.game.lock().is_legal(mv)
    }

    /// Play a move for the side to move
    pub fn make_move(&self, mv: ChessMove) -> Result<(), EngineError> {
        let _guard = BusyGuard::claim(&self.busy)?;
        self.game.lock().push(mv)?;
        debug!("played {mv}");
        Ok(())
    }

    /// Play a move given in long algebraic notation ("e2e4")
    pub fn make_uci_move(&self, text: &str) -> Result<ChessMove, EngineError> {
        let _guard = BusyGuard::claim(&self.busy)?;
        let mut game = self.game.lock();
        let mv = game.parse_uci_move(text)?;
        game.push(mv)?;
        debug!("played {mv}");
        Ok(mv)
    }

    /// Take back the last move. Returns `None` when there is nothing to undo.
    pub fn undo_move(&self) -> Result<Option<ChessMove>, EngineError> {
        let _guard = BusyGuard::claim(&self.busy)?;
        let mut game = self.game.lock();
        if game.ply() == 0 {
            return Ok(None);
        }
        let mv = game.pop()?;
        debug!("took back {mv}");
        Ok(Some(mv))
    }

    /// Search the current position on the calling thread without playing
    /// the result.
    pub fn think(&self) -> Result<SearchResult<ChessMove>, EngineError> {
        let _guard = BusyGuard::claim(&self.busy)?;
        run_search(&self.game, self.options.depth, false)
    }

    /// Search the current position and play the chosen move.
    ///
    /// Returns the move played, or `None` when the side to move has no
    /// legal moves.
    pub fn play_engine_move(&self) -> Result<Option<ChessMove>, EngineError> {
        let _guard = BusyGuard::claim(&self.busy)?;
        let result = run_search(&self.game, self.options.depth, true)?;
        Ok(result.best_move)
    }

    /// Start a search on a worker thread at the configured depth.
    ///
    /// With `apply` set, the chosen move is played once the search is done.
    /// Fails with [`EngineError::Busy`] if a search is already running.
    pub fn spawn_search(&self, apply: bool) -> Result<SearchJob, EngineError> {
        self.spawn_search_to_depth(self.options.depth, apply)
    }

    /// Like [`spawn_search`](Self::spawn_search) with an explicit depth.
    pub fn spawn_search_to_depth(&self, depth: u32, apply: bool) -> Result<SearchJob, EngineError> {
        let guard = BusyGuard::claim(&self.busy)?;
        let game = Arc::clone(&self.game);

        let handle = thread::Builder::new()
            .name(SEARCH_THREAD_NAME.to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let _guard = guard;
                run_search(&game, depth, apply)
            })
            .map_err(|err| {
                warn!("could not spawn search thread: {err}");
                EngineError::Spawn {
                    reason: err.to_string(),
                }
            })?;

        Ok(SearchJob { handle })
    }
}

/// Search a snapshot of the game, then play the result if asked to.
///
/// The caller holds the busy flag, so the game cannot change between the
/// snapshot and the move being played.
fn run_search(
    game: &Mutex<Game>,
    depth: u32,
    apply: bool,
) -> Result<SearchResult<ChessMove>, EngineError> {
    let mut snapshot = game.lock().clone();
    let result = search(&mut snapshot, depth)?;

    match result.best_move {
        Some(mv) => {
            info!("best move {mv} score {} depth {depth}", result.score);
            if apply {
                game.lock().push(mv)?;
            }
        }
        None => info!("no legal moves at depth {depth}"),
    }

    Ok(result)
}

pub mod config;
pub mod logger;
pub mod puzzle;
mod defaults;

pub use defaults::{
    DEFAULT_GRID_SIZE, DEFAULT_MAX_MOVES, SUPPORTED_GRID_SIZES, SUPPORTED_MAX_MOVES,
};
pub use puzzle::{
    Board, Direction, GamePhase, GameStatus, MoveOutcome, PuzzleGameState, PuzzleSettings,
    SessionRng, TileId,
};

mod board;
mod game_state;
mod session_rng;
mod settings;
mod types;

pub use board::Board;
pub use game_state::PuzzleGameState;
pub use session_rng::SessionRng;
pub use settings::PuzzleSettings;
pub use types::{Direction, GamePhase, GameStatus, MoveOutcome, TileId};

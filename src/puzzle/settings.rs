use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::defaults::{
    DEFAULT_GRID_SIZE, DEFAULT_MAX_MOVES, SUPPORTED_GRID_SIZES, SUPPORTED_MAX_MOVES,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PuzzleSettings {
    pub grid_size: usize,
    pub max_moves: u32,
}

impl Default for PuzzleSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            max_moves: DEFAULT_MAX_MOVES,
        }
    }
}

impl Validate for PuzzleSettings {
    fn validate(&self) -> Result<(), String> {
        if !SUPPORTED_GRID_SIZES.contains(&self.grid_size) {
            return Err(format!(
                "Grid size must be one of {:?}, got {}",
                SUPPORTED_GRID_SIZES, self.grid_size
            ));
        }
        if !SUPPORTED_MAX_MOVES.contains(&self.max_moves) {
            return Err(format!(
                "Max moves must be one of {:?}, got {}",
                SUPPORTED_MAX_MOVES, self.max_moves
            ));
        }
        Ok(())
    }
}

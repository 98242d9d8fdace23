use crate::config::Validate;
use crate::log;

use super::board::Board;
use super::session_rng::SessionRng;
use super::settings::PuzzleSettings;
use super::types::{Direction, GamePhase, GameStatus, MoveOutcome, TileId};

pub struct PuzzleGameState {
    settings: PuzzleSettings,
    pending_settings: PuzzleSettings,
    board: Board,
    moves_made: u32,
    phase: GamePhase,
}

impl PuzzleGameState {
    pub fn new(settings: PuzzleSettings) -> Result<Self, String> {
        settings.validate()?;

        Ok(Self {
            board: Board::new(settings.grid_size),
            pending_settings: settings,
            settings,
            moves_made: 0,
            phase: GamePhase::Setup,
        })
    }

    pub fn new_game(&mut self) {
        self.settings = self.pending_settings;
        self.board = Board::new(self.settings.grid_size);
        self.moves_made = 0;
        self.phase = GamePhase::Setup;
    }

    // Settings changes take effect on the next new_game, never mid-game.
    pub fn set_grid_size(&mut self, grid_size: usize) -> Result<(), String> {
        let candidate = PuzzleSettings {
            grid_size,
            ..self.pending_settings
        };
        candidate.validate()?;
        self.pending_settings = candidate;
        Ok(())
    }

    pub fn set_max_moves(&mut self, max_moves: u32) -> Result<(), String> {
        let candidate = PuzzleSettings {
            max_moves,
            ..self.pending_settings
        };
        candidate.validate()?;
        self.pending_settings = candidate;
        Ok(())
    }

    pub fn shuffle(&mut self, rng: &mut SessionRng) -> u32 {
        if self.phase != GamePhase::Setup {
            return 0;
        }

        let grid_size = self.settings.grid_size;
        let target_swaps = (grid_size * grid_size * grid_size) as u32;
        let mut swaps = 0;
        while swaps < target_swaps {
            let index = rng.random_index(self.board.cell_count());
            let direction = Direction::ALL[rng.random_index(Direction::ALL.len())];
            if self.board.try_swap(index, direction) {
                swaps += 1;
            }
        }

        self.phase = GamePhase::Playing;
        log!(
            "Shuffle complete: {} swaps on a {}x{} board (seed {})",
            swaps,
            grid_size,
            grid_size,
            rng.seed()
        );
        swaps
    }

    pub fn attempt_move(&mut self, cell_index: usize) -> MoveOutcome {
        if self.phase != GamePhase::Playing {
            return self.rejected();
        }

        let moved = Direction::ALL
            .iter()
            .any(|&direction| self.board.try_swap(cell_index, direction));
        if !moved {
            return self.rejected();
        }

        if self.board.is_solved() {
            // The winning swap is not charged against the move budget.
            self.phase = GamePhase::Won;
            log!("Puzzle solved in {} moves", self.moves_made);
        } else {
            self.moves_made += 1;
            if self.moves_made >= self.settings.max_moves {
                self.phase = GamePhase::Lost;
                log!("Move budget of {} exhausted", self.settings.max_moves);
            }
        }

        MoveOutcome {
            accepted: true,
            status: self.status(),
            moves_made: self.moves_made,
        }
    }

    fn rejected(&self) -> MoveOutcome {
        MoveOutcome {
            accepted: false,
            status: self.status(),
            moves_made: self.moves_made,
        }
    }

    pub fn tile_at(&self, index: usize) -> Option<TileId> {
        self.board.tile_at(index)
    }

    pub fn cells(&self) -> &[Option<TileId>] {
        self.board.cells()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn status(&self) -> GameStatus {
        self.phase.into()
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn grid_size(&self) -> usize {
        self.settings.grid_size
    }

    pub fn max_moves(&self) -> u32 {
        self.settings.max_moves
    }

    pub fn settings(&self) -> &PuzzleSettings {
        &self.settings
    }

    #[cfg(test)]
    fn start_with_board(&mut self, board: Board) {
        self.board = board;
        self.phase = GamePhase::Playing;
    }

    #[cfg(test)]
    fn board(&self) -> &Board {
        &self.board
    }
}

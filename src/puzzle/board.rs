use super::types::{Direction, TileId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Option<TileId>>,
    grid_size: usize,
    empty_slot: usize,
}

impl Board {
    pub fn new(grid_size: usize) -> Self {
        let cell_count = grid_size * grid_size;
        let mut cells: Vec<Option<TileId>> =
            (0..cell_count - 1).map(|i| Some(i as TileId)).collect();
        cells.push(None);

        Self {
            cells,
            grid_size,
            empty_slot: cell_count - 1,
        }
    }

    #[cfg(test)]
    pub fn from_cells(grid_size: usize, cells: Vec<Option<TileId>>) -> Self {
        assert_eq!(cells.len(), grid_size * grid_size);
        let empty_slot = cells
            .iter()
            .position(|cell| cell.is_none())
            .expect("Board needs an empty cell");

        Self {
            cells,
            grid_size,
            empty_slot,
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn empty_slot(&self) -> usize {
        self.empty_slot
    }

    pub fn tile_at(&self, index: usize) -> Option<TileId> {
        self.cells.get(index).copied().flatten()
    }

    pub fn cells(&self) -> &[Option<TileId>] {
        &self.cells
    }

    pub fn try_swap(&mut self, index: usize, direction: Direction) -> bool {
        if index >= self.cells.len() {
            return false;
        }

        // A Left/Right step from the first/last column would land on the
        // neighboring row; the column guard rejects it without 2-D math.
        let column = index % self.grid_size;
        let wraps = match direction {
            Direction::Left => column == 0,
            Direction::Right => column == self.grid_size - 1,
            Direction::Up | Direction::Down => false,
        };
        if wraps {
            return false;
        }

        let Some(target) = index.checked_add_signed(direction.offset(self.grid_size)) else {
            return false;
        };
        if target >= self.cells.len() || target != self.empty_slot {
            return false;
        }

        self.cells.swap(index, target);
        self.empty_slot = index;
        true
    }

    pub fn is_solved(&self) -> bool {
        let last = self.cells.len() - 1;
        self.cells[last].is_none()
            && self.cells[..last]
                .iter()
                .enumerate()
                .all(|(i, cell)| *cell == Some(i as TileId))
    }
}

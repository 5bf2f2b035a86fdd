use crate::prelude::{GRID_HEIGHT, GRID_WIDTH};

/// Fixed-size field of cells, `GRID_WIDTH` x `GRID_HEIGHT`, stored row by row.
///
/// Coordinates are `(x, y)` with `x` the column and `y` the row, both starting at the
/// top left corner. Accessing a coordinate outside the field panics, use [`Grid::get`] or
/// [`Grid::contains`] when the bounds are not already guaranteed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
}

impl Grid {
    pub const WIDTH: usize = GRID_WIDTH;
    pub const HEIGHT: usize = GRID_HEIGHT;

    /// creates a field with every cell dead
    pub fn new() -> Self {
        Self {
            cells: vec![false; Self::WIDTH * Self::HEIGHT],
        }
    }

    #[inline]
    pub fn contains(x: usize, y: usize) -> bool {
        x < Self::WIDTH && y < Self::HEIGHT
    }

    /// Whether the cell lies inside the boundary ring, i.e. is one the rule evaluates.
    #[inline]
    pub fn is_interior(x: usize, y: usize) -> bool {
        (1..Self::WIDTH - 1).contains(&x) && (1..Self::HEIGHT - 1).contains(&y)
    }

    #[inline]
    fn idx(x: usize, y: usize) -> usize {
        assert!(
            Self::contains(x, y),
            "cell ({x}, {y}) is outside of the {}x{} grid",
            Self::WIDTH,
            Self::HEIGHT
        );
        y * Self::WIDTH + x
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cells[Self::idx(x, y)]
    }

    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) {
        let idx = Self::idx(x, y);
        self.cells[idx] = alive;
    }

    /// flips the cell and returns its new state
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        let idx = Self::idx(x, y);
        self.cells[idx] = !self.cells[idx];
        self.cells[idx]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        Self::contains(x, y).then(|| self.cells[y * Self::WIDTH + x])
    }

    /// kills every cell
    pub fn reset(&mut self) {
        self.cells.fill(false);
    }

    /// Counts the live cells among the (up to) 8 cells surrounding `(x, y)`.
    pub fn live_neighbours(&self, x: usize, y: usize) -> u8 {
        (-1..=1isize)
            .flat_map(|dy| (-1..=1isize).map(move |dx| (dx, dy)))
            // the cell itself is not its own neighbour
            .filter(|&offs| offs != (0, 0))
            .filter_map(|(dx, dy)| Some((x.checked_add_signed(dx)?, y.checked_add_signed(dy)?)))
            .filter(|&(nx, ny)| self.get(nx, ny).unwrap_or(false))
            .count() as u8
    }

    /// Fills every interior cell at random, the boundary ring is left dead.
    pub fn randomize(&mut self, rng: &mut fastrand::Rng) {
        self.reset();
        for y in 1..Self::HEIGHT - 1 {
            for x in 1..Self::WIDTH - 1 {
                self.set_alive(x, y, rng.bool());
            }
        }
    }

    /// iterates over the coordinates of every live cell, row by row
    #[cfg(test)]
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(idx, _)| (idx % Self::WIDTH, idx / Self::WIDTH))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    /// An immutable copy of the current generation.
    pub fn snapshot(&self) -> Grid {
        self.clone()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

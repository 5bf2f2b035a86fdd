use crate::grid::Grid;

/// Decides whether a cell lives in the next generation, the first matching rule wins.
#[inline]
pub fn next_state(alive: bool, neighbours: u8) -> bool {
    match (alive, neighbours) {
        // underpopulation
        (_, n) if n < 2 => false,
        // survival
        (true, 2 | 3) => true,
        // overpopulation
        (_, n) if n > 3 => false,
        // birth
        (false, 3) => true,
        _ => false,
    }
}

/// Computes the generation following `prev` under the Game of Life rule.
///
/// Every neighbour count is taken from `prev`, so all cells change simultaneously. Only the
/// interior is evaluated: the outermost ring of cells is always dead in the result.
pub fn next_generation(prev: &Grid) -> Grid {
    let mut next = Grid::new();
    for y in 1..Grid::HEIGHT - 1 {
        for x in 1..Grid::WIDTH - 1 {
            let alive = next_state(prev.is_alive(x, y), prev.live_neighbours(x, y));
            if alive {
                next.set_alive(x, y, true);
            }
        }
    }
    next
}

impl Grid {
    /// Advances the field by one generation, replacing all of its cells at once.
    pub fn step(&mut self) {
        *self = next_generation(self);
    }
}

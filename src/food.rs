use std::collections::VecDeque;

use rand::Rng;

use crate::config::GridGeometry;
use crate::snake::Cell;

/// Food currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    /// Creates food at a fixed `position`.
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Spawns food on a cell not covered by `body`.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        geometry: GridGeometry,
        body: &VecDeque<Cell>,
    ) -> Self {
        Self::at(free_cell(rng, geometry, body))
    }

    /// Moves the food to a random cell not covered by `body`.
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        geometry: GridGeometry,
        body: &VecDeque<Cell>,
    ) {
        self.position = free_cell(rng, geometry, body);
    }
}

/// Draws a uniformly random cell on the board.
#[must_use]
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, geometry: GridGeometry) -> Cell {
    let count = i32::from(geometry.cell_count);
    Cell::new(rng.gen_range(0..count), rng.gen_range(0..count))
}

/// Returns true if `cell` is one of `cells`.
#[must_use]
pub fn occupies(cells: &VecDeque<Cell>, cell: Cell) -> bool {
    cells.iter().any(|occupied| *occupied == cell)
}

/// Rejection-samples random cells until one is free of `body`.
///
/// Never returns if `body` covers the whole board.
fn free_cell<R: Rng + ?Sized>(
    rng: &mut R,
    geometry: GridGeometry,
    body: &VecDeque<Cell>,
) -> Cell {
    debug_assert!(geometry.cell_count > 0);
    debug_assert!(
        body.len() < geometry.total_cells(),
        "no free cells on a {0}×{0} board",
        geometry.cell_count,
    );

    loop {
        let candidate = random_cell(rng, geometry);
        if !occupies(body, candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridGeometry;
    use crate::snake::{Cell, Snake};

    use super::{occupies, random_cell, Food};

    fn small_board() -> GridGeometry {
        GridGeometry {
            cell_size: 1,
            cell_count: 3,
            offset: 0,
        }
    }

    #[test]
    fn random_cell_stays_on_board() {
        let mut rng = StdRng::seed_from_u64(11);
        let geometry = GridGeometry::default();

        for _ in 0..1_000 {
            assert!(geometry.contains(random_cell(&mut rng, geometry)));
        }
    }

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::new();
        let geometry = GridGeometry::default();

        for _ in 0..200 {
            let food = Food::spawn(&mut rng, geometry, snake.body());
            assert!(!snake.occupies(food.position));
        }
    }

    #[test]
    fn relocate_finds_the_only_free_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        let geometry = small_board();
        let mut body: VecDeque<Cell> = VecDeque::new();
        for y in 0..3 {
            for x in 0..3 {
                body.push_back(Cell::new(x, y));
            }
        }
        let free = Cell::new(2, 1);
        body.retain(|cell| *cell != free);

        let mut food = Food::at(Cell::new(0, 0));
        food.relocate(&mut rng, geometry, &body);

        assert_eq!(food.position, free);
    }

    #[test]
    fn occupancy_check_scans_whole_sequence() {
        let body = VecDeque::from(vec![Cell::new(1, 1), Cell::new(2, 1), Cell::new(3, 1)]);

        assert!(occupies(&body, Cell::new(1, 1)));
        assert!(occupies(&body, Cell::new(3, 1)));
        assert!(!occupies(&body, Cell::new(4, 1)));
    }
}

//! The generation engine: pure transition from one world to the next.

use crate::world::World;
use tracing::trace;

/// The 8 neighbor offsets around a cell.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Compute the next generation of a world.
///
/// Classic Life rule: a live cell with 2 or 3 live neighbors survives, a
/// dead cell with exactly 3 comes alive, everything else is dead. Results
/// go into a fresh buffer, so every neighbor read observes the input
/// generation and never a partially built one.
pub fn next_generation(world: &World) -> World {
    let mut next_cells = vec![false; world.cells.len()];

    for (index, next_cell) in next_cells.iter_mut().enumerate() {
        let pos = world.position_of(index);
        let neighbors = live_neighbors(world, pos.row, pos.col);
        *next_cell = matches!(
            (world.get(pos.row, pos.col), neighbors),
            (true, 2) | (true, 3) | (false, 3)
        );
    }

    let mut next = World {
        dimension: world.dimension,
        cells: next_cells,
        generation: world.generation + 1,
        population: 0,
    };
    next.population = next.recount_population();
    trace!(
        generation = next.generation,
        population = next.population,
        "computed next generation"
    );
    next
}

/// Count live neighbors of a cell, each axis wrapped independently.
///
/// On a 1x1 grid all 8 offsets wrap back to the cell itself, so a live
/// lone cell counts 8 and dies on the next step. The wrap stays uniform
/// for degenerate grids rather than being special-cased.
pub fn live_neighbors(world: &World, row: i32, col: i32) -> u8 {
    NEIGHBOR_OFFSETS
        .into_iter()
        .filter(|&(drow, dcol)| world.get(row + drow, col + dcol))
        .count() as u8
}

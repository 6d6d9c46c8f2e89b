//! Grid-wide worker and goods pools.
//!
//! Pools are never cached: every query sums the grid as it is right now, and
//! every deduction takes from the first qualifying cell in row-major order.

use crate::grid::{Coord, Grid};
use crate::zone::ZoneType;

/// Workers taken from a residential cell per job filled.
pub const WORKERS_PER_JOB: u32 = 2;

/// Sum of available workers over every cell.
pub fn available_workers(grid: &Grid) -> u32 {
    grid.cells().map(|(_, cell)| cell.available_workers).sum()
}

/// Sum of available goods over industrial cells.
pub fn available_goods(grid: &Grid) -> u32 {
    grid.cells()
        .filter(|(_, cell)| cell.zone == ZoneType::Industrial)
        .map(|(_, cell)| cell.available_goods)
        .sum()
}

/// Deducts a job's worth of workers from the first residential cell that can
/// cover it. Returns the cell that paid, or `None` when no single cell could.
pub fn assign_worker_to_job(grid: &mut Grid) -> Option<Coord> {
    let at = grid
        .cells()
        .find(|(_, cell)| {
            cell.zone == ZoneType::Residential && cell.available_workers >= WORKERS_PER_JOB
        })
        .map(|(at, _)| at)?;
    grid[at].available_workers -= WORKERS_PER_JOB;
    Some(at)
}

/// Deducts one good from the first industrial cell holding any.
pub fn assign_good_to_cell(grid: &mut Grid) -> Option<Coord> {
    let at = grid
        .cells()
        .find(|(_, cell)| cell.zone == ZoneType::Industrial && cell.available_goods > 0)
        .map(|(at, _)| at)?;
    grid[at].available_goods -= 1;
    Some(at)
}

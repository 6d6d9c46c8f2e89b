use anyhow::Result;
use tracing::debug;

use crate::{
    engine::{System, SystemContext},
    grid::Grid,
    resources::{assign_good_to_cell, assign_worker_to_job, available_goods, available_workers},
    zone::ZoneType,
};

use super::growth::{has_adjacent_power, meets_density, rank, Candidate};

pub struct CommercialGrowthSystem;

impl CommercialGrowthSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CommercialGrowthSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for CommercialGrowthSystem {
    fn name(&self) -> &str {
        "commercial"
    }

    fn run(&mut self, ctx: &SystemContext, grid: &mut Grid) -> Result<()> {
        let grown = grow(grid);
        debug!(timestep = ctx.timestep, grown, "commercial growth");
        Ok(())
    }
}

/// Commercial cells eligible to grow this pass, ranked. Every tier needs at
/// least one worker and one good in the pools; an empty cell also needs a
/// live power line next to it.
pub fn candidates(grid: &Grid) -> Vec<Candidate> {
    if available_workers(grid) < 1 || available_goods(grid) < 1 {
        return Vec::new();
    }
    let mut candidates: Vec<Candidate> = grid
        .cells()
        .filter(|(_, cell)| cell.zone == ZoneType::Commercial)
        .filter(|&(at, cell)| match cell.population {
            0 => has_adjacent_power(grid, at),
            p if p < ZoneType::Commercial.max_population() => meets_density(grid, at, p),
            _ => false,
        })
        .map(|(at, cell)| Candidate {
            at,
            population: cell.population,
        })
        .collect();
    rank(&mut candidates);
    candidates
}

/// Grows every candidate, each taking a job's worth of workers and one good
/// from the pools. Pools are not re-checked, so deductions simply stop
/// landing once no single cell can cover them.
pub fn grow(grid: &mut Grid) -> usize {
    let candidates = candidates(grid);
    for candidate in &candidates {
        grid[candidate.at].population += 1;
        assign_worker_to_job(grid);
        assign_good_to_cell(grid);
    }
    candidates.len()
}

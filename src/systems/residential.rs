use anyhow::Result;
use tracing::debug;

use crate::{
    engine::{System, SystemContext},
    grid::Grid,
    zone::ZoneType,
};

use super::growth::{can_settle, meets_density, rank, Candidate};

pub struct ResidentialGrowthSystem;

impl ResidentialGrowthSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ResidentialGrowthSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for ResidentialGrowthSystem {
    fn name(&self) -> &str {
        "residential"
    }

    fn run(&mut self, ctx: &SystemContext, grid: &mut Grid) -> Result<()> {
        let grown = grow(grid);
        debug!(timestep = ctx.timestep, grown, "residential growth");
        Ok(())
    }
}

/// Residential cells eligible to grow this pass, ranked.
pub fn candidates(grid: &Grid) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = grid
        .cells()
        .filter(|(_, cell)| cell.zone == ZoneType::Residential)
        .filter(|&(at, cell)| match cell.population {
            0 => can_settle(grid, at),
            p if p < ZoneType::Residential.max_population() => meets_density(grid, at, p),
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

/// Grows every candidate by one; each grown cell offers its whole population
/// as workers. Returns the number of cells grown.
pub fn grow(grid: &mut Grid) -> usize {
    let candidates = candidates(grid);
    for candidate in &candidates {
        let cell = &mut grid[candidate.at];
        cell.population += 1;
        cell.available_workers = cell.population;
    }
    candidates.len()
}

use anyhow::Result;
use tracing::debug;

use crate::{
    engine::{System, SystemContext},
    grid::Grid,
    resources::{assign_worker_to_job, available_workers, WORKERS_PER_JOB},
    zone::ZoneType,
};

use super::growth::{can_settle, meets_density, rank, Candidate};

pub struct IndustrialGrowthSystem;

impl IndustrialGrowthSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IndustrialGrowthSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for IndustrialGrowthSystem {
    fn name(&self) -> &str {
        "industrial"
    }

    fn run(&mut self, ctx: &SystemContext, grid: &mut Grid) -> Result<()> {
        let grown = grow(grid);
        debug!(timestep = ctx.timestep, grown, "industrial growth");
        Ok(())
    }
}

/// Industrial cells eligible to grow this pass, ranked. Every tier needs a
/// job's worth of workers in the pool.
pub fn candidates(grid: &Grid) -> Vec<Candidate> {
    if available_workers(grid) < WORKERS_PER_JOB {
        return Vec::new();
    }
    let mut candidates: Vec<Candidate> = grid
        .cells()
        .filter(|(_, cell)| cell.zone == ZoneType::Industrial)
        .filter(|&(at, cell)| match cell.population {
            0 => can_settle(grid, at),
            p if p < ZoneType::Industrial.max_population() => meets_density(grid, at, p),
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

/// Applies growth in ranked order while the worker pool still holds a job's
/// worth of workers. Candidates reached after the pool runs dry are skipped
/// for this pass. Returns the number of cells grown.
pub fn grow(grid: &mut Grid) -> usize {
    let mut grown = 0;
    for candidate in candidates(grid) {
        if available_workers(grid) < WORKERS_PER_JOB {
            continue;
        }
        grid[candidate.at].population += 1;
        assign_worker_to_job(grid);
        let cell = &mut grid[candidate.at];
        cell.available_goods += cell.population;
        grown += 1;
    }
    grown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coord;
    use crate::systems::power::update_power;

    #[test]
    fn needs_workers_to_start() {
        let mut grid = Grid::from_layout("P,T,I\n , ,R\n").unwrap();
        update_power(&mut grid);
        assert!(candidates(&grid).is_empty());

        grid[Coord::new(1, 2)].available_workers = 2;
        assert_eq!(candidates(&grid).len(), 1);
    }

    #[test]
    fn growth_consumes_workers_and_produces_goods() {
        let mut grid = Grid::from_layout("P,T,I\n , ,R\n").unwrap();
        update_power(&mut grid);
        grid[Coord::new(1, 2)].available_workers = 3;

        assert_eq!(grow(&mut grid), 1);
        let factory = &grid[Coord::new(0, 2)];
        assert_eq!(factory.population, 1);
        assert_eq!(factory.available_goods, 1);
        assert_eq!(grid[Coord::new(1, 2)].available_workers, 1);
    }

    #[test]
    fn goods_scale_with_new_population() {
        let mut grid = Grid::from_layout("I,I,I\nR,R,R\n").unwrap();
        for at in grid.coords().collect::<Vec<_>>() {
            grid[at].population = 1;
        }
        grid[Coord::new(1, 0)].available_workers = 6;
        grid[Coord::new(0, 1)].available_goods = 1;

        grow(&mut grid);
        let factory = &grid[Coord::new(0, 1)];
        assert_eq!(factory.population, 2);
        assert_eq!(factory.available_goods, 3);
    }

    #[test]
    fn ranked_candidates_drain_the_pool_first_come_first_served() {
        let mut grid = Grid::from_layout("P,T,I\nI,T,I\nR, , \n").unwrap();
        update_power(&mut grid);
        grid[Coord::new(2, 0)].available_workers = 2;

        assert_eq!(candidates(&grid).len(), 3);
        assert_eq!(grow(&mut grid), 1);
        assert_eq!(grid[Coord::new(0, 2)].population, 1);
        assert_eq!(grid[Coord::new(1, 0)].population, 0);
        assert_eq!(grid[Coord::new(1, 2)].population, 0);
        assert_eq!(grid[Coord::new(2, 0)].available_workers, 0);
    }

    #[test]
    fn denser_factory_takes_the_workers_before_an_earlier_row() {
        let mut grid = Grid::from_layout("I,R, \nR,I, \n , ,R\n").unwrap();
        grid[Coord::new(0, 1)].population = 1;
        grid[Coord::new(1, 0)].population = 1;
        grid[Coord::new(1, 1)].population = 1;
        let home = Coord::new(2, 2);
        grid[home].population = 2;
        grid[home].available_workers = 2;

        let ranked: Vec<_> = candidates(&grid).iter().map(|c| c.at).collect();
        assert_eq!(ranked, vec![Coord::new(1, 1), Coord::new(0, 0)]);

        assert_eq!(grow(&mut grid), 1);
        assert_eq!(grid[Coord::new(1, 1)].population, 2);
        assert_eq!(grid[Coord::new(1, 1)].available_goods, 2);
        assert_eq!(grid[Coord::new(0, 0)].population, 0);
        assert_eq!(grid[home].available_workers, 0);
    }

    #[test]
    fn split_workers_pass_the_guard_without_being_deducted() {
        let mut grid = Grid::from_layout("P,T,I\nR,R, \n").unwrap();
        update_power(&mut grid);
        grid[Coord::new(1, 0)].available_workers = 1;
        grid[Coord::new(1, 1)].available_workers = 1;

        assert_eq!(grow(&mut grid), 1);
        assert_eq!(grid[Coord::new(0, 2)].population, 1);
        assert_eq!(available_workers(&grid), 2);
    }

    #[test]
    fn full_factories_never_grow() {
        let mut grid = Grid::new(3, 3, ZoneType::Industrial).unwrap();
        for at in grid.coords().collect::<Vec<_>>() {
            grid[at].population = 2;
        }
        grid[Coord::new(0, 0)].available_workers = 10;
        assert!(candidates(&grid).is_empty());
    }
}

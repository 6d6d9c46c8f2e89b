use std::collections::VecDeque;

use anyhow::Result;
use tracing::debug;

use crate::{
    engine::{System, SystemContext},
    grid::{Coord, Grid},
    zone::ZoneType,
};

pub struct PowerSystem;

impl PowerSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PowerSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for PowerSystem {
    fn name(&self) -> &str {
        "power"
    }

    fn run(&mut self, ctx: &SystemContext, grid: &mut Grid) -> Result<()> {
        let powered = update_power(grid);
        debug!(timestep = ctx.timestep, powered, "power propagated");
        Ok(())
    }
}

/// Energises every power line reachable from a plant, then every zoned
/// neighbour of a live line. Never clears power, so repeated calls are
/// idempotent. Returns the number of powered cells afterwards.
pub fn update_power(grid: &mut Grid) -> usize {
    let plants: Vec<Coord> = grid
        .cells()
        .filter(|(_, cell)| cell.zone == ZoneType::PowerPlant)
        .map(|(at, _)| at)
        .collect();
    if plants.is_empty() {
        return count_powered(grid);
    }

    for plant in plants {
        propagate_from(grid, plant);
    }
    energise_line_neighbors(grid);
    count_powered(grid)
}

fn propagate_from(grid: &mut Grid, plant: Coord) {
    grid[plant].is_powered = true;
    let mut queue = VecDeque::from([plant]);

    while let Some(at) = queue.pop_front() {
        let next: Vec<Coord> = grid
            .neighbors8(at)
            .filter(|&n| grid[n].zone.is_power_line() && !grid[n].is_powered)
            .collect();
        for n in next {
            grid[n].is_powered = true;
            queue.push_back(n);
        }
    }
}

fn energise_line_neighbors(grid: &mut Grid) {
    let live_lines: Vec<Coord> = grid
        .cells()
        .filter(|(_, cell)| cell.zone.is_power_line() && cell.is_powered)
        .map(|(at, _)| at)
        .collect();

    for line in live_lines {
        let targets: Vec<Coord> = grid
            .neighbors8(line)
            .filter(|&n| grid[n].zone != ZoneType::Empty)
            .collect();
        for n in targets {
            grid[n].is_powered = true;
        }
    }
}

fn count_powered(grid: &Grid) -> usize {
    grid.cells().filter(|(_, cell)| cell.is_powered).count()
}

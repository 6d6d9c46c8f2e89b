use std::collections::VecDeque;

use anyhow::Result;
use tracing::debug;

use crate::{
    engine::{System, SystemContext},
    grid::{Coord, Grid},
    zone::ZoneType,
};

pub struct PollutionSystem;

impl PollutionSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PollutionSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for PollutionSystem {
    fn name(&self) -> &str {
        "pollution"
    }

    fn run(&mut self, ctx: &SystemContext, grid: &mut Grid) -> Result<()> {
        let raised = spread_pollution(grid);
        debug!(timestep = ctx.timestep, raised, "pollution spread");
        Ok(())
    }
}

/// Spreads pollution outward from populated industrial cells, dropping one
/// level per step. A cell is only ever raised, never lowered. Returns how many
/// times a cell was raised.
pub fn spread_pollution(grid: &mut Grid) -> usize {
    let mut queue: VecDeque<(Coord, u32)> = grid
        .cells()
        .filter(|(_, cell)| cell.zone == ZoneType::Industrial && cell.population > 0)
        .map(|(at, cell)| (at, cell.population))
        .collect();

    let mut raised = 0;
    while let Some((at, level)) = queue.pop_front() {
        let decayed = level.saturating_sub(1);
        if decayed == 0 {
            continue;
        }
        let targets: Vec<Coord> = grid
            .neighbors8(at)
            .filter(|&n| grid[n].pollution < decayed)
            .collect();
        for n in targets {
            grid[n].pollution = decayed;
            queue.push_back((n, decayed));
            raised += 1;
        }
    }
    raised
}

mod change;

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    error::EngineError,
    grid::Grid,
    snapshot::SnapshotWriter,
    stats::Stats,
    systems::{
        CommercialGrowthSystem, IndustrialGrowthSystem, PollutionSystem, PowerSystem,
        ResidentialGrowthSystem,
    },
};

pub use change::ChangeTracker;

pub struct EngineSettings {
    pub scenario_name: String,
    pub time_limit: u64,
    pub refresh_rate: u64,
    pub snapshot_interval_ticks: u64,
    pub snapshot_dir: PathBuf,
}

impl EngineSettings {
    pub fn new(scenario_name: impl Into<String>, time_limit: u64, refresh_rate: u64) -> Self {
        Self {
            scenario_name: scenario_name.into(),
            time_limit,
            refresh_rate,
            snapshot_interval_ticks: 0,
            snapshot_dir: PathBuf::from("snapshots"),
        }
    }
}

pub struct EngineBuilder {
    settings: EngineSettings,
    systems: Vec<Box<dyn System>>,
}

impl EngineBuilder {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            systems: Vec::new(),
        }
    }

    pub fn with_system(mut self, system: impl System + 'static) -> Self {
        self.systems.push(Box::new(system));
        self
    }

    /// Power, then residential, industrial and commercial growth, then pollution.
    pub fn with_default_systems(self) -> Self {
        self.with_system(PowerSystem::new())
            .with_system(ResidentialGrowthSystem::new())
            .with_system(IndustrialGrowthSystem::new())
            .with_system(CommercialGrowthSystem::new())
            .with_system(PollutionSystem::new())
    }

    pub fn build(self) -> Result<Engine, EngineError> {
        if self.settings.refresh_rate == 0 {
            return Err(EngineError::ZeroRefreshRate);
        }
        Ok(Engine {
            systems: self.systems,
            snapshot_writer: SnapshotWriter::new(
                &self.settings.snapshot_dir,
                self.settings.snapshot_interval_ticks,
            ),
            settings: self.settings,
        })
    }
}

pub struct Engine {
    systems: Vec<Box<dyn System>>,
    snapshot_writer: SnapshotWriter,
    settings: EngineSettings,
}

impl Engine {
    pub fn run(&mut self, grid: &mut Grid) -> Result<RunSummary> {
        self.run_with_hook(grid, |_| {})
    }

    pub fn run_with_hook<F>(&mut self, grid: &mut Grid, hook: F) -> Result<RunSummary>
    where
        F: FnMut(&Frame<'_>),
    {
        self.run_with_hooks(grid, |_| {}, hook)
    }

    /// Runs timesteps until the time limit is hit or a timestep leaves every
    /// population unchanged. `on_tick` is called with the timestep number
    /// before each timestep runs; `hook` sees every reporting frame, ending
    /// with the final state.
    pub fn run_with_hooks<T, F>(
        &mut self,
        grid: &mut Grid,
        mut on_tick: T,
        mut hook: F,
    ) -> Result<RunSummary>
    where
        T: FnMut(u64),
        F: FnMut(&Frame<'_>),
    {
        let mut tracker = ChangeTracker::capture(grid);
        let mut step = 0_u64;
        let mut changed = true;

        while step < self.settings.time_limit && changed {
            let timestep = step + 1;
            on_tick(timestep);
            let ctx = SystemContext {
                timestep,
                scenario_name: &self.settings.scenario_name,
            };
            for system in &mut self.systems {
                system.run(&ctx, grid).with_context(|| {
                    format!("system '{}' failed at timestep {timestep}", system.name())
                })?;
            }

            changed = tracker.update(grid);
            debug!(timestep, changed, "timestep complete");

            if step % self.settings.refresh_rate == 0 || !changed {
                hook(&Frame::new(timestep, grid, false));
            }
            self.snapshot_writer
                .maybe_write(grid, &self.settings.scenario_name, timestep)?;
            step += 1;
        }

        let termination = if changed {
            Termination::TimeLimit
        } else {
            Termination::Stable
        };
        let frame = Frame::new(step, grid, true);
        info!(
            scenario = %self.settings.scenario_name,
            ticks = step,
            ?termination,
            population = frame.stats.total_population,
            "simulation complete"
        );
        hook(&frame);

        Ok(RunSummary {
            ticks_run: step,
            termination,
            stats: frame.stats,
        })
    }
}

/// What a reporter sees: the grid and its totals after `timestep`.
pub struct Frame<'a> {
    pub timestep: u64,
    pub stats: Stats,
    pub grid: &'a Grid,
    pub is_final: bool,
}

impl<'a> Frame<'a> {
    fn new(timestep: u64, grid: &'a Grid, is_final: bool) -> Self {
        Self {
            timestep,
            stats: Stats::collect(grid),
            grid,
            is_final,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Termination {
    TimeLimit,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub ticks_run: u64,
    pub termination: Termination,
    pub stats: Stats,
}

pub struct SystemContext<'a> {
    pub timestep: u64,
    pub scenario_name: &'a str,
}

/// One pass over the grid, run once per timestep in pipeline order.
pub trait System {
    fn name(&self) -> &str;
    fn run(&mut self, ctx: &SystemContext, grid: &mut Grid) -> Result<()>;
}

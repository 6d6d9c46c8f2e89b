use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Grid};
use crate::stats::Stats;

#[derive(Debug, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub scenario: String,
    pub timestep: u64,
    pub written_at: DateTime<Utc>,
    pub rows: usize,
    pub cols: usize,
    pub stats: Stats,
    pub cells: Vec<Vec<Cell>>,
}

impl GridSnapshot {
    pub fn capture(grid: &Grid, scenario: &str, timestep: u64) -> Self {
        Self {
            scenario: scenario.to_string(),
            timestep,
            written_at: Utc::now(),
            rows: grid.rows(),
            cols: grid.cols(),
            stats: Stats::collect(grid),
            cells: grid.iter_rows().map(<[Cell]>::to_vec).collect(),
        }
    }
}

/// Writes `<dir>/<scenario>/tick_NNNNNN.json` every `interval` timesteps.
/// An interval of zero disables snapshots.
pub struct SnapshotWriter {
    dir: PathBuf,
    interval: u64,
}

impl SnapshotWriter {
    pub fn new(dir: impl AsRef<Path>, interval: u64) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            interval,
        }
    }

    pub fn maybe_write(
        &self,
        grid: &Grid,
        scenario: &str,
        timestep: u64,
    ) -> Result<Option<PathBuf>> {
        if self.interval == 0 || timestep % self.interval != 0 {
            return Ok(None);
        }

        let dir = self.dir.join(scenario);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create snapshot dir {}", dir.display()))?;
        let path = dir.join(format!("tick_{timestep:06}.json"));
        let snapshot = GridSnapshot::capture(grid, scenario, timestep);
        let json = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
        tracing::debug!(path = %path.display(), "snapshot written");
        Ok(Some(path))
    }
}

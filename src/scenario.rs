use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{config::Config, engine::EngineSettings, grid::Grid};

/// A loaded config together with the region it points at.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub config: Config,
    pub layout_path: PathBuf,
    pub grid: Grid,
}

impl Scenario {
    pub fn build_grid(&self) -> Grid {
        self.grid.clone()
    }

    pub fn ticks(&self, override_ticks: Option<u64>) -> u64 {
        override_ticks.unwrap_or(self.config.time_limit)
    }

    pub fn engine_settings(&self, override_ticks: Option<u64>) -> EngineSettings {
        EngineSettings::new(
            self.name.clone(),
            self.ticks(override_ticks),
            self.config.refresh_rate,
        )
    }
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Reads a config file (line format, or YAML for `.yaml`/`.yml`), then the
    /// region layout it names, resolved next to the config file.
    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = if is_yaml(&path) {
            serde_yaml::from_str::<Config>(&data)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            Config::from_text(&data)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        };
        config
            .validate()
            .with_context(|| format!("Invalid config {}", path.display()))?;

        let layout_path = path
            .parent()
            .map(|dir| dir.join(&config.region_layout))
            .unwrap_or_else(|| PathBuf::from(&config.region_layout));
        let layout = fs::read_to_string(&layout_path).with_context(|| {
            format!("Failed to read region layout {}", layout_path.display())
        })?;
        let grid = Grid::from_layout(&layout)
            .with_context(|| format!("Failed to parse {}", layout_path.display()))?;

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "region".to_string());
        tracing::info!(
            scenario = %name,
            rows = grid.rows(),
            cols = grid.cols(),
            "scenario loaded"
        );

        Ok(Scenario {
            name,
            config,
            layout_path,
            grid,
        })
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

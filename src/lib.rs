pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod render;
pub mod resources;
pub mod scenario;
pub mod snapshot;
pub mod stats;
pub mod systems;
pub mod zone;

pub use config::Config;
pub use engine::{Engine, EngineBuilder, EngineSettings, Frame, RunSummary, Termination};
pub use grid::{Cell, Coord, Grid};
pub use stats::Stats;
pub use zone::ZoneType;

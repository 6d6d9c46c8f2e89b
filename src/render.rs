//! Plain-text views of a region for the console.

use std::fmt::Write;

use crate::{
    config::Config,
    grid::{Cell, Grid},
    stats::Stats,
};

const CELL_WIDTH: usize = 6;

pub fn config(config: &Config) -> String {
    format!(
        "Configuration:\n- Region Layout File: {}\n- Time Limit: {}\n- Refresh Rate: {}\n",
        config.region_layout, config.time_limit, config.refresh_rate
    )
}

/// Bordered map, one fixed-width centred column per cell.
pub fn map(grid: &Grid) -> String {
    let border = format!("=={}==\n", "=".repeat(grid.cols() * CELL_WIDTH));
    let mut out = border.clone();
    for row in grid.iter_rows() {
        out.push_str("||");
        for cell in row {
            let label = cell_label(cell);
            let _ = write!(out, "{label:^width$}", width = CELL_WIDTH);
        }
        out.push_str("||\n");
    }
    out.push_str(&border);
    out
}

pub fn stats(stats: &Stats) -> String {
    format!(
        "Power: {}\nTotal Population: {}\nTotal Goods: {}\nTotal Workers: {}\nTotal Pollution: {}\n",
        if stats.power_on { "On" } else { "Off" },
        stats.total_population,
        stats.total_goods,
        stats.total_workers,
        stats.total_pollution
    )
}

/// Populated zones show their population, empty zones their letter. Pollution
/// is shown on everything except unpopulated zones.
fn cell_label(cell: &Cell) -> String {
    if cell.zone.is_zoned() && cell.population == 0 {
        return cell.zone.to_string();
    }
    let mut label = if cell.zone.is_zoned() {
        cell.population.to_string()
    } else {
        cell.zone.to_string()
    };
    if cell.pollution > 0 {
        let _ = write!(label, "({})", cell.pollution);
    }
    label
}

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Region-wide totals handed to reporters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub power_on: bool,
    pub total_population: u64,
    pub total_goods: u64,
    pub total_workers: u64,
    pub total_pollution: u64,
}

impl Stats {
    pub fn collect(grid: &Grid) -> Self {
        grid.cells().fold(Stats::default(), |mut stats, (_, cell)| {
            stats.power_on |= cell.is_powered;
            stats.total_population += u64::from(cell.population);
            stats.total_goods += u64::from(cell.available_goods);
            stats.total_workers += u64::from(cell.available_workers);
            stats.total_pollution += u64::from(cell.pollution);
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coord;
    use crate::zone::ZoneType;

    #[test]
    fn totals_sum_over_all_cells() {
        let mut grid = Grid::new(2, 2, ZoneType::Residential).unwrap();
        grid[Coord::new(0, 0)].population = 2;
        grid[Coord::new(0, 0)].available_workers = 2;
        grid[Coord::new(1, 1)].population = 1;
        grid[Coord::new(1, 1)].pollution = 3;
        grid[Coord::new(0, 1)].available_goods = 4;

        let stats = Stats::collect(&grid);
        assert!(!stats.power_on);
        assert_eq!(stats.total_population, 3);
        assert_eq!(stats.total_workers, 2);
        assert_eq!(stats.total_goods, 4);
        assert_eq!(stats.total_pollution, 3);

        grid[Coord::new(1, 0)].is_powered = true;
        assert!(Stats::collect(&grid).power_on);
    }
}

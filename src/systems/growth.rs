//! Eligibility helpers and candidate ranking shared by the zone growth passes.
//!
//! Each pass first materialises its candidate list against the grid as it
//! stood before the pass, then applies growth in ranked order.

use std::cmp::Reverse;

use crate::grid::{Coord, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub at: Coord,
    pub population: u32,
}

/// Number of neighbours whose population is at least `min_population`.
pub fn count_adjacent_population(grid: &Grid, at: Coord, min_population: u32) -> usize {
    grid.neighbors8(at)
        .filter(|&n| grid[n].population >= min_population)
        .count()
}

/// Whether any neighbour is a live power line.
pub fn has_adjacent_power(grid: &Grid, at: Coord) -> bool {
    grid.neighbors8(at).any(|n| {
        let cell = &grid[n];
        cell.zone.is_power_line() && cell.is_powered
    })
}

/// Density requirement for growing past `population` (>= 1): at least
/// `2 * population` neighbours with population `population` or more.
pub fn meets_density(grid: &Grid, at: Coord, population: u32) -> bool {
    count_adjacent_population(grid, at, population) >= 2 * population as usize
}

/// Requirement for an empty residential or industrial cell to start growing.
pub fn can_settle(grid: &Grid, at: Coord) -> bool {
    has_adjacent_power(grid, at) || count_adjacent_population(grid, at, 1) > 0
}

/// Highest population first, then lowest row, then lowest column.
pub fn rank(candidates: &mut [Candidate]) {
    candidates.sort_by_key(|c| (Reverse(c.population), c.at.row, c.at.col));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::ZoneType;

    #[test]
    fn ranking_prefers_population_then_row_then_column() {
        let mut candidates = vec![
            Candidate {
                at: Coord::new(0, 0),
                population: 0,
            },
            Candidate {
                at: Coord::new(2, 1),
                population: 1,
            },
            Candidate {
                at: Coord::new(1, 3),
                population: 1,
            },
            Candidate {
                at: Coord::new(1, 2),
                population: 1,
            },
            Candidate {
                at: Coord::new(3, 3),
                population: 2,
            },
        ];
        rank(&mut candidates);

        let order: Vec<_> = candidates.iter().map(|c| c.at).collect();
        assert_eq!(
            order,
            vec![
                Coord::new(3, 3),
                Coord::new(1, 2),
                Coord::new(1, 3),
                Coord::new(2, 1),
                Coord::new(0, 0),
            ]
        );
    }

    #[test]
    fn adjacent_population_respects_threshold() {
        let mut grid = Grid::new(3, 3, ZoneType::Residential).unwrap();
        grid[Coord::new(0, 0)].population = 1;
        grid[Coord::new(0, 1)].population = 2;
        grid[Coord::new(2, 2)].population = 3;
        grid[Coord::new(1, 1)].population = 4;

        let center = Coord::new(1, 1);
        assert_eq!(count_adjacent_population(&grid, center, 1), 3);
        assert_eq!(count_adjacent_population(&grid, center, 2), 2);
        assert_eq!(count_adjacent_population(&grid, center, 3), 1);
        assert_eq!(count_adjacent_population(&grid, center, 0), 8);
    }

    #[test]
    fn unpowered_lines_do_not_count_as_power() {
        let mut grid = Grid::from_layout("T,R\n").unwrap();
        let at = Coord::new(0, 1);
        assert!(!has_adjacent_power(&grid, at));

        grid[Coord::new(0, 0)].is_powered = true;
        assert!(has_adjacent_power(&grid, at));
    }

    #[test]
    fn powered_non_line_neighbors_do_not_count() {
        let mut grid = Grid::from_layout("P,R\n").unwrap();
        grid[Coord::new(0, 0)].is_powered = true;
        assert!(!has_adjacent_power(&grid, Coord::new(0, 1)));
    }

    #[test]
    fn density_tiers_double_with_population() {
        let mut grid = Grid::new(3, 3, ZoneType::Residential).unwrap();
        let center = Coord::new(1, 1);
        for at in [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)] {
            grid[at].population = 2;
        }
        assert!(meets_density(&grid, center, 1));
        assert!(!meets_density(&grid, center, 2));

        grid[Coord::new(2, 0)].population = 2;
        assert!(meets_density(&grid, center, 2));
    }
}

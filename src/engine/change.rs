use crate::grid::Grid;

/// Populations as of the previous timestep, owned by a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeTracker {
    previous: Vec<u32>,
}

impl ChangeTracker {
    pub fn capture(grid: &Grid) -> Self {
        Self {
            previous: grid.populations(),
        }
    }

    /// Returns whether any population differs from the last capture, and
    /// records the current populations either way.
    pub fn update(&mut self, grid: &Grid) -> bool {
        let current = grid.populations();
        let changed = current != self.previous;
        self.previous = current;
        changed
    }
}

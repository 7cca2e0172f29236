//! Month cell and month grid models.
//!
//! A year view shows twelve cells laid out as four rows of three months.
//! Cells are value objects: a rebuild replaces the whole grid.

use serde::{Deserialize, Serialize};

pub const MONTHS_PER_YEAR: u32 = 12;
pub const MONTHS_PER_ROW: u32 = 3;
pub const GRID_ROWS: u32 = MONTHS_PER_YEAR / MONTHS_PER_ROW;

/// The renderable descriptor for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCell {
    /// 0-based month index
    pub value: u32,
    /// Short display label, e.g. "Mar"
    pub label: String,
    /// Accessibility label, e.g. "March 2025"
    pub aria_label: String,
    /// Whether any day of the month can be picked
    pub enabled: bool,
}

impl MonthCell {
    pub fn new(
        value: u32,
        label: impl Into<String>,
        aria_label: impl Into<String>,
        enabled: bool,
    ) -> Self {
        Self {
            value,
            label: label.into(),
            aria_label: aria_label.into(),
            enabled,
        }
    }
}

/// Twelve month cells in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    rows: Vec<Vec<MonthCell>>,
}

impl MonthGrid {
    /// Arrange cells into rows of [`MONTHS_PER_ROW`].
    ///
    /// The cells must already be in month order.
    pub fn from_cells(cells: Vec<MonthCell>) -> Self {
        let mut rows = Vec::with_capacity(GRID_ROWS as usize);
        let mut row = Vec::with_capacity(MONTHS_PER_ROW as usize);
        for cell in cells {
            row.push(cell);
            if row.len() == MONTHS_PER_ROW as usize {
                rows.push(std::mem::take(&mut row));
            }
        }
        if !row.is_empty() {
            rows.push(row);
        }
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<MonthCell>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate all cells in month order.
    pub fn cells(&self) -> impl Iterator<Item = &MonthCell> {
        self.rows.iter().flatten()
    }

    /// Look up the cell for a 0-based month.
    pub fn cell(&self, month: u32) -> Option<&MonthCell> {
        let row = (month / MONTHS_PER_ROW) as usize;
        let col = (month % MONTHS_PER_ROW) as usize;
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Months whose cell is enabled.
    pub fn enabled_months(&self) -> Vec<u32> {
        self.cells().filter(|c| c.enabled).map(|c| c.value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells() -> Vec<MonthCell> {
        (0..MONTHS_PER_YEAR)
            .map(|m| MonthCell::new(m, format!("M{}", m), format!("Month {}", m), m % 2 == 0))
            .collect()
    }

    #[test]
    fn test_grid_is_four_by_three() {
        let grid = MonthGrid::from_cells(cells());
        assert_eq!(grid.rows().len(), 4);
        assert!(grid.rows().iter().all(|r| r.len() == 3));
    }

    #[test]
    fn test_cell_lookup_is_row_major() {
        let grid = MonthGrid::from_cells(cells());
        for m in 0..MONTHS_PER_YEAR {
            let cell = grid.cell(m).unwrap();
            assert_eq!(cell.value, m);
            assert_eq!(grid.rows()[(m / 3) as usize][(m % 3) as usize].value, m);
        }
        assert!(grid.cell(12).is_none());
    }

    #[test]
    fn test_enabled_months() {
        let grid = MonthGrid::from_cells(cells());
        assert_eq!(grid.enabled_months(), vec![0, 2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_default_grid_is_empty() {
        let grid = MonthGrid::default();
        assert!(grid.is_empty());
        assert_eq!(grid.cells().count(), 0);
    }
}

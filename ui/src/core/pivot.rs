//! Sparse observations → dense row × column matrix.
//!
//! Every (row, col) pair of the key cross-product has a defined state: a
//! value, or absent. Absent is not zero; a present `0.0` stays present.

use super::observation::{CategoryIndex, KeySet, Observation};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PivotMatrix {
    rows: KeySet,
    cols: KeySet,
    /// Row-major, `rows.len() * cols.len()` cells.
    cells: Vec<Option<f64>>,
}

impl PivotMatrix {
    /// Index the observations and pivot them in one go.
    pub fn from_observations(observations: &[Observation]) -> Self {
        let CategoryIndex { rows, cols } = CategoryIndex::from_observations(observations);
        Self::build(observations, rows, cols)
    }

    /// Pivot `observations` onto the given key sets.
    ///
    /// Duplicate (row, col) pairs overwrite: the last observation in input
    /// order wins, nothing is averaged. Observations whose keys are missing
    /// from the key sets are skipped. Values are stored untouched, NaN included.
    pub fn build(observations: &[Observation], rows: KeySet, cols: KeySet) -> Self {
        let mut cells = vec![None; rows.len() * cols.len()];
        let width = cols.len();

        for observation in observations {
            let (Some(r), Some(c)) = (rows.index_of(&observation.row), cols.index_of(&observation.col))
            else {
                continue;
            };
            cells[r * width + c] = Some(observation.value);
        }

        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> &KeySet {
        &self.rows
    }

    pub fn cols(&self) -> &KeySet {
        &self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows.len() || col >= self.cols.len() {
            return None;
        }
        self.cells[row * self.cols.len() + col]
    }

    pub fn get_by_key(&self, row: &str, col: &str) -> Option<f64> {
        self.get(self.rows.index_of(row)?, self.cols.index_of(col)?)
    }

    /// Cells of one row, in column order.
    pub fn row(&self, row: usize) -> &[Option<f64>] {
        let width = self.cols.len();
        let start = row * width;
        self.cells.get(start..start + width).unwrap_or(&[])
    }

    /// Present values in row-major order. Absent cells are skipped; non-finite
    /// values are yielded and left for the scale to reject.
    pub fn present_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().flatten().copied()
    }

    pub fn present_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

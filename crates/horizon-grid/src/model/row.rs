//! Dataset rows and their surrogate tokens.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use horizon_grid_core::CellValue;
use serde::{Deserialize, Serialize};

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// A stable identifier assigned to a row when it enters the dataset.
///
/// Tokens survive sorting, filtering and the deletion of other rows, so a
/// displayed row always resolves to exactly one dataset row even when two
/// rows have identical content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowToken(u64);

impl RowToken {
    fn next() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw token value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A dataset row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    token: RowToken,
    cells: Vec<CellValue>,
}

impl Row {
    /// Creates a row with a fresh token.
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self {
            token: RowToken::next(),
            cells,
        }
    }

    pub fn token(&self) -> RowToken {
        self.token
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// The raw value at `column`, or `Null` past the end of the row.
    pub fn cell(&self, column: usize) -> &CellValue {
        static NULL: CellValue = CellValue::Null;
        self.cells.get(column).unwrap_or(&NULL)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub(crate) fn set_cell(&mut self, column: usize, value: CellValue) {
        if let Some(cell) = self.cells.get_mut(column) {
            *cell = value;
        }
    }
}

/// Assigns tokens to raw rows.
pub(crate) fn ingest(rows: Vec<Vec<CellValue>>) -> Vec<Row> {
    rows.into_iter().map(Row::new).collect()
}

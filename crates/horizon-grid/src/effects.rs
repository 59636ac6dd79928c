//! Side-effect descriptors.
//!
//! Every engine operation returns a snapshot listing the [`Effect`]s the
//! presentation layer should run after committing it, such as notifying an
//! application callback that the sort changed. The engine never calls back
//! into the caller itself.

use horizon_grid_core::CellValue;
use serde::Serialize;

use crate::model::{FilterList, FilterValue, SortDirection};

/// Whether a column was shown or hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnAction {
    Add,
    Remove,
}

/// A notification produced by an engine operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Effect {
    /// A column's visibility changed.
    #[serde(rename = "onColumnViewChange")]
    ColumnViewChange {
        column: usize,
        name: String,
        action: ColumnAction,
    },

    /// A column was sorted.
    #[serde(rename = "onColumnSortChange")]
    ColumnSortChange {
        column: usize,
        name: String,
        direction: SortDirection,
    },

    /// The filter selection changed. `changed` is `None` after a reset.
    #[serde(rename = "onFilterChange")]
    FilterChange {
        column: Option<usize>,
        changed: Option<FilterValue>,
        filter_list: FilterList,
    },

    #[serde(rename = "onSearchChange")]
    SearchChange { text: Option<String> },

    #[serde(rename = "onChangePage")]
    ChangePage { page: usize },

    #[serde(rename = "onChangeRowsPerPage")]
    ChangeRowsPerPage { rows_per_page: usize },

    /// Selection changed. `changed` lists the rows the operation touched,
    /// `selected` the full selection afterwards.
    #[serde(rename = "onRowsSelect")]
    RowsSelect {
        changed: Vec<usize>,
        selected: Vec<usize>,
    },

    /// Rows were removed, listed by their index before removal.
    #[serde(rename = "onRowsDelete")]
    RowsDelete { deleted: Vec<usize> },

    #[serde(rename = "onCellEdit")]
    CellEdit {
        row: usize,
        column: usize,
        value: CellValue,
    },
}

impl Effect {
    /// The callback name this effect stands for.
    pub fn name(&self) -> &'static str {
        match self {
            Effect::ColumnViewChange { .. } => "onColumnViewChange",
            Effect::ColumnSortChange { .. } => "onColumnSortChange",
            Effect::FilterChange { .. } => "onFilterChange",
            Effect::SearchChange { .. } => "onSearchChange",
            Effect::ChangePage { .. } => "onChangePage",
            Effect::ChangeRowsPerPage { .. } => "onChangeRowsPerPage",
            Effect::RowsSelect { .. } => "onRowsSelect",
            Effect::RowsDelete { .. } => "onRowsDelete",
            Effect::CellEdit { .. } => "onCellEdit",
        }
    }
}

//! Display-row projection.
//!
//! The projector is the filter stage of the pipeline: it keeps the dataset
//! rows that pass both the filter selection and the search text, in dataset
//! order, and renders their cells. Each display row remembers the dataset
//! index and token it came from, so the projection maps back to the source
//! without comparing row contents.

use horizon_grid_core::CellValue;
use horizon_grid_core::logging::targets;

use super::column::ColumnDescriptor;
use super::filter::FilterList;
use super::row::{Row, RowToken};

/// A rendered cell of a display row.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayCell {
    /// Text shown for the cell.
    pub display: String,
    /// Effective value used by filtering and search.
    pub value: CellValue,
}

/// A dataset row that passed filtering and search.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    token: RowToken,
    data_index: usize,
    cells: Vec<DisplayCell>,
}

impl DisplayRow {
    pub fn token(&self) -> RowToken {
        self.token
    }

    /// Index of the source row in the dataset.
    pub fn data_index(&self) -> usize {
        self.data_index
    }

    pub fn cells(&self) -> &[DisplayCell] {
        &self.cells
    }

    /// Display text of every cell.
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(|cell| cell.display.as_str()).collect()
    }
}

/// Search settings for a projection.
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    pub text: Option<&'a str>,
    pub case_sensitive: bool,
}

impl<'a> Search<'a> {
    /// Folded needle, or `None` when search is disabled.
    fn needle(&self) -> Option<String> {
        let text = self.text.filter(|text| !text.is_empty())?;
        Some(fold(text, self.case_sensitive))
    }
}

fn fold(text: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        text.to_owned()
    } else {
        text.to_lowercase()
    }
}

/// Computes the display rows for the given state.
pub fn project(
    rows: &[Row],
    columns: &[ColumnDescriptor],
    filter_list: &FilterList,
    search: Search<'_>,
) -> Vec<DisplayRow> {
    let needle = search.needle();
    let projected: Vec<DisplayRow> = rows
        .iter()
        .enumerate()
        .filter_map(|(data_index, row)| {
            project_row(data_index, row, columns, filter_list, needle.as_deref(), search.case_sensitive)
        })
        .collect();

    tracing::trace!(
        target: targets::PROJECT,
        rows = rows.len(),
        displayed = projected.len(),
        filtered = filter_list.is_active(),
        searched = needle.is_some(),
        "projected display rows"
    );
    projected
}

fn project_row(
    data_index: usize,
    row: &Row,
    columns: &[ColumnDescriptor],
    filter_list: &FilterList,
    needle: Option<&str>,
    case_sensitive: bool,
) -> Option<DisplayRow> {
    let mut cells = Vec::with_capacity(columns.len());
    for (column, descriptor) in columns.iter().enumerate() {
        let raw = row.cell(column);
        let rendered = descriptor.render(data_index, raw);
        let value = rendered.effective_value(raw);
        if !filter_list.admits(column, &value) {
            return None;
        }
        cells.push(DisplayCell {
            display: rendered.display,
            value,
        });
    }

    if let Some(needle) = needle {
        let found = cells
            .iter()
            .any(|cell| fold(&cell.value.display_text(), case_sensitive).contains(needle));
        if !found {
            return None;
        }
    }

    Some(DisplayRow {
        token: row.token(),
        data_index,
        cells,
    })
}

//! Single-column dataset sorting.

use std::cmp::Ordering;

use horizon_grid_core::{CellValue, Collation};

use super::column::SortDirection;
use super::row::Row;
use super::selection::SelectionSet;

/// Result of sorting the dataset.
#[derive(Debug, Clone)]
pub struct SortOutcome {
    /// The reordered dataset.
    pub rows: Vec<Row>,
    /// The previous selection, expressed in new dataset positions.
    pub selection: SelectionSet,
    /// The direction that was applied.
    pub direction: SortDirection,
}

/// Compares two raw cell values.
///
/// Strings are collated against each other and sort after every other
/// value. Everything else compares numerically (`Null` reads as zero, `NaN`
/// sorts after every number). The result is a total order, so columns that
/// mix numbers with placeholders such as `"N/A"` sort without surprises.
pub fn compare_cells(a: &CellValue, b: &CellValue, collation: &Collation) -> Ordering {
    match (a, b) {
        (CellValue::String(a), CellValue::String(b)) => collation.compare(a, b),
        (CellValue::String(_), _) => Ordering::Greater,
        (_, CellValue::String(_)) => Ordering::Less,
        _ => a.numeric_cmp(b),
    }
}

/// Sorts `rows` by `column`, toggling from the column's `previous` direction.
///
/// The sort is stable. Rows selected before the sort stay selected at their
/// new positions, listed in new dataset order.
pub fn sort_rows(
    rows: &[Row],
    column: usize,
    previous: Option<SortDirection>,
    selection: &SelectionSet,
    collation: &Collation,
) -> SortOutcome {
    let direction = SortDirection::toggled_from(previous);

    // Rows that were ascending are reversed; anything else sorts ascending.
    let reverse = previous == Some(SortDirection::Ascending);

    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&a, &b| {
        let ordering = compare_cells(rows[a].cell(column), rows[b].cell(column), collation);
        if reverse { ordering.reverse() } else { ordering }
    });

    let mut sorted = Vec::with_capacity(rows.len());
    let mut remapped = SelectionSet::new();
    for (position, &source) in order.iter().enumerate() {
        sorted.push(rows[source].clone());
        if selection.contains(source) {
            remapped.insert(position);
        }
    }

    SortOutcome {
        rows: sorted,
        selection: remapped,
        direction,
    }
}

/// Screen-reader text for a completed sort.
pub fn announcement(column_name: &str, direction: SortDirection) -> String {
    format!("Table now sorted by {column_name} : {}", direction.label())
}

//! Column normalization and filter-universe construction.

use std::collections::HashSet;

use horizon_grid_core::logging::targets;
use horizon_grid_core::{CellValue, Collation};
use serde::Serialize;

use super::column::{ColumnDescriptor, ColumnSpec};
use super::row::Row;
use crate::error::{Error, Result};

/// Builds one descriptor per spec.
///
/// At most one column may carry a sort direction; later directions are
/// dropped.
pub fn normalize_columns(specs: &[ColumnSpec]) -> Vec<ColumnDescriptor> {
    let mut seen_direction = false;
    specs
        .iter()
        .map(|spec| {
            let mut descriptor = ColumnDescriptor::from_spec(spec);
            if descriptor.sort_direction.is_some() {
                if seen_direction {
                    tracing::warn!(
                        target: targets::NORMALIZE,
                        column = %descriptor.name,
                        "more than one column has a sort direction; keeping the first"
                    );
                    descriptor.sort_direction = None;
                }
                seen_direction = true;
            }
            descriptor
        })
        .collect()
}

/// Checks that every row has one cell per column.
pub fn validate_rows(rows: &[Row], column_count: usize) -> Result<()> {
    match rows.iter().position(|row| row.len() != column_count) {
        Some(index) => Err(Error::configuration(format!(
            "row {index} has {} cells but there are {column_count} columns",
            rows[index].len()
        ))),
        None => Ok(()),
    }
}

/// Distinct effective values per column, in menu order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct FilterUniverse(Vec<Vec<CellValue>>);

impl FilterUniverse {
    /// Builds the universe for every column.
    pub fn build(
        rows: &[Row],
        columns: &[ColumnDescriptor],
        collation: Option<&Collation>,
    ) -> Self {
        Self(
            columns
                .iter()
                .enumerate()
                .map(|(index, descriptor)| column_values(rows, index, descriptor, collation))
                .collect(),
        )
    }

    /// Values offered for `column`.
    pub fn values(&self, column: usize) -> &[CellValue] {
        self.0.get(column).map_or(&[], Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Vec<CellValue>] {
        &self.0
    }

    /// Recomputes a single column after an in-place edit.
    pub(crate) fn rebuild_column(
        &mut self,
        rows: &[Row],
        column: usize,
        descriptor: &ColumnDescriptor,
        collation: Option<&Collation>,
    ) {
        if let Some(slot) = self.0.get_mut(column) {
            *slot = column_values(rows, column, descriptor, collation);
        }
    }
}

/// Hashable stand-in for a value; strict equality keeps types apart.
fn dedup_key(value: &CellValue) -> (u8, String) {
    let tag = match value {
        CellValue::Null => 0,
        CellValue::Bool(_) => 1,
        CellValue::Integer(_) => 2,
        CellValue::Float(_) => 3,
        CellValue::String(_) => 4,
    };
    (tag, value.display_text().into_owned())
}

fn column_values(
    rows: &[Row],
    column: usize,
    descriptor: &ColumnDescriptor,
    collation: Option<&Collation>,
) -> Vec<CellValue> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for (row_index, row) in rows.iter().enumerate() {
        let value = descriptor.effective_value(row_index, row.cell(column));
        if seen.insert(dedup_key(&value)) {
            values.push(value);
        }
    }
    if let Some(collation) = collation {
        values.sort_by(|a, b| collation.compare_values(a, b));
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::column::SortDirection;
    use crate::model::renderer::RenderedCell;
    use crate::model::row::ingest;

    fn rows(data: &[&[&str]]) -> Vec<Row> {
        ingest(
            data.iter()
                .map(|row| row.iter().map(|s| CellValue::from(*s)).collect())
                .collect(),
        )
    }

    #[test]
    fn test_first_sort_direction_wins() {
        let specs = vec![
            ColumnSpec::new("A").sort_direction(SortDirection::Descending),
            ColumnSpec::new("B").sort_direction(SortDirection::Ascending),
        ];
        let columns = normalize_columns(&specs);
        assert_eq!(columns[0].sort_direction, Some(SortDirection::Descending));
        assert_eq!(columns[1].sort_direction, None);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let data = rows(&[&["a", "b"], &["c"]]);
        assert!(validate_rows(&data, 2).unwrap_err().is_configuration());
        assert!(validate_rows(&data[..1], 2).is_ok());
    }

    #[test]
    fn test_universe_first_seen_order_without_collation() {
        let data = rows(&[&["Tampa"], &["Dallas"], &["Tampa"], &["Yonkers"]]);
        let columns = normalize_columns(&[ColumnSpec::new("City")]);
        let universe = FilterUniverse::build(&data, &columns, None);
        assert_eq!(
            universe.values(0),
            &[CellValue::from("Tampa"), CellValue::from("Dallas"), CellValue::from("Yonkers")]
        );
    }

    #[test]
    fn test_universe_collated() {
        let data = rows(&[&["item10"], &["item2"], &["item1"]]);
        let columns = normalize_columns(&[ColumnSpec::new("Item")]);
        let collation = Collation::filter_list();
        let universe = FilterUniverse::build(&data, &columns, Some(&collation));
        assert_eq!(
            universe.values(0),
            &[CellValue::from("item1"), CellValue::from("item2"), CellValue::from("item10")]
        );
    }

    #[test]
    fn test_universe_keeps_types_distinct() {
        let data = ingest(vec![
            vec![CellValue::from(1)],
            vec![CellValue::from("1")],
            vec![CellValue::from(1)],
        ]);
        let columns = normalize_columns(&[ColumnSpec::new("N")]);
        let universe = FilterUniverse::build(&data, &columns, None);
        assert_eq!(universe.values(0).len(), 2);
    }

    #[test]
    fn test_universe_uses_effective_values() {
        let data = rows(&[&["Joe James"], &["Bob Herm"]]);
        let specs = vec![ColumnSpec::new("Name").with_renderer(|_row: usize, raw: &CellValue| {
            RenderedCell::text(raw.display_text().to_uppercase())
        })];
        let columns = normalize_columns(&specs);
        let universe = FilterUniverse::build(&data, &columns, None);
        assert_eq!(
            universe.values(0),
            &[CellValue::from("JOE JAMES"), CellValue::from("BOB HERM")]
        );
    }

    #[test]
    fn test_rebuild_column() {
        let mut data = rows(&[&["a", "x"], &["b", "y"]]);
        let columns = normalize_columns(&[ColumnSpec::new("L"), ColumnSpec::new("R")]);
        let mut universe = FilterUniverse::build(&data, &columns, None);
        data[1].set_cell(1, "x".into());
        universe.rebuild_column(&data, 1, &columns[1], None);
        assert_eq!(universe.values(1), &[CellValue::from("x")]);
        assert_eq!(universe.values(0).len(), 2);
    }
}

//! Filter selections and the rules that update them.

use horizon_grid_core::CellValue;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::options::FilterType;

/// A value passed to a filter update.
///
/// Checkbox and dropdown menus send a single value; a multiselect sends the
/// complete list it now holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Single(CellValue),
    Many(Vec<CellValue>),
}

macro_rules! impl_single_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FilterValue {
                fn from(value: $ty) -> Self {
                    FilterValue::Single(value.into())
                }
            }
        )*
    };
}

impl_single_from!(CellValue, &str, String, i64, i32, f64, bool);

impl From<Vec<CellValue>> for FilterValue {
    fn from(values: Vec<CellValue>) -> Self {
        FilterValue::Many(values)
    }
}

impl FilterValue {
    /// Applies this update to one column's selected values.
    ///
    /// - checkbox: toggles membership of each value
    /// - dropdown: selects the value, or clears the column when the value is
    ///   empty or already selected
    /// - multiselect: replaces the column's values; an empty string clears it
    pub fn apply(&self, current: &[CellValue], mode: FilterType) -> Result<Vec<CellValue>> {
        match (mode, self) {
            (FilterType::Checkbox, FilterValue::Single(value)) => {
                Ok(toggle_members(current, std::slice::from_ref(value)))
            }
            (FilterType::Checkbox, FilterValue::Many(values)) => Ok(toggle_members(current, values)),
            (FilterType::Dropdown, FilterValue::Single(value)) => {
                if value.is_empty_string() || current.contains(value) {
                    Ok(Vec::new())
                } else {
                    Ok(vec![value.clone()])
                }
            }
            (FilterType::Dropdown, FilterValue::Many(_)) => Err(Error::configuration(
                "dropdown filters take a single value",
            )),
            (FilterType::Multiselect, FilterValue::Single(value)) => {
                if value.is_empty_string() {
                    Ok(Vec::new())
                } else {
                    Ok(vec![value.clone()])
                }
            }
            (FilterType::Multiselect, FilterValue::Many(values)) => Ok(values.clone()),
        }
    }
}

fn toggle_members(current: &[CellValue], values: &[CellValue]) -> Vec<CellValue> {
    let mut next = current.to_vec();
    for value in values {
        match next.iter().position(|v| v == value) {
            Some(pos) => {
                next.remove(pos);
            }
            None => next.push(value.clone()),
        }
    }
    next
}

/// The selected filter values of every column.
///
/// An empty column list places no constraint on that column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterList(Vec<Vec<CellValue>>);

impl FilterList {
    /// A list with no constraints for `columns` columns.
    pub fn empty(columns: usize) -> Self {
        Self(vec![Vec::new(); columns])
    }

    /// Wraps caller-supplied lists, checking one list per column.
    pub fn from_lists(lists: Vec<Vec<CellValue>>, column_count: usize) -> Result<Self> {
        if lists.len() != column_count {
            return Err(Error::filter_list_mismatch(lists.len(), column_count));
        }
        Ok(Self(lists))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selected values of `column`.
    pub fn column(&self, column: usize) -> &[CellValue] {
        self.0.get(column).map_or(&[], Vec::as_slice)
    }

    /// Whether any column has a selection.
    pub fn is_active(&self) -> bool {
        self.0.iter().any(|values| !values.is_empty())
    }

    pub fn as_slice(&self) -> &[Vec<CellValue>] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Vec<CellValue>> {
        self.0
    }

    pub(crate) fn set_column(&mut self, column: usize, values: Vec<CellValue>) {
        if let Some(slot) = self.0.get_mut(column) {
            *slot = values;
        }
    }

    pub(crate) fn clear(&mut self) {
        for values in &mut self.0 {
            values.clear();
        }
    }

    /// Whether `value` passes the selection of `column`.
    pub(crate) fn admits(&self, column: usize, value: &CellValue) -> bool {
        let selected = self.column(column);
        selected.is_empty() || selected.contains(value)
    }
}

//! Cell renderers.
//!
//! A [`CellRenderer`] turns a raw cell value into what the table shows. It can
//! also substitute the *effective value*: the value that filtering, search and
//! the filter universe see in place of the raw one.

use std::fmt;
use std::sync::Arc;

use horizon_grid_core::CellValue;

/// The output of a [`CellRenderer`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedCell {
    /// Text shown in the cell.
    pub display: String,
    /// Logical value exposed by the rendering, if it differs from the raw one.
    pub value: Option<CellValue>,
}

impl RenderedCell {
    /// A plain-text rendering. The text doubles as the effective value.
    pub fn text(text: impl Into<String>) -> Self {
        let display = text.into();
        Self {
            value: Some(CellValue::String(display.clone())),
            display,
        }
    }

    /// A rendering that exposes an explicit logical value.
    pub fn with_value(display: impl Into<String>, value: impl Into<CellValue>) -> Self {
        Self {
            display: display.into(),
            value: Some(value.into()),
        }
    }

    /// A rendering that only changes presentation; the raw value stays effective.
    pub fn display_only(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            value: None,
        }
    }

    /// The identity rendering of a raw value.
    pub fn identity(raw: &CellValue) -> Self {
        Self::display_only(raw.display_text())
    }

    /// Resolves the effective value against the raw value it was rendered from.
    pub fn effective_value(&self, raw: &CellValue) -> CellValue {
        self.value.clone().unwrap_or_else(|| raw.clone())
    }
}

/// Renders a raw cell value for one column.
///
/// `row_index` is always the row's index in the dataset, never its position
/// in the filtered display.
///
/// Any `Fn(usize, &CellValue) -> RenderedCell` closure is a renderer:
///
/// ```
/// use horizon_grid::{CellRenderer, CellValue, RenderedCell};
///
/// let upper = |_row: usize, raw: &CellValue| RenderedCell::text(raw.display_text().to_uppercase());
/// let cell = upper.render(0, &CellValue::from("tampa"));
/// assert_eq!(cell.display, "TAMPA");
/// ```
pub trait CellRenderer: Send + Sync {
    /// Render `raw`, the value at `row_index` in this renderer's column.
    fn render(&self, row_index: usize, raw: &CellValue) -> RenderedCell;
}

impl<F> CellRenderer for F
where
    F: Fn(usize, &CellValue) -> RenderedCell + Send + Sync,
{
    fn render(&self, row_index: usize, raw: &CellValue) -> RenderedCell {
        self(row_index, raw)
    }
}

/// Shared handle to a renderer.
pub type SharedRenderer = Arc<dyn CellRenderer>;

/// Debug helper for structs holding an optional renderer.
pub(crate) struct RendererDebug<'a>(pub(crate) &'a Option<SharedRenderer>);

impl fmt::Debug for RendererDebug<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("Some(<renderer>)"),
            None => f.write_str("None"),
        }
    }
}

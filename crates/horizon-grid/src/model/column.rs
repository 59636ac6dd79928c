//! Column specifications and normalized column descriptors.
//!
//! A [`ColumnSpec`] is what the caller supplies: a bare name, or a name with
//! partial options. Normalization merges the options over the defaults and
//! yields one [`ColumnDescriptor`] per column.

use std::fmt;
use std::sync::Arc;

use horizon_grid_core::CellValue;
use serde::{Deserialize, Serialize};

use super::renderer::{CellRenderer, RenderedCell, RendererDebug, SharedRenderer};

/// Sort direction of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// The direction a header click produces, given the column's previous
    /// direction. Only a column that was ascending flips to descending.
    pub fn toggled_from(previous: Option<SortDirection>) -> Self {
        match previous {
            Some(SortDirection::Ascending) => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }

    /// `"asc"` or `"desc"`.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    /// `"ascending"` or `"descending"`.
    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partial column options. Unset fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
}

/// Serialized shape of a column spec.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ColumnSource {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        options: ColumnOptions,
    },
}

impl From<ColumnSource> for ColumnSpec {
    fn from(source: ColumnSource) -> Self {
        match source {
            ColumnSource::Name(name) => ColumnSpec::new(name),
            ColumnSource::Detailed { name, options } => ColumnSpec::new(name).with_options(options),
        }
    }
}

impl From<ColumnSpec> for ColumnSource {
    fn from(spec: ColumnSpec) -> Self {
        if spec.options == ColumnOptions::default() {
            ColumnSource::Name(spec.name)
        } else {
            ColumnSource::Detailed {
                name: spec.name,
                options: spec.options,
            }
        }
    }
}

/// A caller-supplied column specification.
///
/// Deserializes from either `"Name"` or
/// `{"name": "Name", "options": {"filter": false}}`. Renderers cannot be
/// expressed in a document and are attached with [`ColumnSpec::with_renderer`].
///
/// ```
/// use horizon_grid::{ColumnSpec, SortDirection};
///
/// let columns: Vec<ColumnSpec> = serde_json::from_str(
///     r#"["Name", {"name": "City", "options": {"sortDirection": "desc"}}]"#,
/// )
/// .unwrap();
///
/// assert_eq!(columns[0].name(), "Name");
/// assert_eq!(columns[1].options().sort_direction, Some(SortDirection::Descending));
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "ColumnSource", into = "ColumnSource")]
pub struct ColumnSpec {
    name: String,
    options: ColumnOptions,
    renderer: Option<SharedRenderer>,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: ColumnOptions::default(),
            renderer: None,
        }
    }

    pub fn with_options(mut self, options: ColumnOptions) -> Self {
        self.options = options;
        self
    }

    pub fn display(mut self, display: bool) -> Self {
        self.options.display = Some(display);
        self
    }

    pub fn filterable(mut self, filter: bool) -> Self {
        self.options.filter = Some(filter);
        self
    }

    pub fn sortable(mut self, sort: bool) -> Self {
        self.options.sort = Some(sort);
        self
    }

    pub fn sort_direction(mut self, direction: SortDirection) -> Self {
        self.options.sort_direction = Some(direction);
        self
    }

    /// Attaches a cell renderer.
    pub fn with_renderer<R>(mut self, renderer: R) -> Self
    where
        R: CellRenderer + 'static,
    {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &ColumnOptions {
        &self.options
    }

    pub fn renderer(&self) -> Option<&SharedRenderer> {
        self.renderer.as_ref()
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("renderer", &RendererDebug(&self.renderer))
            .finish()
    }
}

impl From<&str> for ColumnSpec {
    fn from(name: &str) -> Self {
        ColumnSpec::new(name)
    }
}

impl From<String> for ColumnSpec {
    fn from(name: String) -> Self {
        ColumnSpec::new(name)
    }
}

/// A normalized column.
#[derive(Clone)]
pub struct ColumnDescriptor {
    pub name: String,
    pub display: bool,
    pub filter: bool,
    pub sort: bool,
    pub sort_direction: Option<SortDirection>,
    renderer: Option<SharedRenderer>,
}

impl ColumnDescriptor {
    /// Merges a spec's options over the defaults.
    pub fn from_spec(spec: &ColumnSpec) -> Self {
        let options = spec.options;
        Self {
            name: spec.name.clone(),
            display: options.display.unwrap_or(true),
            filter: options.filter.unwrap_or(true),
            sort: options.sort.unwrap_or(true),
            sort_direction: options.sort_direction,
            renderer: spec.renderer.clone(),
        }
    }

    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    /// Renders the raw value at dataset row `row_index`.
    pub fn render(&self, row_index: usize, raw: &CellValue) -> RenderedCell {
        match self.renderer {
            Some(ref renderer) => renderer.render(row_index, raw),
            None => RenderedCell::identity(raw),
        }
    }

    /// The value filtering and search see for this cell.
    pub fn effective_value(&self, row_index: usize, raw: &CellValue) -> CellValue {
        match self.renderer {
            Some(ref renderer) => renderer.render(row_index, raw).effective_value(raw),
            None => raw.clone(),
        }
    }
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("name", &self.name)
            .field("display", &self.display)
            .field("filter", &self.filter)
            .field("sort", &self.sort)
            .field("sort_direction", &self.sort_direction)
            .field("renderer", &RendererDebug(&self.renderer))
            .finish()
    }
}

impl PartialEq for ColumnDescriptor {
    fn eq(&self, other: &Self) -> bool {
        let same_renderer = match (&self.renderer, &other.renderer) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.name == other.name
            && self.display == other.display
            && self.filter == other.filter
            && self.sort == other.sort
            && self.sort_direction == other.sort_direction
            && same_renderer
    }
}

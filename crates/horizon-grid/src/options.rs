//! Table options.
//!
//! [`TableOptions`] is the declarative configuration handed to the engine at
//! initialization. Every field has a default, so options documents only need
//! the keys they change:
//!
//! ```
//! use horizon_grid::{FilterType, TableOptions};
//!
//! let options = TableOptions::from_json_str(
//!     r#"{ "filterType": "dropdown", "rowsPerPage": 20, "textLabels": { "body": { "noMatch": "Nothing here" } } }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(options.filter_type, FilterType::Dropdown);
//! assert_eq!(options.rows_per_page, 20);
//! assert_eq!(options.text_labels.body.no_match, "Nothing here");
//! assert_eq!(options.text_labels.body.tool_tip, "Sort");
//! ```
//!
//! Presentation-only flags (`responsive`, `rowHover`, `print`, `download`,
//! `viewColumns`, `search`, `filter`) are carried through unvalidated.

use horizon_grid_core::CellValue;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How filter menus present a column's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// One checkbox per value; each click toggles membership.
    #[default]
    Checkbox,
    /// A single-choice dropdown; choosing the active value clears it.
    Dropdown,
    /// A multi-choice select that replaces the whole selection.
    Multiselect,
}

/// Responsive layout mode (presentation passthrough).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Responsive {
    /// Columns stack on narrow screens.
    #[default]
    Stacked,
    /// The table scrolls horizontally.
    Scroll,
}

/// Declarative table configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableOptions {
    pub responsive: Responsive,
    pub filter_type: FilterType,
    /// Whether the visible window is paginated at all.
    pub pagination: bool,
    /// Whether rows can be selected.
    pub selectable_rows: bool,
    /// Whether search compares text verbatim.
    pub case_sensitive: bool,
    pub row_hover: bool,
    /// Initial page, one-based. `None` and `Some(0)` both mean the first page.
    pub page: Option<usize>,
    /// Initial filter selection, one list per column.
    pub filter_list: Option<Vec<Vec<CellValue>>>,
    pub rows_per_page: usize,
    pub rows_per_page_options: Vec<usize>,
    pub filter: bool,
    /// Whether filter universes are collated.
    pub sort_filter_list: bool,
    /// Whether sorting is enabled for the table.
    pub sort: bool,
    pub search: bool,
    pub print: bool,
    pub view_columns: bool,
    pub download: bool,
    pub text_labels: TextLabels,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            responsive: Responsive::Stacked,
            filter_type: FilterType::Checkbox,
            pagination: true,
            selectable_rows: true,
            case_sensitive: false,
            row_hover: true,
            page: None,
            filter_list: None,
            rows_per_page: 10,
            rows_per_page_options: vec![5, 10, 15, 100],
            filter: true,
            sort_filter_list: true,
            sort: true,
            search: true,
            print: true,
            view_columns: true,
            download: true,
            text_labels: TextLabels::default(),
        }
    }
}

impl TableOptions {
    /// Parses options from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::configuration(format!("Invalid options JSON: {e}")))
    }

    /// Parses options from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source)
            .map_err(|e: toml::de::Error| Error::configuration(format!("Invalid options TOML: {e}")))
    }

    /// Sets the initial filter selection.
    pub fn with_filter_list(mut self, filter_list: Vec<Vec<CellValue>>) -> Self {
        self.filter_list = Some(filter_list);
        self
    }

    /// Sets the number of rows per page.
    pub fn with_rows_per_page(mut self, rows_per_page: usize) -> Self {
        self.rows_per_page = rows_per_page;
        self
    }

    /// Sets the initial one-based page.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets case-sensitive search.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Sets whether filter universes are collated.
    pub fn with_sort_filter_list(mut self, sort_filter_list: bool) -> Self {
        self.sort_filter_list = sort_filter_list;
        self
    }

    /// Sets whether rows can be selected.
    pub fn with_selectable_rows(mut self, selectable_rows: bool) -> Self {
        self.selectable_rows = selectable_rows;
        self
    }

    /// Checks the invariants the engine relies on.
    pub fn validate(&self) -> Result<()> {
        if self.rows_per_page == 0 {
            return Err(Error::configuration("rowsPerPage must be greater than zero"));
        }
        Ok(())
    }

    /// The initial zero-based page.
    pub(crate) fn initial_page(&self) -> usize {
        self.page.map_or(0, |page| page.saturating_sub(1))
    }
}

/// Text injected into the table chrome.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextLabels {
    pub body: BodyLabels,
    pub pagination: PaginationLabels,
    pub toolbar: ToolbarLabels,
    pub filter: FilterLabels,
    pub view_columns: ViewColumnsLabels,
    pub selected_rows: SelectedRowsLabels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BodyLabels {
    /// Shown in place of rows when the visible page is empty.
    pub no_match: String,
    pub tool_tip: String,
}

impl Default for BodyLabels {
    fn default() -> Self {
        Self {
            no_match: "Sorry, no matching records found".into(),
            tool_tip: "Sort".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationLabels {
    pub next: String,
    pub previous: String,
    pub rows_per_page: String,
    /// Joins the range and the total, as in "1-10 of 42".
    pub display_rows: String,
}

impl Default for PaginationLabels {
    fn default() -> Self {
        Self {
            next: "Next Page".into(),
            previous: "Previous Page".into(),
            rows_per_page: "Rows per page:".into(),
            display_rows: "of".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolbarLabels {
    pub search: String,
    pub download_csv: String,
    pub print: String,
    pub view_columns: String,
    pub filter_table: String,
}

impl Default for ToolbarLabels {
    fn default() -> Self {
        Self {
            search: "Search".into(),
            download_csv: "Download CSV".into(),
            print: "Print".into(),
            view_columns: "View Columns".into(),
            filter_table: "Filter Table".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterLabels {
    pub all: String,
    pub title: String,
    pub reset: String,
}

impl Default for FilterLabels {
    fn default() -> Self {
        Self {
            all: "All".into(),
            title: "FILTERS".into(),
            reset: "RESET".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewColumnsLabels {
    pub title: String,
    pub title_aria: String,
}

impl Default for ViewColumnsLabels {
    fn default() -> Self {
        Self {
            title: "Show Columns".into(),
            title_aria: "Show/Hide Table Columns".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectedRowsLabels {
    pub text: String,
    pub delete: String,
    pub delete_aria: String,
}

impl Default for SelectedRowsLabels {
    fn default() -> Self {
        Self {
            text: "row(s) selected".into(),
            delete: "Delete".into(),
            delete_aria: "Delete Selected Rows".into(),
        }
    }
}

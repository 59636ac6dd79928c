//! Page windows over the display rows.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::projector::DisplayRow;
use crate::error::{Error, Result};

/// The slice of display rows shown at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    /// Zero-based page.
    pub page: usize,
    pub rows_per_page: usize,
}

impl PageWindow {
    pub fn new(page: usize, rows_per_page: usize) -> Self {
        Self {
            page,
            rows_per_page,
        }
    }

    /// Number of whole pages in `len` rows.
    ///
    /// A trailing partial page is not counted, so the last valid page index
    /// can equal this value.
    pub fn total_pages(&self, len: usize) -> usize {
        len.checked_div(self.rows_per_page).unwrap_or(0)
    }

    /// Checks the page against `len` display rows.
    pub fn validate(&self, len: usize) -> Result<()> {
        let total_pages = self.total_pages(len);
        if self.page > total_pages && total_pages != 0 {
            return Err(Error::pagination_range(self.page, total_pages));
        }
        Ok(())
    }

    /// Index range of the page within `len` display rows.
    pub fn range(&self, len: usize) -> Range<usize> {
        let from = self.page.saturating_mul(self.rows_per_page).min(len);
        let to = self
            .page
            .saturating_add(1)
            .saturating_mul(self.rows_per_page)
            .min(len);
        from..to
    }
}

/// The visible page.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PageSlice {
    /// Rows to show.
    Rows(Vec<DisplayRow>),
    /// Nothing to show; the presentation renders the "no match" placeholder.
    #[default]
    Empty,
}

impl PageSlice {
    pub fn is_empty(&self) -> bool {
        matches!(self, PageSlice::Empty)
    }

    /// The visible rows; empty for [`PageSlice::Empty`].
    pub fn rows(&self) -> &[DisplayRow] {
        match self {
            PageSlice::Rows(rows) => rows,
            PageSlice::Empty => &[],
        }
    }
}

/// Cuts the visible page out of the display rows.
///
/// With `enabled == false` the whole display is one page.
pub fn paginate(rows: &[DisplayRow], window: PageWindow, enabled: bool) -> Result<PageSlice> {
    let visible = if enabled {
        window.validate(rows.len())?;
        &rows[window.range(rows.len())]
    } else {
        rows
    };

    if visible.is_empty() {
        Ok(PageSlice::Empty)
    } else {
        Ok(PageSlice::Rows(visible.to_vec()))
    }
}

/// The "1-10 of 42" caption under the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationSummary {
    /// One-based first row on the page, or zero when the page is empty.
    pub from: usize,
    /// One-based last row on the page, or zero when the page is empty.
    pub to: usize,
    /// Total display rows.
    pub count: usize,
    pub label: String,
}

impl PaginationSummary {
    /// Summarizes `window` over `count` display rows.
    ///
    /// A page holding no rows reads as "0-0".
    pub fn new(window: PageWindow, count: usize, display_rows_label: &str) -> Self {
        let range = window.range(count);
        let (from, to) = if range.is_empty() {
            (0, 0)
        } else {
            (range.start + 1, range.end)
        };
        Self {
            from,
            to,
            count,
            label: format!("{from}-{to} {display_rows_label} {count}"),
        }
    }
}

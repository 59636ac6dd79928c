//! Immutable model snapshots.

use std::sync::Arc;

use horizon_grid_core::CellValue;

use crate::effects::Effect;
use crate::model::{
    ColumnDescriptor, DisplayRow, FilterList, FilterUniverse, HeaderCheckState, PageSlice,
    PageWindow, PaginationSummary, Row, RowToken, SelectionSet,
};
use crate::options::TableOptions;

/// All derived table state after an operation.
///
/// Snapshots are never mutated. Each operation produces a new one that
/// shares unchanged parts with its predecessor, so holding on to an old
/// snapshot is cheap and unaffected by later operations.
#[derive(Debug, Clone)]
pub struct ModelSnapshot {
    pub(crate) columns: Arc<Vec<ColumnDescriptor>>,
    pub(crate) data: Arc<Vec<Row>>,
    pub(crate) filter_universe: Arc<FilterUniverse>,
    pub(crate) filter_list: Arc<FilterList>,
    pub(crate) search_text: Option<Arc<str>>,
    pub(crate) display_rows: Arc<Vec<DisplayRow>>,
    pub(crate) selection: Arc<SelectionSet>,
    pub(crate) page_window: PageWindow,
    pub(crate) page: Arc<PageSlice>,
    pub(crate) pagination: PaginationSummary,
    pub(crate) announce_text: Option<Arc<str>>,
    pub(crate) options: Arc<TableOptions>,
    pub(crate) effects: Vec<Effect>,
}

impl ModelSnapshot {
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// The dataset in its current order.
    pub fn data(&self) -> &[Row] {
        &self.data
    }

    /// Raw cell values of every row.
    pub fn data_values(&self) -> Vec<Vec<CellValue>> {
        self.data.iter().map(|row| row.cells().to_vec()).collect()
    }

    pub fn filter_universe(&self) -> &FilterUniverse {
        &self.filter_universe
    }

    pub fn filter_list(&self) -> &FilterList {
        &self.filter_list
    }

    pub fn search_text(&self) -> Option<&str> {
        self.search_text.as_deref()
    }

    /// Rows passing the filters and search, before pagination.
    pub fn display_rows(&self) -> &[DisplayRow] {
        &self.display_rows
    }

    /// Selected dataset indices, in selection order.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn page_window(&self) -> PageWindow {
        self.page_window
    }

    /// The visible page of display rows.
    pub fn page(&self) -> &PageSlice {
        &self.page
    }

    pub fn pagination(&self) -> &PaginationSummary {
        &self.pagination
    }

    /// Screen-reader text set by the last sort, if this snapshot came from one.
    pub fn announce_text(&self) -> Option<&str> {
        self.announce_text.as_deref()
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Effects to run after committing this snapshot.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// State of the "select all" checkbox over the display rows.
    pub fn header_check_state(&self) -> HeaderCheckState {
        self.selection
            .header_state(self.display_rows.iter().map(DisplayRow::data_index))
    }

    /// Dataset index of the row carrying `token`.
    pub fn row_index_for_token(&self, token: RowToken) -> Option<usize> {
        self.data.iter().position(|row| row.token() == token)
    }

    /// Whether the dataset row at `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(index)
    }
}

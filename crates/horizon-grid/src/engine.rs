//! The table state engine.
//!
//! [`TableEngine`] owns the dataset and all derived state. Callers drive it
//! through its operations and read the [`ModelSnapshot`] each one returns.
//!
//! # Example
//!
//! ```
//! use horizon_grid::{CellValue, ColumnSpec, FilterType, TableEngine, TableOptions};
//!
//! let data: Vec<Vec<CellValue>> = serde_json::from_str(
//!     r#"[["Joe James", "Yonkers", "NY"],
//!         ["John Walsh", "Hartford", "CT"],
//!         ["Bob Herm", "Tampa", "FL"]]"#,
//! )
//! .unwrap();
//! let columns = vec![ColumnSpec::new("Name"), ColumnSpec::new("City"), ColumnSpec::new("State")];
//!
//! let engine = TableEngine::new(data, columns, TableOptions::default()).unwrap();
//!
//! let snapshot = engine.toggle_sort(0).unwrap();
//! assert_eq!(snapshot.announce_text(), Some("Table now sorted by Name : ascending"));
//!
//! let snapshot = engine.toggle_filter(2, "FL", FilterType::Checkbox).unwrap();
//! assert_eq!(snapshot.display_rows().len(), 1);
//! ```
//!
//! # Thread Safety
//!
//! The engine is `Send + Sync`. Operations take a write lock for their full
//! duration, so each one runs to completion before the next starts, and a
//! failed operation leaves the current snapshot untouched.

use std::sync::Arc;

use horizon_grid_core::logging::targets;
use horizon_grid_core::{CellValue, Collation, PerfSpan};
use parking_lot::RwLock;

use crate::effects::{ColumnAction, Effect};
use crate::error::{Error, Result};
use crate::model::normalize::{normalize_columns, validate_rows};
use crate::model::paginate::paginate;
use crate::model::projector::{Search, project};
use crate::model::row::ingest;
use crate::model::sort::{announcement, sort_rows};
use crate::model::{
    ColumnSpec, FilterList, FilterUniverse, FilterValue, PageSlice, PageWindow, PaginationSummary,
    Row, RowToken, SelectionSet,
};
use crate::options::{FilterType, TableOptions};
use crate::snapshot::ModelSnapshot;

/// What a selection operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectScope {
    /// The "select all" header checkbox.
    All { checked: bool },
    /// A single dataset row.
    Single { index: usize },
}

/// How a page that no longer fits the display rows is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PagePolicy {
    /// Fail with [`Error::PaginationRange`].
    Strict,
    /// Fall back to the first page.
    Reset,
}

/// Caller-supplied inputs of the last full build.
#[derive(Clone)]
struct Source {
    data: Arc<Vec<Vec<CellValue>>>,
    columns: Arc<Vec<ColumnSpec>>,
}

struct EngineState {
    source: Source,
    snapshot: Arc<ModelSnapshot>,
}

impl EngineState {
    fn commit(&mut self, snapshot: ModelSnapshot) -> Arc<ModelSnapshot> {
        self.snapshot = Arc::new(snapshot);
        Arc::clone(&self.snapshot)
    }
}

/// The table state engine.
pub struct TableEngine {
    state: RwLock<EngineState>,
    sort_collation: Collation,
    filter_collation: Collation,
}

impl TableEngine {
    /// Builds an engine over `data` and `columns`.
    pub fn new(
        data: Vec<Vec<CellValue>>,
        columns: Vec<ColumnSpec>,
        options: TableOptions,
    ) -> Result<Self> {
        Self::from_shared(Arc::new(data), Arc::new(columns), options)
    }

    /// Builds an engine over shared inputs.
    ///
    /// Passing the same `Arc`s to [`update_source`](Self::update_source)
    /// later is recognized as "unchanged".
    pub fn from_shared(
        data: Arc<Vec<Vec<CellValue>>>,
        columns: Arc<Vec<ColumnSpec>>,
        options: TableOptions,
    ) -> Result<Self> {
        let sort_collation = Collation::sort();
        let filter_collation = Collation::filter_list();
        let source = Source { data, columns };
        let snapshot = build_initial(&source, options, &filter_collation)?;
        Ok(Self {
            state: RwLock::new(EngineState {
                source,
                snapshot: Arc::new(snapshot),
            }),
            sort_collation,
            filter_collation,
        })
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<ModelSnapshot> {
        Arc::clone(&self.state.read().snapshot)
    }

    /// Replaces the dataset, columns and options, rebuilding everything.
    ///
    /// Selection, filters, search text and the page all start over.
    #[tracing::instrument(
        skip_all,
        target = "horizon_grid::engine",
        level = "debug",
        fields(rows = data.len(), columns = columns.len())
    )]
    pub fn initialize(
        &self,
        data: Vec<Vec<CellValue>>,
        columns: Vec<ColumnSpec>,
        options: TableOptions,
    ) -> Result<Arc<ModelSnapshot>> {
        let source = Source {
            data: Arc::new(data),
            columns: Arc::new(columns),
        };
        let snapshot = build_initial(&source, options, &self.filter_collation)?;

        let mut state = self.state.write();
        state.source = source;
        Ok(state.commit(snapshot))
    }

    /// Swaps in new data and columns, keeping options and search text.
    ///
    /// Nothing is rebuilt when both inputs are the ones already in use.
    #[tracing::instrument(skip_all, target = "horizon_grid::engine", level = "debug")]
    pub fn update_source(
        &self,
        data: Arc<Vec<Vec<CellValue>>>,
        columns: Arc<Vec<ColumnSpec>>,
    ) -> Result<Arc<ModelSnapshot>> {
        let mut state = self.state.write();
        if Arc::ptr_eq(&state.source.data, &data) && Arc::ptr_eq(&state.source.columns, &columns)
        {
            tracing::trace!(target: targets::ENGINE, "source unchanged, skipping rebuild");
            return Ok(Arc::clone(&state.snapshot));
        }

        let current = &state.snapshot;
        let filter_list = initial_filter_list(&current.options, columns.len())?;
        let snapshot = rebuild(
            ingest(data.as_ref().clone()),
            &columns,
            Arc::clone(&current.options),
            filter_list,
            current.search_text.clone(),
            current.page_window,
            PagePolicy::Reset,
            &self.filter_collation,
        )?;

        state.source = Source { data, columns };
        Ok(state.commit(snapshot))
    }

    /// Sets or clears the search text. Empty text clears it.
    #[tracing::instrument(skip(self), target = "horizon_grid::engine", level = "debug")]
    pub fn set_search_text(&self, text: Option<&str>) -> Result<Arc<ModelSnapshot>> {
        let mut state = self.state.write();
        let mut next = draft(&state.snapshot);
        next.search_text = text.filter(|text| !text.is_empty()).map(Arc::from);
        refresh(&mut next, PagePolicy::Reset)?;

        next.effects.push(Effect::SearchChange {
            text: next.search_text.as_deref().map(str::to_owned),
        });
        Ok(state.commit(next))
    }

    /// Updates the filter selection of `column` under the rules of `mode`.
    #[tracing::instrument(skip(self, value), target = "horizon_grid::engine", level = "debug")]
    pub fn toggle_filter(
        &self,
        column: usize,
        value: impl Into<FilterValue>,
        mode: FilterType,
    ) -> Result<Arc<ModelSnapshot>> {
        let value = value.into();
        let mut state = self.state.write();
        let mut next = draft(&state.snapshot);
        check_column(&next, column)?;

        let updated = value.apply(next.filter_list.column(column), mode)?;
        Arc::make_mut(&mut next.filter_list).set_column(column, updated);
        refresh(&mut next, PagePolicy::Reset)?;

        next.effects.push(Effect::FilterChange {
            column: Some(column),
            changed: Some(value),
            filter_list: next.filter_list.as_ref().clone(),
        });
        Ok(state.commit(next))
    }

    /// Clears every column's filter selection.
    #[tracing::instrument(skip(self), target = "horizon_grid::engine", level = "debug")]
    pub fn reset_filters(&self) -> Result<Arc<ModelSnapshot>> {
        let mut state = self.state.write();
        let mut next = draft(&state.snapshot);
        Arc::make_mut(&mut next.filter_list).clear();
        refresh(&mut next, PagePolicy::Reset)?;

        next.effects.push(Effect::FilterChange {
            column: None,
            changed: None,
            filter_list: next.filter_list.as_ref().clone(),
        });
        Ok(state.commit(next))
    }

    /// Sorts the dataset by `column`, flipping that column's direction.
    ///
    /// Other columns lose their direction. Selected rows stay selected.
    #[tracing::instrument(skip(self), target = "horizon_grid::engine", level = "debug")]
    pub fn toggle_sort(&self, column: usize) -> Result<Arc<ModelSnapshot>> {
        let mut state = self.state.write();
        let mut next = draft(&state.snapshot);
        check_column(&next, column)?;

        let descriptor = &next.columns[column];
        if !next.options.sort || !descriptor.sort {
            return Err(Error::configuration(format!(
                "column `{}` is not sortable",
                descriptor.name
            )));
        }

        let outcome = sort_rows(
            &next.data,
            column,
            descriptor.sort_direction,
            &next.selection,
            &self.sort_collation,
        );

        let columns = Arc::make_mut(&mut next.columns);
        for (index, descriptor) in columns.iter_mut().enumerate() {
            descriptor.sort_direction = (index == column).then_some(outcome.direction);
        }
        let name = columns[column].name.clone();

        next.data = Arc::new(outcome.rows);
        next.selection = Arc::new(outcome.selection);
        refresh(&mut next, PagePolicy::Reset)?;

        tracing::debug!(
            target: targets::ENGINE,
            column,
            direction = %outcome.direction,
            "sorted"
        );
        next.announce_text = Some(Arc::from(announcement(&name, outcome.direction)));
        next.effects.push(Effect::ColumnSortChange {
            column,
            name,
            direction: outcome.direction,
        });
        Ok(state.commit(next))
    }

    /// Shows or hides `column`.
    #[tracing::instrument(skip(self), target = "horizon_grid::engine", level = "debug")]
    pub fn toggle_column_visibility(&self, column: usize) -> Result<Arc<ModelSnapshot>> {
        let mut state = self.state.write();
        let mut next = draft(&state.snapshot);
        check_column(&next, column)?;

        let descriptor = &mut Arc::make_mut(&mut next.columns)[column];
        descriptor.display = !descriptor.display;
        let action = if descriptor.display {
            ColumnAction::Add
        } else {
            ColumnAction::Remove
        };
        let name = descriptor.name.clone();

        next.effects.push(Effect::ColumnViewChange {
            column,
            name,
            action,
        });
        Ok(state.commit(next))
    }

    /// Moves to zero-based `page`.
    #[tracing::instrument(skip(self), target = "horizon_grid::engine", level = "debug")]
    pub fn set_page(&self, page: usize) -> Result<Arc<ModelSnapshot>> {
        let mut state = self.state.write();
        let mut next = draft(&state.snapshot);
        next.page_window.page = page;
        repaginate(&mut next, PagePolicy::Strict)?;

        next.effects.push(Effect::ChangePage { page });
        Ok(state.commit(next))
    }

    /// Changes the page size, keeping the current page.
    #[tracing::instrument(skip(self), target = "horizon_grid::engine", level = "debug")]
    pub fn set_rows_per_page(&self, rows_per_page: usize) -> Result<Arc<ModelSnapshot>> {
        if rows_per_page == 0 {
            return Err(Error::configuration("rowsPerPage must be greater than zero"));
        }

        let mut state = self.state.write();
        let mut next = draft(&state.snapshot);
        next.page_window.rows_per_page = rows_per_page;
        repaginate(&mut next, PagePolicy::Strict)?;

        next.effects.push(Effect::ChangeRowsPerPage { rows_per_page });
        Ok(state.commit(next))
    }

    /// Changes the selection.
    ///
    /// Checking "select all" selects the displayed rows, which is every row
    /// unless a filter or search is active. A no-op when rows are not
    /// selectable.
    #[tracing::instrument(skip(self), target = "horizon_grid::engine", level = "debug")]
    pub fn select_rows(&self, scope: SelectScope) -> Result<Arc<ModelSnapshot>> {
        let mut state = self.state.write();
        select_in(&mut state, scope)
    }

    /// Toggles the row shown at `position` among the display rows.
    #[tracing::instrument(skip(self), target = "horizon_grid::engine", level = "debug")]
    pub fn toggle_row(&self, position: usize) -> Result<Arc<ModelSnapshot>> {
        let mut state = self.state.write();
        let snapshot = &state.snapshot;
        let row = snapshot.display_rows.get(position).ok_or_else(|| {
            Error::configuration(format!(
                "display position {position} is out of range for {} rows",
                snapshot.display_rows.len()
            ))
        })?;
        let index = snapshot
            .row_index_for_token(row.token())
            .ok_or_else(|| Error::configuration(format!("row {} is gone", row.token())))?;
        select_in(&mut state, SelectScope::Single { index })
    }

    /// Dataset index of the row carrying `token`.
    pub fn row_index_for_token(&self, token: RowToken) -> Option<usize> {
        self.state.read().snapshot.row_index_for_token(token)
    }

    /// Replaces one cell, refreshing that column's filter values.
    #[tracing::instrument(skip(self), target = "horizon_grid::engine", level = "debug")]
    pub fn edit_cell(&self, row: usize, column: usize, value: CellValue) -> Result<Arc<ModelSnapshot>> {
        let mut state = self.state.write();
        let mut next = draft(&state.snapshot);
        check_column(&next, column)?;
        if row >= next.data.len() {
            return Err(Error::row_out_of_range(row, next.data.len()));
        }

        Arc::make_mut(&mut next.data)[row].set_cell(column, value.clone());
        let collation = next.options.sort_filter_list.then_some(&self.filter_collation);
        Arc::make_mut(&mut next.filter_universe).rebuild_column(
            &next.data,
            column,
            &next.columns[column],
            collation,
        );
        refresh(&mut next, PagePolicy::Reset)?;

        next.effects.push(Effect::CellEdit { row, column, value });
        Ok(state.commit(next))
    }

    /// Deletes the selected rows. The selection ends up empty.
    #[tracing::instrument(skip(self), target = "horizon_grid::engine", level = "debug")]
    pub fn delete_selected(&self) -> Result<Arc<ModelSnapshot>> {
        let mut state = self.state.write();
        let selected = state.snapshot.selection.as_slice().to_vec();
        self.delete_in(&mut state, &selected)
    }

    /// Deletes the dataset rows at `indices`.
    ///
    /// Columns are rebuilt from their specs; filters, search text and the
    /// remaining selection carry over.
    #[tracing::instrument(skip(self), target = "horizon_grid::engine", level = "debug")]
    pub fn delete_rows(&self, indices: &[usize]) -> Result<Arc<ModelSnapshot>> {
        let mut state = self.state.write();
        self.delete_in(&mut state, indices)
    }

    fn delete_in(&self, state: &mut EngineState, indices: &[usize]) -> Result<Arc<ModelSnapshot>> {
        let current = Arc::clone(&state.snapshot);

        let mut deleted = indices.to_vec();
        deleted.sort_unstable();
        deleted.dedup();
        if let Some(&last) = deleted.last()
            && last >= current.data.len()
        {
            return Err(Error::row_out_of_range(last, current.data.len()));
        }
        if deleted.is_empty() {
            tracing::debug!(target: targets::ENGINE, "nothing to delete");
            return Ok(state.commit(draft(&current)));
        }

        let rows: Vec<Row> = current
            .data
            .iter()
            .enumerate()
            .filter(|(index, _)| deleted.binary_search(index).is_err())
            .map(|(_, row)| row.clone())
            .collect();

        let mut selection = current.selection.as_ref().clone();
        selection.reconcile_after_delete(&deleted);

        let mut next = rebuild(
            rows,
            &state.source.columns,
            Arc::clone(&current.options),
            current.filter_list.as_ref().clone(),
            current.search_text.clone(),
            current.page_window,
            PagePolicy::Reset,
            &self.filter_collation,
        )?;
        next.selection = Arc::new(selection);

        tracing::debug!(target: targets::ENGINE, deleted = deleted.len(), "rows deleted");
        next.effects.push(Effect::RowsDelete { deleted });
        Ok(state.commit(next))
    }
}

impl std::fmt::Debug for TableEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("TableEngine")
            .field("rows", &state.snapshot.data.len())
            .field("columns", &state.snapshot.columns.len())
            .field("displayed", &state.snapshot.display_rows.len())
            .finish()
    }
}

// Ensure TableEngine is Send + Sync
static_assertions::assert_impl_all!(TableEngine: Send, Sync);

/// Applies a selection change and commits it.
fn select_in(state: &mut EngineState, scope: SelectScope) -> Result<Arc<ModelSnapshot>> {
    let mut next = draft(&state.snapshot);
    if !next.options.selectable_rows {
        tracing::debug!(target: targets::SELECTION, "rows are not selectable");
        return Ok(state.commit(next));
    }

    let changed = match scope {
        SelectScope::All { checked } => {
            let selection = Arc::make_mut(&mut next.selection);
            if checked {
                selection.select_all(next.display_rows.iter().map(|row| row.data_index()));
            } else {
                selection.clear();
            }
            (0..next.data.len()).collect()
        }
        SelectScope::Single { index } => {
            if index >= next.data.len() {
                return Err(Error::row_out_of_range(index, next.data.len()));
            }
            Arc::make_mut(&mut next.selection).toggle(index);
            vec![index]
        }
    };

    tracing::trace!(
        target: targets::SELECTION,
        selected = next.selection.len(),
        "selection changed"
    );
    next.effects.push(Effect::RowsSelect {
        changed,
        selected: next.selection.as_slice().to_vec(),
    });
    Ok(state.commit(next))
}

/// Copy of `current` ready to be modified into the next snapshot.
fn draft(current: &ModelSnapshot) -> ModelSnapshot {
    let mut next = current.clone();
    next.effects = Vec::new();
    next.announce_text = None;
    next
}

fn check_column(snapshot: &ModelSnapshot, column: usize) -> Result<()> {
    if column >= snapshot.columns.len() {
        return Err(Error::column_out_of_range(column, snapshot.columns.len()));
    }
    Ok(())
}

fn initial_filter_list(options: &TableOptions, column_count: usize) -> Result<FilterList> {
    match options.filter_list {
        Some(ref lists) => FilterList::from_lists(lists.clone(), column_count),
        None => Ok(FilterList::empty(column_count)),
    }
}

fn build_initial(
    source: &Source,
    options: TableOptions,
    filter_collation: &Collation,
) -> Result<ModelSnapshot> {
    options.validate()?;
    let filter_list = initial_filter_list(&options, source.columns.len())?;
    let window = PageWindow::new(options.initial_page(), options.rows_per_page);
    rebuild(
        ingest(source.data.as_ref().clone()),
        &source.columns,
        Arc::new(options),
        filter_list,
        None,
        window,
        PagePolicy::Strict,
        filter_collation,
    )
}

/// Builds a snapshot from scratch. The selection starts empty.
#[allow(clippy::too_many_arguments)]
fn rebuild(
    rows: Vec<Row>,
    specs: &[ColumnSpec],
    options: Arc<TableOptions>,
    filter_list: FilterList,
    search_text: Option<Arc<str>>,
    window: PageWindow,
    policy: PagePolicy,
    filter_collation: &Collation,
) -> Result<ModelSnapshot> {
    let _perf = PerfSpan::new("rebuild");

    let columns = normalize_columns(specs);
    validate_rows(&rows, columns.len())?;
    if filter_list.len() != columns.len() {
        return Err(Error::filter_list_mismatch(filter_list.len(), columns.len()));
    }

    let collation = options.sort_filter_list.then_some(filter_collation);
    let filter_universe = FilterUniverse::build(&rows, &columns, collation);

    tracing::debug!(
        target: targets::NORMALIZE,
        rows = rows.len(),
        columns = columns.len(),
        "model rebuilt"
    );

    let mut snapshot = ModelSnapshot {
        columns: Arc::new(columns),
        data: Arc::new(rows),
        filter_universe: Arc::new(filter_universe),
        filter_list: Arc::new(filter_list),
        search_text,
        display_rows: Arc::default(),
        selection: Arc::default(),
        page_window: window,
        page: Arc::new(PageSlice::Empty),
        pagination: PaginationSummary::new(window, 0, &options.text_labels.pagination.display_rows),
        announce_text: None,
        options,
        effects: Vec::new(),
    };
    refresh(&mut snapshot, policy)?;
    Ok(snapshot)
}

/// Recomputes the display rows and the visible page.
fn refresh(snapshot: &mut ModelSnapshot, policy: PagePolicy) -> Result<()> {
    let search = Search {
        text: snapshot.search_text.as_deref(),
        case_sensitive: snapshot.options.case_sensitive,
    };
    let display_rows = project(&snapshot.data, &snapshot.columns, &snapshot.filter_list, search);
    snapshot.display_rows = Arc::new(display_rows);
    repaginate(snapshot, policy)
}

/// Recomputes the visible page from the current display rows.
fn repaginate(snapshot: &mut ModelSnapshot, policy: PagePolicy) -> Result<()> {
    let count = snapshot.display_rows.len();
    let enabled = snapshot.options.pagination;

    if enabled && let Err(err) = snapshot.page_window.validate(count) {
        match policy {
            PagePolicy::Strict => return Err(err),
            PagePolicy::Reset => {
                tracing::debug!(
                    target: targets::ENGINE,
                    page = snapshot.page_window.page,
                    displayed = count,
                    "page out of range after update, returning to first page"
                );
                snapshot.page_window.page = 0;
            }
        }
    }

    let page = paginate(&snapshot.display_rows, snapshot.page_window, enabled)?;
    let label = &snapshot.options.text_labels.pagination.display_rows;
    snapshot.pagination = if enabled {
        PaginationSummary::new(snapshot.page_window, count, label)
    } else {
        PaginationSummary::new(PageWindow::new(0, count.max(1)), count, label)
    };
    snapshot.page = Arc::new(page);
    Ok(())
}

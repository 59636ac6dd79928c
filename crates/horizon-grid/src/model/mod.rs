//! The stages of the table pipeline.
//!
//! Each stage is a pure function over the state produced by the previous
//! one, and the engine re-runs only the stages a mutation invalidates:
//!
//! ```text
//! (rows, column specs, options)
//!        │ normalize
//!        ▼
//! columns + filter universe
//!        │ project (filter list, search text)
//!        ▼
//! display rows ──paginate──▶ visible page
//! ```
//!
//! Sorting reorders the dataset itself and remaps the selection; the
//! projection is then rebuilt from the sorted rows.
//!
//! # Core Types
//!
//! - [`Row`] / [`RowToken`]: dataset rows with stable surrogate identifiers
//! - [`ColumnSpec`] / [`ColumnDescriptor`]: caller input and its normalized form
//! - [`CellRenderer`]: per-column rendering and effective-value extraction
//! - [`FilterList`] / [`FilterUniverse`]: selected and available filter values
//! - [`DisplayRow`]: a row that passed filtering and search
//! - [`PageWindow`] / [`PageSlice`]: pagination
//! - [`SelectionSet`]: selected dataset indices

pub mod column;
pub mod filter;
pub mod normalize;
pub mod paginate;
pub mod projector;
pub mod renderer;
pub mod row;
pub mod selection;
pub mod sort;

pub use column::{ColumnDescriptor, ColumnOptions, ColumnSpec, SortDirection};
pub use filter::{FilterList, FilterValue};
pub use normalize::FilterUniverse;
pub use paginate::{PageSlice, PageWindow, PaginationSummary};
pub use projector::{DisplayCell, DisplayRow};
pub use renderer::{CellRenderer, RenderedCell, SharedRenderer};
pub use row::{Row, RowToken};
pub use selection::{HeaderCheckState, SelectionSet};

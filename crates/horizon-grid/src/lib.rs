//! Horizon Grid - a data-grid state engine.
//!
//! Horizon Grid takes a dataset, its column specifications and a set of
//! [`TableOptions`], and maintains everything a table view derives from
//! them: normalized columns, filter menus, the rows that pass the active
//! filters and search, sort order, pagination and row selection.
//!
//! Rendering is left to the caller. Every operation on the [`TableEngine`]
//! returns an immutable [`ModelSnapshot`] to draw from, together with the
//! [`Effect`]s the caller should run (application callbacks and the like).
//!
//! # Example
//!
//! ```
//! use horizon_grid::{ColumnSpec, TableEngine, TableOptions};
//!
//! let data = vec![
//!     vec!["Joe James".into(), "Yonkers".into()],
//!     vec!["Bob Herm".into(), "Tampa".into()],
//! ];
//! let columns = vec![ColumnSpec::new("Name"), ColumnSpec::new("City")];
//! let engine = TableEngine::new(data, columns, TableOptions::default())?;
//!
//! let snapshot = engine.set_search_text(Some("tampa"))?;
//! assert_eq!(snapshot.display_rows().len(), 1);
//! assert_eq!(snapshot.effects()[0].name(), "onSearchChange");
//! # Ok::<(), horizon_grid::Error>(())
//! ```
//!
//! # Feature Flags
//!
//! - `localization`: collate with ICU4X instead of the built-in rules.

pub mod effects;
pub mod engine;
pub mod error;
pub mod model;
pub mod options;
pub mod prelude;
pub mod snapshot;

pub use horizon_grid_core::{CellValue, Collation, CollationKind, PerfSpan, logging};

pub use effects::{ColumnAction, Effect};
pub use engine::{SelectScope, TableEngine};
pub use error::{Error, Result};
pub use model::{
    CellRenderer, ColumnDescriptor, ColumnOptions, ColumnSpec, DisplayCell, DisplayRow,
    FilterList, FilterUniverse, FilterValue, HeaderCheckState, PageSlice, PageWindow,
    PaginationSummary, RenderedCell, Row, RowToken, SelectionSet, SharedRenderer, SortDirection,
};
pub use options::{FilterType, Responsive, TableOptions, TextLabels};
pub use snapshot::ModelSnapshot;

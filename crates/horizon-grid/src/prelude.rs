//! Prelude module for Horizon Grid.
//!
//! ```ignore
//! use horizon_grid::prelude::*;
//! ```
//!
//! This provides the engine, its inputs and the snapshot types most callers
//! touch.

// ============================================================================
// Engine
// ============================================================================

pub use crate::engine::{SelectScope, TableEngine};
pub use crate::error::{Error, Result};
pub use crate::snapshot::ModelSnapshot;

// ============================================================================
// Inputs
// ============================================================================

pub use crate::model::{CellRenderer, ColumnSpec, FilterValue, RenderedCell, SortDirection};
pub use crate::options::{FilterType, TableOptions};
pub use horizon_grid_core::CellValue;

// ============================================================================
// Outputs
// ============================================================================

pub use crate::effects::{ColumnAction, Effect};
pub use crate::model::{DisplayRow, HeaderCheckState, PageSlice, SelectionSet};

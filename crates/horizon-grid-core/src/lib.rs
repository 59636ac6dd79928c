//! Core primitives for Horizon Grid.
//!
//! This crate provides the building blocks shared by the grid engine:
//!
//! - **Cell values**: [`CellValue`], the scalar stored in every table cell
//! - **Collation**: [`Collation`], locale-aware string ordering for sorting
//!   columns and ordering filter lists
//! - **Logging**: tracing targets and the [`PerfSpan`] guard
//!
//! # Example
//!
//! ```
//! use horizon_grid_core::{CellValue, Collation};
//!
//! let collation = Collation::filter_list();
//! let mut values = vec![CellValue::from("item10"), CellValue::from("item2")];
//! values.sort_by(|a, b| collation.compare_values(a, b));
//!
//! assert_eq!(values[0], CellValue::from("item2"));
//! ```

pub mod collation;
pub mod logging;
mod value;

pub use collation::{Collation, CollationKind};
pub use logging::PerfSpan;
pub use value::CellValue;

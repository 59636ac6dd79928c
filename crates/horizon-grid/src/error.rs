//! Error types for the grid engine.

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by engine operations.
///
/// Both variants are caller contract violations. A failed operation never
/// commits: the engine keeps the snapshot it had before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Malformed initialization input or an argument outside the model.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A page was requested beyond the available display rows.
    #[error(
        "Provided page `{page}` is greater than the total available page length of `{total_pages}`"
    )]
    PaginationRange { page: usize, total_pages: usize },
}

impl Error {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a pagination range error.
    pub fn pagination_range(page: usize, total_pages: usize) -> Self {
        Self::PaginationRange { page, total_pages }
    }

    /// Error for a filter list whose length differs from the column count.
    pub(crate) fn filter_list_mismatch(filter_len: usize, column_count: usize) -> Self {
        Self::configuration(format!(
            "Provided options.filterList length {filter_len} does not match the column length {column_count}"
        ))
    }

    /// Error for a column index outside the model.
    pub(crate) fn column_out_of_range(column: usize, column_count: usize) -> Self {
        Self::configuration(format!(
            "column index {column} is out of range for {column_count} columns"
        ))
    }

    /// Error for a dataset row index outside the model.
    pub(crate) fn row_out_of_range(row: usize, row_count: usize) -> Self {
        Self::configuration(format!(
            "row index {row} is out of range for {row_count} rows"
        ))
    }

    /// Returns `true` for [`Error::Configuration`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Returns `true` for [`Error::PaginationRange`].
    pub fn is_pagination_range(&self) -> bool {
        matches!(self, Self::PaginationRange { .. })
    }
}

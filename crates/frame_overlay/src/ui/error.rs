//! GUI error types

use thiserror::Error;

/// Result type for GUI operations
pub type GuiResult<T> = Result<T, GuiError>;

/// Errors raised by the overlay GUI
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuiError {
    /// Pivot name outside `nw`, `ne`, `sw`, `se`
    #[error("Pivot-anchor '{0}' unknown, must be one of nw, ne, sw, se")]
    InvalidPivot(String),

    /// Color schema name that was never registered
    #[error("Color schema not found: {0}")]
    UnknownSchema(String),

    /// Widget name that no widget call has referenced yet
    #[error("UI element not found: {0}")]
    NotFound(String),
}

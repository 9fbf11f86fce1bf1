//! Error types for the cell model.

use std::error::Error;
use std::fmt;

/// Errors from converting raw values into cell-model types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellTypeError {
    /// A raw ordinal does not name any [`CellType`](crate::CellType).
    UnknownOrdinal {
        /// The offending ordinal.
        value: u32,
    },
}

impl fmt::Display for CellTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOrdinal { value } => {
                write!(
                    f,
                    "unknown cell type ordinal {value} (valid range 0..{})",
                    crate::CellType::COUNT
                )
            }
        }
    }
}

impl Error for CellTypeError {}

// ============================================================================
// Inspection Errors
// Recoverable, per-value failures of the printer layer
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Errors raised while resolving or rendering one inspected value.
///
/// None of these are fatal: the printer reports them and the session keeps
/// going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectError {
    /// Type name is not a fixed-point type, or its template arguments do not
    /// parse
    TypeMismatch { type_name: String },
    /// Storage of the symbol could not be read
    UnresolvedSymbol { symbol: String },
    /// Words were read but do not decode under the parsed format
    Decode(NumericError),
}

impl fmt::Display for InspectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectError::TypeMismatch { type_name } => {
                write!(f, "type mismatch: '{}' is not a fixed-point type", type_name)
            }
            InspectError::UnresolvedSymbol { symbol } => {
                write!(f, "unresolved symbol: storage of '{}' is unavailable", symbol)
            }
            InspectError::Decode(err) => write!(f, "decode failed: {}", err),
        }
    }
}

impl std::error::Error for InspectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InspectError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for InspectError {
    fn from(err: NumericError) -> Self {
        InspectError::Decode(err)
    }
}

/// Result type alias for inspection operations
pub type InspectResult<T> = Result<T, InspectError>;

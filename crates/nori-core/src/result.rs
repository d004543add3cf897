//! Result type alias for configuration resolution operations

use crate::error::NoriError;

/// Standard Result type for NORI configuration operations
pub type Result<T> = std::result::Result<T, NoriError>;

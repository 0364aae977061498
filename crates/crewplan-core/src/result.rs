//! Result type aliases for Crewplan.

use crate::CrewplanError;

/// A specialized `Result` type for Crewplan operations.
pub type CrewplanResult<T> = Result<T, CrewplanError>;

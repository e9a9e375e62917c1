//! Validation error types.

use thiserror::Error;

/// Error returned by [`parse_pipeline`](crate::parse_pipeline) when a pipeline
/// cannot be validated at all. Dangling edges and cycles are not errors; they
/// are reported in the result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The node list is empty or was not supplied.
    #[error("No nodes provided")]
    NoNodes,
}

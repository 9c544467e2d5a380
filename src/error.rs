use thiserror::Error;

/// Errors reported by [`ArrayList`](crate::ArrayList) operations.
///
/// Null arguments and negative capacities, the other classic failure modes
/// of a list API, are unrepresentable here, so indexing is the only thing
/// left that can go wrong.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ListError {
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

use thiserror::Error;

/// Precondition violations detected at the entry points, before any element is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("range [{start}, {end}] is out of bounds for a sequence of length {len}")]
    OutOfRange { start: usize, end: usize, len: usize },

    #[error("range [{start}, {end}] is malformed, start lies past end + 1")]
    InvalidRange { start: usize, end: usize },
}

/// Failures reported by a [`Highlighter`](crate::highlight::Highlighter).
///
/// The engine never propagates these, they are logged and counted in
/// [`SortStats::highlight_failures`](crate::stats::SortStats::highlight_failures).
#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("highlight observer is unavailable")]
    Unavailable,

    #[error("highlight observer failed: {0}")]
    Observer(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown pivot strategy '{0}', expected 'last' or 'median_of_three'")]
    UnknownPivotStrategy(String),

    #[error("invalid sort config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Checks a closed range `[start, end]` against a sequence of `len` elements.
///
/// An empty range is written `start == end + 1` and is in bounds as long as `start <= len`.
/// Bounds are checked before shape, `[0, 10]` over five elements is out of range even though
/// it is also well formed.
pub(crate) fn check_range(len: usize, start: usize, end: usize) -> Result<(), SortError> {
    if start > len || (start <= end && end >= len) {
        return Err(SortError::OutOfRange { start, end, len });
    }

    // Here `end < start <= len` or `end < len`, so `end + 1` can't overflow.
    if start > end + 1 {
        return Err(SortError::InvalidRange { start, end });
    }

    Ok(())
}

/// Like [`check_range`] but for a single partition step, which needs at least one element.
pub(crate) fn check_partition_range(len: usize, start: usize, end: usize) -> Result<(), SortError> {
    if end >= len || start >= len {
        return Err(SortError::OutOfRange { start, end, len });
    }

    if start > end {
        return Err(SortError::InvalidRange { start, end });
    }

    Ok(())
}

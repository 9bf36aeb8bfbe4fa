use serde::Serialize;

/// Counters collected over one sort or partition call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortStats {
    /// Partition steps, one highlight/clear pair each.
    pub partitions: u64,
    /// Element comparisons, pivot selection included.
    pub comparisons: u64,
    /// Swaps, self-swaps included.
    pub swaps: u64,
    /// Deepest chain of nested partitions.
    pub max_depth: u32,
    /// Observer calls that returned an error.
    pub highlight_failures: u64,
}

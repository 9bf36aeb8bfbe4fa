use crate::config::SortConfig;
use crate::error::{check_partition_range, check_range, SortError};
use crate::highlight::{Highlighter, Signal};
use crate::partition::lomuto;
use crate::pivot::{place_pivot, PivotStrategy};
use crate::stats::SortStats;

/// Sorts `v[start..=end]` ascending in place with the default config.
///
/// `start == end + 1` denotes an empty range and returns without touching `v`.
///
/// With [`PivotStrategy::Last`] sorted, reverse sorted and all-equal input recurse once per
/// element. A few hundred thousand such elements overflow the thread's stack and abort the
/// process, use [`PivotStrategy::MedianOfThree`] or a larger stack for inputs of that shape.
pub fn sort(
    v: &mut [i32],
    start: usize,
    end: usize,
    highlighter: &mut dyn Highlighter,
) -> Result<SortStats, SortError> {
    Engine::default().sort(v, start, end, highlighter)
}

/// Sorts all of `v` with the default config.
///
/// Same recursion depth caveat as [`sort`].
pub fn sort_all(v: &mut [i32], highlighter: &mut dyn Highlighter) -> SortStats {
    Engine::default().sort_all(v, highlighter)
}

/// Partitions `v[start..=end]` once around `v[end]` and returns the pivot's final index.
pub fn partition(
    v: &mut [i32],
    start: usize,
    end: usize,
    highlighter: &mut dyn Highlighter,
) -> Result<usize, SortError> {
    Engine::default()
        .partition(v, start, end, highlighter)
        .map(|(pivot_pos, _)| pivot_pos)
}

/// Quicksort driver bound to a [`SortConfig`].
#[derive(Debug, Default, Clone)]
pub struct Engine {
    config: SortConfig,
}

impl Engine {
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Sorts `v[start..=end]` ascending in place.
    ///
    /// Fails with [`SortError::OutOfRange`] if the range doesn't fit into `v` and with
    /// [`SortError::InvalidRange`] if `start > end + 1`. On error `v` is untouched and the
    /// highlighter is never called.
    ///
    /// Recursion depth follows the pivot choices, with [`PivotStrategy::Last`] sorted input of
    /// length N recurses N - 1 levels deep. Large inputs of that shape overflow the stack and abort
    /// the process.
    #[tracing::instrument(
        level = "debug",
        skip(self, v, highlighter),
        fields(len = v.len(), pivot = %self.config.pivot_strategy)
    )]
    pub fn sort(
        &self,
        v: &mut [i32],
        start: usize,
        end: usize,
        highlighter: &mut dyn Highlighter,
    ) -> Result<SortStats, SortError> {
        check_range(v.len(), start, end)?;

        let mut pass = Pass::new(&self.config, highlighter);
        pass.quicksort(v, start, end, 0);
        let stats = pass.finish();

        tracing::debug!(
            partitions = stats.partitions,
            comparisons = stats.comparisons,
            max_depth = stats.max_depth,
            "sorted range"
        );
        Ok(stats)
    }

    /// Sorts all of `v`, including the empty sequence a closed range can't express.
    ///
    /// Same recursion depth caveat as [`Engine::sort`].
    pub fn sort_all(&self, v: &mut [i32], highlighter: &mut dyn Highlighter) -> SortStats {
        let mut pass = Pass::new(&self.config, highlighter);
        if let Some(end) = v.len().checked_sub(1) {
            pass.quicksort(v, 0, end, 0);
        }
        pass.finish()
    }

    /// Runs a single partition step over `v[start..=end]`, pivot selection included.
    ///
    /// The returned stats count it as one partition at depth 1.
    pub fn partition(
        &self,
        v: &mut [i32],
        start: usize,
        end: usize,
        highlighter: &mut dyn Highlighter,
    ) -> Result<(usize, SortStats), SortError> {
        check_partition_range(v.len(), start, end)?;

        let mut pass = Pass::new(&self.config, highlighter);
        let pivot_pos = pass.partition(v, start, end, 1);
        Ok((pivot_pos, pass.finish()))
    }
}

/// State of one top-level call.
struct Pass<'a> {
    strategy: PivotStrategy,
    signal: Signal<'a>,
    stats: SortStats,
}

impl<'a> Pass<'a> {
    fn new(config: &'a SortConfig, highlighter: &'a mut dyn Highlighter) -> Self {
        Self {
            strategy: config.pivot_strategy,
            signal: Signal::new(highlighter, &config.pivot_marker),
            stats: SortStats::default(),
        }
    }

    /// Sorts `v[start..=end]` recursively. `depth` is the number of partitions enclosing this
    /// range.
    ///
    /// Recursion depth is unbounded by design of the last element pivot, sorted input of length
    /// N recurses N - 1 levels deep.
    fn quicksort(&mut self, v: &mut [i32], start: usize, end: usize, depth: u32) {
        // Zero or one element, nothing to do.
        if start >= end {
            return;
        }

        let depth = depth + 1;
        let pivot_pos = self.partition(v, start, end, depth);

        // Left and right never overlap and exclude the pivot, which is already in place.
        if pivot_pos > start {
            self.quicksort(v, start, pivot_pos - 1, depth);
        }
        self.quicksort(v, pivot_pos + 1, end, depth);
    }

    /// One partition step at `depth`, the only place partitions and depth are counted.
    fn partition(&mut self, v: &mut [i32], start: usize, end: usize, depth: u32) -> usize {
        self.stats.partitions += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        place_pivot(v, start, end, self.strategy, &mut self.signal, &mut self.stats);
        lomuto(v, start, end, &mut self.signal, &mut self.stats)
    }

    fn finish(mut self) -> SortStats {
        self.stats.highlight_failures = self.signal.failures();
        self.stats
    }
}

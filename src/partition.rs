use crate::highlight::Signal;
use crate::stats::SortStats;

/// Lomuto partition of `v[start..=end]` around the value at `end`.
///
/// Afterwards every element left of the returned index is `<=` the pivot and every element right
/// of it is `>` the pivot, which now sits at the returned index. Elements equal to the pivot go to
/// the low side, so equal values may change their relative order.
///
/// The pivot is highlighted before the scan and the highlight cleared after the final swap, also
/// for a range of a single element. In between every comparison and swap is reported to the
/// observer, followed by the pivot's final position.
///
/// Caller guarantees `start <= end < v.len()`.
pub(crate) fn lomuto(
    v: &mut [i32],
    start: usize,
    end: usize,
    signal: &mut Signal<'_>,
    stats: &mut SortStats,
) -> usize {
    debug_assert!(start <= end && end < v.len());

    let pivot = v[end];
    signal.pivot(end);

    // `store` is the first slot not yet known to hold an element `<= pivot`. Tracking the slot
    // after the boundary instead of the boundary itself avoids underflow at `start == 0`.
    let mut store = start;
    for j in start..end {
        stats.comparisons += 1;
        signal.compare(j, end);
        if v[j] <= pivot {
            v.swap(store, j);
            stats.swaps += 1;
            signal.swap(store, j);
            store += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(store, end);
    stats.swaps += 1;
    signal.swap(store, end);
    signal.placed(store);

    signal.clear(v);

    tracing::trace!(start, end, pivot, pivot_pos = store, "partitioned range");

    store
}

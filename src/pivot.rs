use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::highlight::Signal;
use crate::stats::SortStats;

/// Which element ends up at `end` before a range is partitioned.
///
/// `Last` keeps the element that is already there. It degrades to *O*(*N*²) time and *O*(*N*)
/// recursion depth on sorted and reverse sorted input, and the highlight trace of a
/// visualization depends on it, so it stays the default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotStrategy {
    #[default]
    Last,
    MedianOfThree,
}

impl PivotStrategy {
    pub fn name(self) -> &'static str {
        match self {
            PivotStrategy::Last => "last",
            PivotStrategy::MedianOfThree => "median_of_three",
        }
    }
}

impl fmt::Display for PivotStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PivotStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last" => Ok(PivotStrategy::Last),
            "median_of_three" | "median-of-three" | "median3" => Ok(PivotStrategy::MedianOfThree),
            other => Err(ConfigError::UnknownPivotStrategy(other.to_owned())),
        }
    }
}

/// Moves the chosen pivot of `v[start..=end]` to `end`.
pub(crate) fn place_pivot(
    v: &mut [i32],
    start: usize,
    end: usize,
    strategy: PivotStrategy,
    signal: &mut Signal<'_>,
    stats: &mut SortStats,
) {
    match strategy {
        PivotStrategy::Last => {}
        PivotStrategy::MedianOfThree => {
            // Ranges of one or two elements have no distinct middle.
            if end - start < 2 {
                return;
            }

            let mid = start + (end - start) / 2;
            let median = median3(v, start, mid, end, signal, stats);
            if median != end {
                v.swap(median, end);
                stats.swaps += 1;
                signal.swap(median, end);
            }
        }
    }
}

/// Returns the index of the median of `v[a]`, `v[b]` and `v[c]`.
fn median3(
    v: &[i32],
    a: usize,
    b: usize,
    c: usize,
    signal: &mut Signal<'_>,
    stats: &mut SortStats,
) -> usize {
    // Avoids the third comparison when `a` is already known to be the median.
    let x = v[a] < v[b];
    let y = v[a] < v[c];
    stats.comparisons += 2;
    signal.compare(a, b);
    signal.compare(a, c);

    if x == y {
        // If x=y=0 then b, c <= a. In this case we want to return max(b, c).
        // If x=y=1 then a < b, c. In this case we want to return min(b, c).
        // By toggling the outcome of b < c using XOR x we get this behavior.
        let z = v[b] < v[c];
        stats.comparisons += 1;
        signal.compare(b, c);
        if z ^ x {
            c
        } else {
            b
        }
    } else {
        // Either c <= a < b or b <= a < c, thus a is our median.
        a
    }
}

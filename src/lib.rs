//! In-place Lomuto quicksort over `i32` sequences, instrumented with highlight hooks so a
//! step-through visualizer can follow every partition.

pub mod config;
pub mod error;
pub mod highlight;
pub mod pivot;
pub mod quicksort;
pub mod report;
pub mod stats;

mod partition;

pub use config::SortConfig;
pub use error::{ConfigError, HighlightError, SortError};
pub use highlight::{HighlightEvent, Highlighter, NoHighlight, Recorder, Step, PIVOT_MARKER};
pub use pivot::PivotStrategy;
pub use quicksort::{partition, sort, sort_all, Engine};
pub use stats::SortStats;

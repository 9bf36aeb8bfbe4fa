//! What the `partition-trace` tool prints, built without touching stdout.

use serde::Serialize;

use crate::config::SortConfig;
use crate::highlight::{HighlightEvent, Recorder, Step};
use crate::pivot::PivotStrategy;
use crate::quicksort::Engine;
use crate::stats::SortStats;

/// Sequence the step-through demo has always shipped with.
pub const DEMO_INPUT: [i32; 20] = [
    45, 12, 78, 3, 56, 89, 23, 67, 1, 90, 34, 76, 5, 88, 19, 42, 7, 99, 15, 60,
];

/// Command line overrides, applied on top of a loaded or default [`SortConfig`].
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub pivot: Option<PivotStrategy>,
    pub marker: Option<String>,
}

impl Overrides {
    pub fn apply(self, mut config: SortConfig) -> SortConfig {
        if let Some(pivot) = self.pivot {
            config = config.with_pivot_strategy(pivot);
        }
        if let Some(marker) = self.marker {
            config = config.with_pivot_marker(marker);
        }
        config
    }
}

/// Outcome of one recorded sort over the whole input.
#[derive(Debug, Clone, Serialize)]
pub struct TraceReport {
    pub config: SortConfig,
    pub input: Vec<i32>,
    pub sorted: Vec<i32>,
    pub stats: SortStats,
    pub trace: Vec<HighlightEvent>,
    pub steps: Vec<Step>,
}

impl TraceReport {
    /// Sorts `input`, or [`DEMO_INPUT`] if it is empty, and records every signal.
    pub fn build(config: SortConfig, input: Vec<i32>) -> Self {
        let input = if input.is_empty() {
            DEMO_INPUT.to_vec()
        } else {
            input
        };

        let engine = Engine::new(config);
        let mut sorted = input.clone();
        let mut recorder = Recorder::new();
        let stats = engine.sort_all(&mut sorted, &mut recorder);

        tracing::info!(
            len = input.len(),
            pivot = %engine.config().pivot_strategy,
            partitions = stats.partitions,
            max_depth = stats.max_depth,
            "sort finished"
        );

        let steps = recorder.steps().to_vec();
        Self {
            config: engine.config().clone(),
            input,
            sorted,
            stats,
            trace: recorder.into_events(),
            steps,
        }
    }

    /// Sorted values separated by single spaces.
    pub fn sorted_line(&self) -> String {
        self.sorted
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

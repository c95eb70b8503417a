//! Pipeline orchestration over one normalized observation set.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use qna_model::{Category, DecompositionRecord, DeflatorRecord, ObservationSet, RateRecord};

use crate::decomposition::compute_decomposition;
use crate::deflator::compute_deflator;
use crate::error::{CategoryFailure, EngineError};
use crate::rates::compute_rates;

/// The three ordered record sequences handed to the presentation sink,
/// plus the categories whose computation was aborted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub rates: Vec<RateRecord>,
    pub deflator: Vec<DeflatorRecord>,
    pub decomposition: Vec<DecompositionRecord>,
    pub failures: Vec<CategoryFailure>,
}

/// Run the three engines over one observation set.
///
/// The engines are read-only over the shared set and share no mutable
/// state, so they run on parallel scoped threads with no locking. A missing
/// source series empties only the affected engine's output; the offending
/// condition is recorded in `failures`.
pub fn run_pipeline(observations: &ObservationSet) -> PipelineOutput {
    let (rates, deflator, decomposition) = std::thread::scope(|scope| {
        let rates = scope.spawn(|| compute_rates(observations));
        let deflator = scope.spawn(|| compute_deflator(observations));
        let decomposition = scope.spawn(|| compute_decomposition(observations));
        (join(rates), join(deflator), join(decomposition))
    });

    let mut output = PipelineOutput {
        rates: rates.records,
        failures: rates.failures,
        ..PipelineOutput::default()
    };
    match deflator {
        Ok(records) => output.deflator = records,
        Err(error) => {
            warn!(%error, "deflator engine yielded no output");
            output.failures.push(CategoryFailure {
                category: Category::Gdp,
                error,
            });
        }
    }
    match decomposition {
        Ok(records) => output.decomposition = records,
        Err(error) => {
            warn!(%error, "decomposition engine yielded no output");
            output.failures.push(CategoryFailure {
                category: Category::Gdp,
                error,
            });
        }
    }
    info!(
        rates = output.rates.len(),
        deflator = output.deflator.len(),
        decomposition = output.decomposition.len(),
        failures = output.failures.len(),
        "pipeline complete"
    );
    output
}

impl PipelineOutput {
    /// True when a failure was recorded for the category.
    pub fn has_failure_for(&self, category: &Category) -> bool {
        self.failures.iter().any(|f| f.category == *category)
    }

    /// Failures of the given kind, for callers that treat a missing series
    /// differently from corrupt data.
    pub fn missing_series(&self) -> impl Iterator<Item = &CategoryFailure> {
        self.failures
            .iter()
            .filter(|f| matches!(f.error, EngineError::MissingSeries { .. }))
    }
}

fn join<T>(handle: std::thread::ScopedJoinHandle<'_, T>) -> T {
    handle
        .join()
        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
}

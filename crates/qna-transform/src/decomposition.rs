//! Decomposition of annual GDP growth into carryover and in-year growth.

use tracing::debug;

use qna_model::{Category, DecompositionRecord, ObservationSet, Period, TableRole};

use crate::error::EngineError;
use crate::series::{index_by_period, lagged, trailing_mean};

/// Decompose annual growth from the seasonally-adjusted constant-price
/// series of the aggregate total.
///
/// For each period with eight periods of history:
/// - `A` — trailing four-quarter mean one year earlier (the base level),
/// - `B` — the level exactly one year earlier,
/// - `C` — trailing four-quarter mean ending at the period.
///
/// `carryover = (B - A) / A * 100`, `in_year = (C - B) / A * 100`. Only
/// fourth quarters are retained: there the trailing window spans exactly
/// the calendar year, and the row is re-keyed by that year.
pub fn compute_decomposition(
    observations: &ObservationSet,
) -> Result<Vec<DecompositionRecord>, EngineError> {
    let category = Category::Gdp;
    let level = index_by_period(
        TableRole::ConstantPricesSa,
        &category,
        &observations.series(TableRole::ConstantPricesSa, &category),
    )?;
    if level.is_empty() {
        return Err(EngineError::MissingSeries {
            role: TableRole::ConstantPricesSa,
            category,
        });
    }

    let periods: Vec<Period> = level.keys().copied().collect();
    let values: Vec<Option<f64>> = level.values().copied().map(Some).collect();

    let mean4 = trailing_mean(&values, 4);
    let a = lagged(&mean4, 4);
    let b = lagged(&values, 4);
    let c = mean4;

    let mut records = Vec::new();
    for (t, period) in periods.iter().enumerate() {
        if !period.is_fourth_quarter() {
            continue;
        }
        let (Some(a), Some(b), Some(c)) = (a[t], b[t], c[t]) else {
            continue;
        };
        if a == 0.0 {
            continue;
        }
        let carryover = (b - a) / a * 100.0;
        let in_year_growth = (c - b) / a * 100.0;
        records.push(DecompositionRecord {
            year: period.year,
            carryover,
            in_year_growth,
            // Summed from the two parts so the additive identity is exact.
            total_growth: carryover + in_year_growth,
        });
    }
    debug!(records = records.len(), "decomposition engine finished");
    Ok(records)
}

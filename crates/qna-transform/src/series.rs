//! Ordered-series algebra.
//!
//! Every derived measure is an explicit index-offset computation over a
//! period-ascending array. Slots are `Option<f64>`: a category aligned over
//! the union of two source grids can have holes, and a hole poisons any lag
//! or window that touches it.

use std::collections::BTreeMap;

use qna_model::{Category, Period, TableRole};

use crate::error::EngineError;

/// Index period-ascending pairs by period, rejecting duplicates.
pub(crate) fn index_by_period(
    role: TableRole,
    category: &Category,
    pairs: &[(Period, f64)],
) -> Result<BTreeMap<Period, f64>, EngineError> {
    let mut map = BTreeMap::new();
    for &(period, value) in pairs {
        if map.insert(period, value).is_some() {
            return Err(EngineError::DuplicatePeriod {
                role,
                category: category.clone(),
                period,
            });
        }
    }
    Ok(map)
}

/// Percent change against the value `lag` positions earlier:
/// `(x[t] / x[t-lag] - 1) * 100`. Undefined for the first `lag` positions,
/// wherever either side is undefined, and over a zero base.
pub fn percent_change(values: &[Option<f64>], lag: usize) -> Vec<Option<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(t, current)| {
            let base = t.checked_sub(lag).and_then(|s| values[s])?;
            let current = (*current)?;
            (base != 0.0).then(|| (current / base - 1.0) * 100.0)
        })
        .collect()
}

/// Shift values forward by `lag` positions; the first `lag` slots are undefined.
pub fn lagged(values: &[Option<f64>], lag: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|t| t.checked_sub(lag).and_then(|s| values[s]))
        .collect()
}

/// Trailing sum over the current position and the `window - 1` preceding
/// ones. Undefined before a full window exists or when the window has a hole.
pub fn trailing_sum(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    trailing_window(values, window, |slice| slice.iter().sum())
}

/// Trailing mean over a full `window`, same definedness rules as
/// [`trailing_sum`].
pub fn trailing_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    trailing_window(values, window, |slice| {
        slice.iter().sum::<f64>() / slice.len() as f64
    })
}

fn trailing_window(
    values: &[Option<f64>],
    window: usize,
    aggregate: impl Fn(&[f64]) -> f64,
) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|t| {
            let start = (t + 1).checked_sub(window)?;
            let slice: Option<Vec<f64>> = values[start..=t].iter().copied().collect();
            slice.as_deref().map(&aggregate)
        })
        .collect()
}

/// Accumulate values within each calendar year, resetting at the year
/// boundary. A hole leaves its own slot undefined but the running total
/// carries on, matching skip-missing cumulative-sum semantics.
pub fn year_to_date(periods: &[Period], values: &[Option<f64>]) -> Vec<Option<f64>> {
    debug_assert_eq!(periods.len(), values.len());
    let mut out = Vec::with_capacity(values.len());
    let mut current_year = None;
    let mut running = 0.0;
    for (period, value) in periods.iter().zip(values) {
        if current_year != Some(period.year) {
            current_year = Some(period.year);
            running = 0.0;
        }
        match value {
            Some(v) => {
                running += v;
                out.push(Some(running));
            }
            None => out.push(None),
        }
    }
    out
}

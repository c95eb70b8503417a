//! Growth-rate derivation from the volume index series.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use qna_model::{Category, ObservationSet, Period, RateRecord, TableRole};

use crate::error::{CategoryFailure, EngineError};
use crate::series::{index_by_period, percent_change, trailing_sum, year_to_date};

/// Rate records plus the categories whose computation was aborted.
#[derive(Debug, Clone, Default)]
pub struct RatesOutput {
    pub records: Vec<RateRecord>,
    pub failures: Vec<CategoryFailure>,
}

/// Compute the four growth measures per category from the raw and
/// seasonally-adjusted index tables.
///
/// Categories are never mixed: each one is aligned and derived on its own
/// grid. A duplicate period aborts only the owning category.
pub fn compute_rates(observations: &ObservationSet) -> RatesOutput {
    let mut categories: BTreeSet<Category> = observations.categories(TableRole::NumIndex);
    categories.extend(observations.categories(TableRole::NumIndexSa));

    let mut output = RatesOutput::default();
    for category in categories {
        match rates_for_category(observations, &category) {
            Ok(mut records) => output.records.append(&mut records),
            Err(error) => {
                warn!(%category, %error, "category aborted");
                output.failures.push(CategoryFailure { category, error });
            }
        }
    }
    debug!(
        records = output.records.len(),
        failures = output.failures.len(),
        "rate engine finished"
    );
    output
}

fn rates_for_category(
    observations: &ObservationSet,
    category: &Category,
) -> Result<Vec<RateRecord>, EngineError> {
    let raw = index_by_period(
        TableRole::NumIndex,
        category,
        &observations.series(TableRole::NumIndex, category),
    )?;
    let sa = index_by_period(
        TableRole::NumIndexSa,
        category,
        &observations.series(TableRole::NumIndexSa, category),
    )?;

    // A category present in only one index table keeps its rows; the
    // missing side stays undefined on the union grid.
    let grid: Vec<Period> = raw.keys().chain(sa.keys()).copied().collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if grid.is_empty() {
        return Ok(Vec::new());
    }

    let index: Vec<Option<f64>> = grid.iter().map(|p| raw.get(p).copied()).collect();
    let index_sa: Vec<Option<f64>> = grid.iter().map(|p| sa.get(p).copied()).collect();

    let var_margin = percent_change(&index_sa, 1);
    let var_yoy = percent_change(&index, 4);
    let rolling = trailing_sum(&index, 4);
    let var_annual = percent_change(&rolling, 4);
    let index_cum_ytd = year_to_date(&grid, &index);
    let var_ytd = percent_change(&index_cum_ytd, 4);

    let records = grid
        .iter()
        .enumerate()
        .map(|(t, period)| RateRecord {
            category: category.clone(),
            period: *period,
            index: index[t],
            index_sa: index_sa[t],
            var_margin: var_margin[t],
            var_yoy: var_yoy[t],
            var_annual: var_annual[t],
            index_cum_ytd: index_cum_ytd[t],
            var_ytd: var_ytd[t],
        })
        .collect();
    Ok(records)
}

//! Implicit price deflator for the aggregate total.

use tracing::debug;

use qna_model::{Category, DeflatorRecord, ObservationSet, Period, TableRole};

use crate::error::EngineError;
use crate::series::{index_by_period, percent_change, trailing_sum};

/// Compute the implicit deflator and its annual variation.
///
/// Joins the current-price and constant-price series for the aggregate
/// total by period; periods missing from either side are excluded, not
/// synthesized. Either table absent entirely is a [`EngineError::MissingSeries`].
pub fn compute_deflator(
    observations: &ObservationSet,
) -> Result<Vec<DeflatorRecord>, EngineError> {
    let category = Category::Gdp;
    let current = index_by_period(
        TableRole::CurrentPrices,
        &category,
        &observations.series(TableRole::CurrentPrices, &category),
    )?;
    if current.is_empty() {
        return Err(EngineError::MissingSeries {
            role: TableRole::CurrentPrices,
            category,
        });
    }
    let constant = index_by_period(
        TableRole::ConstantPrices,
        &category,
        &observations.series(TableRole::ConstantPrices, &category),
    )?;
    if constant.is_empty() {
        return Err(EngineError::MissingSeries {
            role: TableRole::ConstantPrices,
            category,
        });
    }

    // Inner join by period.
    let joined: Vec<(Period, f64, f64)> = current
        .iter()
        .filter_map(|(period, &cur)| constant.get(period).map(|&con| (*period, cur, con)))
        .collect();

    let deflator: Vec<Option<f64>> = joined
        .iter()
        .map(|&(_, cur, con)| Some(cur / con * 100.0))
        .collect();
    let rolling = trailing_sum(&deflator, 4);
    let var_annual = percent_change(&rolling, 4);

    let records: Vec<DeflatorRecord> = joined
        .iter()
        .enumerate()
        .map(|(t, &(period, current_price, constant_price))| DeflatorRecord {
            period,
            current_price,
            constant_price,
            deflator: current_price / constant_price * 100.0,
            var_annual: var_annual[t],
        })
        .collect();
    debug!(records = records.len(), "deflator engine finished");
    Ok(records)
}

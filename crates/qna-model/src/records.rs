//! Derived record types handed to the presentation sink.
//!
//! Optional fields are `None` until enough history exists for the lag or
//! window that defines them; they serialize to `null`, which the sink
//! treats as "not plotted" rather than zero.

use serde::{Deserialize, Serialize};

use crate::{Category, Period};

/// Growth-rate measures for one (category, period).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    pub category: Category,
    pub period: Period,
    /// Raw volume index; `None` when the category is absent from the
    /// raw-index table at this period.
    pub index: Option<f64>,
    /// Seasonally-adjusted volume index; `None` when absent.
    pub index_sa: Option<f64>,
    /// Quarter-over-quarter growth on the SA series, percent.
    pub var_margin: Option<f64>,
    /// Year-over-year growth on the raw series, percent.
    pub var_yoy: Option<f64>,
    /// Four-quarter-over-four-quarter growth, percent.
    pub var_annual: Option<f64>,
    /// Raw index accumulated within the calendar year up to this quarter.
    pub index_cum_ytd: Option<f64>,
    /// Year-to-date accumulation vs. the same point one year earlier, percent.
    pub var_ytd: Option<f64>,
}

/// Implicit price deflator for one period of the aggregate total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflatorRecord {
    pub period: Period,
    pub current_price: f64,
    pub constant_price: f64,
    /// current / constant * 100.
    pub deflator: f64,
    /// Trailing-4-sum ratio growth of the deflator, percent.
    pub var_annual: Option<f64>,
}

/// Additive decomposition of one year's GDP growth, anchored at Q4.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionRecord {
    pub year: i32,
    /// Growth already baked in from the prior year's trajectory, percent.
    pub carryover: f64,
    /// Growth generated within the year, percent.
    pub in_year_growth: f64,
    /// Always exactly `carryover + in_year_growth`.
    pub total_growth: f64,
}

//! Derivation engines for the quarterly national accounts pipeline.
//!
//! - **series**: ordered-array lag, window and year-to-date operators
//! - **rates**: growth rates per category from the volume index tables
//! - **deflator**: implicit price deflator for the aggregate total
//! - **decomposition**: carryover / in-year breakdown of annual growth
//! - **pipeline**: the three engines run in parallel over one observation set

pub mod decomposition;
pub mod deflator;
pub mod error;
pub mod pipeline;
pub mod rates;
pub mod series;

pub use decomposition::compute_decomposition;
pub use deflator::compute_deflator;
pub use error::{CategoryFailure, EngineError};
pub use pipeline::{PipelineOutput, run_pipeline};
pub use rates::{RatesOutput, compute_rates};
pub use series::{lagged, percent_change, trailing_mean, trailing_sum, year_to_date};

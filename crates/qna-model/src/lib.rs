//! Data model for the quarterly national accounts pipeline.
//!
//! - **period**: calendar quarters with the ordering every lag relies on
//! - **table**: the five raw-table roles and their SIDRA codes
//! - **category**: canonical categories after label recoding
//! - **observation**: raw rows and the normalized observation table
//! - **records**: the derived record types the presentation sink consumes

pub mod category;
pub mod observation;
pub mod period;
pub mod records;
pub mod table;

pub use category::Category;
pub use observation::{Observation, ObservationSet, RawRow, RawTable};
pub use period::Period;
pub use records::{DecompositionRecord, DeflatorRecord, RateRecord};
pub use table::TableRole;

//! Error types for the derivation engines.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use qna_model::{Category, Period, TableRole};

/// Engine-level data-integrity failures.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum EngineError {
    /// Two observations for the same category and period in one source table.
    /// Aborts the owning category's computation only.
    #[error("duplicate period {period} for category '{category}' in table {role}")]
    DuplicatePeriod {
        role: TableRole,
        category: Category,
        period: Period,
    },

    /// A required source table is absent for the aggregate total. The
    /// affected engine yields an empty result; the pipeline keeps going.
    #[error("no {role} observations for category '{category}'")]
    MissingSeries { role: TableRole, category: Category },
}

/// A category whose computation was aborted, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFailure {
    pub category: Category,
    pub error: EngineError,
}

//! Raw rows and normalized observations.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Category, Period, TableRole};

/// One raw row as handed over by the ingestion source.
///
/// The first row of every batch carries the column-header mapping in the
/// same three fields; the normalizer consumes it as such.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub period_code: String,
    pub category_label: String,
    pub value_text: String,
}

/// One raw table batch, tagged with its role before merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub role: TableRole,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new(role: TableRole) -> Self {
        Self {
            role,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: RawRow) {
        self.rows.push(row);
    }
}

/// A single normalized observation, immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub role: TableRole,
    pub period: Period,
    pub category: Category,
    pub value: f64,
}

/// The normalized observation table, single source of truth for all engines.
///
/// Observations are held sorted by (role, category, period) so every series
/// query comes back period-ascending without re-sorting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationSet {
    observations: Vec<Observation>,
}

impl ObservationSet {
    pub fn new(mut observations: Vec<Observation>) -> Self {
        observations.sort_by(|left, right| {
            (left.role, &left.category, left.period).cmp(&(
                right.role,
                &right.category,
                right.period,
            ))
        });
        Self { observations }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.observations.iter()
    }

    /// All observations for (role, category) as period-ascending pairs.
    ///
    /// Duplicate periods are preserved; detecting them is the consumer's
    /// data-integrity check.
    pub fn series(&self, role: TableRole, category: &Category) -> Vec<(Period, f64)> {
        self.observations
            .iter()
            .filter(|obs| obs.role == role && obs.category == *category)
            .map(|obs| (obs.period, obs.value))
            .collect()
    }

    /// Distinct categories present for a role.
    pub fn categories(&self, role: TableRole) -> BTreeSet<Category> {
        self.observations
            .iter()
            .filter(|obs| obs.role == role)
            .map(|obs| obs.category.clone())
            .collect()
    }
}

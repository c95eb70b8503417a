//! Normalization of raw table batches into observations.

use qna_model::{Category, Observation, ObservationSet, Period, RawTable};
use tracing::debug;

use crate::error::NormalizeError;
use crate::recode::RecodeTable;

/// Merges heterogeneous raw tables into one canonical observation table.
///
/// Pure function of its input batches: normalizing the same batch twice
/// yields identical observation sets.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    recode: RecodeTable,
}

impl Normalizer {
    pub fn new(recode: RecodeTable) -> Self {
        Self { recode }
    }

    /// Normalize a sequence of raw table batches.
    ///
    /// The first row of each batch carries the column-header mapping and is
    /// consumed as such; any later row whose period field literally equals
    /// the header token is a leaked header and is dropped. Row-level parse
    /// failures abort the whole batch.
    pub fn normalize(&self, tables: &[RawTable]) -> Result<ObservationSet, NormalizeError> {
        let mut observations = Vec::new();
        for table in tables {
            let Some(header) = table.rows.first() else {
                debug!(role = %table.role, "raw table batch is empty");
                continue;
            };
            for row in &table.rows[1..] {
                if row.period_code == header.period_code {
                    // Header row leaked into the data section.
                    continue;
                }
                let period = parse_period_code(&row.period_code).ok_or_else(|| {
                    NormalizeError::MalformedPeriod {
                        role: table.role,
                        code: row.period_code.clone(),
                    }
                })?;
                let value = parse_value(&row.value_text).ok_or_else(|| {
                    NormalizeError::MalformedValue {
                        role: table.role,
                        code: row.period_code.clone(),
                        category_label: row.category_label.clone(),
                        value: row.value_text.clone(),
                    }
                })?;
                let category = self.recode.resolve(row.category_label.trim());
                if let Category::Other(label) = &category {
                    debug!(role = %table.role, %label, "label not in recode table, kept verbatim");
                }
                observations.push(Observation {
                    role: table.role,
                    period,
                    category,
                    value,
                });
            }
        }
        debug!(count = observations.len(), "normalized raw tables");
        Ok(ObservationSet::new(observations))
    }
}

/// Parse a `YYYYQ` period code: 4-digit year followed by a quarter digit.
fn parse_period_code(code: &str) -> Option<Period> {
    let code = code.trim();
    if code.len() != 5 {
        return None;
    }
    let year: i32 = code.get(..4)?.parse().ok()?;
    let quarter: u8 = code.get(4..)?.parse().ok()?;
    Period::new(year, quarter)
}

/// Parse value text to a finite float.
fn parse_value(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

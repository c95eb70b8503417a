//! Category label recoding.
//!
//! The recode table is an explicit configuration value constructed at
//! startup and passed into the [`Normalizer`](crate::Normalizer); its
//! lifecycle is scoped to one pipeline run. The mapping is total but not
//! exhaustive: labels it does not know pass through verbatim.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use qna_model::Category;

/// Fixed lookup from release labels to canonical categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecodeTable {
    entries: BTreeMap<String, Category>,
}

impl Default for RecodeTable {
    /// The headline-aggregate mapping of the quarterly release.
    fn default() -> Self {
        let entries = [
            ("Agropecuária - total", Category::Agriculture),
            ("Indústria - total", Category::Industry),
            ("Serviços - total", Category::Services),
            ("PIB a preços de mercado", Category::Gdp),
            ("Despesa de consumo das famílias", Category::HouseholdConsumption),
            (
                "Despesa de consumo da administração pública",
                Category::GovernmentConsumption,
            ),
            ("Formação bruta de capital fixo", Category::GrossFixedCapital),
            ("Exportação de bens e serviços", Category::Exports),
            ("Importação de bens e serviços (-)", Category::Imports),
        ];
        Self::new(
            entries
                .into_iter()
                .map(|(label, category)| (label.to_string(), category)),
        )
    }
}

impl RecodeTable {
    pub fn new(entries: impl IntoIterator<Item = (String, Category)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    /// Map a label to its canonical category, or pass it through verbatim.
    pub fn resolve(&self, label: &str) -> Category {
        self.entries
            .get(label)
            .cloned()
            .unwrap_or_else(|| Category::Other(label.to_string()))
    }

    /// Check the table covers every expected label, once at startup.
    ///
    /// Returns the labels it does not cover.
    pub fn verify_covers<'a>(
        &self,
        expected: impl IntoIterator<Item = &'a str>,
    ) -> std::result::Result<(), Vec<String>> {
        let missing: Vec<String> = expected
            .into_iter()
            .filter(|label| !self.contains(label))
            .map(str::to_string)
            .collect();
        if missing.is_empty() { Ok(()) } else { Err(missing) }
    }
}

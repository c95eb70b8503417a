//! Canonical series categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A national-accounts category after label recoding.
///
/// The named variants cover the headline aggregates the recode table maps;
/// labels outside that set (sub-sector detail and the like) pass through
/// verbatim as [`Category::Other`] and remain first-class output categories.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    /// GDP at market prices, the aggregate total.
    Gdp,
    Agriculture,
    Industry,
    Services,
    HouseholdConsumption,
    GovernmentConsumption,
    /// Gross fixed capital formation.
    GrossFixedCapital,
    Exports,
    Imports,
    /// A label the recode table does not map, preserved verbatim.
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Gdp => "GDP",
            Category::Agriculture => "Agriculture",
            Category::Industry => "Industry",
            Category::Services => "Services",
            Category::HouseholdConsumption => "Household Consumption",
            Category::GovernmentConsumption => "Government Consumption",
            Category::GrossFixedCapital => "Gross Fixed Capital Formation",
            Category::Exports => "Exports",
            Category::Imports => "Imports",
            Category::Other(label) => label,
        }
    }

    /// True for the aggregate total the deflator and decomposition engines
    /// are restricted to.
    pub fn is_aggregate_total(&self) -> bool {
        matches!(self, Category::Gdp)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_preserves_label() {
        let category = Category::Other("Transporte, armazenagem e correio".to_string());
        assert_eq!(category.as_str(), "Transporte, armazenagem e correio");
        assert!(!category.is_aggregate_total());
    }

    #[test]
    fn gdp_is_aggregate_total() {
        assert!(Category::Gdp.is_aggregate_total());
        assert!(!Category::Industry.is_aggregate_total());
    }
}

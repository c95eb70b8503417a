//! Source-table roles for the five raw SIDRA tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The role a raw table plays in the pipeline.
///
/// Each role corresponds to one SIDRA table of the quarterly national
/// accounts release. The role tag is attached to every observation before
/// merging and is the discriminant every engine uses to select its series.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TableRole {
    /// Volume index numbers (base 1995 = 100).
    NumIndex,
    /// Seasonally-adjusted volume index numbers.
    NumIndexSa,
    /// Values at current prices.
    CurrentPrices,
    /// Values at constant prices.
    ConstantPrices,
    /// Seasonally-adjusted values at constant prices.
    ConstantPricesSa,
}

impl TableRole {
    /// All roles in release order.
    pub const ALL: [TableRole; 5] = [
        TableRole::NumIndex,
        TableRole::NumIndexSa,
        TableRole::CurrentPrices,
        TableRole::ConstantPrices,
        TableRole::ConstantPricesSa,
    ];

    /// Canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TableRole::NumIndex => "num_index",
            TableRole::NumIndexSa => "num_index_sa",
            TableRole::CurrentPrices => "current_prices",
            TableRole::ConstantPrices => "constant_prices",
            TableRole::ConstantPricesSa => "constant_prices_sa",
        }
    }

    /// SIDRA table code for this role.
    pub fn table_code(&self) -> &'static str {
        match self {
            TableRole::NumIndex => "1620",
            TableRole::NumIndexSa => "1621",
            TableRole::CurrentPrices => "1846",
            TableRole::ConstantPrices => "6612",
            TableRole::ConstantPricesSa => "6613",
        }
    }

    /// SIDRA variable code queried within the table.
    pub fn variable_code(&self) -> &'static str {
        match self {
            TableRole::NumIndex => "583",
            TableRole::NumIndexSa => "584",
            TableRole::CurrentPrices => "585",
            TableRole::ConstantPrices => "9318",
            TableRole::ConstantPricesSa => "9319",
        }
    }
}

impl fmt::Display for TableRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TableRole {
    type Err = String;

    /// Parse a role name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "num_index" => Ok(TableRole::NumIndex),
            "num_index_sa" => Ok(TableRole::NumIndexSa),
            "current_prices" => Ok(TableRole::CurrentPrices),
            "constant_prices" => Ok(TableRole::ConstantPrices),
            "constant_prices_sa" => Ok(TableRole::ConstantPricesSa),
            _ => Err(format!("Unknown table role: {s}")),
        }
    }
}

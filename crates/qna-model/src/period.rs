//! Calendar quarters for national-accounts series.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar quarter, ordered by (year, quarter).
///
/// Every downstream lag and window operation relies on this ordering, so
/// `Ord` is derived from the field order and must stay (year, quarter).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Period {
    pub year: i32,
    pub quarter: u8,
}

impl Period {
    /// Create a period, rejecting quarters outside 1..=4.
    pub fn new(year: i32, quarter: u8) -> Option<Self> {
        if (1..=4).contains(&quarter) {
            Some(Self { year, quarter })
        } else {
            None
        }
    }

    /// True for the fourth quarter, where a trailing four-quarter window
    /// spans exactly one calendar year.
    pub fn is_fourth_quarter(&self) -> bool {
        self.quarter == 4
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Q{}", self.year, self.quarter)
    }
}

impl FromStr for Period {
    type Err = String;

    /// Parse the display form, e.g. `2020Q1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, quarter) = s
            .trim()
            .split_once('Q')
            .ok_or_else(|| format!("not a period: {s}"))?;
        let year: i32 = year.parse().map_err(|_| format!("bad year in: {s}"))?;
        let quarter: u8 = quarter
            .parse()
            .map_err(|_| format!("bad quarter in: {s}"))?;
        Period::new(year, quarter).ok_or_else(|| format!("quarter out of range in: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_quarter_out_of_range() {
        assert!(Period::new(2020, 0).is_none());
        assert!(Period::new(2020, 5).is_none());
        assert!(Period::new(2020, 4).is_some());
    }

    #[test]
    fn orders_by_year_then_quarter() {
        let q4_2019 = Period::new(2019, 4).unwrap();
        let q1_2020 = Period::new(2020, 1).unwrap();
        let q2_2020 = Period::new(2020, 2).unwrap();
        assert!(q4_2019 < q1_2020);
        assert!(q1_2020 < q2_2020);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        let period = Period::new(2021, 3).unwrap();
        assert_eq!(period.to_string(), "2021Q3");
        assert_eq!("2021Q3".parse::<Period>().unwrap(), period);
    }

    #[test]
    fn from_str_rejects_garbage() {
        assert!("2021".parse::<Period>().is_err());
        assert!("2021Q5".parse::<Period>().is_err());
        assert!("abcdQ1".parse::<Period>().is_err());
    }
}

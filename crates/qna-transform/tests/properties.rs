//! Property tests for the series algebra and the engines.

use proptest::prelude::*;

use qna_model::{Category, Observation, ObservationSet, Period, TableRole};
use qna_transform::{
    compute_decomposition, compute_rates, percent_change, trailing_sum, year_to_date,
};

fn periods(count: usize) -> Vec<Period> {
    (0..count)
        .map(|t| Period::new(2000 + t as i32 / 4, (t % 4) as u8 + 1).unwrap())
        .collect()
}

fn index_observations(role: TableRole, values: &[f64]) -> Vec<Observation> {
    periods(values.len())
        .into_iter()
        .zip(values)
        .map(|(period, &value)| Observation {
            role,
            period,
            category: Category::Gdp,
            value,
        })
        .collect()
}

proptest! {
    #[test]
    fn constant_series_has_zero_growth(level in 1.0f64..10_000.0, len in 1usize..32) {
        let values = vec![level; len];
        let mut rows = index_observations(TableRole::NumIndex, &values);
        rows.extend(index_observations(TableRole::NumIndexSa, &values));
        let output = compute_rates(&ObservationSet::new(rows));

        prop_assert!(output.failures.is_empty());
        for record in &output.records {
            for rate in [record.var_margin, record.var_yoy, record.var_annual, record.var_ytd] {
                if let Some(rate) = rate {
                    prop_assert!(rate.abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn defined_counts_match_the_lag_boundaries(
        values in prop::collection::vec(1.0f64..10_000.0, 1..32),
    ) {
        let n = values.len();
        let mut rows = index_observations(TableRole::NumIndex, &values);
        rows.extend(index_observations(TableRole::NumIndexSa, &values));
        let output = compute_rates(&ObservationSet::new(rows));

        let count = |field: fn(&qna_model::RateRecord) -> Option<f64>| {
            output.records.iter().filter(|r| field(r).is_some()).count()
        };
        prop_assert_eq!(count(|r| r.var_margin), n - 1);
        prop_assert_eq!(count(|r| r.var_yoy), n.saturating_sub(4));
        // The trailing-sum ratio needs a full window on both sides.
        prop_assert_eq!(count(|r| r.var_annual), n.saturating_sub(7));
    }

    #[test]
    fn ytd_at_q1_equals_the_raw_index(
        values in prop::collection::vec(1.0f64..10_000.0, 1..32),
    ) {
        let defined: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
        let cum = year_to_date(&periods(values.len()), &defined);
        for (period, (cum, value)) in periods(values.len()).iter().zip(cum.iter().zip(&values)) {
            if period.quarter == 1 {
                prop_assert_eq!(*cum, Some(*value));
            }
        }
    }

    #[test]
    fn decomposition_identity_is_exact(
        values in prop::collection::vec(50.0f64..5_000.0, 8..40),
    ) {
        let rows = index_observations(TableRole::ConstantPricesSa, &values);
        let records = compute_decomposition(&ObservationSet::new(rows)).unwrap();
        for record in records {
            prop_assert_eq!(record.total_growth, record.carryover + record.in_year_growth);
        }
    }

    #[test]
    fn trailing_sum_ratio_matches_direct_computation(
        values in prop::collection::vec(1.0f64..10_000.0, 8..24),
    ) {
        let defined: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
        let rolling = trailing_sum(&defined, 4);
        let var_annual = percent_change(&rolling, 4);
        for (t, value) in var_annual.iter().enumerate() {
            if t < 7 {
                prop_assert!(value.is_none());
                continue;
            }
            let recent: f64 = values[t - 3..=t].iter().sum();
            let base: f64 = values[t - 7..=t - 4].iter().sum();
            let expected = (recent / base - 1.0) * 100.0;
            prop_assert!((value.unwrap() - expected).abs() < 1e-9);
        }
    }
}

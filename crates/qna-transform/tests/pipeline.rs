//! End-to-end pipeline tests: raw tables in, three record sequences out.

use qna_ingest::{Normalizer, RecodeTable};
use qna_model::{Category, ObservationSet, RawRow, RawTable, TableRole};
use qna_transform::{EngineError, run_pipeline};

fn raw_table(role: TableRole, values: &[f64]) -> RawTable {
    let mut table = RawTable::new(role);
    table.push_row(RawRow {
        period_code: "Trimestre (Código)".to_string(),
        category_label: "Setores e subsetores".to_string(),
        value_text: "Valor".to_string(),
    });
    for (t, value) in values.iter().enumerate() {
        let year = 2020 + t / 4;
        let quarter = t % 4 + 1;
        table.push_row(RawRow {
            period_code: format!("{year}{quarter}"),
            category_label: "PIB a preços de mercado".to_string(),
            value_text: value.to_string(),
        });
    }
    table
}

fn all_five_tables() -> Vec<RawTable> {
    let index: Vec<f64> = (0..12).map(|t| 100.0 + t as f64).collect();
    let prices: Vec<f64> = (0..12).map(|t| 1000.0 + 10.0 * t as f64).collect();
    vec![
        raw_table(TableRole::NumIndex, &index),
        raw_table(TableRole::NumIndexSa, &index),
        raw_table(TableRole::CurrentPrices, &prices),
        raw_table(TableRole::ConstantPrices, &index),
        raw_table(TableRole::ConstantPricesSa, &index),
    ]
}

fn normalize(tables: &[RawTable]) -> ObservationSet {
    Normalizer::new(RecodeTable::default())
        .normalize(tables)
        .expect("normalize fixture")
}

#[test]
fn full_run_produces_all_three_outputs() {
    let output = run_pipeline(&normalize(&all_five_tables()));
    assert_eq!(output.rates.len(), 12);
    assert_eq!(output.deflator.len(), 12);
    assert_eq!(output.decomposition.len(), 2);
    assert!(output.failures.is_empty());
}

#[test]
fn missing_table_empties_only_the_affected_engine() {
    let tables: Vec<RawTable> = all_five_tables()
        .into_iter()
        .filter(|table| table.role != TableRole::ConstantPricesSa)
        .collect();
    let output = run_pipeline(&normalize(&tables));

    assert!(!output.rates.is_empty());
    assert!(!output.deflator.is_empty());
    assert!(output.decomposition.is_empty());

    assert!(output.has_failure_for(&Category::Gdp));
    let missing: Vec<_> = output.missing_series().collect();
    assert_eq!(missing.len(), 1);
    assert_eq!(
        missing[0].error,
        EngineError::MissingSeries {
            role: TableRole::ConstantPricesSa,
            category: Category::Gdp,
        }
    );
}

#[test]
fn output_serializes_for_the_presentation_sink() {
    let output = run_pipeline(&normalize(&all_five_tables()));
    let json = serde_json::to_value(&output).expect("serialize output");
    assert_eq!(json["rates"].as_array().unwrap().len(), 12);
    // Early periods have undefined growth rates, serialized as null.
    assert!(json["rates"][0]["var_yoy"].is_null());
    assert!(json["decomposition"][0]["total_growth"].is_number());
}

#[test]
fn pipeline_runs_are_reproducible() {
    let set = normalize(&all_five_tables());
    let first = run_pipeline(&set);
    let second = run_pipeline(&set);
    assert_eq!(first.rates, second.rates);
    assert_eq!(first.deflator, second.deflator);
    assert_eq!(first.decomposition, second.decomposition);
}

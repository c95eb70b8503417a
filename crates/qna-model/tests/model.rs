//! Tests for qna-model types.

use qna_model::{Category, Observation, ObservationSet, Period, TableRole};

fn observation(role: TableRole, category: Category, year: i32, quarter: u8) -> Observation {
    Observation {
        role,
        period: Period::new(year, quarter).unwrap(),
        category,
        value: 100.0,
    }
}

#[test]
fn observation_set_serializes() {
    let set = ObservationSet::new(vec![
        observation(TableRole::NumIndex, Category::Gdp, 2020, 1),
        observation(TableRole::NumIndex, Category::Industry, 2020, 1),
    ]);
    let json = serde_json::to_string(&set).expect("serialize set");
    let round: ObservationSet = serde_json::from_str(&json).expect("deserialize set");
    assert_eq!(round, set);
}

#[test]
fn pass_through_category_survives_serde() {
    let original = Category::Other("Construção".to_string());
    let json = serde_json::to_string(&original).expect("serialize category");
    let round: Category = serde_json::from_str(&json).expect("deserialize category");
    assert_eq!(round, original);
}

#[test]
fn set_queries_keep_categories_separate() {
    let set = ObservationSet::new(vec![
        observation(TableRole::NumIndex, Category::Gdp, 2020, 1),
        observation(TableRole::NumIndex, Category::Gdp, 2020, 2),
        observation(TableRole::NumIndex, Category::Services, 2020, 1),
    ]);
    assert_eq!(set.series(TableRole::NumIndex, &Category::Gdp).len(), 2);
    assert_eq!(set.series(TableRole::NumIndex, &Category::Services).len(), 1);
    let categories = set.categories(TableRole::NumIndex);
    assert!(categories.contains(&Category::Gdp));
    assert!(categories.contains(&Category::Services));
}

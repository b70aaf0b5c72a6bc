//! Quarterly rollup tests: fixed Q1..Q4 shape, single-year scope, averages.

mod common;

use agency_crm_sdk::aggregate::quarterly_rollup;
use common::{contract, today};

#[test]
fn empty_input_yields_four_zero_quarters() {
    let quarters = quarterly_rollup(&[], today());

    let labels: Vec<&str> = quarters.iter().map(|q| q.quarter.as_str()).collect();
    assert_eq!(labels, vec!["Q1", "Q2", "Q3", "Q4"]);
    for q in &quarters {
        assert_eq!(q.year, 2024);
        assert_eq!(q.contract_count, 0);
        assert_eq!(q.total_amount, 0);
        assert_eq!(q.average_amount, 0.0);
        assert!(!q.average_amount.is_nan());
    }
}

#[test]
fn quarter_boundaries_follow_calendar_months() {
    let records = vec![
        contract("jan", "2024-01-01", 1_000_000),
        contract("mar", "2024-03-31", 1_000_000),
        contract("apr", "2024-04-01", 2_000_000),
        contract("sep", "2024-09-30", 3_000_000),
        contract("oct", "2024-10-01", 4_000_000),
        contract("dec", "2024-12-31", 4_000_000),
    ];
    let quarters = quarterly_rollup(&records, today());

    let counts: Vec<usize> = quarters.iter().map(|q| q.contract_count).collect();
    assert_eq!(counts, vec![2, 1, 1, 2]);
}

#[test]
fn totals_are_full_krw_and_averages_divide_by_count() {
    let records = vec![
        contract("a", "2024-02-01", 1_000_000),
        contract("b", "2024-02-15", 2_500_000),
        contract("c", "2024-05-01", 1_000_001),
    ];
    let quarters = quarterly_rollup(&records, today());

    assert_eq!(quarters[0].total_amount, 3_500_000);
    assert_eq!(quarters[0].average_amount, 1_750_000.0);
    assert_eq!(quarters[1].total_amount, 1_000_001);
    assert_eq!(quarters[1].average_amount, 1_000_001.0);
    assert_eq!(quarters[2].average_amount, 0.0);
}

#[test]
fn other_years_are_excluded() {
    let records = vec![
        contract("last-dec", "2023-12-31", 9_000_000),
        contract("next-jan", "2025-01-01", 9_000_000),
        contract("this-year", "2024-08-08", 1_000_000),
    ];
    let quarters = quarterly_rollup(&records, today());

    let total: usize = quarters.iter().map(|q| q.contract_count).sum();
    assert_eq!(total, 1);
    assert_eq!(quarters[2].contract_count, 1);
}

#[test]
fn unparseable_dates_are_excluded() {
    let records = vec![contract("bad", "2024/02/01", 1_000_000)];
    let quarters = quarterly_rollup(&records, today());
    assert!(quarters.iter().all(|q| q.contract_count == 0));
}

#[test]
fn quarter_buckets_serialize_in_camel_case() {
    let quarters = quarterly_rollup(&[contract("a", "2024-01-05", 2_000_000)], today());
    let json = serde_json::to_value(&quarters[0]).unwrap();
    assert_eq!(json["quarter"], "Q1");
    assert_eq!(json["contractCount"], 1);
    assert_eq!(json["totalAmount"], 2_000_000);
    assert_eq!(json["averageAmount"], 2_000_000.0);
}

//! Contract list query tests (filter, sort, page) and headline figures.

mod common;

use agency_crm_sdk::aggregate::{status_breakdown, summary};
use agency_crm_sdk::models::{ContractStatus, ContractSummary, StatusBreakdown};
use agency_crm_sdk::queries::{ContractQuery, SearchContractsParams, SortField, StatsQuery};
use common::{contract, sample_records, today, ymd};

fn ids(records: &[&agency_crm_sdk::models::ContractRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

#[test]
fn get_by_id_finds_record() {
    let records = sample_records();
    let q = ContractQuery::new(&records);
    assert_eq!(q.get_by_id("k-3").unwrap().amount, 1_000_000);
    assert!(q.get_by_id("missing").is_none());
}

#[test]
fn by_customer_and_by_singer_keep_input_order() {
    let records = sample_records();
    let q = ContractQuery::new(&records);
    assert_eq!(ids(&q.by_customer("cust-2")), vec!["k-2", "k-4"]);
    assert_eq!(ids(&q.by_singer("singer-2")), vec!["k-3"]);
}

// ---------------------------------------------------------------------------
// search
// ---------------------------------------------------------------------------

#[test]
fn default_params_return_everything_in_input_order() {
    let records = sample_records();
    let found = ContractQuery::new(&records).search(&SearchContractsParams::default());
    assert_eq!(ids(&found), vec!["k-1", "k-2", "k-3", "k-4", "k-5"]);
}

#[test]
fn filters_combine() {
    let records = sample_records();
    let q = ContractQuery::new(&records);

    let params = SearchContractsParams {
        status: Some(ContractStatus::Completed),
        customer_id: Some("cust-1".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&q.search(&params)), vec!["k-1", "k-5"]);

    let params = SearchContractsParams {
        category: Some("대형".to_string()),
        amount_gte: Some(2_000_000),
        amount_lte: Some(5_000_000),
        ..Default::default()
    };
    assert_eq!(ids(&q.search(&params)), vec!["k-1", "k-4"]);
}

#[test]
fn name_filter_is_case_insensitive_over_both_parties() {
    let records = sample_records();
    let q = ContractQuery::new(&records);

    let params = SearchContractsParams {
        name: Some("PARK".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&q.search(&params)), vec!["k-2", "k-4"]);

    let params = SearchContractsParams {
        name: Some("cho".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&q.search(&params)), vec!["k-3"]);
}

#[test]
fn date_range_is_inclusive_and_drops_bad_dates() {
    let mut records = sample_records();
    records.push(contract("bad", "whenever", 1));
    let q = ContractQuery::new(&records);

    let params = SearchContractsParams {
        date_from: Some(ymd(2024, 2, 10)),
        date_to: Some(ymd(2024, 6, 1)),
        ..Default::default()
    };
    assert_eq!(ids(&q.search(&params)), vec!["k-1", "k-2", "k-3"]);
    assert_eq!(q.count(&params), 3);
}

#[test]
fn sort_by_amount_descending_with_paging() {
    let records = sample_records();
    let params = SearchContractsParams {
        sort: Some(SortField::Amount),
        descending: true,
        offset: Some(1),
        limit: Some(2),
        ..Default::default()
    };
    let found = ContractQuery::new(&records).search(&params);
    assert_eq!(ids(&found), vec!["k-1", "k-4"]);
}

#[test]
fn sort_by_date_puts_bad_dates_first_ascending() {
    let mut records = sample_records();
    records.push(contract("bad", "??", 1));
    let params = SearchContractsParams {
        sort: Some(SortField::Date),
        ..Default::default()
    };
    let found = ContractQuery::new(&records).search(&params);
    assert_eq!(ids(&found), vec!["bad", "k-5", "k-4", "k-3", "k-2", "k-1"]);
}

#[test]
fn sort_by_name_is_stable() {
    let records = sample_records();
    let params = SearchContractsParams {
        sort: Some(SortField::CustomerName),
        ..Default::default()
    };
    let found = ContractQuery::new(&records).search(&params);
    assert_eq!(ids(&found), vec!["k-1", "k-3", "k-5", "k-2", "k-4"]);
}

#[test]
fn count_ignores_paging() {
    let records = sample_records();
    let params = SearchContractsParams {
        limit: Some(1),
        ..Default::default()
    };
    assert_eq!(ContractQuery::new(&records).count(&params), 5);
}

// ---------------------------------------------------------------------------
// summary / status_breakdown
// ---------------------------------------------------------------------------

#[test]
fn summary_of_sample_records() {
    let s = summary(&sample_records());
    assert_eq!(s.contract_count, 5);
    assert_eq!(s.total_amount, 18_000_000);
    assert_eq!(s.average_amount, 3_600_000.0);
    assert_eq!(s.min_amount, 1_000_000);
    assert_eq!(s.max_amount, 7_000_000);
}

#[test]
fn summary_of_empty_input_is_all_zero() {
    assert_eq!(summary(&[]), ContractSummary::default());
    assert_eq!(summary(&[]).average_amount, 0.0);
}

#[test]
fn status_breakdown_counts_each_status() {
    let b = status_breakdown(&sample_records());
    assert_eq!(
        b,
        StatusBreakdown {
            pending: 1,
            completed: 3,
            canceled: 1,
        }
    );
    assert_eq!(b.total(), 5);
}

#[test]
fn stats_query_exposes_every_rollup() {
    let records = sample_records();
    let stats = StatsQuery::new(&records).as_of(today());
    assert_eq!(stats.today(), today());
    assert_eq!(stats.monthly().len(), 12);
    assert_eq!(stats.quarterly().len(), 4);
    assert_eq!(stats.by_category().len(), 3);
    assert_eq!(stats.by_type().len(), 3);
    assert_eq!(stats.summary().contract_count, 5);
    assert_eq!(stats.status_breakdown().completed, 3);

    let in_window: usize = stats.monthly().iter().map(|b| b.count).sum();
    assert_eq!(in_window, 4);
}

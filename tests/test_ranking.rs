//! Top-K ranking tests: grouping by id, first-seen names, stable ties, cutoffs.

mod common;

use agency_crm_sdk::aggregate::{top_k_ranking, RankKey};
use agency_crm_sdk::config::DEFAULT_TOP_K;
use agency_crm_sdk::queries::StatsQuery;
use common::{contract, with_customer, with_singer};

#[test]
fn first_seen_name_wins_and_amounts_are_summed() {
    let records = vec![
        with_customer(contract("1", "2024-01-01", 1_000_000), "c1", "Kim"),
        with_customer(contract("2", "2024-02-01", 2_000_000), "c1", "Kim2"),
    ];

    let ranked = top_k_ranking(&records, RankKey::Customer, 5);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].id, "c1");
    assert_eq!(ranked[0].name, "Kim");
    assert_eq!(ranked[0].total_amount, 3_000_000);
    assert_eq!(ranked[0].contract_count, 2);
}

#[test]
fn groups_by_id_not_by_name() {
    let records = vec![
        with_customer(contract("1", "2024-01-01", 1_000_000), "c1", "Same Name"),
        with_customer(contract("2", "2024-01-01", 1_000_000), "c2", "Same Name"),
    ];
    assert_eq!(top_k_ranking(&records, RankKey::Customer, 5).len(), 2);
}

#[test]
fn sorted_descending_by_total_amount() {
    let records = vec![
        with_customer(contract("1", "2024-01-01", 1_000_000), "small", "S"),
        with_customer(contract("2", "2024-01-01", 9_000_000), "big", "B"),
        with_customer(contract("3", "2024-01-01", 4_000_000), "mid", "M"),
        with_customer(contract("4", "2024-01-01", 1_000_000), "small", "S"),
    ];
    let ids: Vec<String> = top_k_ranking(&records, RankKey::Customer, 5)
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["big", "mid", "small"]);
}

#[test]
fn ties_keep_first_appearance_order() {
    let records = vec![
        with_singer(contract("1", "2024-01-01", 2_000_000), "s-b", "B"),
        with_singer(contract("2", "2024-01-01", 2_000_000), "s-a", "A"),
        with_singer(contract("3", "2024-01-01", 5_000_000), "s-c", "C"),
        with_singer(contract("4", "2024-01-01", 2_000_000), "s-d", "D"),
    ];
    let ids: Vec<String> = top_k_ranking(&records, RankKey::Singer, 10)
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["s-c", "s-b", "s-a", "s-d"]);
}

#[test]
fn truncates_to_k() {
    let records: Vec<_> = (0..8)
        .map(|i| with_customer(contract(&i.to_string(), "2024-01-01", 1_000_000 * (i + 1)), &format!("c{i}"), "N"))
        .collect();

    let ranked = top_k_ranking(&records, RankKey::Customer, 3);
    let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["c7", "c6", "c5"]);
}

#[test]
fn zero_k_yields_empty() {
    let records = common::sample_records();
    assert!(top_k_ranking(&records, RankKey::Customer, 0).is_empty());
}

#[test]
fn k_above_distinct_keys_returns_all() {
    let records = common::sample_records();
    let ranked = top_k_ranking(&records, RankKey::Customer, 100);
    assert_eq!(ranked.len(), 2);
    let count: usize = ranked.iter().map(|r| r.contract_count).sum();
    assert_eq!(count, records.len());
}

#[test]
fn empty_input_yields_empty() {
    assert!(top_k_ranking(&[], RankKey::Singer, 5).is_empty());
}

#[test]
fn stats_query_top_uses_default_cutoff() {
    let records: Vec<_> = (0..9)
        .map(|i| with_singer(contract(&i.to_string(), "2024-01-01", 1_000_000), &format!("s{i}"), "N"))
        .collect();
    let stats = StatsQuery::new(&records);
    assert_eq!(stats.top(RankKey::Singer).len(), DEFAULT_TOP_K);
    assert_eq!(stats.top_singers(2).len(), 2);
    assert!(stats.top_customers(5).len() == 1);
}

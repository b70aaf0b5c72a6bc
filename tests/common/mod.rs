//! Shared test fixtures for the CRM SDK integration tests.
//!
//! Provides a fixed reference date and small builders for contract records,
//! so each test spells out only the fields it cares about.

#![allow(dead_code)]

use agency_crm_sdk::models::{ContractRecord, ContractStatus};
use chrono::NaiveDate;

/// Reference "today" used by the date-windowed tests.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A completed contract between `cust-1` and `singer-1`.
pub fn contract(id: &str, date: &str, amount: u64) -> ContractRecord {
    ContractRecord {
        id: id.to_string(),
        customer_id: "cust-1".to_string(),
        singer_id: "singer-1".to_string(),
        customer_name: "Kim".to_string(),
        singer_name: "Lee".to_string(),
        date: date.to_string(),
        amount,
        status: ContractStatus::Completed,
        contract_type: "공연".to_string(),
        category: "대형".to_string(),
    }
}

pub fn with_customer(mut record: ContractRecord, id: &str, name: &str) -> ContractRecord {
    record.customer_id = id.to_string();
    record.customer_name = name.to_string();
    record
}

pub fn with_singer(mut record: ContractRecord, id: &str, name: &str) -> ContractRecord {
    record.singer_id = id.to_string();
    record.singer_name = name.to_string();
    record
}

pub fn with_labels(mut record: ContractRecord, contract_type: &str, category: &str) -> ContractRecord {
    record.contract_type = contract_type.to_string();
    record.category = category.to_string();
    record
}

pub fn with_status(mut record: ContractRecord, status: ContractStatus) -> ContractRecord {
    record.status = status;
    record
}

/// A mixed record set spanning two years, two customers and two singers.
pub fn sample_records() -> Vec<ContractRecord> {
    vec![
        with_labels(contract("k-1", "2024-06-01", 5_000_000), "공연", "대형"),
        with_customer(
            with_labels(contract("k-2", "2024-05-20", 2_000_000), "행사", "중형"),
            "cust-2",
            "Park",
        ),
        with_singer(
            with_status(contract("k-3", "2024-02-10", 1_000_000), ContractStatus::Pending),
            "singer-2",
            "Choi",
        ),
        with_customer(
            with_status(contract("k-4", "2023-11-03", 3_000_000), ContractStatus::Canceled),
            "cust-2",
            "Park",
        ),
        with_labels(contract("k-5", "2022-01-15", 7_000_000), "방송", "소형"),
    ]
}

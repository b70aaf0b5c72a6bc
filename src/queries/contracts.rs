//! Client-side filtering and sorting of an already-fetched contract list.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::models::{ContractRecord, ContractStatus};

// ---------------------------------------------------------------------------
// SearchContractsParams
// ---------------------------------------------------------------------------

/// Column a contract search is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Date,
    Amount,
    CustomerName,
    SingerName,
}

/// Parameters for the contract list search.
///
/// All fields are optional. When `None`, the corresponding filter is skipped.
/// Without `sort` the input order is kept.
#[derive(Debug, Clone, Default)]
pub struct SearchContractsParams {
    pub status: Option<ContractStatus>,
    pub customer_id: Option<String>,
    pub singer_id: Option<String>,
    /// Case-insensitive substring of either the customer or the singer name.
    pub name: Option<String>,
    pub contract_type: Option<String>,
    pub category: Option<String>,
    pub amount_gte: Option<u64>,
    pub amount_lte: Option<u64>,
    /// Inclusive lower date bound.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub date_to: Option<NaiveDate>,
    pub sort: Option<SortField>,
    pub descending: bool,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

// ---------------------------------------------------------------------------
// ContractQuery
// ---------------------------------------------------------------------------

/// Query interface for a borrowed list of contract records.
pub struct ContractQuery<'a> {
    records: &'a [ContractRecord],
}

impl<'a> ContractQuery<'a> {
    /// Create a new `ContractQuery` over `records`.
    pub fn new(records: &'a [ContractRecord]) -> Self {
        Self { records }
    }

    /// Find a contract by its id.
    pub fn get_by_id(&self, id: &str) -> Option<&'a ContractRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// All contracts of one customer, in input order.
    pub fn by_customer(&self, customer_id: &str) -> Vec<&'a ContractRecord> {
        self.records
            .iter()
            .filter(|r| r.customer_id == customer_id)
            .collect()
    }

    /// All contracts of one singer, in input order.
    pub fn by_singer(&self, singer_id: &str) -> Vec<&'a ContractRecord> {
        self.records
            .iter()
            .filter(|r| r.singer_id == singer_id)
            .collect()
    }

    /// Filter, sort and page the record list.
    ///
    /// A record whose date does not parse never matches `date_from` or
    /// `date_to`, and sorts before every dated record in ascending date order.
    pub fn search(&self, params: &SearchContractsParams) -> Vec<&'a ContractRecord> {
        let name_lower = params.name.as_ref().map(|n| n.to_lowercase());

        let mut matched: Vec<&'a ContractRecord> = self
            .records
            .iter()
            .filter(|r| matches(r, params, name_lower.as_deref()))
            .collect();

        if let Some(field) = params.sort {
            matched.sort_by(|a, b| {
                let ord = compare(a, b, field);
                if params.descending {
                    ord.reverse()
                } else {
                    ord
                }
            });
        }

        let offset = params.offset.unwrap_or(0);
        let limit = params.limit.unwrap_or(usize::MAX);
        matched.into_iter().skip(offset).take(limit).collect()
    }

    /// Count contracts matching the filters of `params` (paging is ignored).
    pub fn count(&self, params: &SearchContractsParams) -> usize {
        let name_lower = params.name.as_ref().map(|n| n.to_lowercase());
        self.records
            .iter()
            .filter(|r| matches(r, params, name_lower.as_deref()))
            .count()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn matches(record: &ContractRecord, params: &SearchContractsParams, name_lower: Option<&str>) -> bool {
    if let Some(status) = params.status {
        if record.status != status {
            return false;
        }
    }
    if let Some(ref id) = params.customer_id {
        if &record.customer_id != id {
            return false;
        }
    }
    if let Some(ref id) = params.singer_id {
        if &record.singer_id != id {
            return false;
        }
    }
    if let Some(needle) = name_lower {
        let hit = record.customer_name.to_lowercase().contains(needle)
            || record.singer_name.to_lowercase().contains(needle);
        if !hit {
            return false;
        }
    }
    if let Some(ref t) = params.contract_type {
        if &record.contract_type != t {
            return false;
        }
    }
    if let Some(ref c) = params.category {
        if &record.category != c {
            return false;
        }
    }
    if let Some(min) = params.amount_gte {
        if record.amount < min {
            return false;
        }
    }
    if let Some(max) = params.amount_lte {
        if record.amount > max {
            return false;
        }
    }
    if params.date_from.is_some() || params.date_to.is_some() {
        let Some(date) = record.parsed_date() else {
            return false;
        };
        if params.date_from.is_some_and(|from| date < from) {
            return false;
        }
        if params.date_to.is_some_and(|to| date > to) {
            return false;
        }
    }
    true
}

fn compare(a: &ContractRecord, b: &ContractRecord, field: SortField) -> Ordering {
    match field {
        SortField::Date => a.parsed_date().cmp(&b.parsed_date()),
        SortField::Amount => a.amount.cmp(&b.amount),
        SortField::CustomerName => a.customer_name.cmp(&b.customer_name),
        SortField::SingerName => a.singer_name.cmp(&b.singer_name),
    }
}

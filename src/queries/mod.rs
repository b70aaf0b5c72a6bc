//! Query modules for the CRM SDK.
//!
//! Each module provides a query struct that borrows a slice of
//! [`ContractRecord`](crate::models::ContractRecord)s and exposes read-only
//! views over it. The records are never copied or modified.

pub mod contracts;
pub mod stats;

pub use contracts::{ContractQuery, SearchContractsParams, SortField};
pub use stats::StatsQuery;

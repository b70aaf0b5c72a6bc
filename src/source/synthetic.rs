//! Locally generated contract records for when the API is unavailable.
//!
//! Produces a plausible spread of contracts over the twelve calendar months
//! ending at an anchor date, with weighted random status selection. Given a
//! seed the output is fully reproducible.

use chrono::{Datelike, Local, NaiveDate};
use rand::prelude::*;
use rand::rngs::StdRng;

use super::{DataSource, RecordOrigin};
use crate::aggregate::{month_from_index, month_index};
use crate::config::{DEFAULT_SYNTHETIC_COUNT, MONTH_WINDOW};
use crate::error::Result;
use crate::models::{ContractRecord, ContractStatus};

const CUSTOMERS: &[(&str, &str)] = &[
    ("cust-001", "한빛엔터테인먼트"),
    ("cust-002", "서울문화재단"),
    ("cust-003", "부산국제영화제"),
    ("cust-004", "대한항공 사내행사"),
    ("cust-005", "KBS 예능국"),
    ("cust-006", "제주 뮤직페스티벌"),
];

const SINGERS: &[(&str, &str)] = &[
    ("singer-001", "아이유"),
    ("singer-002", "임영웅"),
    ("singer-003", "볼빨간사춘기"),
    ("singer-004", "잔나비"),
    ("singer-005", "이찬원"),
];

const TYPES: &[&str] = &["공연", "행사", "방송", "광고"];
const CATEGORIES: &[&str] = &["대형", "중형", "소형"];

/// `(status, weight)`: most generated contracts are completed.
const STATUS_WEIGHTS: &[(ContractStatus, u32)] = &[
    (ContractStatus::Completed, 6),
    (ContractStatus::Pending, 3),
    (ContractStatus::Canceled, 1),
];

/// Generates contract records instead of fetching them.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    count: usize,
    seed: Option<u64>,
    anchor: Option<NaiveDate>,
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self {
            count: DEFAULT_SYNTHETIC_COUNT,
            seed: None,
            anchor: None,
        }
    }
}

impl SyntheticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records to generate.
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Fix the RNG seed so every call returns the same records.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Last day generated records may fall on.
    ///
    /// Without an explicit anchor, today's local date is read on every
    /// [`generate`](Self::generate) call.
    pub fn anchor(mut self, anchor: NaiveDate) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Generate the records.
    pub fn generate(&self) -> Vec<ContractRecord> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let anchor = self.anchor.unwrap_or_else(|| Local::now().date_naive());
        (0..self.count)
            .map(|i| self.generate_one(i, anchor, &mut rng))
            .collect()
    }

    fn generate_one(&self, i: usize, anchor: NaiveDate, rng: &mut StdRng) -> ContractRecord {
        let (customer_id, customer_name) = CUSTOMERS[rng.gen_range(0..CUSTOMERS.len())];
        let (singer_id, singer_name) = SINGERS[rng.gen_range(0..SINGERS.len())];
        let date = random_date(anchor, rng);

        ContractRecord {
            id: format!("synthetic-{:04}", i + 1),
            customer_id: customer_id.to_string(),
            singer_id: singer_id.to_string(),
            customer_name: customer_name.to_string(),
            singer_name: singer_name.to_string(),
            date: date.format("%Y-%m-%d").to_string(),
            amount: rng.gen_range(10u64..=500) * 100_000,
            status: pick_status(rng),
            contract_type: TYPES[rng.gen_range(0..TYPES.len())].to_string(),
            category: CATEGORIES[rng.gen_range(0..CATEGORIES.len())].to_string(),
        }
    }
}

impl DataSource for SyntheticSource {
    fn origin(&self) -> RecordOrigin {
        RecordOrigin::Synthetic
    }

    fn contracts(&self) -> Result<Vec<ContractRecord>> {
        tracing::debug!(count = self.count, seed = ?self.seed, "generating synthetic contracts");
        Ok(self.generate())
    }
}

// ---------------------------------------------------------------------------
// Free-standing helpers
// ---------------------------------------------------------------------------

/// A date within the trailing month window ending at `anchor`, never after it.
fn random_date(anchor: NaiveDate, rng: &mut StdRng) -> NaiveDate {
    let back = rng.gen_range(0..MONTH_WINDOW) as i32;
    let (year, month) = month_from_index(month_index(anchor.year(), anchor.month()) - back);
    let max_day = if back == 0 { anchor.day().min(28) } else { 28 };
    let day = rng.gen_range(1..=max_day);
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(anchor)
}

/// Weighted random pick of a contract status.
fn pick_status(rng: &mut StdRng) -> ContractStatus {
    let total_weight: u32 = STATUS_WEIGHTS.iter().map(|(_, w)| w).sum();
    let mut roll = rng.gen_range(0..total_weight);
    for &(status, weight) in STATUS_WEIGHTS {
        if roll < weight {
            return status;
        }
        roll -= weight;
    }
    ContractStatus::Completed
}

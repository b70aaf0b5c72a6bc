use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MonthBucket — One calendar month of the trailing monthly rollup
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthBucket {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
    /// `YYYY-MM`.
    pub label: String,
    pub count: usize,
    pub total_amount_millions: f64,
}

// ---------------------------------------------------------------------------
// CategoryBucket / TypeBucket — Free-text label distributions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBucket {
    pub label: String,
    pub count: usize,
    pub total_amount_millions: f64,
}

/// Type distribution is count-only; it carries no amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeBucket {
    pub label: String,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// QuarterBucket — One calendar quarter of the current year
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterBucket {
    pub year: i32,
    /// `Q1` through `Q4`.
    pub quarter: String,
    pub contract_count: usize,
    pub total_amount: u64,
    pub average_amount: f64,
}

// ---------------------------------------------------------------------------
// RankedEntity — A customer or singer in a top-K ranking
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntity {
    pub id: String,
    pub name: String,
    pub total_amount: u64,
    pub contract_count: usize,
}

// ---------------------------------------------------------------------------
// ContractSummary / StatusBreakdown — Headline figures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractSummary {
    pub contract_count: usize,
    pub total_amount: u64,
    pub average_amount: f64,
    pub min_amount: u64,
    pub max_amount: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub pending: usize,
    pub completed: usize,
    pub canceled: usize,
}

impl StatusBreakdown {
    pub fn total(&self) -> usize {
        self.pending + self.completed + self.canceled
    }
}

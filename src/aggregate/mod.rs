//! Pure rollups over contract record slices.
//!
//! Every function here takes `&[ContractRecord]` and returns freshly built
//! buckets. Nothing is cached between calls, nothing is fetched, and no input
//! can make a rollup fail: empty slices and odd-but-valid records produce
//! zero-valued buckets. Records whose `date` does not parse are left out of
//! the date-bucketed rollups and still counted by the label distributions.

pub mod distribution;
pub mod monthly;
pub mod quarterly;
pub mod ranking;
pub mod summary;

pub use distribution::{category_distribution, type_distribution};
pub use monthly::monthly_rollup;
pub use quarterly::quarterly_rollup;
pub use ranking::{top_k_ranking, RankKey};
pub use summary::{status_breakdown, summary};

/// Divisor that turns whole KRW into the millions shown on charts.
pub(crate) const MILLION: f64 = 1_000_000.0;

/// Months since year 0, so consecutive calendar months differ by one.
pub(crate) fn month_index(year: i32, month: u32) -> i32 {
    year * 12 + month as i32 - 1
}

/// Inverse of [`month_index`]: `(year, 1-based month)`.
pub(crate) fn month_from_index(index: i32) -> (i32, u32) {
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

pub(crate) fn to_millions(amount: u64) -> f64 {
    amount as f64 / MILLION
}

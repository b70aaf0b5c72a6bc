//! Dashboard rollups bound to a record slice and a reference date.

use chrono::{Local, NaiveDate};

use crate::aggregate::{self, RankKey};
use crate::config::DEFAULT_TOP_K;
use crate::models::{
    CategoryBucket, ContractRecord, ContractSummary, MonthBucket, QuarterBucket, RankedEntity,
    StatusBreakdown, TypeBucket,
};

// ---------------------------------------------------------------------------
// StatsQuery
// ---------------------------------------------------------------------------

/// Rollup interface over a borrowed record slice.
///
/// The reference date defaults to today's local date and can be pinned with
/// [`as_of`](Self::as_of). Every call recomputes from the slice.
pub struct StatsQuery<'a> {
    records: &'a [ContractRecord],
    today: NaiveDate,
}

impl<'a> StatsQuery<'a> {
    /// Create a new `StatsQuery` over `records`, dated today.
    pub fn new(records: &'a [ContractRecord]) -> Self {
        Self {
            records,
            today: Local::now().date_naive(),
        }
    }

    /// Use `today` as "now" for the date-windowed rollups.
    pub fn as_of(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// The reference date in use.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    // -- Time-bucketed rollups --------------------------------------------

    /// Twelve trailing calendar months ending with the current one.
    pub fn monthly(&self) -> Vec<MonthBucket> {
        aggregate::monthly_rollup(self.records, self.today)
    }

    /// Q1..Q4 of the current calendar year.
    pub fn quarterly(&self) -> Vec<QuarterBucket> {
        aggregate::quarterly_rollup(self.records, self.today)
    }

    // -- Label distributions ----------------------------------------------

    pub fn by_category(&self) -> Vec<CategoryBucket> {
        aggregate::category_distribution(self.records)
    }

    pub fn by_type(&self) -> Vec<TypeBucket> {
        aggregate::type_distribution(self.records)
    }

    // -- Rankings ---------------------------------------------------------

    /// Top `k` customers by total contract amount.
    pub fn top_customers(&self, k: usize) -> Vec<RankedEntity> {
        aggregate::top_k_ranking(self.records, RankKey::Customer, k)
    }

    /// Top `k` singers by total contract amount.
    pub fn top_singers(&self, k: usize) -> Vec<RankedEntity> {
        aggregate::top_k_ranking(self.records, RankKey::Singer, k)
    }

    /// Top customers or singers with the default cutoff of five.
    pub fn top(&self, key: RankKey) -> Vec<RankedEntity> {
        aggregate::top_k_ranking(self.records, key, DEFAULT_TOP_K)
    }

    // -- Headline figures -------------------------------------------------

    pub fn summary(&self) -> ContractSummary {
        aggregate::summary(self.records)
    }

    pub fn status_breakdown(&self) -> StatusBreakdown {
        aggregate::status_breakdown(self.records)
    }
}

use chrono::{Datelike, NaiveDate};

use super::{month_from_index, month_index, to_millions};
use crate::config::MONTH_WINDOW;
use crate::models::{ContractRecord, MonthBucket};

/// Roll records up into the 12 calendar months ending with the month of `now`.
///
/// Always returns exactly [`MONTH_WINDOW`] buckets, oldest first. A record
/// lands in a bucket when its year and month equal the bucket's; records
/// outside the window or with an unparseable date are skipped. Amounts are
/// reported in millions without rounding.
pub fn monthly_rollup(records: &[ContractRecord], now: NaiveDate) -> Vec<MonthBucket> {
    let window = MONTH_WINDOW as i32;
    let end = month_index(now.year(), now.month());
    let start = end - (window - 1);

    let mut counts = vec![0usize; MONTH_WINDOW];
    let mut sums = vec![0u64; MONTH_WINDOW];

    for record in records {
        let Some(date) = record.parsed_date() else {
            tracing::trace!(id = %record.id, date = %record.date, "skipping record with unparseable date");
            continue;
        };
        let idx = month_index(date.year(), date.month());
        if idx < start || idx > end {
            continue;
        }
        let slot = (idx - start) as usize;
        counts[slot] += 1;
        sums[slot] = sums[slot].saturating_add(record.amount);
    }

    (start..=end)
        .enumerate()
        .map(|(slot, idx)| {
            let (year, month) = month_from_index(idx);
            MonthBucket {
                year,
                month,
                label: format!("{:04}-{:02}", year, month),
                count: counts[slot],
                total_amount_millions: to_millions(sums[slot]),
            }
        })
        .collect()
}

use chrono::{Datelike, NaiveDate};

use crate::models::{ContractRecord, QuarterBucket};

/// Roll records up into Q1..Q4 of the calendar year containing `now`.
///
/// Always four buckets in fixed order. Records from any other year, or with
/// an unparseable date, are ignored. `total_amount` is full KRW and
/// `average_amount` is `0.0` for a quarter without contracts.
pub fn quarterly_rollup(records: &[ContractRecord], now: NaiveDate) -> Vec<QuarterBucket> {
    let year = now.year();
    let mut counts = [0usize; 4];
    let mut sums = [0u64; 4];

    for record in records {
        let Some(date) = record.parsed_date() else {
            continue;
        };
        if date.year() != year {
            continue;
        }
        let q = date.month0() as usize / 3;
        counts[q] += 1;
        sums[q] = sums[q].saturating_add(record.amount);
    }

    (0..4)
        .map(|q| QuarterBucket {
            year,
            quarter: format!("Q{}", q + 1),
            contract_count: counts[q],
            total_amount: sums[q],
            average_amount: if counts[q] > 0 {
                sums[q] as f64 / counts[q] as f64
            } else {
                0.0
            },
        })
        .collect()
}

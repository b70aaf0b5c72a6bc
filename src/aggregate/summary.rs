use crate::models::{ContractRecord, ContractStatus, ContractSummary, StatusBreakdown};

/// Headline count/total/average/min/max over all records. Zeros when empty.
pub fn summary(records: &[ContractRecord]) -> ContractSummary {
    if records.is_empty() {
        return ContractSummary::default();
    }

    let mut total: u64 = 0;
    let mut min = u64::MAX;
    let mut max = 0u64;
    for record in records {
        total = total.saturating_add(record.amount);
        min = min.min(record.amount);
        max = max.max(record.amount);
    }

    ContractSummary {
        contract_count: records.len(),
        total_amount: total,
        average_amount: total as f64 / records.len() as f64,
        min_amount: min,
        max_amount: max,
    }
}

/// Number of records in each status.
pub fn status_breakdown(records: &[ContractRecord]) -> StatusBreakdown {
    let mut breakdown = StatusBreakdown::default();
    for record in records {
        match record.status {
            ContractStatus::Pending => breakdown.pending += 1,
            ContractStatus::Completed => breakdown.completed += 1,
            ContractStatus::Canceled => breakdown.canceled += 1,
        }
    }
    breakdown
}

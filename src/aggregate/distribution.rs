use std::collections::HashMap;

use super::to_millions;
use crate::models::{CategoryBucket, ContractRecord, TypeBucket};

/// Count and sum records per distinct `category`, in first-seen order.
///
/// Labels are taken verbatim; there is no fixed category list.
pub fn category_distribution(records: &[ContractRecord]) -> Vec<CategoryBucket> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut labels: Vec<&str> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();
    let mut sums: Vec<u64> = Vec::new();

    for record in records {
        let slot = *index.entry(record.category.as_str()).or_insert_with(|| {
            labels.push(record.category.as_str());
            counts.push(0);
            sums.push(0);
            labels.len() - 1
        });
        counts[slot] += 1;
        sums[slot] = sums[slot].saturating_add(record.amount);
    }

    labels
        .into_iter()
        .zip(counts)
        .zip(sums)
        .map(|((label, count), sum)| CategoryBucket {
            label: label.to_string(),
            count,
            total_amount_millions: to_millions(sum),
        })
        .collect()
}

/// Count records per distinct `type`, in first-seen order.
///
/// Unlike [`category_distribution`] this reports counts only.
pub fn type_distribution(records: &[ContractRecord]) -> Vec<TypeBucket> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<TypeBucket> = Vec::new();

    for record in records {
        let label = record.contract_type.as_str();
        match index.get(label) {
            Some(&slot) => buckets[slot].count += 1,
            None => {
                index.insert(label, buckets.len());
                buckets.push(TypeBucket {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    buckets
}

use std::collections::HashMap;

use crate::models::{ContractRecord, RankedEntity};

/// Foreign key a ranking groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankKey {
    Customer,
    Singer,
}

impl RankKey {
    /// `(id, denormalized name)` of the selected party on a record.
    fn select<'r>(&self, record: &'r ContractRecord) -> (&'r str, &'r str) {
        match self {
            RankKey::Customer => (record.customer_id.as_str(), record.customer_name.as_str()),
            RankKey::Singer => (record.singer_id.as_str(), record.singer_name.as_str()),
        }
    }
}

/// Rank customers or singers by total contract amount and keep the top `k`.
///
/// Groups by id, not by name. The name reported for a group is the one on
/// the first record seen for that id. Ties on `total_amount` keep the order
/// in which the groups first appeared. `k == 0` yields an empty list.
pub fn top_k_ranking(records: &[ContractRecord], key: RankKey, k: usize) -> Vec<RankedEntity> {
    if k == 0 {
        return Vec::new();
    }

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut ranked: Vec<RankedEntity> = Vec::new();

    for record in records {
        let (id, name) = key.select(record);
        match index.get(id) {
            Some(&slot) => {
                let entity = &mut ranked[slot];
                entity.total_amount = entity.total_amount.saturating_add(record.amount);
                entity.contract_count += 1;
            }
            None => {
                index.insert(id, ranked.len());
                ranked.push(RankedEntity {
                    id: id.to_string(),
                    name: name.to_string(),
                    total_amount: record.amount,
                    contract_count: 1,
                });
            }
        }
    }

    // sort_by is stable, which keeps first-seen order on ties
    ranked.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));
    ranked.truncate(k);
    ranked
}

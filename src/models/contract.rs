use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// ContractStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Pending,
    Completed,
    Canceled,
}

impl ContractStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Pending => "pending",
            ContractStatus::Completed => "completed",
            ContractStatus::Canceled => "canceled",
        }
    }
}

// ---------------------------------------------------------------------------
// ContractRecord — One booking contract as served by the `contracts` endpoint
// ---------------------------------------------------------------------------

/// A single contract between a customer and a singer.
///
/// `customer_name` and `singer_name` are copies taken when the contract was
/// written and may no longer match the referenced entity. `date` is kept as
/// the raw ISO-8601 string; use [`parsed_date`](Self::parsed_date) to bucket it.
/// A `null`, missing or non-string `date` decodes as an empty string, so the
/// record still loads and is left out of date-bucketed rollups only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    pub id: String,
    pub customer_id: String,
    pub singer_id: String,
    pub customer_name: String,
    pub singer_name: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: String,
    /// Amount in whole KRW.
    pub amount: u64,
    pub status: ContractStatus,
    #[serde(rename = "type")]
    pub contract_type: String,
    pub category: String,
}

impl ContractRecord {
    /// Calendar date of the contract, or `None` when `date` is not a
    /// recognisable ISO-8601 date or timestamp.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

/// Parse an ISO-8601 date or timestamp into a calendar date.
///
/// Accepts RFC 3339, naive timestamps with `T` or a space separator, and bare
/// `YYYY-MM-DD`.
///
/// An RFC 3339 timestamp yields the calendar date in its own offset, not in
/// the local zone: `2024-03-31T17:00:00Z` is March 31 even though it is
/// already April 1 in Seoul. The API is expected to send `+09:00` stamps;
/// a backend that sends UTC must convert before the date is bucketed.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Deserialize `date`, mapping `null` and non-string values to an empty string.
fn lenient_date<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Ok(s),
        _ => Ok(String::new()),
    }
}

//! Where contract records come from.
//!
//! A [`DataSource`] produces a full record list in one call. The rollups in
//! [`crate::aggregate`] never talk to a source; the caller picks one, loads
//! the records, and hands the slice over. [`fetch_with_fallback`] is the
//! "try the API, otherwise use generated data" policy in one place.

pub mod remote;
pub mod synthetic;

pub use remote::RemoteSource;
pub use synthetic::SyntheticSource;

use std::fmt;

use crate::error::Result;
use crate::models::ContractRecord;

/// Provenance of a loaded record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOrigin {
    /// Fetched from the API just now.
    Remote,
    /// Read from the last stored API response.
    Snapshot,
    /// Generated locally; not real data.
    Synthetic,
}

impl fmt::Display for RecordOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecordOrigin::Remote => "remote",
            RecordOrigin::Snapshot => "snapshot",
            RecordOrigin::Synthetic => "synthetic",
        };
        f.write_str(s)
    }
}

/// A provider of contract records.
pub trait DataSource {
    /// Where records from this source come from.
    fn origin(&self) -> RecordOrigin;

    /// Load the complete contract list.
    fn contracts(&self) -> Result<Vec<ContractRecord>>;
}

/// Records together with the source that produced them.
#[derive(Debug, Clone)]
pub struct LoadedRecords {
    pub records: Vec<ContractRecord>,
    pub origin: RecordOrigin,
}

impl LoadedRecords {
    pub fn is_synthetic(&self) -> bool {
        self.origin == RecordOrigin::Synthetic
    }
}

/// Load from `primary`; if that fails, load once from `fallback`.
///
/// There is no retry. If the fallback fails too, its error is returned.
pub fn fetch_with_fallback(
    primary: &dyn DataSource,
    fallback: &dyn DataSource,
) -> Result<LoadedRecords> {
    match primary.contracts() {
        Ok(records) => Ok(LoadedRecords {
            records,
            origin: primary.origin(),
        }),
        Err(e) => {
            tracing::warn!(
                primary = %primary.origin(),
                fallback = %fallback.origin(),
                error = %e,
                "primary source failed, using fallback"
            );
            let records = fallback.contracts()?;
            Ok(LoadedRecords {
                records,
                origin: fallback.origin(),
            })
        }
    }
}

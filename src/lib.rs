//! Talent-agency CRM SDK for Rust.
//!
//! Loads contract records from the CRM REST API (or, when the API is down,
//! from a local generator) and computes the dashboard rollups: trailing
//! monthly totals, quarterly figures, category/type distributions and top
//! customer/singer rankings.
//!
//! Loading and aggregating are separate steps. The rollups are pure
//! functions over a record slice and do not know where the records came from.
//!
//! # Quick start
//!
//! ```no_run
//! use agency_crm_sdk::CrmSdk;
//!
//! let sdk = CrmSdk::builder()
//!     .base_url("https://crm.example.com/api")
//!     .build()
//!     .unwrap();
//!
//! let loaded = sdk.load_contracts().unwrap();
//! let stats = sdk.stats(&loaded.records);
//! for bucket in stats.monthly() {
//!     println!("{} {} {:.1}M", bucket.label, bucket.count, bucket.total_amount_millions);
//! }
//! let top = stats.top_customers(5);
//! ```

pub mod aggregate;
#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod source;

pub use aggregate::RankKey;
#[cfg(feature = "async")]
pub use async_client::AsyncCrmSdk;
pub use cache::SnapshotCache;
pub use error::{CrmError, Result};
pub use source::{
    fetch_with_fallback, DataSource, LoadedRecords, RecordOrigin, RemoteSource, SyntheticSource,
};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use models::ContractRecord;

// ---------------------------------------------------------------------------
// CrmSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CrmSdk`] instance.
///
/// Use [`CrmSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CrmSdkBuilder::build) to create the SDK.
#[derive(Debug, Clone)]
pub struct CrmSdkBuilder {
    base_url: String,
    cache_dir: Option<PathBuf>,
    offline: bool,
    timeout: Duration,
    synthetic_fallback: bool,
    synthetic: SyntheticSource,
}

impl Default for CrmSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            cache_dir: None,
            offline: false,
            timeout: config::DEFAULT_TIMEOUT,
            synthetic_fallback: true,
            synthetic: SyntheticSource::default(),
        }
    }
}

impl CrmSdkBuilder {
    /// Set the API root, e.g. `https://crm.example.com/api`.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Set a custom snapshot cache directory.
    ///
    /// If not set, the platform-appropriate default cache directory is used
    /// (e.g. `~/.cache/agency-crm-sdk` on Linux).
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, the SDK never calls the API and only serves the last
    /// stored snapshot. Defaults to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether [`CrmSdk::load_contracts`] substitutes generated records when
    /// the API (or snapshot) cannot be read. Defaults to `true`.
    pub fn synthetic_fallback(mut self, enabled: bool) -> Self {
        self.synthetic_fallback = enabled;
        self
    }

    /// Seed for the generated fallback records.
    pub fn synthetic_seed(mut self, seed: u64) -> Self {
        self.synthetic = self.synthetic.seed(seed);
        self
    }

    /// Number of generated fallback records.
    pub fn synthetic_count(mut self, count: usize) -> Self {
        self.synthetic = self.synthetic.count(count);
        self
    }

    /// Build the SDK, validating the base URL and creating the cache directory.
    ///
    /// Does **not** contact the API; records are fetched on demand.
    pub fn build(self) -> Result<CrmSdk> {
        let cache = SnapshotCache::new(self.cache_dir)?;
        let remote = RemoteSource::new(&self.base_url, self.timeout)?
            .with_cache(cache)
            .offline(self.offline);
        Ok(CrmSdk {
            remote,
            synthetic: self.synthetic,
            synthetic_fallback: self.synthetic_fallback,
        })
    }
}

// ---------------------------------------------------------------------------
// CrmSdk
// ---------------------------------------------------------------------------

/// The main entry point for the CRM SDK.
///
/// Owns the [`RemoteSource`] and the [`SyntheticSource`] used as its
/// fallback, and exposes query interfaces as lightweight borrowing wrappers
/// over record slices.
///
/// Created via [`CrmSdk::builder()`].
pub struct CrmSdk {
    remote: RemoteSource,
    synthetic: SyntheticSource,
    synthetic_fallback: bool,
}

impl CrmSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> CrmSdkBuilder {
        CrmSdkBuilder::default()
    }

    // -- Loading -----------------------------------------------------------

    /// Load the contract list.
    ///
    /// Tries the API (or the snapshot, when offline) once. If that fails and
    /// synthetic fallback is enabled, generated records are returned instead
    /// and the result's `origin` says so. Otherwise the error is returned.
    pub fn load_contracts(&self) -> Result<LoadedRecords> {
        if self.synthetic_fallback {
            fetch_with_fallback(&self.remote, &self.synthetic)
        } else {
            Ok(LoadedRecords {
                records: self.remote.contracts()?,
                origin: self.remote.origin(),
            })
        }
    }

    /// Fetch the customer list. No fallback applies.
    pub fn customers(&self) -> Result<Vec<models::Customer>> {
        self.remote.customers()
    }

    /// Fetch the singer list. No fallback applies.
    pub fn singers(&self) -> Result<Vec<models::Singer>> {
        self.remote.singers()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the rollup interface over `records`, dated today.
    pub fn stats<'a>(&self, records: &'a [ContractRecord]) -> queries::StatsQuery<'a> {
        queries::StatsQuery::new(records)
    }

    /// Access the filter/sort interface over `records`.
    pub fn contracts<'a>(&self, records: &'a [ContractRecord]) -> queries::ContractQuery<'a> {
        queries::ContractQuery::new(records)
    }

    // -- Accessors and utility methods -------------------------------------

    /// Return a reference to the underlying [`RemoteSource`].
    pub fn remote(&self) -> &RemoteSource {
        &self.remote
    }

    /// Return a reference to the fallback [`SyntheticSource`].
    pub fn synthetic(&self) -> &SyntheticSource {
        &self.synthetic
    }

    /// Remove every stored snapshot.
    pub fn clear_cache(&self) -> Result<()> {
        match self.remote.cache() {
            Some(cache) => cache.clear(),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CrmSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache_dir = self
            .remote
            .cache()
            .map(|c| c.cache_dir.display().to_string())
            .unwrap_or_else(|| "none".to_string());
        write!(
            f,
            "CrmSdk(base_url={}, cache_dir={}, offline={}, synthetic_fallback={})",
            self.remote.base_url(),
            cache_dir,
            self.remote.is_offline(),
            self.synthetic_fallback
        )
    }
}

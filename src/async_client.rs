//! Async wrapper around [`CrmSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client waits on the API.
//!
//! # Example
//!
//! ```no_run
//! use agency_crm_sdk::AsyncCrmSdk;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncCrmSdk::builder()
//!         .base_url("https://crm.example.com/api")
//!         .build()
//!         .await
//!         .unwrap();
//!
//!     let loaded = sdk.load_contracts().await.unwrap();
//!     let quarters = sdk
//!         .run(move |s| Ok(s.stats(&loaded.records).quarterly()))
//!         .await
//!         .unwrap();
//! }
//! ```

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{CrmError, Result};
use crate::{CrmSdk, CrmSdkBuilder, LoadedRecords};

// ---------------------------------------------------------------------------
// AsyncCrmSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCrmSdk`] instance.
///
/// Mirrors [`CrmSdkBuilder`]; see there for what each option does.
#[derive(Default)]
pub struct AsyncCrmSdkBuilder {
    inner: CrmSdkBuilder,
}

impl AsyncCrmSdkBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.inner = self.inner.base_url(url);
        self
    }

    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.inner = self.inner.cache_dir(path);
        self
    }

    pub fn offline(mut self, offline: bool) -> Self {
        self.inner = self.inner.offline(offline);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    pub fn synthetic_fallback(mut self, enabled: bool) -> Self {
        self.inner = self.inner.synthetic_fallback(enabled);
        self
    }

    pub fn synthetic_seed(mut self, seed: u64) -> Self {
        self.inner = self.inner.synthetic_seed(seed);
        self
    }

    pub fn synthetic_count(mut self, count: usize) -> Self {
        self.inner = self.inner.synthetic_count(count);
        self
    }

    /// Build the async SDK.
    ///
    /// Building creates the HTTP client and cache directory, so it runs on
    /// the blocking thread pool.
    pub async fn build(self) -> Result<AsyncCrmSdk> {
        let builder = self.inner;
        tokio::task::spawn_blocking(move || {
            let sdk = builder.build()?;
            Ok(AsyncCrmSdk {
                inner: Arc::new(sdk),
            })
        })
        .await
        .map_err(|e| CrmError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncCrmSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`CrmSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The SDK holds no interior mutability,
/// so it is shared behind an [`Arc`] without a lock.
#[derive(Clone)]
pub struct AsyncCrmSdk {
    inner: Arc<CrmSdk>,
}

impl AsyncCrmSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncCrmSdkBuilder {
        AsyncCrmSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&CrmSdk` reference and should return
    /// a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CrmSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(|e| CrmError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Load the contract list asynchronously, with the configured fallback.
    pub async fn load_contracts(&self) -> Result<LoadedRecords> {
        self.run(|s| s.load_contracts()).await
    }

    /// Fetch the customer list asynchronously.
    pub async fn customers(&self) -> Result<Vec<crate::models::Customer>> {
        self.run(|s| s.customers()).await
    }

    /// Fetch the singer list asynchronously.
    pub async fn singers(&self) -> Result<Vec<crate::models::Singer>> {
        self.run(|s| s.singers()).await
    }
}

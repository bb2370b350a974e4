//! # authstore - Expiry-Aware Key-Value Storage for Auth Systems
//!
//! authstore is a storage adapter that lets authentication and session
//! systems persist JSON records in a hierarchical key namespace, backed by
//! any key-value store with a paginated prefix listing — including stores
//! whose native TTL has a coarse minimum granularity.
//!
//! ## The Core Problem
//!
//! Auth flows produce records that must expire in seconds (authorization
//! codes, PKCE state), but hosted KV stores commonly refuse TTLs below a
//! floor of 60 seconds. authstore reconciles the two: writes below the floor
//! get the clamped native TTL as an eviction safety net plus an
//! authoritative logical-expiry side channel, and every read enforces that
//! side channel so callers never see stale data.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                             authstore                               │
//! │                                                                     │
//! │   caller ──> StorageAdapter ──┬──> Key Codec (segments <-> flat)    │
//! │                               ├──> Expiry Policy (TTL vs metadata)  │
//! │                               └──> KvBackend primitives             │
//! │                                      │                              │
//! │                                      ▼                              │
//! │                    get_with_metadata / put / delete / list          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use authstore::{MemoryBackend, StorageAdapter};
//! use futures::StreamExt;
//! use serde_json::json;
//! use std::time::{Duration, SystemTime};
//!
//! # tokio_test::block_on(async {
//! let adapter = StorageAdapter::new(MemoryBackend::new());
//!
//! // Persist a session with a 16-second lifetime. The backend's native
//! // TTL cannot represent that, so the adapter tracks it in metadata.
//! let expiry = SystemTime::now() + Duration::from_secs(16);
//! adapter
//!     .set(&["session", "users", "123"], &json!({"name": "A"}), Some(expiry))
//!     .await
//!     .unwrap();
//!
//! // Reads enforce the logical expiry.
//! let session = adapter.get(&["session", "users", "123"]).await.unwrap();
//! assert_eq!(session, Some(json!({"name": "A"})));
//!
//! // Enumerate everything under a prefix, lazily.
//! let mut stream = adapter.scan(&["session"]).unwrap();
//! while let Some(item) = stream.next().await {
//!     let (segments, record) = item.unwrap();
//!     println!("{segments:?} = {record}");
//! }
//! # });
//! ```
//!
//! ## Module Overview
//!
//! - [`key`]: codec between structured key segments and flat store keys
//! - [`expiry`]: TTL reconciliation policy and logical-expiry enforcement
//! - [`store`]: the adapter, the backend contract, and an in-memory backend
//!
//! ## Design Highlights
//!
//! ### Lazy Deletion
//!
//! A read that finds a logically expired record reports it absent but does
//! not delete it. The clamped native TTL already guarantees eviction, so an
//! extra delete round trip would buy nothing.
//!
//! ### Lazy Scanning
//!
//! `scan` returns a pull-based stream that holds at most one listing page.
//! Consumers can stop after the first match without paying for the rest of
//! the namespace.
//!
//! ### No Retries, No Translation
//!
//! Backend failures propagate to the caller unchanged. Retry policy lives in
//! the backend client, where it belongs.

pub mod expiry;
pub mod key;
pub mod store;

// Re-export commonly used types for convenience
pub use expiry::{ExpiryMetadata, WritePlan, MIN_TTL_SECS};
pub use key::{join_key, split_key};
pub use store::{
    KvBackend, ListPage, MemoryBackend, PutOptions, ScanStream, StorageAdapter, StorageError,
};

/// Version of authstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Backing Store Contract
//!
//! The adapter is a facade over an external key-value service. This module
//! defines the narrow contract that service must present: point reads and
//! writes with optional TTL and metadata, idempotent delete, and a paginated
//! prefix listing.
//!
//! Values cross this boundary as raw serialized bytes; the adapter owns JSON
//! encoding and decoding. Metadata stays structured because its shape
//! (`{ "expiry": <epoch-millis> }`) is part of the adapter's wire contract.
//!
//! Backend failures are carried opaquely as [`StorageError::Backend`] and
//! propagate to the caller unchanged — the adapter adds no retries or
//! translation. Retry policy belongs to the backend client itself.

use crate::expiry::ExpiryMetadata;
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Errors surfaced by the storage adapter.
///
/// Note that a missing or logically-expired record is *not* an error: reads
/// return `Ok(None)` for those. This enum covers genuine failures only.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A key segment contained the reserved separator character, which would
    /// break the join/split round trip. Raised eagerly, before any write.
    #[error("key segment contains the reserved separator: {0:?}")]
    InvalidSegment(String),

    /// A record could not be serialized to or deserialized from JSON.
    #[error("record serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The backing store reported a failure (network error, malformed
    /// response, ...). Carried opaquely; inspect the source for details.
    #[error("backing store failure: {0}")]
    Backend(#[source] anyhow::Error),
}

impl StorageError {
    /// Wraps an arbitrary backend failure.
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StorageError::Backend(anyhow::Error::new(err))
    }
}

/// Write options forwarded to the backing store's `put`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PutOptions {
    /// Native TTL in seconds. `None` means the record never expires.
    pub ttl_seconds: Option<u64>,
    /// Logical-expiry metadata stored alongside the value.
    pub metadata: Option<ExpiryMetadata>,
}

/// One page of a paginated prefix listing.
#[derive(Debug, Clone, Default)]
pub struct ListPage {
    /// Flat keys on this page, in the store's listing order.
    pub keys: Vec<String>,
    /// Opaque continuation token for the next page, if any.
    pub cursor: Option<String>,
    /// `true` when this is the final page.
    pub complete: bool,
}

/// The primitive operations the adapter composes.
///
/// Implementations wrap a real key-value service (or an in-process map, see
/// [`MemoryBackend`](crate::store::MemoryBackend)). All methods are single
/// round trips; the adapter never asks for multi-key atomicity.
#[async_trait]
pub trait KvBackend: Send + Sync {
    /// Fetches a record's value and metadata in one round trip.
    ///
    /// Returns `Ok(None)` if the store has no record under `key`.
    async fn get_with_metadata(
        &self,
        key: &str,
    ) -> Result<Option<(Bytes, Option<ExpiryMetadata>)>, StorageError>;

    /// Fetches a record's value only. Used for scan's per-item fetches.
    async fn get(&self, key: &str) -> Result<Option<Bytes>, StorageError>;

    /// Writes a record, unconditionally replacing any existing one.
    async fn put(&self, key: &str, value: Bytes, options: PutOptions) -> Result<(), StorageError>;

    /// Deletes a record. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Lists flat keys starting with `prefix`, one page at a time.
    ///
    /// Pass the cursor from the previous page to continue; `None` starts
    /// from the beginning.
    async fn list(&self, prefix: &str, cursor: Option<&str>) -> Result<ListPage, StorageError>;
}

//! In-Memory Backend
//!
//! An in-process [`KvBackend`] that behaves like the real backing store the
//! adapter targets: native TTLs below the store's floor round up, expired
//! records are dropped lazily on access, and prefix listing is paginated
//! with opaque cursors.
//!
//! Useful as the test double for everything built on the adapter and as a
//! development backend before a real store is wired in.

use crate::expiry::{ExpiryMetadata, MIN_TTL_SECS};
use crate::store::backend::{KvBackend, ListPage, PutOptions, StorageError};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use tracing::trace;

/// Default number of keys per listing page.
const DEFAULT_PAGE_SIZE: usize = 1000;

/// A stored record with its side-channel metadata and native expiry.
#[derive(Debug, Clone)]
struct StoredRecord {
    value: Bytes,
    metadata: Option<ExpiryMetadata>,
    /// When the native TTL evicts this record (None = never).
    expires_at: Option<Instant>,
}

impl StoredRecord {
    #[inline]
    fn is_evicted(&self) -> bool {
        self.expires_at
            .map(|at| Instant::now() >= at)
            .unwrap_or(false)
    }
}

/// In-memory key-value backend with native TTL semantics.
///
/// Keys are kept in a [`BTreeMap`] so listing order is lexicographic and a
/// page cursor is simply the last key served — an opaque token from the
/// adapter's point of view.
///
/// # Example
///
/// ```
/// use authstore::store::{KvBackend, MemoryBackend, PutOptions};
/// use bytes::Bytes;
///
/// # tokio_test::block_on(async {
/// let backend = MemoryBackend::new();
/// backend.put("k", Bytes::from("1"), PutOptions::default()).await.unwrap();
/// assert_eq!(backend.get("k").await.unwrap(), Some(Bytes::from("1")));
/// # });
/// ```
#[derive(Debug)]
pub struct MemoryBackend {
    records: RwLock<BTreeMap<String, StoredRecord>>,
    page_size: usize,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    /// Creates an empty backend with the default page size.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Creates an empty backend serving `page_size` keys per listing page.
    ///
    /// Small page sizes are handy in tests for exercising cursor handling.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            page_size: page_size.max(1),
        }
    }

    /// Number of records currently held, counting ones the native TTL has
    /// passed but not yet reclaimed.
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// Returns `true` if the backend holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a live record, reclaiming it lazily if the native TTL has
    /// passed.
    fn get_record(&self, key: &str) -> Option<StoredRecord> {
        // Fast path: read lock for live records.
        {
            let records = self.records.read().unwrap();
            match records.get(key) {
                Some(record) if !record.is_evicted() => return Some(record.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // Record was evicted; take the write lock to reclaim it.
        let mut records = self.records.write().unwrap();
        if let Some(record) = records.get(key) {
            if record.is_evicted() {
                records.remove(key);
                trace!(key, "native TTL reclaimed record on access");
                return None;
            }
            // Raced with a concurrent overwrite that revived the key.
            return Some(record.clone());
        }
        None
    }
}

#[async_trait]
impl KvBackend for MemoryBackend {
    async fn get_with_metadata(
        &self,
        key: &str,
    ) -> Result<Option<(Bytes, Option<ExpiryMetadata>)>, StorageError> {
        Ok(self
            .get_record(key)
            .map(|record| (record.value, record.metadata)))
    }

    async fn get(&self, key: &str) -> Result<Option<Bytes>, StorageError> {
        Ok(self.get_record(key).map(|record| record.value))
    }

    async fn put(&self, key: &str, value: Bytes, options: PutOptions) -> Result<(), StorageError> {
        // The real store rejects TTLs under its floor; this one rounds up,
        // which is what the expiry policy assumes either way.
        let expires_at = options
            .ttl_seconds
            .map(|ttl| Instant::now() + Duration::from_secs(ttl.max(MIN_TTL_SECS)));

        let record = StoredRecord {
            value,
            metadata: options.metadata,
            expires_at,
        };
        self.records
            .write()
            .unwrap()
            .insert(key.to_string(), record);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.records.write().unwrap().remove(key);
        Ok(())
    }

    async fn list(&self, prefix: &str, cursor: Option<&str>) -> Result<ListPage, StorageError> {
        let records = self.records.read().unwrap();

        let start = match cursor {
            Some(cursor) => Bound::Excluded(cursor.to_string()),
            None => Bound::Included(prefix.to_string()),
        };

        let mut keys = Vec::with_capacity(self.page_size.min(64));
        let mut more = false;
        for (key, record) in records.range::<String, _>((start, Bound::Unbounded)) {
            if !key.starts_with(prefix) {
                break;
            }
            if record.is_evicted() {
                continue;
            }
            if keys.len() == self.page_size {
                more = true;
                break;
            }
            keys.push(key.clone());
        }

        let cursor = if more { keys.last().cloned() } else { None };
        Ok(ListPage {
            complete: !more,
            keys,
            cursor,
        })
    }
}

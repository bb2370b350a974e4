//! Storage Adapter
//!
//! The adapter composes the key codec and the expiry policy against a
//! [`KvBackend`], presenting the uniform interface the auth layer consumes:
//! structured keys in, JSON records out, with logical expiry enforced on
//! every read.
//!
//! ## Round Trips
//!
//! `get`, `set`, and `remove` are each exactly one backend call. `scan` is
//! one listing call per page plus one value fetch per listed key, produced
//! lazily so a consumer can stop after the first match without draining the
//! rest of the namespace.
//!
//! The adapter holds no state between calls; clones of the backend handle
//! may be used concurrently from any number of tasks.

use crate::expiry;
use crate::key::codec;
use crate::store::backend::{KvBackend, PutOptions, StorageError};
use async_stream::try_stream;
use bytes::Bytes;
use futures::Stream;
use serde_json::Value;
use std::pin::Pin;
use std::time::SystemTime;
use tracing::{debug, trace};

/// The lazy sequence of `(segments, record)` pairs produced by
/// [`StorageAdapter::scan`].
///
/// Dropping the stream stops the scan; no further backend calls are made.
pub type ScanStream<'a> =
    Pin<Box<dyn Stream<Item = Result<(Vec<String>, Value), StorageError>> + Send + 'a>>;

/// Expiry-aware storage adapter over a [`KvBackend`].
///
/// # Example
///
/// ```
/// use authstore::store::{MemoryBackend, StorageAdapter};
/// use serde_json::json;
///
/// # tokio_test::block_on(async {
/// let adapter = StorageAdapter::new(MemoryBackend::new());
///
/// adapter.set(&["users", "123"], &json!({"name": "A"}), None).await.unwrap();
/// let record = adapter.get(&["users", "123"]).await.unwrap();
/// assert_eq!(record, Some(json!({"name": "A"})));
/// # });
/// ```
#[derive(Debug)]
pub struct StorageAdapter<B> {
    backend: B,
}

impl<B: KvBackend> StorageAdapter<B> {
    /// Creates an adapter over the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Fetches the record stored under `key`.
    ///
    /// Returns `Ok(None)` if the store has no record, or if the record's
    /// logical expiry has passed. An expired record is *not* deleted here;
    /// the clamped native TTL evicts it eventually.
    pub async fn get<S: AsRef<str>>(&self, key: &[S]) -> Result<Option<Value>, StorageError> {
        let flat = codec::join_key(key)?;

        let Some((raw, metadata)) = self.backend.get_with_metadata(&flat).await? else {
            return Ok(None);
        };

        let now_ms = expiry::epoch_ms(SystemTime::now());
        if expiry::is_expired(metadata.as_ref(), now_ms) {
            debug!(key = %flat, "record logically expired, reporting absent");
            return Ok(None);
        }

        Ok(Some(serde_json::from_slice(&raw)?))
    }

    /// Writes `value` under `key`, replacing any existing record.
    ///
    /// With `expiry` set, the record becomes unreadable once that instant
    /// passes, even when the instant is sooner than the backing store's
    /// minimum TTL allows. Without it, the record never expires.
    pub async fn set<S: AsRef<str>>(
        &self,
        key: &[S],
        value: &Value,
        expiry: Option<SystemTime>,
    ) -> Result<(), StorageError> {
        let flat = codec::join_key(key)?;
        let now_ms = expiry::epoch_ms(SystemTime::now());
        let plan = expiry::plan_write(expiry.map(expiry::epoch_ms), now_ms);

        debug!(
            key = %flat,
            ttl_seconds = ?plan.ttl_seconds,
            has_metadata = plan.metadata.is_some(),
            "writing record"
        );

        let raw = Bytes::from(serde_json::to_vec(value)?);
        self.backend
            .put(
                &flat,
                raw,
                PutOptions {
                    ttl_seconds: plan.ttl_seconds,
                    metadata: plan.metadata,
                },
            )
            .await
    }

    /// Deletes the record under `key`. Removing a missing key is a no-op.
    pub async fn remove<S: AsRef<str>>(&self, key: &[S]) -> Result<(), StorageError> {
        let flat = codec::join_key(key)?;
        debug!(key = %flat, "removing record");
        self.backend.delete(&flat).await
    }

    /// Enumerates every record strictly under `prefix`, lazily.
    ///
    /// The boundary is `prefix` joined with an empty trailing segment, so a
    /// record stored at exactly `prefix` is not yielded. Pages are fetched
    /// one at a time as the consumer pulls; keys listed but absent by the
    /// time their value is fetched (deleted concurrently) are skipped.
    ///
    /// Order follows the backing store's listing order. Backend failures
    /// end the stream with an `Err` item.
    pub fn scan<S: AsRef<str>>(&self, prefix: &[S]) -> Result<ScanStream<'_>, StorageError> {
        let mut segments: Vec<&str> = prefix.iter().map(AsRef::as_ref).collect();
        segments.push("");
        let boundary = codec::join_key(&segments)?;

        Ok(Box::pin(try_stream! {
            let mut cursor: Option<String> = None;
            loop {
                let page = self.backend.list(&boundary, cursor.as_deref()).await?;
                trace!(
                    prefix = %boundary,
                    keys = page.keys.len(),
                    complete = page.complete,
                    "scan page fetched"
                );

                for flat in page.keys {
                    // A listed key may vanish before we fetch its value;
                    // skip it rather than failing the whole scan.
                    if let Some(raw) = self.backend.get(&flat).await? {
                        let value: Value = serde_json::from_slice(&raw)?;
                        yield (codec::split_key(&flat), value);
                    }
                }

                match page.cursor {
                    Some(next) if !page.complete => cursor = Some(next),
                    _ => break,
                }
            }
        }))
    }
}

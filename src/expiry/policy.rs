//! TTL Reconciliation Policy
//!
//! Pure decision logic: given a requested absolute expiry and the current
//! time, decide what native TTL to send to the backing store and whether a
//! logical-expiry side channel is needed. Both sides of the policy take time
//! as an explicit epoch-millisecond argument so tests can pin the clock.
//!
//! ## Decision Table
//!
//! | Requested expiry              | Native TTL        | Metadata     |
//! |-------------------------------|-------------------|--------------|
//! | none                          | none              | none         |
//! | `ttl_seconds >= MIN_TTL_SECS` | `ttl_seconds`     | none         |
//! | `ttl_seconds <  MIN_TTL_SECS` | `MIN_TTL_SECS`    | `{ expiry }` |
//!
//! where `ttl_seconds = floor((expiry - now) / 1000)`. An expiry already in
//! the past falls in the last row: the record is written with the clamped
//! native TTL as an eviction safety net and is immediately unreadable through
//! the metadata check.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Minimum TTL in seconds the backing store will enforce.
///
/// Stores with coarse TTL granularity reject or round up anything below this
/// floor, so shorter-lived records need the metadata side channel. Kept as a
/// named constant because it is backing-store-specific.
pub const MIN_TTL_SECS: u64 = 60;

/// Logical-expiry side channel stored alongside a record.
///
/// This struct is the only metadata shape the adapter puts on the wire:
/// `{ "expiry": <epoch-millis> }`. When present it is authoritative — reads
/// must treat a record whose `expiry` has passed as nonexistent, regardless
/// of what the backing store still serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryMetadata {
    /// Absolute logical expiry as milliseconds since the Unix epoch.
    pub expiry: u64,
}

/// The outcome of reconciling a requested expiry against the TTL floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WritePlan {
    /// Native TTL to send with the write, if any.
    pub ttl_seconds: Option<u64>,
    /// Logical-expiry metadata to attach, if the native TTL alone is too coarse.
    pub metadata: Option<ExpiryMetadata>,
}

/// Decides the native TTL and metadata for a write.
///
/// `expiry_ms` is the requested absolute expiration instant in epoch
/// milliseconds; `None` means the record never expires.
pub fn plan_write(expiry_ms: Option<u64>, now_ms: u64) -> WritePlan {
    let Some(expiry_ms) = expiry_ms else {
        return WritePlan::default();
    };

    // Floor toward negative infinity so a past expiry yields a negative TTL,
    // never a wrapped-around positive one.
    let ttl_seconds = (expiry_ms as i64 - now_ms as i64).div_euclid(1000);

    if ttl_seconds >= MIN_TTL_SECS as i64 {
        WritePlan {
            ttl_seconds: Some(ttl_seconds as u64),
            metadata: None,
        }
    } else {
        WritePlan {
            ttl_seconds: Some(MIN_TTL_SECS),
            metadata: Some(ExpiryMetadata { expiry: expiry_ms }),
        }
    }
}

/// Read-side enforcement: is this record logically expired?
///
/// Absent metadata means the native TTL alone governs the record, so it is
/// never logically expired here.
#[inline]
pub fn is_expired(metadata: Option<&ExpiryMetadata>, now_ms: u64) -> bool {
    metadata.map(|m| m.expiry < now_ms).unwrap_or(false)
}

/// Converts a [`SystemTime`] to milliseconds since the Unix epoch.
///
/// Instants before the epoch clamp to zero, which the policy treats as
/// already expired.
pub fn epoch_ms(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

//! Expiry Policy Module
//!
//! This module reconciles an application-requested expiration instant with a
//! backing store whose native TTL has a coarse minimum granularity.
//!
//! ## The Problem
//!
//! Auth flows create genuinely short-lived records: authorization codes and
//! PKCE state often expire in well under a minute. The backing store refuses
//! TTLs below [`MIN_TTL_SECS`], so a naive write would either be rejected or
//! keep the record readable long past its real expiry.
//!
//! ## The Reconciliation
//!
//! ```text
//! requested expiry ──> plan_write ──┬── ttl >= MIN_TTL: native TTL only
//!                                   │
//!                                   └── ttl <  MIN_TTL: native TTL clamped
//!                                       to MIN_TTL (eventual eviction) +
//!                                       {expiry} metadata (authoritative
//!                                       logical expiry, enforced on read)
//! ```
//!
//! Reads apply [`is_expired`] to the metadata: a record whose logical expiry
//! has passed is reported absent even though the store still holds it. No
//! delete is issued — the clamped native TTL evicts it eventually (lazy
//! deletion).

pub mod policy;

// Re-export commonly used items
pub use policy::{epoch_ms, is_expired, plan_write, ExpiryMetadata, WritePlan, MIN_TTL_SECS};

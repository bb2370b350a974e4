//! Key Codec Module
//!
//! This module maps structured keys (an ordered sequence of string segments,
//! e.g. `["oauth:refresh", "client-1", "user-42"]`) to and from the single
//! flat string the backing store understands.
//!
//! ## Why Segments?
//!
//! Auth systems store records in a hierarchical namespace: all refresh tokens
//! for a client, all sessions for a user, and so on. The backing store only
//! offers a flat namespace with prefix listing, so the codec joins segments
//! with a delimiter that prefix scans can exploit.
//!
//! ## The Delimiter
//!
//! Segments are joined with the ASCII unit separator (U+001F), a control
//! character that never appears in well-formed identifiers. Joining a prefix
//! with an empty trailing segment produces `prefix + SEPARATOR`, which matches
//! every key strictly *under* the prefix while excluding the prefix itself as
//! an exact key.
//!
//! ## Example
//!
//! ```
//! use authstore::key::{join_key, split_key};
//!
//! let flat = join_key(&["users", "123"]).unwrap();
//! assert_eq!(split_key(&flat), vec!["users", "123"]);
//! ```

pub mod codec;

// Re-export commonly used items
pub use codec::{join_key, split_key, SEPARATOR};

//! Storage Adapter Module
//!
//! This module provides the adapter that auth and session code talks to,
//! the contract the backing store must implement, and an in-memory backend
//! for tests and development.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     StorageAdapter                          │
//! │                                                             │
//! │   get / set / remove ── one backend round trip each         │
//! │   scan ── listing pages + per-key fetches, pulled lazily    │
//! └──────────────────────────┬──────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   KvBackend (trait)                         │
//! │   get_with_metadata / get / put / delete / list             │
//! └──────────────────────────┬──────────────────────────────────┘
//!                            │
//!              ┌─────────────┴─────────────┐
//!              ▼                           ▼
//!       MemoryBackend               real KV service
//!       (tests, dev)                (implemented downstream)
//! ```
//!
//! ## Features
//!
//! - **Single-round-trip reads**: value and expiry metadata fetched together
//! - **Logical expiry**: metadata-carrying records go absent on time, even
//!   when the store has not evicted them yet
//! - **Lazy scan**: prefix enumeration advances page by page as the consumer
//!   pulls, with early termination by dropping the stream
//!
//! ## Example
//!
//! ```
//! use authstore::store::{MemoryBackend, StorageAdapter};
//! use serde_json::json;
//! use std::time::{Duration, SystemTime};
//!
//! # tokio_test::block_on(async {
//! let adapter = StorageAdapter::new(MemoryBackend::new());
//!
//! // Short-lived record: readable now, absent after 16 seconds.
//! let expiry = SystemTime::now() + Duration::from_secs(16);
//! adapter.set(&["code", "abc"], &json!({"grant": "xyz"}), Some(expiry))
//!     .await
//!     .unwrap();
//! assert!(adapter.get(&["code", "abc"]).await.unwrap().is_some());
//! # });
//! ```

pub mod adapter;
pub mod backend;
pub mod memory;

// Re-export commonly used types
pub use adapter::{ScanStream, StorageAdapter};
pub use backend::{KvBackend, ListPage, PutOptions, StorageError};
pub use memory::MemoryBackend;

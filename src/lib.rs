//! Named inventory items with quantities, kept in a local SQLite table and
//! mirrored into a display projection that can be exported to `.xlsx`.
//!
//! # Examples
//!
//! Adding and removing through the synchronizer:
//! ```
//! use stocklist::{
//!     export::ExportConfig,
//!     persist::{StoreConfig, sqlite::SqliteRecordStore},
//!     sync::{Outcome, SyncError, synchronizer::Synchronizer},
//! };
//!
//! let store = SqliteRecordStore::open_in_memory(StoreConfig::default()).expect("open");
//! let mut sync = Synchronizer::new(store, ExportConfig::default()).expect("load");
//!
//! sync.add("Widget", "10").expect("add");
//! assert!(matches!(sync.add("Widget", "5"), Err(SyncError::DuplicateItem(_))));
//!
//! let outcome = sync.remove(Some("Widget"), &mut true).expect("remove");
//! assert_eq!(outcome, Outcome::Applied { affected: 1 });
//! assert!(sync.projection().is_empty());
//! ```
//!
//! Exporting to a file:
//! ```no_run
//! use stocklist::{
//!     export::ExportConfig,
//!     persist::{StoreConfig, sqlite::SqliteRecordStore},
//!     sync::synchronizer::Synchronizer,
//! };
//!
//! let store = SqliteRecordStore::open("inventory.db", StoreConfig::default()).expect("open");
//! let mut sync = Synchronizer::new(store, ExportConfig::default()).expect("load");
//! sync.add("Gadget", "3").expect("add");
//! let written = sync.export("stock").expect("export");
//! assert!(written.ends_with("stock.xlsx"));
//! sync.into_store().close().expect("close");
//! ```
#![deny(missing_docs)]

/// Application configuration.
pub mod config;
/// Display projection.
pub mod core;
/// Process-level error reporting.
pub mod error;
/// Spreadsheet export.
pub mod export;
/// Item domain records.
pub mod item;
/// Record store abstraction and implementations.
pub mod persist;
/// Validation, confirmation gating, and action dispatch.
pub mod sync;
/// Logging setup.
pub mod telemetry;
/// Shared primitive types.
pub mod types;

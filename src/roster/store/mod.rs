//! # Storage Layer
//!
//! This module defines the storage abstraction for roster. The
//! [`RecordStore`] trait allows the application to work with different
//! storage backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One pipe-delimited line per record: `name|age|id`
//!   - Whole-file snapshot semantics: `load` reads everything, `save`
//!     rewrites everything
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Snapshot Semantics
//!
//! There is no record-level access and no caching. Every command obtains a
//! fresh copy of the whole collection via `load`, and mutating commands
//! hand the whole transformed collection back to `save`. A store never
//! holds records between calls on behalf of a caller.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface for record storage.
///
/// Implementations persist the collection as a whole; ordering is
/// preserved across a save/load round trip.
pub trait RecordStore {
    /// Read the entire collection from the backing resource.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace the backing resource with the given collection.
    fn save(&mut self, records: &[Record]) -> Result<()>;
}

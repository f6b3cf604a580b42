//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all roster operations, regardless of the UI being used.
//!
//! It dispatches to the appropriate command function and returns structured
//! types (`Result<CmdResult>`). Business logic belongs in `commands/*.rs`;
//! presentation belongs in the shell.

use crate::commands;
use crate::error::Result;
use crate::store::RecordStore;

/// The main API facade for roster operations.
///
/// Generic over `RecordStore` to allow different storage backends.
/// All UI clients should interact through this API.
pub struct RosterApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> RosterApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_record(&mut self, name: &str, age: &str, id: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, age, id)
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_records(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn delete_record(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

/// Case-insensitive substring search over record names, file order
/// preserved.
pub fn run<S: RecordStore>(store: &S, term: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let term = term.trim();
    if term.is_empty() {
        result.add_message(CmdMessage::error("Search term cannot be empty."));
        return Ok(result);
    }

    let term_lower = term.to_lowercase();
    let matches: Vec<Record> = store
        .load()?
        .into_iter()
        .filter(|r| r.name.to_lowercase().contains(&term_lower))
        .collect();

    if matches.is_empty() {
        result.add_message(CmdMessage::info("No matching students found."));
        return Ok(result);
    }

    result.add_message(CmdMessage::info(format!(
        "Found {} match(es):",
        matches.len()
    )));
    Ok(result.with_listed_records(matches))
}

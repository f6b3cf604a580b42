use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

/// List every record in file order. Rendering is the caller's concern.
pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let records = store.load()?;
    let mut result = CmdResult::default();

    if records.is_empty() {
        result.add_message(CmdMessage::info("No students found."));
        return Ok(result);
    }

    Ok(result.with_listed_records(records))
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

/// Append a new record after validating name, id, and id uniqueness.
///
/// Name and id are trimmed before validation and stored trimmed; age is
/// stored verbatim, empty included.
pub fn run<S: RecordStore>(store: &mut S, name: &str, age: &str, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let name = name.trim();
    if name.is_empty() {
        result.add_message(CmdMessage::error("Name cannot be empty."));
        return Ok(result);
    }

    let id = id.trim();
    if id.is_empty() {
        result.add_message(CmdMessage::error("Student ID cannot be empty."));
        return Ok(result);
    }

    let mut records = store.load()?;
    if records.iter().any(|r| r.id == id) {
        result.add_message(CmdMessage::error("A student with this ID already exists."));
        return Ok(result);
    }

    let record = Record::new(name, age, id);
    records.push(record.clone());
    store.save(&records)?;

    result.add_message(CmdMessage::success("Student added successfully."));
    Ok(result.with_affected_records(vec![record]))
}

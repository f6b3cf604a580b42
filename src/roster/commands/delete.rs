use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

/// Remove every record whose id exactly equals the given id.
///
/// Normal use keeps ids unique, so this removes at most one; with a
/// hand-edited backing file containing duplicates, all matches go in one
/// call.
pub fn run<S: RecordStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let id = id.trim();
    if id.is_empty() {
        result.add_message(CmdMessage::error("Student ID cannot be empty."));
        return Ok(result);
    }

    let records = store.load()?;
    let (removed, remaining): (Vec<Record>, Vec<Record>) =
        records.into_iter().partition(|r| r.id == id);

    if removed.is_empty() {
        result.add_message(CmdMessage::error("No student found with that ID."));
        return Ok(result);
    }

    store.save(&remaining)?;
    result.add_message(CmdMessage::success("Student deleted successfully."));
    Ok(result.with_affected_records(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_record_with_matching_id() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "Ana", "20", "1").unwrap();
        add::run(&mut store, "Ben", "22", "2").unwrap();

        let result = run(&mut store, "1").unwrap();
        assert_eq!(result.affected_records.len(), 1);
        assert_eq!(result.affected_records[0].name, "Ana");

        let records = store.load().unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records.iter().any(|r| r.id == "1"));
    }

    #[test]
    fn missing_id_leaves_collection_unchanged() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "Ana", "20", "1").unwrap();

        let before = store.load().unwrap();
        let result = run(&mut store, "99").unwrap();

        assert_eq!(result.messages[0].content, "No student found with that ID.");
        assert_eq!(store.load().unwrap(), before);
    }

    #[test]
    fn rejects_blank_id() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "Ana", "20", "1").unwrap();

        let result = run(&mut store, "   ").unwrap();
        assert_eq!(result.messages[0].content, "Student ID cannot be empty.");
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn removes_all_records_sharing_an_id() {
        // Duplicate ids can only come from a hand-edited backing file; the
        // fixture seeds the store directly to simulate that.
        let mut fixture = StoreFixture::new().with_records(&[
            ("Ana", "20", "1"),
            ("Ben", "22", "1"),
            ("Cleo", "23", "2"),
        ]);

        let result = run(&mut fixture.store, "1").unwrap();
        assert_eq!(result.affected_records.len(), 2);

        let records = fixture.store.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Cleo");
    }

    #[test]
    fn id_is_trimmed_before_matching() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "Ana", "20", "1").unwrap();

        run(&mut store, " 1 ").unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}

/// A single student entry.
///
/// All three fields are free-form strings. `id` is the unique key across a
/// collection (enforced on add, not by this type). `age` is an opaque
/// token: stored and displayed verbatim, never parsed as a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub age: String,
    pub id: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            id: id.into(),
        }
    }
}

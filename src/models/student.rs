use serde::{Deserialize, Serialize};

/// Identifier of a [`Student`]. Allocated from a process-wide counter and
/// never reused.
pub type StudentId = u64;

/// A student. Students only exist as members of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
}

impl Student {
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

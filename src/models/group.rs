use serde::{Deserialize, Serialize};

use super::{Student, StudentId};

/// Identifier of a [`Group`]. Allocated from a process-wide counter and never
/// reused, so a stale id always resolves to "not found".
pub type GroupId = u64;

/// A group with its members embedded, used for detail responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub group_name: String,
    pub members: Vec<Student>,
}

impl Group {
    pub fn new(id: GroupId, group_name: impl Into<String>, members: Vec<Student>) -> Self {
        Self {
            id,
            group_name: group_name.into(),
            members,
        }
    }

    pub fn summary(&self) -> GroupSummary {
        GroupSummary::from(self)
    }
}

/// A group with member ids only, used for listings and create responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub id: GroupId,
    pub group_name: String,
    pub members: Vec<StudentId>,
}

impl From<&Group> for GroupSummary {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id,
            group_name: group.group_name.clone(),
            members: group.members.iter().map(|student| student.id).collect(),
        }
    }
}

/// Input for creating a new group together with its members.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupInput {
    pub group_name: String,
    /// Member names, in the order their students are created.
    pub members: Vec<String>,
}

//! In-memory storage for groups and their students.
//!
//! The repository trusts its callers: names and membership are validated by
//! the request handlers before [`Repository::create_group`] is reached.

mod ids;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::*;

use ids::IdCounter;

#[derive(Debug, Default)]
struct State {
    /// Groups in creation order.
    groups: Vec<Group>,
    group_ids: IdCounter,
    student_ids: IdCounter,
}

/// Shared handle to the group store. Cloning is cheap and every clone sees the
/// same state.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    state: Arc<RwLock<State>>,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().expect("repository lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().expect("repository lock poisoned")
    }

    // ============================================================
    // Queries
    // ============================================================

    pub fn find_group(&self, id: GroupId) -> Option<Group> {
        self.read().groups.iter().find(|group| group.id == id).cloned()
    }

    pub fn list_group_summaries(&self) -> Vec<GroupSummary> {
        self.read().groups.iter().map(GroupSummary::from).collect()
    }

    /// All students, ordered by group creation and then by position within
    /// the group.
    pub fn list_all_students(&self) -> Vec<Student> {
        self.read()
            .groups
            .iter()
            .flat_map(|group| group.members.iter().cloned())
            .collect()
    }

    pub fn group_count(&self) -> usize {
        self.read().groups.len()
    }

    pub fn student_count(&self) -> usize {
        self.read()
            .groups
            .iter()
            .map(|group| group.members.len())
            .sum()
    }

    /// Ids the next created group and its first student will receive.
    pub fn next_ids(&self) -> (GroupId, StudentId) {
        let state = self.read();
        (state.group_ids.peek(), state.student_ids.peek())
    }

    // ============================================================
    // Mutations
    // ============================================================

    /// Stores a new group whose students are created from `member_names`, in
    /// order, and returns its summary.
    ///
    /// The write lock is held until the group is appended, so readers never
    /// observe a group without all of its members.
    pub fn create_group<S: AsRef<str>>(
        &self,
        group_name: &str,
        member_names: &[S],
    ) -> GroupSummary {
        let mut state = self.write();

        let group_id = state.group_ids.allocate();
        let student_ids: Vec<StudentId> = member_names
            .iter()
            .map(|_| state.student_ids.allocate())
            .collect();

        let members = student_ids
            .into_iter()
            .zip(member_names)
            .map(|(id, name)| Student::new(id, name.as_ref()))
            .collect();
        let group = Group::new(group_id, group_name, members);
        let summary = group.summary();

        state.groups.push(group);
        summary
    }

    /// Removes the group and, with it, all of its students. Returns `false`
    /// when no group has the given id.
    pub fn delete_group(&self, id: GroupId) -> bool {
        let mut state = self.write();
        match state.groups.iter().position(|group| group.id == id) {
            Some(index) => {
                state.groups.remove(index);
                true
            }
            None => false,
        }
    }
}

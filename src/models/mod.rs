//! Domain models for the student groups service.
//!
//! - [`Group`]: A named collection of students. Membership is fixed when the
//!   group is created; deleting the group deletes its students.
//! - [`Student`]: A named individual belonging to exactly one group.
//! - [`GroupSummary`]: A projection of a group that lists member ids instead of
//!   embedding the students themselves.

mod group;
mod student;

pub use group::*;
pub use student::*;

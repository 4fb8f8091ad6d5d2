//! Input validation for group creation.
//!
//! Names must be non-empty once trimmed and may contain only ASCII letters,
//! digits and spaces ("Group 1" and "J3nny" pass, "Mike!" does not).

use thiserror::Error;

use crate::models::CreateGroupInput;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Groups cannot be empty!")]
    EmptyGroup,

    #[error("The following name is invalid: {0}")]
    InvalidName(String),
}

/// Returns true if `name` is acceptable as a group or student name.
pub fn is_valid_name(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

/// Checks a create request, stopping at the first problem found.
///
/// Membership is checked before any name, then the group name, then each
/// member name in order.
pub fn validate_create_group(input: &CreateGroupInput) -> Result<(), ValidationError> {
    if input.members.is_empty() {
        return Err(ValidationError::EmptyGroup);
    }

    std::iter::once(&input.group_name)
        .chain(&input.members)
        .find(|name| !is_valid_name(name))
        .map_or(Ok(()), |name| Err(ValidationError::InvalidName(name.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(group_name: &str, members: &[&str]) -> CreateGroupInput {
        CreateGroupInput {
            group_name: group_name.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn accepts_letters_digits_and_interior_spaces() {
        assert!(is_valid_name("J3nny"));
        assert!(is_valid_name("Group 1"));
        assert!(is_valid_name("  Alice  "));
    }

    #[test]
    fn rejects_punctuation() {
        assert!(!is_valid_name("Mike!"));
        assert!(!is_valid_name("O'Brien"));
        assert!(!is_valid_name("a-b"));
    }

    #[test]
    fn rejects_empty_and_blank_names() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("   "));
        assert!(!is_valid_name("\t\n"));
    }

    #[test]
    fn rejects_non_ascii_and_interior_control_characters() {
        assert!(!is_valid_name("Zoë"));
        assert!(!is_valid_name("Ann\tLee"));
        assert!(!is_valid_name("Ann\nLee"));
    }

    #[test]
    fn empty_membership_is_reported_before_bad_names() {
        let result = validate_create_group(&input("Bad!", &[]));
        assert_eq!(result, Err(ValidationError::EmptyGroup));
    }

    #[test]
    fn reports_the_first_invalid_name() {
        let result = validate_create_group(&input("Team A", &["Alice", "B@b", "C#"]));
        assert_eq!(result, Err(ValidationError::InvalidName("B@b".to_string())));
    }

    #[test]
    fn group_name_is_checked_before_members() {
        let result = validate_create_group(&input("Team?", &["B@b"]));
        assert_eq!(result, Err(ValidationError::InvalidName("Team?".to_string())));
    }

    #[test]
    fn accepts_a_well_formed_request() {
        assert_eq!(validate_create_group(&input("Team A", &["Alice", "Bob"])), Ok(()));
    }

    #[test]
    fn error_messages_name_the_offending_value() {
        assert_eq!(ValidationError::EmptyGroup.to_string(), "Groups cannot be empty!");
        assert_eq!(
            ValidationError::InvalidName("Mike!".to_string()).to_string(),
            "The following name is invalid: Mike!"
        );
    }
}

//! User profile validation.

use crate::error::CoreError;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_GOAL_LENGTH: usize = 1000;

fn validate_text(value: &str, label: &str, max: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "{label} must be a non-empty string"
        )));
    }
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{label} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Validate the registration fields.
pub fn validate_profile(name: &str, goal: &str) -> Result<(), CoreError> {
    validate_text(name, "Name", MAX_NAME_LENGTH)?;
    validate_text(goal, "Goal", MAX_GOAL_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_profile_passes() {
        assert!(validate_profile("Jordan", "Reclaim my focus").is_ok());
    }

    #[test]
    fn blank_fields_fail() {
        assert!(validate_profile("  ", "Goal").is_err());
        assert!(validate_profile("Jordan", "").is_err());
    }

    #[test]
    fn overlong_name_fails() {
        let name = "n".repeat(MAX_NAME_LENGTH + 1);
        let err = validate_profile(&name, "Goal").unwrap_err();
        assert!(err.to_string().contains("Name must be at most"));
    }
}

//! Validation rules for concert creation.
//!
//! Enforced at the HTTP boundary before anything touches storage.

use crate::error::CoreError;

/// Minimum seat capacity a concert may be created with.
pub const MIN_TOTAL_SEAT: i32 = 10;

/// Minimum description length in characters.
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// Validate a concert name: must not be empty (after trimming).
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Name is required".to_string()));
    }
    Ok(())
}

/// Validate the total seat capacity.
pub fn validate_total_seat(total_seat: i32) -> Result<(), CoreError> {
    if total_seat < MIN_TOTAL_SEAT {
        return Err(CoreError::Validation(format!(
            "Total seat must be at least {MIN_TOTAL_SEAT} seat"
        )));
    }
    Ok(())
}

/// Validate the description length.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Description must be at least {MIN_DESCRIPTION_LEN} characters long"
        )));
    }
    Ok(())
}

/// Run all creation-time validations.
pub fn validate_new(name: &str, total_seat: i32, description: &str) -> Result<(), CoreError> {
    validate_name(name)?;
    validate_total_seat(total_seat)?;
    validate_description(description)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Name validation ---

    #[test]
    fn validate_name_accepts_non_empty() {
        assert!(validate_name("Summer Jazz Night").is_ok());
    }

    #[test]
    fn validate_name_rejects_empty() {
        let err = validate_name("").unwrap_err();
        assert!(err.to_string().contains("Name is required"));
    }

    #[test]
    fn validate_name_rejects_whitespace_only() {
        assert!(validate_name("   ").is_err());
    }

    // --- Seat validation ---

    #[test]
    fn validate_total_seat_accepts_minimum() {
        assert!(validate_total_seat(10).is_ok());
        assert!(validate_total_seat(5000).is_ok());
    }

    #[test]
    fn validate_total_seat_rejects_below_minimum() {
        let err = validate_total_seat(9).unwrap_err();
        assert!(err.to_string().contains("at least 10 seat"));
    }

    // --- Description validation ---

    #[test]
    fn validate_description_accepts_long_enough() {
        assert!(validate_description("An open-air evening show").is_ok());
    }

    #[test]
    fn validate_description_rejects_too_short() {
        let err = validate_description("too short").unwrap_err();
        assert!(err.to_string().contains("at least 10 characters"));
    }

    #[test]
    fn validate_new_runs_all_rules() {
        assert!(validate_new("Gala", 120, "Annual charity gala night").is_ok());
        assert!(validate_new("", 120, "Annual charity gala night").is_err());
        assert!(validate_new("Gala", 2, "Annual charity gala night").is_err());
        assert!(validate_new("Gala", 120, "short").is_err());
    }
}

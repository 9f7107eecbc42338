//! Common validation utilities.

use validator::ValidationError;

/// Validates that a string field contains at least one non-whitespace character.
pub fn validate_non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("non_blank");
        err.message = Some("Field must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Strips blank and whitespace-only entries from a requirement list,
/// trimming the surviving entries. Order is preserved.
pub fn strip_blank_requirements(requirements: &[String]) -> Vec<String> {
    requirements
        .iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_accepts_text() {
        assert!(validate_non_blank("SAP Consultant").is_ok());
    }

    #[test]
    fn test_non_blank_rejects_empty() {
        assert!(validate_non_blank("").is_err());
    }

    #[test]
    fn test_non_blank_rejects_whitespace_only() {
        assert!(validate_non_blank("   \t ").is_err());
    }

    #[test]
    fn test_strip_blank_requirements() {
        let input = vec![
            "5+ years SAP".to_string(),
            "".to_string(),
            "  ".to_string(),
            "  Fluent English ".to_string(),
        ];
        let stripped = strip_blank_requirements(&input);
        assert_eq!(stripped, vec!["5+ years SAP", "Fluent English"]);
    }

    #[test]
    fn test_strip_blank_requirements_empty_input() {
        assert!(strip_blank_requirements(&[]).is_empty());
    }

    #[test]
    fn test_strip_blank_requirements_preserves_order() {
        let input = vec!["b".to_string(), "a".to_string(), "c".to_string()];
        assert_eq!(strip_blank_requirements(&input), vec!["b", "a", "c"]);
    }
}

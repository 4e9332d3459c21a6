use crate::error::ValidationError;

/// Reject a submission whose required fields are missing, before any store
/// call is made. The keyword is expected to be canonicalized already.
pub fn submission(keyword: &str, meaning: &str, example: &str) -> Result<(), ValidationError> {
    if keyword.trim().is_empty() {
        return Err(ValidationError::EmptyKeyword);
    }
    if meaning.trim().is_empty() {
        return Err(ValidationError::EmptyMeaning);
    }
    if example.trim().is_empty() {
        return Err(ValidationError::EmptyExample);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_complete_submission() {
        assert!(submission("باب", "door", "فتحت الباب").is_ok());
    }

    #[test]
    fn rejects_missing_required_fields() {
        assert_eq!(submission("", "m", "e"), Err(ValidationError::EmptyKeyword));
        assert_eq!(submission("باب", "  ", "e"), Err(ValidationError::EmptyMeaning));
        assert_eq!(submission("باب", "m", "\n"), Err(ValidationError::EmptyExample));
    }
}

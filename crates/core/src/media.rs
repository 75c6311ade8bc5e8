//! Project media limits.

use crate::error::CoreError;

/// Maximum number of media files a single create or update call may attach
/// to a project. The limit applies per call, not to the project's total.
pub const MAX_MEDIA_PER_PROJECT: usize = 3;

/// Reject a call that supplies more media files than the per-call limit.
pub fn validate_media_count(count: usize) -> Result<(), CoreError> {
    if count > MAX_MEDIA_PER_PROJECT {
        return Err(CoreError::Validation(
            "You can upload at most 3 images per project.".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn up_to_three_is_fine() {
        for n in 0..=3 {
            assert!(validate_media_count(n).is_ok());
        }
    }

    #[test]
    fn four_is_rejected() {
        let err = validate_media_count(4).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("at most 3"));
        });
    }
}

use super::ValidationError;

/// Rejects blank movie titles. Whitespace-only counts as blank.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::TitleEmpty);
    }

    Ok(())
}

/// Rejects blank director names. Whitespace-only counts as blank.
pub fn validate_director(director: &str) -> Result<(), ValidationError> {
    if director.trim().is_empty() {
        return Err(ValidationError::DirectorEmpty);
    }

    Ok(())
}

/// Rejects blank comment text. Whitespace-only counts as blank.
pub fn validate_comment(comment: &str) -> Result<(), ValidationError> {
    if comment.trim().is_empty() {
        return Err(ValidationError::CommentEmpty);
    }

    Ok(())
}

use crate::error::DomainError;

/// The title/content pair bound to the editor form. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

/// A draft that passed validation, with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub title: String,
    pub content: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }

    /// Trim both fields and reject the draft if either ends up empty.
    pub fn validate(&self) -> Result<ValidDraft, DomainError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DomainError::Validation("title must not be blank".into()));
        }

        let content = self.content.trim();
        if content.is_empty() {
            return Err(DomainError::Validation("content must not be blank".into()));
        }

        Ok(ValidDraft {
            title: title.to_string(),
            content: content.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims() {
        let valid = Draft::new("  Hello \n", "\tbody  ").validate().unwrap();
        assert_eq!(valid.title, "Hello");
        assert_eq!(valid.content, "body");
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        assert!(matches!(
            Draft::new("   ", "body").validate(),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            Draft::new("title", "\n\t ").validate(),
            Err(DomainError::Validation(_))
        ));
        assert!(Draft::default().validate().is_err());
    }

    #[test]
    fn test_clear() {
        let mut draft = Draft::new("a", "b");
        draft.clear();
        assert!(draft.is_empty());
    }
}

use thiserror::Error;

/// Fatal assembly errors
///
/// Non-fatal conditions (missing ordered slugs, unused enhancements,
/// duplicate base slugs) are accumulated in [`super::AssemblyReport`] and
/// reported together at the end of the run; the variants here abort the run
/// before any output is written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssembleError {
    /// A record reached emission without a required field
    #[error("article '{slug}' is missing required field '{field}'")]
    MissingField { slug: String, field: String },

    /// Nothing resolved for emission; an empty mapping is never written
    #[error("no records resolved for emission")]
    EmptyOrder,
}

impl AssembleError {
    /// Build a `MissingField` for the given slug and field identifier
    pub fn missing_field(slug: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            slug: slug.into(),
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = AssembleError::missing_field("prix-plombier-2026-tarifs-horaires", "image");

        let message = err.to_string();
        assert!(message.contains("prix-plombier-2026-tarifs-horaires"));
        assert!(message.contains("'image'"));
    }
}

use serde::{Deserialize, Serialize};

/// A question/answer pair attached to an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// A single article record as loaded from an intermediate fragment file
///
/// Every field except `slug` is optional at parse time: base fragments are
/// frequently partial (author and FAQ often arrive later through an
/// enhancement), so a field that is still absent when the record reaches
/// emission is reported as a `MissingField` error naming the slug instead of
/// failing opaquely at deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    /// Unique identifier, used as the mapping key in the emitted module
    pub slug: String,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    /// Ordered paragraph blocks. Blocks may embed callout markers
    /// (`:::warning` and friends); these are opaque to the assembler and
    /// pass through escaped but unparsed.
    pub content: Option<Vec<String>>,
    pub image: Option<String>,
    pub author: Option<String>,
    pub author_bio: Option<String>,
    /// Publication date, kept as an opaque string (not validated)
    pub date: Option<String>,
    pub updated_date: Option<String>,
    pub read_time: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub faq: Option<Vec<FaqEntry>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_record() {
        let json = r###"{
            "slug": "garantie-decennale-tout-savoir",
            "title": "Garantie décennale : tout savoir",
            "content": ["Premier paragraphe.", "## Section\n\nSecond paragraphe."],
            "readTime": "10 min"
        }"###;

        let record: ArticleRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.slug, "garantie-decennale-tout-savoir");
        assert_eq!(record.read_time.as_deref(), Some("10 min"));
        assert_eq!(record.content.as_ref().unwrap().len(), 2);
        assert!(record.author.is_none());
        assert!(record.faq.is_none());
    }

    #[test]
    fn test_parse_camel_case_fields() {
        let json = r#"{
            "slug": "x",
            "authorBio": "Bio.",
            "updatedDate": "2026-02-10"
        }"#;

        let record: ArticleRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.author_bio.as_deref(), Some("Bio."));
        assert_eq!(record.updated_date.as_deref(), Some("2026-02-10"));
    }
}

use serde::{Deserialize, Serialize};

use super::FaqEntry;

/// Partial record supplying additional or overriding fields for an existing
/// base article, keyed by slug in the enhancement file
///
/// Merging is additive/overriding only: scalar fields replace the base value
/// when present, `faq` replaces the base list wholesale, and `extra_content`
/// is appended to the end of the base content sequence in the order given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enhancement {
    pub author: Option<String>,
    pub author_bio: Option<String>,
    pub updated_date: Option<String>,
    pub read_time: Option<String>,
    pub faq: Option<Vec<FaqEntry>>,
    // Older fragment files spell this one in snake_case
    #[serde(default, alias = "extra_content")]
    pub extra_content: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enhancement() {
        let json = r#"{
            "author": "Isabelle Renault",
            "authorBio": "Isabelle Renault, juriste spécialisée en droit de la construction.",
            "updatedDate": "2026-02-10",
            "readTime": "12 min",
            "extra_content": ["\n\n:::warning Attention\nTexte.\n:::"],
            "faq": [
                {"question": "Q ?", "answer": "R."}
            ]
        }"#;

        let enh: Enhancement = serde_json::from_str(json).unwrap();

        assert_eq!(enh.author.as_deref(), Some("Isabelle Renault"));
        assert_eq!(enh.read_time.as_deref(), Some("12 min"));
        assert_eq!(enh.extra_content.len(), 1);
        assert_eq!(enh.faq.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_parse_empty_enhancement() {
        let enh: Enhancement = serde_json::from_str("{}").unwrap();

        assert!(enh.author.is_none());
        assert!(enh.faq.is_none());
        assert!(enh.extra_content.is_empty());
    }
}

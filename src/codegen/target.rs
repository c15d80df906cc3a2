/// Field identifiers used in the emitted record literals
///
/// These vary with the destination language's conventions; the defaults are
/// the camelCase names the consuming application declares.
#[derive(Debug, Clone)]
pub struct FieldNames {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub author: String,
    pub author_bio: String,
    pub date: String,
    pub updated_date: String,
    pub read_time: String,
    pub category: String,
    pub tags: String,
    pub faq: String,
    pub question: String,
    pub answer: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            title: "title".to_string(),
            excerpt: "excerpt".to_string(),
            content: "content".to_string(),
            image: "image".to_string(),
            author: "author".to_string(),
            author_bio: "authorBio".to_string(),
            date: "date".to_string(),
            updated_date: "updatedDate".to_string(),
            read_time: "readTime".to_string(),
            category: "category".to_string(),
            tags: "tags".to_string(),
            faq: "faq".to_string(),
            question: "question".to_string(),
            answer: "answer".to_string(),
        }
    }
}

/// Emission conventions of the destination source file
///
/// The surrounding declaration is an external convention, so everything that
/// varies by target language arrives here: the exported constant name, the
/// field identifiers, the quote character per escaping style, the indent
/// unit, and whether the module header carries an inline record type
/// annotation. The defaults reproduce the TypeScript data modules the web
/// application consumes.
#[derive(Debug, Clone)]
pub struct EmitTarget {
    /// Exported constant identifier
    pub const_name: String,
    /// Field identifiers for the record literals
    pub fields: FieldNames,
    /// Delimiter for short scalar fields
    pub scalar_quote: char,
    /// Delimiter for multi-line content block literals
    pub block_quote: char,
    /// One level of indentation
    pub indent: String,
    /// Whether to emit the inline record type annotation in the header
    pub type_annotation: bool,
}

impl Default for EmitTarget {
    fn default() -> Self {
        Self {
            const_name: "articles".to_string(),
            fields: FieldNames::default(),
            scalar_quote: '\'',
            block_quote: '"',
            indent: "  ".to_string(),
            type_annotation: true,
        }
    }
}

impl EmitTarget {
    /// Default target with a different exported constant name
    pub fn with_const_name(name: impl Into<String>) -> Self {
        Self {
            const_name: name.into(),
            ..Self::default()
        }
    }
}

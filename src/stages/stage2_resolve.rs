use std::collections::HashMap;

use tracing::warn;

use crate::models::ArticleRecord;

/// Result of Stage 2 ordering resolution
#[derive(Debug)]
pub struct Stage2Result {
    /// Records in the desired emission order
    pub records: Vec<ArticleRecord>,
    /// Ordered slugs with no resolved record, in order of appearance
    pub missing_slugs: Vec<String>,
}

/// Execute Stage 2: resolve the desired slug order against the record map
///
/// An ordered slug with no record is skipped with a diagnostic and the rest
/// of the sequence is still produced. Records the order list does not name
/// are excluded from the output.
pub fn execute_stage2(
    order: &[String],
    records: &HashMap<String, ArticleRecord>,
) -> Stage2Result {
    let mut resolved = Vec::with_capacity(order.len());
    let mut missing_slugs = Vec::new();

    for slug in order {
        match records.get(slug) {
            Some(record) => resolved.push(record.clone()),
            None => {
                warn!("No record for ordered slug '{}', skipping", slug);
                missing_slugs.push(slug.clone());
            }
        }
    }

    Stage2Result {
        records: resolved,
        missing_slugs,
    }
}

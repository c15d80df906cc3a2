use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::{ArticleRecord, Enhancement};

/// Result of Stage 1 merging
#[derive(Debug)]
pub struct Stage1Result {
    /// Slug -> merged record
    pub records: HashMap<String, ArticleRecord>,
    /// Base slugs that appeared more than once (last loaded wins), sorted
    pub duplicate_slugs: Vec<String>,
    /// Enhancement slugs that matched no base record, sorted
    pub unused_enhancements: Vec<String>,
    /// Number of enhancements merged into a base record
    pub enhancements_applied: usize,
}

/// Merge one optional enhancement into a base record
///
/// Scalar fields override the base value when present, `faq` replaces the
/// base list wholesale, and `extra_content` blocks are appended to the end
/// of the content sequence in the order given. No base field is ever
/// removed; an absent enhancement leaves the base unchanged.
pub fn merge_article(mut base: ArticleRecord, enhancement: Option<&Enhancement>) -> ArticleRecord {
    let enh = match enhancement {
        Some(e) => e,
        None => return base,
    };

    if enh.author.is_some() {
        base.author = enh.author.clone();
    }
    if enh.author_bio.is_some() {
        base.author_bio = enh.author_bio.clone();
    }
    if enh.updated_date.is_some() {
        base.updated_date = enh.updated_date.clone();
    }
    if enh.read_time.is_some() {
        base.read_time = enh.read_time.clone();
    }
    if enh.faq.is_some() {
        base.faq = enh.faq.clone();
    }
    if !enh.extra_content.is_empty() {
        base.content
            .get_or_insert_with(Vec::new)
            .extend(enh.extra_content.iter().cloned());
    }

    base
}

/// Execute Stage 1: build the slug -> record map and apply enhancements
///
/// Duplicate base slugs resolve last-loaded-wins but are surfaced as
/// warnings; an enhancement whose slug matches no base record is recorded as
/// unused and otherwise ignored.
pub fn execute_stage1(
    articles: Vec<ArticleRecord>,
    enhancements: &HashMap<String, Enhancement>,
) -> Stage1Result {
    let mut records: HashMap<String, ArticleRecord> = HashMap::with_capacity(articles.len());
    let mut duplicate_slugs = Vec::new();

    for article in articles {
        if records.contains_key(&article.slug) {
            warn!("Duplicate slug '{}': last loaded record wins", article.slug);
            duplicate_slugs.push(article.slug.clone());
        }
        records.insert(article.slug.clone(), article);
    }

    let mut unused_enhancements = Vec::new();
    let mut enhancements_applied = 0;

    for (slug, enh) in enhancements {
        match records.remove(slug) {
            Some(base) => {
                debug!("Applying enhancement for '{}'", slug);
                records.insert(slug.clone(), merge_article(base, Some(enh)));
                enhancements_applied += 1;
            }
            None => {
                warn!("Enhancement for '{}' matches no base record", slug);
                unused_enhancements.push(slug.clone());
            }
        }
    }

    duplicate_slugs.sort();
    duplicate_slugs.dedup();
    unused_enhancements.sort();

    Stage1Result {
        records,
        duplicate_slugs,
        unused_enhancements,
        enhancements_applied,
    }
}

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{ArticleRecord, Enhancement};

/// Parse an article fragment file: a JSON array of article records
pub fn parse_articles_file(path: &Path) -> Result<Vec<ArticleRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_articles_json(&content).with_context(|| format!("Failed to parse fragments: {:?}", path))
}

/// Parse a JSON array of article records
pub fn parse_articles_json(json: &str) -> Result<Vec<ArticleRecord>> {
    serde_json::from_str(json).context("Failed to parse article fragment JSON")
}

/// Parse an enhancement file: a JSON object mapping slug to enhancement
pub fn parse_enhancements_file(path: &Path) -> Result<HashMap<String, Enhancement>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_enhancements_json(&content)
        .with_context(|| format!("Failed to parse enhancements: {:?}", path))
}

/// Parse a JSON object mapping slug to enhancement
pub fn parse_enhancements_json(json: &str) -> Result<HashMap<String, Enhancement>> {
    serde_json::from_str(json).context("Failed to parse enhancement JSON")
}

/// Parse a slug order file: one slug per line, blanks and `#` comments ignored
pub fn parse_order_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {:?}", path))?;
    Ok(parse_order(&content))
}

/// Parse the slug order from text, one slug per line
pub fn parse_order(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

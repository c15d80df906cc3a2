use std::path::Path;

use anyhow::{Context, Result};

/// Write the generated module text, overwriting any previous file wholesale
///
/// Callers reach this only after emission has fully succeeded.
pub fn write_module(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write module file: {:?}", path))
}

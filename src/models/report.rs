/// Batch diagnostics accumulated across a run and reported together at the
/// end; non-fatal conditions never interrupt processing.
#[derive(Debug, Clone, Default)]
pub struct AssemblyReport {
    /// Total article records loaded across all fragment files
    pub articles_loaded: usize,
    /// Total enhancement records loaded
    pub enhancements_loaded: usize,
    /// Enhancements that matched and were merged into a base record
    pub enhancements_applied: usize,
    /// Records resolved into the final emission sequence
    pub records_emitted: usize,
    /// Base slugs that appeared more than once (last loaded wins)
    pub duplicate_slugs: Vec<String>,
    /// Slugs in the desired order with no resolved record
    pub missing_slugs: Vec<String>,
    /// Enhancement slugs that matched no base record
    pub unused_enhancements: Vec<String>,
}

impl AssemblyReport {
    /// Whether any non-fatal condition was recorded
    pub fn has_warnings(&self) -> bool {
        !self.duplicate_slugs.is_empty()
            || !self.missing_slugs.is_empty()
            || !self.unused_enhancements.is_empty()
    }

    /// Format the report as human-readable text
    pub fn format(&self) -> String {
        let mut out = String::new();

        out.push_str("Assembly Report\n");
        out.push_str("===============\n");
        out.push_str(&format!("Articles loaded: {}\n", self.articles_loaded));
        out.push_str(&format!(
            "Enhancements loaded: {} ({} applied)\n",
            self.enhancements_loaded, self.enhancements_applied
        ));
        out.push_str(&format!("Records emitted: {}\n", self.records_emitted));

        if !self.duplicate_slugs.is_empty() {
            out.push_str("\nDuplicate slugs (last loaded wins)\n");
            out.push_str("----------------------------------\n");
            for slug in &self.duplicate_slugs {
                out.push_str(&format!("- {}\n", slug));
            }
        }

        if !self.missing_slugs.is_empty() {
            out.push_str("\nOrdered slugs with no record (skipped)\n");
            out.push_str("--------------------------------------\n");
            for slug in &self.missing_slugs {
                out.push_str(&format!("- {}\n", slug));
            }
        }

        if !self.unused_enhancements.is_empty() {
            out.push_str("\nUnused enhancements\n");
            out.push_str("-------------------\n");
            for slug in &self.unused_enhancements {
                out.push_str(&format!("- {}\n", slug));
            }
        }

        out
    }

    /// Print the report to standard output
    pub fn print(&self) {
        print!("{}", self.format());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_only() {
        let report = AssemblyReport {
            articles_loaded: 19,
            enhancements_loaded: 11,
            enhancements_applied: 11,
            records_emitted: 19,
            ..Default::default()
        };

        let text = report.format();
        assert!(text.contains("Articles loaded: 19"));
        assert!(text.contains("11 (11 applied)"));
        assert!(!text.contains("Duplicate"));
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_report_lists_warnings() {
        let report = AssemblyReport {
            missing_slugs: vec!["litige-artisan-recours".to_string()],
            unused_enhancements: vec!["old-slug".to_string()],
            ..Default::default()
        };

        let text = report.format();
        assert!(text.contains("- litige-artisan-recours"));
        assert!(text.contains("Unused enhancements"));
        assert!(report.has_warnings());
    }
}

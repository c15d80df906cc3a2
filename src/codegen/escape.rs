/// Escape a short scalar field for a single-line quoted literal
///
/// Backslashes are doubled and the delimiter is escaped. Embedded newlines
/// are not expected in scalar fields and pass through untouched.
pub fn escape_scalar(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

/// Escape a multi-paragraph content block into a single-line quoted literal
///
/// On top of the scalar rules, literal newlines become the two-character
/// sequence `\n` and carriage returns are dropped, so CRLF input encodes
/// identically to LF input.
pub fn escape_block(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inverse of the escape functions, used to check round-trips
    fn unescape(s: &str, _quote: char) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('n') => out.push('\n'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        }
        out
    }

    #[test]
    fn test_escape_scalar_quote_and_backslash() {
        assert_eq!(escape_scalar("l'artisan", '\''), "l\\'artisan");
        assert_eq!(escape_scalar("a\\b", '\''), "a\\\\b");
        assert_eq!(escape_scalar("plain", '\''), "plain");
    }

    #[test]
    fn test_escape_scalar_ignores_other_quote() {
        assert_eq!(escape_scalar("dit \"non\"", '\''), "dit \"non\"");
    }

    #[test]
    fn test_escape_block_newlines() {
        let block = "## Titre\n\nParagraphe.";
        let escaped = escape_block(block, '"');

        assert!(!escaped.contains('\n'));
        assert_eq!(escaped, "## Titre\\n\\nParagraphe.");
        assert_eq!(escaped.matches("\\n").count(), 2);
    }

    #[test]
    fn test_escape_block_drops_carriage_returns() {
        let escaped = escape_block("ligne 1\r\nligne 2\r", '"');

        assert!(!escaped.contains('\r'));
        assert_eq!(escaped, "ligne 1\\nligne 2");
    }

    #[test]
    fn test_escape_block_quote() {
        assert_eq!(escape_block("say \"hi\"", '"'), "say \\\"hi\\\"");
    }

    #[test]
    fn test_scalar_round_trip() {
        let originals = [
            "L'article 1792-6 du Code civil",
            "back\\slash et l'apostrophe",
            "MaPrimeRénov'",
        ];
        for original in originals {
            let escaped = escape_scalar(original, '\'');
            assert_eq!(unescape(&escaped, '\''), original);
        }
    }

    #[test]
    fn test_block_round_trip() {
        let originals = [
            ":::budget\n| Recours | Coût |\n| Médiation | Gratuit |\n:::",
            "une \"citation\" avec \\ et\nretour à la ligne",
        ];
        for original in originals {
            let escaped = escape_block(original, '"');
            assert_eq!(unescape(&escaped, '"'), original);
        }
    }
}

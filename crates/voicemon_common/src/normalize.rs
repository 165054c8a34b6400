//! Phrase normalization for keyword matching.

/// Canonicalize free-form speech for substring matching.
///
/// Dots become spaces before anything else so spelled-out abbreviations
/// like "c.p.u." survive as the multi-token needle "c p u". Every other
/// character that is not an ASCII letter, digit, or space is dropped, the
/// result is lowercased, and whitespace runs collapse to single spaces.
/// Total and idempotent.
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .map(|c| if c == '.' || c.is_whitespace() { ' ' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True if the haystack contains any needle as a contiguous substring.
///
/// No word-boundary check: "proc" matches inside "procedure". Callers pass
/// already-normalized text.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_abbreviation_keeps_token_gaps() {
        assert_eq!(normalize("C.P.U."), "c p u");
    }

    #[test]
    fn test_punctuation_and_whitespace_collapse() {
        assert_eq!(normalize("  Disk   Space!! "), "disk space");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!?!"), "");
    }

    #[test]
    fn test_idempotent() {
        for s in ["C.P.U.", "  Disk   Space!! ", "how much RAM is free?", ""] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_contains_any_is_substring_match() {
        assert!(contains_any("run the procedure", &["proc"]));
        assert!(!contains_any("run the test", &["proc"]));
        assert!(contains_any("c p u load", &["cpu", "c p u"]));
    }
}

//! Keyword tags attached to each generated record.

use std::collections::BTreeSet;

/// Generic terms added to every record's keywords.
pub const LEGAL_TERMS: &[&str] = &[
    "complaint",
    "incident",
    "occurred",
    "person",
    "property",
    "offense",
];

pub const MAX_KEYWORDS: usize = 10;

/// Lower-cased title words longer than three characters, plus [`LEGAL_TERMS`],
/// deduplicated and capped at [`MAX_KEYWORDS`].
///
/// Callers must not rely on the order of the result.
pub fn extract_keywords(title: &str) -> Vec<String> {
    let title = title.to_lowercase();
    let mut keywords: BTreeSet<String> = title
        .split_whitespace()
        .filter(|w| w.chars().count() > 3)
        .map(str::to_string)
        .collect();
    keywords.extend(LEGAL_TERMS.iter().map(|t| t.to_string()));

    keywords.into_iter().take(MAX_KEYWORDS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn includes_long_title_words_and_legal_terms() {
        let kw = extract_keywords("Theft of movable property");
        let set: HashSet<&str> = kw.iter().map(String::as_str).collect();
        assert!(set.contains("theft"));
        assert!(set.contains("movable"));
        assert!(set.contains("complaint"));
        assert!(!set.contains("of"));
    }

    #[test]
    fn deduplicates() {
        // "property" appears in the title and the generic terms.
        let kw = extract_keywords("Property Property");
        let set: HashSet<&String> = kw.iter().collect();
        assert_eq!(set.len(), kw.len());
        assert_eq!(kw.len(), LEGAL_TERMS.len());
    }

    #[test]
    fn capped_at_ten() {
        let kw = extract_keywords(
            "Punishment for criminal conspiracy abetment attempt robbery dacoity extortion mischief",
        );
        // Nine qualifying title words plus six generic terms exceed the cap.
        assert_eq!(kw.len(), MAX_KEYWORDS);
        let distinct: HashSet<&String> = kw.iter().collect();
        assert_eq!(distinct.len(), MAX_KEYWORDS);
    }

    #[test]
    fn short_words_only_yields_generic_terms() {
        let kw = extract_keywords("Act of the law");
        assert_eq!(kw.len(), LEGAL_TERMS.len());
    }

    #[test]
    fn lowercases_title_words() {
        let kw = extract_keywords("DOWRY Death");
        assert!(kw.iter().any(|k| k == "dowry"));
        assert!(kw.iter().all(|k| *k == k.to_lowercase()));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // Three characters, nine bytes in UTF-8.
        let kw = extract_keywords("मार");
        assert!(!kw.iter().any(|k| k == "मार"));
        assert_eq!(kw.len(), LEGAL_TERMS.len());
    }
}

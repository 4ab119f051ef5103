//! Statute section identifiers and catalog entries.
//!
//! Section codes arrive in two shapes depending on who produced the file:
//! bare integers (`302`) from older IPC exports, or strings (`"IPC 302"`,
//! `"498A"`) from the BNS catalog. Both are kept as read so that values
//! written back out keep their original JSON type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a statute section, either numeric or free-form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionCode {
    Number(i64),
    Text(String),
}

impl SectionCode {
    /// Section code standing in for a label index with no mapping entry.
    pub fn from_index(index: usize) -> Self {
        Self::Number(index as i64)
    }

    /// Key used for title lookups. Title tables are keyed by string, so
    /// numeric codes are looked up by their decimal form.
    pub fn lookup_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for SectionCode {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for SectionCode {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for SectionCode {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

/// One entry of the section catalog (`bns_sections.json`).
///
/// The catalog carries more fields per section (description, punishment,
/// chapter); only the number and title are needed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub section_number: SectionCode,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_code_keeps_json_type() {
        let code: SectionCode = serde_json::from_str("302").unwrap();
        assert_eq!(code, SectionCode::Number(302));
        assert_eq!(serde_json::to_string(&code).unwrap(), "302");
    }

    #[test]
    fn text_code_keeps_json_type() {
        let code: SectionCode = serde_json::from_str(r#""IPC 498A""#).unwrap();
        assert_eq!(code, SectionCode::from("IPC 498A"));
        assert_eq!(serde_json::to_string(&code).unwrap(), r#""IPC 498A""#);
    }

    #[test]
    fn lookup_key_is_display_form() {
        assert_eq!(SectionCode::Number(379).lookup_key(), "379");
        assert_eq!(SectionCode::from("BNS 303").lookup_key(), "BNS 303");
    }

    #[test]
    fn from_index_is_numeric() {
        assert_eq!(SectionCode::from_index(7), SectionCode::Number(7));
    }

    #[test]
    fn catalog_entry_ignores_extra_fields() {
        let json = r#"{
            "section_number": "303",
            "title": "Theft",
            "description": "Whoever, intending to take dishonestly...",
            "chapter": "XVII"
        }"#;
        let entry: SectionEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.section_number, SectionCode::from("303"));
        assert_eq!(entry.title, "Theft");
    }
}

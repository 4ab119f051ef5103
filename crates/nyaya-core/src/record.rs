//! Training dataset records produced by the synthetic complaint generator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::section::SectionCode;

/// Language of a generated complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Mr,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Mr];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Mr => "mr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labelled complaint, written as a single JSONL line.
///
/// Records are never updated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// UUID v4, hyphenated.
    pub id: String,
    pub complaint_text: String,
    pub language: Language,
    pub keywords: Vec<String>,
    #[serde(rename = "bns_section")]
    pub section_code: SectionCode,
    #[serde(rename = "bns_title")]
    pub section_title: String,
    /// RFC 3339 timestamp string.
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Mr).unwrap(), r#""mr""#);
        let parsed: Language = serde_json::from_str(r#""hi""#).unwrap();
        assert_eq!(parsed, Language::Hi);
    }

    #[test]
    fn record_uses_training_key_names() {
        let record = DatasetRecord {
            id: "5f0c3a52-8f5e-4d8e-9a43-2b1d9c0e7a11".into(),
            complaint_text: "Someone stole my wallet from market.".into(),
            language: Language::En,
            keywords: vec!["theft".into(), "complaint".into()],
            section_code: "303".into(),
            section_title: "Theft".into(),
            created_at: "2026-03-14T09:30:00+00:00".into(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["bns_section"], "303");
        assert_eq!(value["bns_title"], "Theft");
        assert_eq!(value["language"], "en");
        assert!(value.get("section_code").is_none());
    }
}

//! Label mapping tables shipped alongside the classifier.
//!
//! `labels.json` maps each output index of the model to a section code and
//! each section code to its human-readable title. Both tables are read once
//! at startup and never mutated.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::Context;
use nyaya_core::SectionCode;
use nyaya_core::config::UNKNOWN_TITLE;
use serde::Deserialize;

/// On-disk layout of `labels.json`. JSON object keys are always strings,
/// so label indices arrive as `"0"`, `"1"`, ...
#[derive(Deserialize)]
struct LabelFile {
    label_to_section: HashMap<String, SectionCode>,
    #[serde(default)]
    section_to_title: HashMap<String, String>,
}

/// Read-only lookup tables: label index → section, section → title.
#[derive(Debug, Clone, Default)]
pub struct LabelMap {
    label_section: HashMap<usize, SectionCode>,
    section_title: HashMap<String, String>,
}

/// Summary statistics for a LabelMap.
pub struct LabelSummary {
    pub labels: usize,
    pub distinct_sections: usize,
    pub titled_sections: usize,
}

impl LabelMap {
    pub fn new(
        label_section: HashMap<usize, SectionCode>,
        section_title: HashMap<String, String>,
    ) -> Self {
        Self {
            label_section,
            section_title,
        }
    }

    /// Build a map where label `i` is the `i`-th `(section, title)` pair.
    pub fn from_ordered<S: Into<SectionCode> + Clone>(sections: &[(S, &str)]) -> Self {
        let mut label_section = HashMap::with_capacity(sections.len());
        let mut section_title = HashMap::with_capacity(sections.len());
        for (i, (section, title)) in sections.iter().enumerate() {
            let code: SectionCode = section.clone().into();
            section_title.insert(code.lookup_key(), title.to_string());
            label_section.insert(i, code);
        }
        Self::new(label_section, section_title)
    }

    /// Load `labels.json`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading label map {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing label map {}", path.display()))
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let file: LabelFile = serde_json::from_str(raw)?;

        let mut label_section = HashMap::with_capacity(file.label_to_section.len());
        for (key, section) in file.label_to_section {
            let index: usize = key
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("label index {key:?} is not a non-negative integer"))?;
            label_section.insert(index, section);
        }

        Ok(Self::new(label_section, file.section_to_title))
    }

    /// Section code for a label index; unmapped indices stand for themselves.
    pub fn section(&self, index: usize) -> SectionCode {
        self.label_section
            .get(&index)
            .cloned()
            .unwrap_or_else(|| SectionCode::from_index(index))
    }

    /// Title for a section, or `"Unknown"` when the table has no entry.
    pub fn title(&self, section: &SectionCode) -> &str {
        self.section_title
            .get(&section.lookup_key())
            .map(String::as_str)
            .unwrap_or(UNKNOWN_TITLE)
    }

    /// Resolve a label index to its section code and title.
    pub fn resolve(&self, index: usize) -> (SectionCode, String) {
        let section = self.section(index);
        let title = self.title(&section).to_string();
        (section, title)
    }

    /// Number of mapped label indices.
    pub fn len(&self) -> usize {
        self.label_section.len()
    }

    pub fn is_empty(&self) -> bool {
        self.label_section.is_empty()
    }

    pub fn summary(&self) -> LabelSummary {
        let distinct: HashSet<String> = self
            .label_section
            .values()
            .map(SectionCode::lookup_key)
            .collect();
        let titled = distinct
            .iter()
            .filter(|k| self.section_title.contains_key(*k))
            .count();
        LabelSummary {
            labels: self.label_section.len(),
            distinct_sections: distinct.len(),
            titled_sections: titled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "label_to_section": { "0": "IPC 302", "1": 376, "2": "IPC 420" },
        "section_to_title": { "IPC 302": "Murder", "376": "Rape" }
    }"#;

    #[test]
    fn parses_mixed_section_codes() {
        let labels = LabelMap::from_json(SAMPLE).unwrap();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels.section(0), SectionCode::from("IPC 302"));
        assert_eq!(labels.section(1), SectionCode::Number(376));
    }

    #[test]
    fn numeric_section_titles_by_decimal_key() {
        let labels = LabelMap::from_json(SAMPLE).unwrap();
        assert_eq!(labels.title(&SectionCode::Number(376)), "Rape");
    }

    #[test]
    fn missing_title_is_unknown() {
        let labels = LabelMap::from_json(SAMPLE).unwrap();
        let (section, title) = labels.resolve(2);
        assert_eq!(section, SectionCode::from("IPC 420"));
        assert_eq!(title, "Unknown");
    }

    #[test]
    fn unmapped_index_falls_back_to_raw_index() {
        let labels = LabelMap::from_json(SAMPLE).unwrap();
        let (section, title) = labels.resolve(17);
        assert_eq!(section, SectionCode::Number(17));
        assert_eq!(title, "Unknown");
    }

    #[test]
    fn rejects_non_numeric_label_key() {
        let raw = r#"{ "label_to_section": { "zero": "IPC 302" } }"#;
        assert!(LabelMap::from_json(raw).is_err());
    }

    #[test]
    fn title_table_is_optional() {
        let raw = r#"{ "label_to_section": { "0": "BNS 103" } }"#;
        let labels = LabelMap::from_json(raw).unwrap();
        assert_eq!(labels.resolve(0).1, "Unknown");
    }

    #[test]
    fn from_ordered_assigns_positions() {
        let labels = LabelMap::from_ordered(&[("IPC 379", "Theft"), ("IPC 420", "Cheating")]);
        assert_eq!(labels.resolve(1), (SectionCode::from("IPC 420"), "Cheating".into()));
    }

    #[test]
    fn summary_counts() {
        let labels = LabelMap::from_json(SAMPLE).unwrap();
        let s = labels.summary();
        assert_eq!(s.labels, 3);
        assert_eq!(s.distinct_sections, 3);
        assert_eq!(s.titled_sections, 2);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let labels = LabelMap::load(file.path()).unwrap();
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = LabelMap::load(&dir.path().join("labels.json")).unwrap_err();
        assert!(err.to_string().contains("reading label map"));
    }
}

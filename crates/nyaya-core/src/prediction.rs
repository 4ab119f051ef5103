//! Prediction payloads printed by the `predict` and `rank` commands.

use serde::{Deserialize, Serialize};

use crate::section::SectionCode;

/// A single entry of a ranked (top-k) prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSection {
    pub section: SectionCode,
    pub title: String,
    /// Softmax probability as a percentage, rounded to two decimals.
    pub probability: f64,
}

/// Successful prediction: either a multi-label set or a ranked list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prediction {
    /// Sections whose sigmoid score passed the threshold, in label order.
    Labels(Vec<SectionCode>),
    /// Top-k sections by softmax probability, highest first.
    Ranked(Vec<RankedSection>),
}

impl Prediction {
    pub fn len(&self) -> usize {
        match self {
            Self::Labels(v) => v.len(),
            Self::Ranked(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The single JSON object written to stdout for one request.
///
/// `{"sections": [...]}` on success, `{"error": "..."}` on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope {
    Sections { sections: Prediction },
    Error { error: String },
}

impl Envelope {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<E: std::fmt::Display> From<Result<Prediction, E>> for Envelope {
    fn from(result: Result<Prediction, E>) -> Self {
        match result {
            Ok(sections) => Self::Sections { sections },
            Err(e) => Self::Error {
                error: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_envelope_json() {
        let env = Envelope::from(Ok::<_, String>(Prediction::Labels(vec![
            "IPC 302".into(),
            SectionCode::Number(420),
        ])));
        assert_eq!(env.to_json().unwrap(), r#"{"sections":["IPC 302",420]}"#);
        assert!(!env.is_error());
    }

    #[test]
    fn ranked_envelope_json() {
        let env = Envelope::Sections {
            sections: Prediction::Ranked(vec![RankedSection {
                section: "303".into(),
                title: "Theft".into(),
                probability: 87.25,
            }]),
        };
        assert_eq!(
            env.to_json().unwrap(),
            r#"{"sections":[{"section":"303","title":"Theft","probability":87.25}]}"#
        );
    }

    #[test]
    fn error_envelope_json() {
        let env = Envelope::from(Err::<Prediction, _>("No input text provided"));
        assert!(env.is_error());
        assert_eq!(
            env.to_json().unwrap(),
            r#"{"error":"No input text provided"}"#
        );
    }

    #[test]
    fn empty_labels_is_not_an_error() {
        let env = Envelope::from(Ok::<_, String>(Prediction::Labels(vec![])));
        assert_eq!(env.to_json().unwrap(), r#"{"sections":[]}"#);
    }

    #[test]
    fn ranked_envelope_parses_back() {
        let json = r#"{"sections":[{"section":302,"title":"Murder","probability":64.1}]}"#;
        let env: Envelope = serde_json::from_str(json).unwrap();
        match env {
            Envelope::Sections {
                sections: Prediction::Ranked(r),
            } => {
                assert_eq!(r[0].section, SectionCode::Number(302));
                assert_eq!(r[0].title, "Murder");
            }
            other => panic!("unexpected envelope: {other:?}"),
        }
    }
}

//! Prediction service: model + label tables + scoring parameters.
//!
//! A [`Predictor`] is built once at process start and handed to the command
//! handler. It owns the model behind the [`LogitsModel`] seam so the scoring
//! and formatting path runs the same way against ONNX Runtime or a fixed
//! logits vector.

use nyaya_core::{ConfigError, Envelope, Prediction, RankedSection, ScoringConfig, SectionCode};
use tracing::debug;

use crate::PredictError;
use crate::labels::LabelMap;
use crate::scoring;

/// Anything that maps complaint text to one logit per label.
///
/// `mode` is passed through because the two modes were trained with
/// different input preparation (casing and token budget).
pub trait LogitsModel {
    fn logits(&mut self, text: &str, mode: Mode) -> Result<Vec<f32>, PredictError>;
}

impl<M: LogitsModel + ?Sized> LogitsModel for Box<M> {
    fn logits(&mut self, text: &str, mode: Mode) -> Result<Vec<f32>, PredictError> {
        (**self).logits(text, mode)
    }
}

/// How logits are turned into a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Independent sigmoid per label, threshold filter.
    #[default]
    MultiLabel,
    /// Temperature softmax, top-k ranking.
    Ranked,
}

pub struct Predictor<M> {
    model: M,
    labels: LabelMap,
    config: ScoringConfig,
}

impl<M: LogitsModel> Predictor<M> {
    pub fn new(model: M, labels: LabelMap, config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            model,
            labels,
            config,
        })
    }

    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }

    /// Run one complaint through the model and score it.
    pub fn predict(&mut self, text: &str, mode: Mode) -> Result<Prediction, PredictError> {
        Ok(match mode {
            Mode::MultiLabel => Prediction::Labels(self.select(text)?),
            Mode::Ranked => Prediction::Ranked(self.rank(text)?),
        })
    }

    /// Like [`predict`](Self::predict), rendered into the response envelope.
    pub fn respond(&mut self, text: &str, mode: Mode) -> Envelope {
        let result = self.predict(text, mode);
        if let Err(e) = &result {
            debug!(kind = e.kind(), error = %e, "prediction failed");
        }
        Envelope::from(result)
    }

    /// Sections whose sigmoid probability exceeds the threshold, in label order.
    pub fn select(&mut self, text: &str) -> Result<Vec<SectionCode>, PredictError> {
        let logits = self.logits(text, Mode::MultiLabel)?;
        Ok(scoring::above_threshold(&logits, self.config.threshold)
            .into_iter()
            .map(|i| self.labels.section(i))
            .collect())
    }

    /// The `top_k` most probable sections after temperature softmax.
    pub fn rank(&mut self, text: &str) -> Result<Vec<RankedSection>, PredictError> {
        let logits = self.logits(text, Mode::Ranked)?;
        let probs = scoring::softmax(&logits, self.config.temperature);
        Ok(scoring::top_k(&probs, self.config.top_k)
            .into_iter()
            .map(|(i, p)| {
                let (section, title) = self.labels.resolve(i);
                RankedSection {
                    section,
                    title,
                    probability: scoring::to_percent(p),
                }
            })
            .collect())
    }

    fn logits(&mut self, text: &str, mode: Mode) -> Result<Vec<f32>, PredictError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PredictError::MissingInput);
        }

        let logits = self.model.logits(text, mode)?;
        if logits.is_empty() {
            return Err(PredictError::EmptyLogits);
        }
        debug!(labels = logits.len(), "scoring logits");
        Ok(logits)
    }
}

/// Join command-line words into one complaint, rejecting blank input.
pub fn complaint_from_args(args: &[String]) -> Result<String, PredictError> {
    let text = args.join(" ");
    let text = text.trim();
    if text.is_empty() {
        return Err(PredictError::MissingInput);
    }
    Ok(text.to_string())
}

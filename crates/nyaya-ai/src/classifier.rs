//! ONNX Runtime sequence classifier for statute section prediction.
//!
//! The model directory must contain `model.onnx` (a BERT-style sequence
//! classifier exported with a `[batch, num_labels]` logits output),
//! `tokenizer.json`, and `labels.json`.

use std::path::Path;

use nyaya_core::config::MODEL_MAX_LENGTH;
use nyaya_core::{ConfigError, ScoringConfig};
use ort::session::Session;
use ort::value::Tensor;
use tokenizers::{PaddingParams, PaddingStrategy, Tokenizer, TruncationParams};
use tracing::info;

use crate::PredictError;
use crate::labels::LabelMap;
use crate::predictor::{LogitsModel, Mode, Predictor};

pub const MODEL_FILE: &str = "model.onnx";
pub const TOKENIZER_FILE: &str = "tokenizer.json";
pub const LABELS_FILE: &str = "labels.json";

/// Sequence classifier producing one logit per statute section label.
///
/// The two modes prepare input differently. Multi-label requests keep their
/// casing and use the tokenizer's own truncation limit without padding.
/// Ranked requests are lower-cased and truncated and padded to a fixed
/// budget, so every ranked request runs with the same `[1, max_length]` shape.
pub struct OnnxClassifier {
    session: Session,
    multi_label: Tokenizer,
    ranked: Tokenizer,
    num_labels: Option<usize>,
    feeds_type_ids: bool,
}

impl OnnxClassifier {
    /// Load a classifier from a directory containing `model.onnx` and `tokenizer.json`.
    ///
    /// `ranked_length` is the fixed token budget for ranked requests.
    pub fn load(model_dir: &Path, ranked_length: usize) -> anyhow::Result<Self> {
        if ranked_length == 0 {
            return Err(ConfigError::MaxLength.into());
        }

        let model_path = model_dir.join(MODEL_FILE);
        let tokenizer_path = model_dir.join(TOKENIZER_FILE);

        anyhow::ensure!(model_path.exists(), "{MODEL_FILE} not found in {model_dir:?}");
        anyhow::ensure!(
            tokenizer_path.exists(),
            "{TOKENIZER_FILE} not found in {model_dir:?}"
        );

        let session = Session::builder()?.commit_from_file(&model_path)?;

        let num_labels = infer_num_labels(session.outputs()[0].dtype());
        // Older exports take only ids and mask; BERT exports also declare segment ids.
        let feeds_type_ids = session
            .inputs()
            .iter()
            .any(|input| input.name() == "token_type_ids");

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| anyhow::anyhow!("load tokenizer: {e}"))?;
        let multi_label = multi_label_tokenizer(tokenizer.clone())?;
        let ranked = ranked_tokenizer(tokenizer, ranked_length)?;

        let classifier = Self {
            session,
            multi_label,
            ranked,
            num_labels,
            feeds_type_ids,
        };
        info!(
            ?num_labels,
            multi_label_budget = classifier.token_budget(Mode::MultiLabel),
            ranked_budget = classifier.token_budget(Mode::Ranked),
            feeds_type_ids,
            model = %model_path.display(),
            "loaded classifier model"
        );
        Ok(classifier)
    }

    /// Number of output labels, when the model declares a static output shape.
    pub fn num_labels(&self) -> Option<usize> {
        self.num_labels
    }

    /// Maximum number of tokens a request in `mode` is encoded to.
    pub fn token_budget(&self, mode: Mode) -> usize {
        token_budget(self.tokenizer(mode))
    }

    fn tokenizer(&self, mode: Mode) -> &Tokenizer {
        match mode {
            Mode::MultiLabel => &self.multi_label,
            Mode::Ranked => &self.ranked,
        }
    }
}

impl LogitsModel for OnnxClassifier {
    fn logits(&mut self, text: &str, mode: Mode) -> Result<Vec<f32>, PredictError> {
        let text = prepare_text(text, mode);

        let encoding = self
            .tokenizer(mode)
            .encode(text.as_str(), true)
            .map_err(|e| PredictError::Tokenize(e.to_string()))?;

        let seq_len = encoding.get_ids().len();
        let shape = [1i64, seq_len as i64];

        let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
        let attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();
        let token_type_ids: Vec<i64> = encoding
            .get_type_ids()
            .iter()
            .map(|&t| t as i64)
            .collect();

        let ids_tensor = Tensor::from_array((shape, input_ids.into_boxed_slice()))?;
        let mask_tensor = Tensor::from_array((shape, attention_mask.into_boxed_slice()))?;

        let mut inputs = ort::inputs![
            "input_ids" => ids_tensor,
            "attention_mask" => mask_tensor,
        ];
        if self.feeds_type_ids {
            let type_tensor = Tensor::from_array((shape, token_type_ids.into_boxed_slice()))?;
            inputs.push(("token_type_ids".into(), type_tensor.into()));
        }

        let outputs = self.session.run(inputs)?;

        // Logits: [1, num_labels].
        let (output_shape, output_data) = outputs[0].try_extract_tensor::<f32>()?;
        let dims: &[i64] = output_shape;
        if dims.len() != 2 || dims[0] != 1 || dims[1] <= 0 {
            return Err(PredictError::LogitsShape(dims.to_vec()));
        }

        Ok(output_data[..dims[1] as usize].to_vec())
    }
}

/// Ranked mode was fine-tuned on an uncased model; multi-label keeps casing.
fn prepare_text(text: &str, mode: Mode) -> String {
    let text = text.trim();
    match mode {
        Mode::MultiLabel => text.to_string(),
        Mode::Ranked => text.to_lowercase(),
    }
}

/// Keep the truncation declared in `tokenizer.json`, falling back to
/// [`MODEL_MAX_LENGTH`]. A single sequence needs no padding.
fn multi_label_tokenizer(mut tokenizer: Tokenizer) -> anyhow::Result<Tokenizer> {
    if tokenizer.get_truncation().is_none() {
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: MODEL_MAX_LENGTH,
                ..Default::default()
            }))
            .map_err(|e| anyhow::anyhow!("set truncation: {e}"))?;
    }
    tokenizer.with_padding(None);
    Ok(tokenizer)
}

fn ranked_tokenizer(mut tokenizer: Tokenizer, max_length: usize) -> anyhow::Result<Tokenizer> {
    tokenizer
        .with_truncation(Some(TruncationParams {
            max_length,
            ..Default::default()
        }))
        .map_err(|e| anyhow::anyhow!("set truncation: {e}"))?;

    tokenizer.with_padding(Some(PaddingParams {
        strategy: PaddingStrategy::Fixed(max_length),
        ..Default::default()
    }));
    Ok(tokenizer)
}

fn token_budget(tokenizer: &Tokenizer) -> usize {
    tokenizer
        .get_truncation()
        .map(|t| t.max_length)
        .unwrap_or(MODEL_MAX_LENGTH)
}

/// Load the classifier, its label tables, and wrap them in a [`Predictor`].
///
/// Any failure here is a startup failure: the process cannot serve a request.
pub fn load_predictor(
    model_dir: &Path,
    config: ScoringConfig,
) -> anyhow::Result<Predictor<OnnxClassifier>> {
    config.validate()?;

    let labels_path = model_dir.join(LABELS_FILE);
    anyhow::ensure!(labels_path.exists(), "{LABELS_FILE} not found in {model_dir:?}");
    let labels = LabelMap::load(&labels_path)?;

    let classifier = OnnxClassifier::load(model_dir, config.max_length)?;
    let model_labels = classifier.num_labels();
    let predictor = Predictor::new(classifier, labels, config)?;

    let summary = predictor.labels().summary();
    info!(
        labels = summary.labels,
        sections = summary.distinct_sections,
        titled = summary.titled_sections,
        "loaded label map"
    );
    if let Some(n) = model_labels
        && n != summary.labels
    {
        tracing::warn!(
            model_labels = n,
            mapped_labels = summary.labels,
            "label map does not cover every model output; unmapped indices report as raw numbers"
        );
    }

    Ok(predictor)
}

/// Try to infer the label count from the ONNX model output type.
fn infer_num_labels(output_type: &ort::value::ValueType) -> Option<usize> {
    match output_type {
        ort::value::ValueType::Tensor { shape, .. } => {
            // Last dimension is the label count.
            shape
                .last()
                .and_then(|&d| if d > 0 { Some(d as usize) } else { None })
        }
        _ => None,
    }
}

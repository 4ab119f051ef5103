use thiserror::Error;

/// Per-request prediction failure.
///
/// Every variant is reported to the caller as `{"error": "<message>"}`;
/// startup failures (missing model files) are not represented here.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("No input text provided")]
    MissingInput,

    #[error("tokenize: {0}")]
    Tokenize(String),

    #[cfg(feature = "onnx")]
    #[error("onnx runtime error: {0}")]
    Runtime(#[from] ort::Error),

    #[error("unexpected logits shape: {0:?}, expected [1, num_labels]")]
    LogitsShape(Vec<i64>),

    #[error("model returned no logits")]
    EmptyLogits,
}

impl PredictError {
    /// Stable short name for the error kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingInput => "missing_input",
            Self::Tokenize(_) => "tokenize",
            #[cfg(feature = "onnx")]
            Self::Runtime(_) => "runtime",
            Self::LogitsShape(_) => "logits_shape",
            Self::EmptyLogits => "empty_logits",
        }
    }
}

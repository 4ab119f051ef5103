//! Statute section prediction: label tables, logit scoring, and ONNX Runtime inference.

mod error;
pub mod labels;
pub mod predictor;
pub mod scoring;

pub use error::PredictError;
pub use labels::LabelMap;
pub use predictor::{LogitsModel, Mode, Predictor, complaint_from_args};

#[cfg(feature = "onnx")]
mod classifier;
#[cfg(feature = "onnx")]
pub use classifier::{OnnxClassifier, load_predictor};

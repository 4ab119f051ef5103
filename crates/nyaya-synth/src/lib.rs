//! Synthetic complaint generation for training statute section classifiers.
//!
//! Section titles are mapped to a coarse complaint category, a sentence
//! template for that category is rendered with random details, and the result
//! is written as one JSON record per line.

pub mod catalog;
pub mod category;
pub mod dataset;
mod error;
pub mod keywords;
pub mod templates;

pub use catalog::{load_catalog, training_sections};
pub use category::{ComplaintType, classify_title};
pub use dataset::{DatasetOptions, DatasetStats, generate_record, write_dataset};
pub use error::SynthError;
pub use keywords::extract_keywords;

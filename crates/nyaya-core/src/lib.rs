pub mod config;
pub mod prediction;
pub mod record;
pub mod section;

pub use config::{ConfigError, ScoringConfig};
pub use prediction::{Envelope, Prediction, RankedSection};
pub use record::{DatasetRecord, Language};
pub use section::{SectionCode, SectionEntry};

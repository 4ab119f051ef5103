//! Dataset generation: sample sections, build records, stream JSONL.

use std::collections::HashSet;
use std::io::Write;
use std::time::Instant;

use chrono::{DateTime, TimeDelta, Utc};
use nyaya_core::config::{CATALOG_PREFIX, DEFAULT_SAMPLES, TYPO_RATE, validate_rate};
use nyaya_core::{DatasetRecord, Language, SectionEntry};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info;

use crate::SynthError;
use crate::catalog::training_sections;
use crate::category::classify_title;
use crate::keywords::extract_keywords;
use crate::templates::generate_complaint_text;

/// Log a progress line every this many records.
const PROGRESS_EVERY: usize = 5000;
/// Upper bound, in days, of the random `created_at` backdating.
const MAX_BACKDATE_DAYS: i64 = 365;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetOptions {
    pub samples: usize,
    /// Only the first `prefix` catalog entries are sampled.
    pub prefix: usize,
    pub typo_rate: f64,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            prefix: CATALOG_PREFIX,
            typo_rate: TYPO_RATE,
        }
    }
}

pub struct DatasetStats {
    pub records: usize,
    pub distinct_sections: usize,
    pub elapsed_secs: f64,
}

/// Build one labelled record for `section` in `language`.
///
/// `now` anchors both the complaint date slot and the backdated `created_at`.
pub fn generate_record<R: Rng + ?Sized>(
    rng: &mut R,
    section: &SectionEntry,
    language: Language,
    now: DateTime<Utc>,
    typo_rate: f64,
) -> Result<DatasetRecord, SynthError> {
    let kind = classify_title(&section.title);
    let complaint_text = generate_complaint_text(
        rng,
        kind,
        &section.title,
        language,
        now.date_naive(),
        typo_rate,
    )?;
    let keywords = extract_keywords(&section.title);

    let mut id_bytes = [0u8; 16];
    rng.fill(&mut id_bytes);
    let id = uuid::Builder::from_random_bytes(id_bytes).into_uuid();

    let backdate = TimeDelta::days(rng.gen_range(0..=MAX_BACKDATE_DAYS));

    Ok(DatasetRecord {
        id: id.to_string(),
        complaint_text,
        language,
        keywords,
        section_code: section.section_number.clone(),
        section_title: section.title.clone(),
        created_at: (now - backdate).to_rfc3339(),
    })
}

/// Generate `options.samples` records and write them to `out`, one JSON
/// object per line.
pub fn write_dataset<R: Rng + ?Sized, W: Write>(
    rng: &mut R,
    catalog: &[SectionEntry],
    options: &DatasetOptions,
    mut out: W,
) -> Result<DatasetStats, SynthError> {
    validate_rate(options.typo_rate)?;
    let start = Instant::now();

    let sections = training_sections(catalog, options.prefix);
    if sections.is_empty() {
        return Err(SynthError::EmptyCatalog);
    }
    info!(
        samples = options.samples,
        sections = sections.len(),
        "generating synthetic complaints"
    );

    let mut seen = HashSet::new();
    for i in 0..options.samples {
        let section = sections.choose(rng).ok_or(SynthError::EmptyCatalog)?;
        let language = Language::ALL.choose(rng).copied().unwrap_or(Language::En);

        let record = generate_record(rng, section, language, Utc::now(), options.typo_rate)?;
        seen.insert(section.section_number.lookup_key());

        serde_json::to_writer(&mut out, &record)?;
        out.write_all(b"\n")?;

        if (i + 1) % PROGRESS_EVERY == 0 {
            info!(generated = i + 1, "generated samples");
        }
    }
    out.flush()?;

    let stats = DatasetStats {
        records: options.samples,
        distinct_sections: seen.len(),
        elapsed_secs: start.elapsed().as_secs_f64(),
    };
    info!(
        records = stats.records,
        distinct_sections = stats.distinct_sections,
        elapsed_secs = stats.elapsed_secs,
        "dataset generation complete"
    );
    Ok(stats)
}

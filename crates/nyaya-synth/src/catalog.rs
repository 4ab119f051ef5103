//! Section catalog loading (`bns_sections.json`).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use nyaya_core::SectionEntry;
use tracing::info;

use crate::SynthError;

/// Read the catalog: a JSON array of objects with `section_number` and `title`.
pub fn load_catalog(path: &Path) -> Result<Vec<SectionEntry>, SynthError> {
    if !path.exists() {
        return Err(SynthError::CatalogNotFound(path.to_path_buf()));
    }
    let reader = BufReader::new(File::open(path)?);
    let sections: Vec<SectionEntry> = serde_json::from_reader(reader)?;
    info!(count = sections.len(), path = %path.display(), "loaded section catalog");
    Ok(sections)
}

/// The leading `prefix` entries, in file order, that the generator samples from.
pub fn training_sections(catalog: &[SectionEntry], prefix: usize) -> &[SectionEntry] {
    &catalog[..prefix.min(catalog.len())]
}

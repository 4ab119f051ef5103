//! Dataset pipeline: read the section catalog, generate complaints, write JSONL.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context;
use nyaya_synth::{DatasetOptions, DatasetStats};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Run the full generation pipeline: catalog JSON → records → JSONL file.
pub fn run_generate(
    catalog_path: &Path,
    output_path: &Path,
    options: &DatasetOptions,
    seed: Option<u64>,
) -> anyhow::Result<DatasetStats> {
    let catalog = nyaya_synth::load_catalog(catalog_path).context("reading section catalog")?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let file = File::create(output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    let stats = nyaya_synth::write_dataset(&mut rng, &catalog, options, BufWriter::new(file))
        .context("writing dataset")?;

    Ok(stats)
}

//! Human-readable rendering of ranked predictions for interactive use.

use std::fmt::Write;

use nyaya_core::RankedSection;

/// Render a ranked prediction as a numbered list with confidences.
pub fn format_ranked(ranked: &[RankedSection]) -> String {
    let mut out = String::new();
    out.push_str("\nTop Predictions:\n");
    if ranked.is_empty() {
        out.push_str("  (no sections)\n");
    }
    for (i, r) in ranked.iter().enumerate() {
        let _ = writeln!(out, "{}. Section {}: {}", i + 1, r.section, r.title);
        let _ = writeln!(out, "   Confidence: {:.2}%", r.probability);
    }
    out.push_str("\nPrediction complete.");
    out
}

pub fn print_ranked(ranked: &[RankedSection]) {
    println!("{}", format_ranked(ranked));
}

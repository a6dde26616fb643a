//! Extraction renderers for the symbolic and narrative artifacts.
//!
//! Both renderers are pure functions of the loaded configuration: no IO, no
//! clock, no randomness. Identical configs always render identical artifacts,
//! so every caller (and every test) can compare output byte-for-byte.
//!
//! Rendering shape:
//! - a title line and a `=` separator,
//! - one bracketed header per source field, items numbered continuously
//!   across sections in exact source order,
//! - a total-count footer over the numbered items.

use crate::config::RitualConfig;

const SEPARATOR_WIDTH: usize = 50;

/// Render the symbols artifact from `symbolic_analysis`.
///
/// Source order is canonical and is never re-sorted. Empty lists keep the
/// section headers with zero item lines.
pub fn extract_symbols(config: &RitualConfig) -> String {
    let mut out = String::new();
    push_title(&mut out, "Symboles extraits de FRACTURA");

    let mut count = 0;
    push_section(&mut out, "[SYMBOLES]", &config.symbolic_analysis.symbols, &mut count);
    push_section(
        &mut out,
        "[TECHNIQUES ESTHETIQUES]",
        &config.symbolic_analysis.aesthetic_techniques,
        &mut count,
    );

    push_footer(&mut out, count);
    out
}

/// Render the mantras artifact from `narrative_structures`.
///
/// The archetype is a labeled line, not a numbered item; it renders with an
/// empty value when absent and is not counted in the footer total.
pub fn extract_narratives(config: &RitualConfig) -> String {
    let narrative = &config.narrative_structures;

    let mut out = String::new();
    push_title(&mut out, "Mantras extraits de FRACTURA");

    match &narrative.archetype {
        Some(archetype) => out.push_str(&format!("Archétype: {archetype}\n\n")),
        None => out.push_str("Archétype:\n\n"),
    }

    let mut count = 0;
    push_section(&mut out, "[MANTRAS]", &narrative.mantras, &mut count);
    push_section(&mut out, "[TECHNIQUES]", &narrative.techniques, &mut count);

    push_footer(&mut out, count);
    out
}

fn push_title(out: &mut String, title: &str) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(SEPARATOR_WIDTH));
    out.push_str("\n\n");
}

/// Append a section header plus its numbered items, continuing `count`
/// across sections so the artifact reads as one numbered list.
fn push_section(out: &mut String, header: &str, items: &[String], count: &mut usize) {
    out.push_str(header);
    out.push('\n');
    for item in items {
        *count += 1;
        out.push_str(&format!("{:2}. {item}\n", *count));
    }
    out.push('\n');
}

fn push_footer(out: &mut String, count: usize) {
    out.push_str(&format!("--- Total: {count} éléments ---\n"));
}

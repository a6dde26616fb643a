//! The deterministic glitch-fusion transform behind the chant artifact.
//!
//! The fusion recovers the content lines of the two rendered artifacts,
//! concatenates them in a fixed order (symbols first, then narratives), and
//! ornaments each line by its position against a fixed symbol table. There is
//! no clock and no randomness anywhere in this module: identical inputs
//! produce byte-identical chants.

/// Ornament symbol table. Index arithmetic below relies on its length.
pub const GLITCH_SYMBOLS: [&str; 8] = ["☿", "☄", "⚡", "◊", "∞", "△", "☆", "◈"];

/// Recover the content lines from a rendered artifact text.
///
/// Accepted lines are numbered items (`NN. item`, numbering stripped) and a
/// non-empty `Archétype:` value. Structural lines (title, separators,
/// bracketed section headers, the total footer) and blank lines are skipped.
pub fn content_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(value) = line.strip_prefix("Archétype:") {
            let value = value.trim();
            if !value.is_empty() {
                lines.push(value.to_string());
            }
            continue;
        }
        if let Some((prefix, item)) = line.split_once(". ") {
            if prefix.trim().parse::<usize>().is_ok() {
                lines.push(item.to_string());
            }
        }
    }
    lines
}

/// Fuse the two rendered artifact texts into the full chant artifact.
///
/// Symbol content comes first, narrative content second; the ornament applied
/// to each fused line depends only on its index.
pub fn glitch_fusion(symbol_text: &str, narrative_text: &str) -> String {
    let mut lines = content_lines(symbol_text);
    lines.extend(content_lines(narrative_text));

    let mut out = String::new();
    out.push_str("CHANT GLITCHÉ SACRÉ - FRACTURA\n");
    out.push_str(&"=".repeat(60));
    out.push('\n');
    out.push_str("Par la Fracture vient la Vue\n");
    out.push_str("Lux contre Spectaculum\n");
    out.push_str(&"=".repeat(60));
    out.push_str("\n\n");
    out.push_str(&format!("Éléments fusionnés: {}\n\n", lines.len()));
    out.push_str("--- INVOCATION ---\n\n");

    for (index, line) in lines.iter().enumerate() {
        out.push_str(&ornament(line, index));
        out.push('\n');
    }

    out.push_str("\n--- FIN DE L'INVOCATION ---\n");
    out.push_str("FRACTURA // Luxcordia.EXE\n");
    out
}

/// Apply one of four position-cycled ornament patterns to a line.
fn ornament(line: &str, index: usize) -> String {
    let table_len = GLITCH_SYMBOLS.len();
    match index % 4 {
        // Symmetric wrap.
        0 => {
            let symbol = GLITCH_SYMBOLS[index % table_len];
            format!("{symbol} {line} {symbol}")
        }
        // Leading cluster, one to three symbols wide.
        1 => {
            let cluster: String =
                (0..index % 3 + 1).map(|j| GLITCH_SYMBOLS[j % table_len]).collect();
            format!("{cluster} {line}")
        }
        // Trailing symbol, walking the table backwards.
        2 => {
            let symbol = GLITCH_SYMBOLS[(table_len - index % table_len) % table_len];
            format!("{line} {symbol}")
        }
        // Mid-word insertion; short lines pass through untouched.
        _ => {
            let mut words: Vec<&str> = line.split_whitespace().collect();
            if words.len() > 2 {
                let mid = words.len() / 2;
                words.insert(mid, GLITCH_SYMBOLS[index % table_len]);
                words.join(" ")
            } else {
                line.to_string()
            }
        }
    }
}

use fractura_core::config::{NarrativeStructures, RitualConfig, SymbolicAnalysis};
use fractura_core::extract::{extract_narratives, extract_symbols};
use fractura_core::glitch::{content_lines, glitch_fusion};

fn scenario_config() -> RitualConfig {
    RitualConfig {
        symbolic_analysis: SymbolicAnalysis {
            symbols: vec!["lux".into(), "umbra".into()],
            aesthetic_techniques: vec![],
        },
        narrative_structures: NarrativeStructures {
            mantras: vec!["Nous sommes le seuil".into()],
            archetype: Some("le Briseur de Boucles".into()),
            techniques: vec!["répétition".into()],
        },
    }
}

/// Content recovery strips numbering and structural lines and keeps the
/// archetype value.
#[test]
fn content_lines_recover_items_from_rendered_artifacts() {
    let config = scenario_config();

    let symbols = content_lines(&extract_symbols(&config));
    assert_eq!(symbols, vec!["lux", "umbra"]);

    let narratives = content_lines(&extract_narratives(&config));
    assert_eq!(narratives, vec!["le Briseur de Boucles", "Nous sommes le seuil", "répétition"]);
}

/// An empty archetype label contributes no content line.
#[test]
fn content_lines_skip_empty_archetype() {
    let mut config = scenario_config();
    config.narrative_structures.archetype = None;

    let narratives = content_lines(&extract_narratives(&config));
    assert_eq!(narratives, vec!["Nous sommes le seuil", "répétition"]);
}

/// The fusion is deterministic by exact byte comparison.
#[test]
fn fusion_is_deterministic() {
    let config = scenario_config();
    let symbol_text = extract_symbols(&config);
    let narrative_text = extract_narratives(&config);

    let first = glitch_fusion(&symbol_text, &narrative_text);
    let second = glitch_fusion(&symbol_text, &narrative_text);
    assert_eq!(first, second);
}

/// The four ornament patterns cycle by fused-line index, symbols first then
/// narratives, with no reordering.
#[test]
fn fusion_applies_position_cycled_ornaments() {
    let config = scenario_config();
    let chant = glitch_fusion(&extract_symbols(&config), &extract_narratives(&config));

    assert!(chant.contains("Éléments fusionnés: 5"));
    // Index 0: symmetric wrap.
    assert!(chant.contains("☿ lux ☿"), "chant was:\n{chant}");
    // Index 1: leading cluster of two symbols.
    assert!(chant.contains("☿☄ umbra"));
    // Index 2: trailing symbol walking the table backwards.
    assert!(chant.contains("le Briseur de Boucles ☆"));
    // Index 3: mid-word insertion for lines of more than two words.
    assert!(chant.contains("Nous sommes ◊ le seuil"));
    // Index 4: back to the symmetric wrap, one table slot further.
    assert!(chant.contains("∞ répétition ∞"));
}

/// The chant frame is present regardless of content.
#[test]
fn fusion_frames_the_invocation() {
    let chant = glitch_fusion("", "");

    assert!(chant.contains("CHANT GLITCHÉ SACRÉ - FRACTURA"));
    assert!(chant.contains("Par la Fracture vient la Vue"));
    assert!(chant.contains("Lux contre Spectaculum"));
    assert!(chant.contains("Éléments fusionnés: 0"));
    assert!(chant.contains("--- INVOCATION ---"));
    assert!(chant.contains("--- FIN DE L'INVOCATION ---"));
    assert!(chant.contains("FRACTURA // Luxcordia.EXE"));
}

/// Short lines (two words or fewer) pass through the mid-word pattern
/// untouched.
#[test]
fn mid_word_pattern_leaves_short_lines_alone() {
    // Four one-word lines: index 3 hits the mid-word pattern.
    let symbol_text = " 1. a\n 2. b\n 3. c\n 4. d\n";
    let chant = glitch_fusion(symbol_text, "");
    assert!(chant.contains("\nd\n"), "line 'd' should be unornamented:\n{chant}");
}

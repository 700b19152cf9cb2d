use anyhow::Result;
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::deck::Deck;

pub fn run(path: &Path) -> Result<()> {
    let (deck, _) = super::load_deck(Some(path))?;
    println!("{} {}", "Valid deck:".green().bold(), path.display());
    for line in summary(&deck) {
        println!("  {line}");
    }
    Ok(())
}

/// Slide, module and renderer counts, one line each.
pub fn summary(deck: &Deck) -> Vec<String> {
    let mut renderers: BTreeMap<&str, usize> = BTreeMap::new();
    for slide in &deck.slides {
        *renderers.entry(slide.renderer().name()).or_default() += 1;
    }
    let with_images = deck
        .slides
        .iter()
        .filter(|s| s.atmosphere_image.is_some())
        .count();

    let mut lines = vec![
        format!("{} slides, {} modules", deck.len(), deck.modules.len()),
        format!("{with_images} atmosphere images"),
    ];
    lines.extend(
        renderers
            .into_iter()
            .map(|(name, count)| format!("{name:<14} {count}")),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let deck = crate::deck::parse_yaml(
            "slides:\n  - id: a\n    type: title\n  - id: b\n    type: list\n  - id: c\n    type: list\n",
        )
        .unwrap();
        let lines = summary(&deck);
        assert_eq!(lines[0], "3 slides, 0 modules");
        assert_eq!(lines[1], "0 atmosphere images");
        assert!(lines.contains(&format!("{:<14} 2", "list")));
        assert!(lines.contains(&format!("{:<14} 1", "title")));
    }

    #[test]
    fn test_builtin_summary() {
        let deck = Deck::builtin().unwrap();
        let lines = summary(&deck);
        assert!(lines[0].ends_with("4 modules"), "{}", lines[0]);
    }
}

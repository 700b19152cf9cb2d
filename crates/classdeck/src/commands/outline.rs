use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use crate::deck::Deck;

#[derive(Debug, Serialize, PartialEq)]
pub struct OutlineRow<'a> {
    /// One-based, as shown by the progress counter.
    pub number: usize,
    pub id: &'a str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub renderer: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<u32>,
    pub title: &'a str,
}

pub fn rows(deck: &Deck) -> Vec<OutlineRow<'_>> {
    deck.slides
        .iter()
        .enumerate()
        .map(|(i, slide)| OutlineRow {
            number: i + 1,
            id: &slide.id,
            kind: slide.kind.name(),
            renderer: slide.renderer().name(),
            module: slide.module,
            title: slide.label(),
        })
        .collect()
}

pub fn run(path: Option<&Path>, json: bool) -> Result<()> {
    let (deck, _) = super::load_deck(path)?;
    let rows = rows(&deck);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", deck.display_title().bold());
    let mut module = None;
    for row in &rows {
        if row.module != module {
            module = row.module;
            if let Some(m) = module.and_then(|n| deck.module(n)) {
                println!();
                println!("{}", format!("Module {}: {}", m.number, m.title).cyan().bold());
            }
        }
        println!(
            "{}  {:<30} {} {}",
            format!("{:>4}", row.number).dimmed(),
            row.id,
            format!("{:<16}", row.kind).dimmed(),
            row.title
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_deck_order() {
        let deck = Deck::builtin().unwrap();
        let rows = rows(&deck);
        assert_eq!(rows.len(), deck.len());
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[0].id, "title");
        assert_eq!(rows[0].kind, "title");
        let divider = rows.iter().find(|r| r.id == "module-1").unwrap();
        assert_eq!(divider.renderer, "divider");
        assert_eq!(divider.module, Some(1));
    }

    #[test]
    fn test_json_shape() {
        let deck = crate::deck::parse_yaml("slides:\n  - id: only\n    type: mystery\n").unwrap();
        let json = serde_json::to_value(rows(&deck)).unwrap();
        assert_eq!(json[0]["type"], "unknown");
        assert_eq!(json[0]["renderer"], "content");
        assert_eq!(json[0]["title"], "unknown");
        assert!(json[0].get("module").is_none());
    }
}

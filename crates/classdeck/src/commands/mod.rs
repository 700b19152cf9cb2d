pub mod check;
pub mod completion;
pub mod config;
pub mod outline;
pub mod version;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::deck::{self, Deck};

/// Load `path`, or the built-in deck when there is none. Also returns the
/// directory atmosphere image paths resolve against.
pub fn load_deck(path: Option<&Path>) -> Result<(Deck, PathBuf)> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("File not found: {}", path.display());
            }
            let deck = deck::load(path).with_context(|| format!("Cannot present {}", path.display()))?;
            let base = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            Ok((deck, base))
        }
        None => {
            let deck = Deck::builtin().context("Built-in deck is invalid")?;
            tracing::info!(slides = deck.len(), "built-in deck loaded");
            Ok((deck, PathBuf::from(".")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_when_no_path() {
        let (deck, base) = load_deck(None).unwrap();
        assert!(!deck.is_empty());
        assert_eq!(base, PathBuf::from("."));
    }

    #[test]
    fn test_missing_file() {
        let err = load_deck(Some(Path::new("/nonexistent/deck.yaml"))).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_base_dir_is_deck_parent() {
        let dir = std::env::temp_dir().join(format!("classdeck-load-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("deck.yaml");
        std::fs::write(&path, "slides:\n  - id: a\n    type: title\n    title: A\n").unwrap();

        let (deck, base) = load_deck(Some(&path)).unwrap();
        assert_eq!(deck.len(), 1);
        assert_eq!(base, dir);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}

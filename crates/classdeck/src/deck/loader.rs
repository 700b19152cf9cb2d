use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::Deck;
use crate::theme;

#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML deck: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON deck: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported deck format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("deck has no slides")]
    Empty,

    #[error("duplicate slide id '{0}'")]
    DuplicateId(String),

    #[error("duplicate module number {0}")]
    DuplicateModule(u32),

    #[error("slide '{slide}' references unknown module {module}")]
    UnknownModule { slide: String, module: u32 },

    #[error("module {module} has invalid color '{color}'")]
    InvalidModuleColor { module: u32, color: String },
}

/// Load a deck file, picking the format from its extension.
pub fn load(path: &Path) -> Result<Deck, DeckError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let parse: fn(&str) -> Result<Deck, DeckError> = match ext.as_deref() {
        Some("yaml" | "yml") => parse_yaml,
        Some("json") => parse_json,
        _ => return Err(DeckError::UnsupportedFormat(path.to_path_buf())),
    };
    let contents = std::fs::read_to_string(path).map_err(|source| DeckError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let deck = parse(&contents)?;
    tracing::info!(
        path = %path.display(),
        slides = deck.len(),
        modules = deck.modules.len(),
        "deck loaded"
    );
    Ok(deck)
}

pub fn parse_yaml(contents: &str) -> Result<Deck, DeckError> {
    let deck: Deck = serde_yaml::from_str(contents)?;
    validate(&deck)?;
    Ok(deck)
}

pub fn parse_json(contents: &str) -> Result<Deck, DeckError> {
    let deck: Deck = serde_json::from_str(contents)?;
    validate(&deck)?;
    Ok(deck)
}

fn validate(deck: &Deck) -> Result<(), DeckError> {
    if deck.slides.is_empty() {
        return Err(DeckError::Empty);
    }

    let mut numbers = HashSet::new();
    for module in &deck.modules {
        if !numbers.insert(module.number) {
            return Err(DeckError::DuplicateModule(module.number));
        }
        if theme::parse_hex(&module.color).is_none() {
            return Err(DeckError::InvalidModuleColor {
                module: module.number,
                color: module.color.clone(),
            });
        }
    }

    let mut ids = HashSet::new();
    for slide in &deck.slides {
        if !ids.insert(slide.id.as_str()) {
            return Err(DeckError::DuplicateId(slide.id.clone()));
        }
        if let Some(module) = slide.module {
            if !numbers.contains(&module) {
                return Err(DeckError::UnknownModule {
                    slide: slide.id.clone(),
                    module,
                });
            }
        }
        if let Some(key) = slide.visualization.as_deref() {
            if slide.diagram().is_none() {
                tracing::warn!(slide = %slide.id, visualization = key, "no built-in diagram, showing a placeholder");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODULES: &str = "modules:\n  - number: 1\n    title: One\n    color: \"#00d4aa\"\n";

    #[test]
    fn test_rejects_empty_deck() {
        assert!(matches!(parse_yaml("slides: []"), Err(DeckError::Empty)));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let yaml = "slides:\n  - id: a\n    type: title\n  - id: a\n    type: content\n";
        match parse_yaml(yaml) {
            Err(DeckError::DuplicateId(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_module() {
        let yaml = format!("{MODULES}slides:\n  - id: a\n    type: content\n    module: 2\n");
        assert!(matches!(
            parse_yaml(&yaml),
            Err(DeckError::UnknownModule { module: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_bad_color() {
        let yaml = "modules:\n  - number: 1\n    title: One\n    color: teal\nslides:\n  - id: a\n    type: title\n";
        assert!(matches!(
            parse_yaml(yaml),
            Err(DeckError::InvalidModuleColor { module: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_module() {
        let yaml = format!("{MODULES}  - number: 1\n    title: Again\n    color: \"#ffffff\"\nslides:\n  - id: a\n    type: title\n");
        assert!(matches!(
            parse_yaml(&yaml),
            Err(DeckError::DuplicateModule(1))
        ));
    }

    #[test]
    fn test_parses_json() {
        let json = r##"{
            "title": "Tiny",
            "modules": [{ "number": 1, "title": "One", "color": "#3b82f6" }],
            "slides": [
                { "id": "a", "type": "title", "title": "Hello" },
                { "id": "b", "type": "stat", "module": 1,
                  "stats": [{ "value": "70", "suffix": "%", "label": "impact" }] }
            ]
        }"##;
        let deck = parse_json(json).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.display_title(), "Tiny");
        assert_eq!(deck.slides[1].stats[0].target(), Some(70.0));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let err = load(Path::new("deck.toml")).unwrap_err();
        assert!(matches!(err, DeckError::UnsupportedFormat(_)));
        assert!(err.to_string().contains("unsupported deck format"));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = load(Path::new("/nonexistent/classdeck/deck.yaml")).unwrap_err();
        assert!(matches!(err, DeckError::Read { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = std::env::temp_dir().join(format!("classdeck-loader-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("deck.yml");
        std::fs::write(&path, "slides:\n  - id: only\n    type: closing\n").unwrap();
        let deck = load(&path).unwrap();
        assert_eq!(deck.slides[0].id, "only");
        std::fs::remove_dir_all(&dir).ok();
    }
}

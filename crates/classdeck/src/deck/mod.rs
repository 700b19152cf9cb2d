pub mod diagram;
pub mod loader;

use serde::{Deserialize, Serialize};

pub use diagram::Diagram;
pub use loader::{DeckError, load, parse_json, parse_yaml};

/// The deck that ships with the binary.
const BUILTIN: &str = include_str!("../../../../decks/masterclass.yaml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub modules: Vec<Module>,
    pub slides: Vec<Slide>,
}

/// Thematic grouping of consecutive slides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub number: u32,
    pub title: String,
    /// `#rrggbb`
    pub color: String,
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SlideKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stats: Vec<Stat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visualization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub layout: SlideLayout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<SlideAnimation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atmosphere_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atmosphere_alt: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideKind {
    Title,
    ModuleDivider,
    Content,
    Stat,
    Story,
    List,
    Interaction,
    Visualization,
    Framework,
    Matrix,
    CaseStudy,
    Closing,
    /// Any type string this build does not know about.
    #[serde(other)]
    Unknown,
}

impl SlideKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::ModuleDivider => "module-divider",
            Self::Content => "content",
            Self::Stat => "stat",
            Self::Story => "story",
            Self::List => "list",
            Self::Interaction => "interaction",
            Self::Visualization => "visualization",
            Self::Framework => "framework",
            Self::Matrix => "matrix",
            Self::CaseStudy => "case-study",
            Self::Closing => "closing",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SlideKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideLayout {
    #[default]
    Default,
    Split,
    Comparison,
    IconGrid,
    QuoteFull,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideAnimation {
    Typewriter,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl Stat {
    /// Numeric target for the count-up, if the value is a plain number.
    pub fn target(&self) -> Option<f64> {
        self.value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// `$` and `<$` belong to the number itself; any other prefix is a caption.
    pub fn inline_prefix(&self) -> &str {
        match self.prefix.as_deref() {
            Some(p @ ("$" | "<$")) => p,
            _ => "",
        }
    }

    pub fn caption(&self) -> Option<&str> {
        match self.prefix.as_deref() {
            Some("$" | "<$") | None => None,
            Some(p) => Some(p),
        }
    }

    pub fn suffix(&self) -> &str {
        self.suffix.as_deref().unwrap_or("")
    }

    /// The fully settled display text.
    pub fn display(&self) -> String {
        format!("{}{}{}", self.inline_prefix(), self.value, self.suffix())
    }
}

/// Which slide renderer draws a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    Title,
    Divider,
    Content,
    Stat,
    Quote,
    Story,
    List,
    Interaction,
    Visualization,
    Closing,
}

impl Renderer {
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Divider => "divider",
            Self::Content => "content",
            Self::Stat => "stat",
            Self::Quote => "quote",
            Self::Story => "story",
            Self::List => "list",
            Self::Interaction => "interaction",
            Self::Visualization => "visualization",
            Self::Closing => "closing",
        }
    }
}

impl Slide {
    /// Title for lists and thumbnails, falling back to the type name.
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(self.kind.name())
    }

    pub fn renderer(&self) -> Renderer {
        match self.kind {
            SlideKind::Title => Renderer::Title,
            SlideKind::ModuleDivider => Renderer::Divider,
            SlideKind::Stat => Renderer::Stat,
            SlideKind::Story => {
                if self.layout == SlideLayout::QuoteFull
                    || self.animation == Some(SlideAnimation::Typewriter)
                {
                    Renderer::Quote
                } else {
                    Renderer::Story
                }
            }
            SlideKind::List => Renderer::List,
            SlideKind::Interaction => Renderer::Interaction,
            SlideKind::Visualization
            | SlideKind::Framework
            | SlideKind::Matrix
            | SlideKind::CaseStudy => Renderer::Visualization,
            SlideKind::Content => Renderer::Content,
            SlideKind::Closing => Renderer::Closing,
            // Forward compatible: anything new renders as plain content.
            SlideKind::Unknown => Renderer::Content,
        }
    }

    /// Whether list items are laid out as two animated columns.
    pub fn is_two_column(&self) -> bool {
        matches!(self.layout, SlideLayout::Split | SlideLayout::Comparison)
    }

    /// Left and right halves of the items; the left gets the extra one.
    pub fn split_items(&self) -> (&[String], &[String]) {
        self.items.split_at(self.items.len().div_ceil(2))
    }

    /// Built-in diagram named by the `visualization` key, if it is one.
    pub fn diagram(&self) -> Option<Diagram> {
        self.visualization.as_deref().and_then(Diagram::from_key)
    }
}

/// `"Label: text"` split into an accent label and body, when the label is short.
pub fn split_item_label(item: &str) -> (Option<&str>, &str) {
    match item.split_once(':') {
        Some((label, rest)) if label.chars().count() < 40 => (Some(label), rest.trim_start()),
        _ => (None, item),
    }
}

impl Deck {
    pub fn builtin() -> Result<Self, DeckError> {
        parse_yaml(BUILTIN)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn module(&self, number: u32) -> Option<&Module> {
        self.modules.iter().find(|m| m.number == number)
    }

    /// Module of the slide at `index`, if it belongs to one.
    pub fn module_at(&self, index: usize) -> Option<&Module> {
        self.slide(index)
            .and_then(|s| s.module)
            .and_then(|n| self.module(n))
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Masterclass")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_deck_loads() {
        let deck = Deck::builtin().expect("embedded deck is valid");
        assert!(deck.len() >= 40, "got {} slides", deck.len());
        assert_eq!(deck.modules.len(), 4);
        assert_eq!(deck.slides[0].kind, SlideKind::Title);
        assert_eq!(deck.slides[0].id, "title");
    }

    #[test]
    fn test_module_lookup() {
        let deck = Deck::builtin().unwrap();
        let idx = deck
            .slides
            .iter()
            .position(|s| s.id == "pilot-trap")
            .unwrap();
        let module = deck.module_at(idx).unwrap();
        assert_eq!(module.number, 3);
        assert_eq!(module.color, "#06b6d4");
        assert!(deck.module_at(0).is_none());
        assert!(deck.module(9).is_none());
    }

    #[test]
    fn test_unknown_kind_is_not_an_error() {
        let deck = parse_yaml("slides:\n  - id: a\n    type: hologram\n    title: Future\n").unwrap();
        assert_eq!(deck.slides[0].kind, SlideKind::Unknown);
        assert_eq!(deck.slides[0].layout, SlideLayout::Default);
    }

    #[test]
    fn test_layout_variants() {
        let yaml = "slides:\n  - id: a\n    type: list\n    layout: icon-grid\n  - id: b\n    type: list\n    layout: mosaic\n";
        let deck = parse_yaml(yaml).unwrap();
        assert_eq!(deck.slides[0].layout, SlideLayout::IconGrid);
        assert_eq!(deck.slides[1].layout, SlideLayout::Other);
    }

    #[test]
    fn test_stat_prefix_rules() {
        let money = Stat {
            value: "4.5".into(),
            label: "saved".into(),
            prefix: Some("$".into()),
            suffix: Some("M".into()),
        };
        assert_eq!(money.inline_prefix(), "$");
        assert_eq!(money.caption(), None);
        assert_eq!(money.display(), "$4.5M");
        assert_eq!(money.target(), Some(4.5));

        let rank = Stat {
            value: "1".into(),
            label: "reason".into(),
            prefix: Some("#".into()),
            suffix: None,
        };
        assert_eq!(rank.inline_prefix(), "");
        assert_eq!(rank.caption(), Some("#"));

        let words = Stat {
            value: "many".into(),
            label: "x".into(),
            prefix: None,
            suffix: None,
        };
        assert_eq!(words.target(), None);
    }

    #[test]
    fn test_renderer_dispatch() {
        let yaml = "slides:
  - id: a
    type: framework
  - id: b
    type: story
    layout: quote-full
  - id: c
    type: story
    animation: typewriter
  - id: d
    type: story
  - id: e
    type: tesseract
  - id: f
    type: module-divider
";
        let deck = parse_yaml(yaml).unwrap();
        let renderers: Vec<Renderer> = deck.slides.iter().map(Slide::renderer).collect();
        assert_eq!(
            renderers,
            vec![
                Renderer::Visualization,
                Renderer::Quote,
                Renderer::Quote,
                Renderer::Story,
                Renderer::Content,
                Renderer::Divider,
            ]
        );
    }

    #[test]
    fn test_split_items_left_gets_extra() {
        let deck = parse_yaml(
            "slides:\n  - id: a\n    type: list\n    layout: split\n    items: [a, b, c, d, e]\n",
        )
        .unwrap();
        let (left, right) = deck.slides[0].split_items();
        assert_eq!(left, ["a", "b", "c"]);
        assert_eq!(right, ["d", "e"]);
        assert!(deck.slides[0].is_two_column());
    }

    #[test]
    fn test_builtin_visualizations_name_known_diagrams() {
        let deck = Deck::builtin().unwrap();
        let keyed: Vec<&Slide> = deck
            .slides
            .iter()
            .filter(|s| s.visualization.is_some())
            .collect();
        assert!(keyed.len() >= 9);
        for slide in keyed {
            assert!(slide.diagram().is_some(), "{} has an unknown diagram", slide.id);
            assert_eq!(slide.renderer(), Renderer::Visualization);
        }
        let timeline = deck.slides.iter().find(|s| s.id == "case-study-timeline").unwrap();
        assert_eq!(timeline.diagram(), Some(Diagram::Timeline));
    }

    #[test]
    fn test_unknown_visualization_key_has_no_diagram() {
        let deck = parse_yaml(
            "slides:\n  - id: v\n    type: visualization\n    visualization: org-chart\n",
        )
        .unwrap();
        assert_eq!(deck.slides[0].diagram(), None);
    }

    #[test]
    fn test_split_item_label() {
        assert_eq!(
            split_item_label("Data: access, quality"),
            (Some("Data"), "access, quality")
        );
        assert_eq!(split_item_label("No colon here"), (None, "No colon here"));
        let long = format!("{}: tail", "x".repeat(45));
        assert_eq!(split_item_label(&long), (None, long.as_str()));
    }

    #[test]
    fn test_slide_label_falls_back_to_kind() {
        let deck = parse_yaml("slides:\n  - id: a\n    type: closing\n").unwrap();
        assert_eq!(deck.slides[0].label(), "closing");
    }
}

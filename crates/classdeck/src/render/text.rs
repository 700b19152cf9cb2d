use std::sync::Arc;

use eframe::egui::{self, Color32, FontFamily, FontId, Galley};

use crate::deck::split_item_label;

/// Horizontal anchoring of a text block within its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// How a piece of slide text looks. Sizes are in reference pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub size: f32,
    pub color: Color32,
    pub family: FontFamily,
    pub align: Align,
}

impl Style {
    pub fn new(size: f32, color: Color32) -> Self {
        Self {
            size,
            color,
            family: FontFamily::Proportional,
            align: Align::Left,
        }
    }

    pub fn mono(self) -> Self {
        Self {
            family: FontFamily::Monospace,
            ..self
        }
    }

    pub fn centered(self) -> Self {
        Self {
            align: Align::Center,
            ..self
        }
    }

    pub fn font(&self, scale: f32) -> FontId {
        FontId::new(self.size * scale, self.family.clone())
    }
}

/// Lay out wrapped text. Centered galleys have their rows centered on
/// x = 0, so they are painted at the horizontal center of their column.
pub fn layout(
    ui: &egui::Ui,
    text: &str,
    font: FontId,
    color: Color32,
    max_width: f32,
    align: Align,
) -> Arc<Galley> {
    let mut job = egui::text::LayoutJob::simple(text.to_string(), font, color, max_width);
    if align == Align::Center {
        job.halign = egui::Align::Center;
    }
    ui.painter().layout_job(job)
}

/// `Label: body` as one job, the label in `accent` and slightly heavier.
/// Text without a short label lays out plain.
pub fn labelled_job(
    item: &str,
    size: f32,
    color: Color32,
    accent: Color32,
    max_width: f32,
) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = max_width;
    let format = |size: f32, color: Color32| egui::text::TextFormat {
        font_id: FontId::new(size, FontFamily::Proportional),
        color,
        ..Default::default()
    };
    match split_item_label(item) {
        (Some(label), body) => {
            job.append(label, 0.0, format(size + 1.0, accent));
            job.append(":", 0.0, format(size + 1.0, accent));
            job.append(body, size * 0.35, format(size, color));
        }
        (None, body) => job.append(body, 0.0, format(size, color)),
    }
    job
}

/// Height `text` takes when wrapped to `max_width`.
pub fn measure(ui: &egui::Ui, text: &str, font: FontId, max_width: f32) -> f32 {
    ui.painter()
        .layout(text.to_string(), font, Color32::WHITE, max_width)
        .rect
        .height()
}

/// Width of `text` laid out on a single line.
pub fn width(ui: &egui::Ui, text: &str, font: FontId) -> f32 {
    ui.painter()
        .layout_no_wrap(text.to_string(), font, Color32::WHITE)
        .rect
        .width()
}

/// Uppercase with a little extra spacing, for kicker lines.
pub fn kicker(text: &str) -> String {
    let upper = text.to_uppercase();
    let mut out = String::with_capacity(upper.len() * 2);
    for (i, c) in upper.chars().enumerate() {
        if i > 0 {
            out.push('\u{2009}');
        }
        out.push(c);
    }
    out
}

/// Curly quotes around `text` unless it already carries them.
pub fn quoted(text: &str) -> String {
    let t = text.trim();
    let open = t.starts_with('\u{201C}') || t.starts_with('"');
    let close = t.ends_with('\u{201D}') || (t.len() > 1 && t.ends_with('"'));
    match (open, close) {
        (true, true) => t.to_string(),
        (true, false) => format!("{t}\u{201D}"),
        (false, true) => format!("\u{201C}{t}"),
        (false, false) => format!("\u{201C}{t}\u{201D}"),
    }
}

/// Attribution with a leading dash, whatever dash the author typed.
pub fn attribution(text: &str) -> String {
    let trimmed = text.trim_start();
    let rest = trimmed
        .strip_prefix("---")
        .or_else(|| trimmed.strip_prefix("--"))
        .or_else(|| trimmed.strip_prefix('\u{2014}'))
        .or_else(|| trimmed.strip_prefix('-'))
        .unwrap_or(trimmed);
    format!("\u{2014} {}", rest.trim_start())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted() {
        assert_eq!(quoted("Hello"), "\u{201C}Hello\u{201D}");
        assert_eq!(quoted("\"Hello\""), "\"Hello\"");
        assert_eq!(quoted("\u{201C}Hi"), "\u{201C}Hi\u{201D}");
    }

    #[test]
    fn test_attribution() {
        assert_eq!(attribution("-- Plant manager"), "\u{2014} Plant manager");
        assert_eq!(attribution("--- Plant manager"), "\u{2014} Plant manager");
        assert_eq!(attribution("Plant manager"), "\u{2014} Plant manager");
    }

    #[test]
    fn test_kicker() {
        assert_eq!(kicker("ab"), "A\u{2009}B");
        assert_eq!(kicker(""), "");
    }

    #[test]
    fn test_style_builders() {
        let style = Style::new(32.0, Color32::WHITE).mono().centered();
        assert_eq!(style.family, FontFamily::Monospace);
        assert_eq!(style.align, Align::Center);
        assert_eq!(style.font(0.5).size, 16.0);
    }

    #[test]
    fn test_labelled_job_splits_short_label() {
        let job = labelled_job("Pilot: prove value", 20.0, Color32::WHITE, Color32::RED, 300.0);
        assert_eq!(job.sections.len(), 3);
        assert_eq!(job.text, "Pilot:prove value");
        assert_eq!(job.sections[0].format.color, Color32::RED);

        let plain = labelled_job("No label here", 20.0, Color32::WHITE, Color32::RED, 300.0);
        assert_eq!(plain.sections.len(), 1);
    }
}

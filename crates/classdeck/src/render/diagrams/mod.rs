//! Painters for the built-in diagrams. Each lays out its content in the area
//! below the slide heading and animates through the diagram parts:
//! `Stage` blocks, `Detail` rows, `Connector` marks, the `Line` and `Fill`.

mod capability;
mod curve;
mod maturity;
mod matrix;
mod pipeline;
mod risk_grid;
mod risk_tiers;
mod timeline;
mod trust;
mod use_cases;

use eframe::egui::{Color32, Pos2, Rect, Stroke, vec2};

use crate::deck::Diagram;
use crate::motion::Part;
use crate::render::SlideFrame;
use crate::render::text::Style;
use crate::theme::parse_hex;

/// Type sizes in reference pixels.
const TITLE: f32 = 26.0;
const BODY: f32 = 19.0;
const SMALL: f32 = 15.0;
const FIGURE: f32 = 40.0;

pub fn paint(frame: &SlideFrame, diagram: Diagram, area: Rect) {
    match diagram {
        Diagram::MaturityModel => maturity::paint(frame, area),
        Diagram::ImpactMatrix => matrix::paint(frame, area),
        Diagram::AckuPipeline => pipeline::paint(frame, area),
        Diagram::AdoptionCurve => curve::paint(frame, area),
        Diagram::TrustEquation => trust::paint(frame, area),
        Diagram::Timeline => timeline::paint(frame, area),
        Diagram::RiskFramework => risk_grid::paint(frame, area),
        Diagram::RiskTiers => risk_tiers::paint(frame, area),
        Diagram::UseCaseTiers => use_cases::paint(frame, area),
        Diagram::CapabilityTiers => capability::paint(frame, area),
    }
}

/// Diagram colors are static; gray marks a bad entry.
fn hex(s: &str) -> Color32 {
    parse_hex(s).unwrap_or(Color32::GRAY)
}

fn title(frame: &SlideFrame) -> Style {
    Style::new(TITLE, frame.theme.text_primary)
}

fn body(frame: &SlideFrame) -> Style {
    Style::new(BODY, frame.theme.text_secondary)
}

/// Monospace caption.
fn caption(frame: &SlideFrame) -> Style {
    Style::new(SMALL, frame.theme.text_tertiary).mono()
}

/// `area` narrowed to at most `max_width` reference pixels, centered.
fn column(frame: &SlideFrame, area: Rect, max_width: f32) -> Rect {
    let width = area.width().min(frame.px(max_width));
    Rect::from_center_size(area.center(), vec2(width, area.height()))
}

/// Height of a dotted list at `width`, rows `gap` reference pixels apart.
fn bullets_height(frame: &SlideFrame, items: &[&str], width: f32, style: &Style, gap: f32) -> f32 {
    let indent = frame.px(18.0);
    let rows: f32 = items
        .iter()
        .map(|item| frame.measure(item, width - indent, style))
        .sum();
    rows + frame.px(gap) * items.len().saturating_sub(1) as f32
}

/// Dotted list from `y`, each row animated by `part(i)`. Returns the bottom edge.
#[allow(clippy::too_many_arguments)]
fn bullets(
    frame: &SlideFrame,
    items: &[&str],
    part: impl Fn(usize) -> Part,
    x: f32,
    y: f32,
    width: f32,
    style: &Style,
    dot: Color32,
    gap: f32,
) -> f32 {
    let indent = frame.px(18.0);
    let radius = frame.px(3.0);
    let mut y = y;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            y += frame.px(gap);
        }
        let row = part(i);
        let pose = frame.pose(row);
        let center = Pos2::new(x + radius, y + frame.px(style.size) * 0.6)
            + vec2(frame.px(pose.dx), frame.px(pose.dy));
        frame
            .ui
            .painter()
            .circle_filled(center, radius, frame.fade(dot, pose));
        y += frame.text(row, item, x + indent, y, width - indent, style);
    }
    y
}

/// Thin rule across a block, moving and fading with `part`.
fn hairline(frame: &SlideFrame, part: Part, left: f32, right: f32, y: f32, color: Color32) {
    let pose = frame.pose(part);
    let shift = vec2(frame.px(pose.dx), frame.px(pose.dy));
    frame.ui.painter().line_segment(
        [Pos2::new(left, y) + shift, Pos2::new(right, y) + shift],
        Stroke::new(frame.px(1.0), frame.fade(color, pose)),
    );
}

/// Equal columns across `area`, `gap` apart.
fn columns(area: Rect, count: usize, gap: f32) -> Vec<Rect> {
    let count = count.max(1);
    let width = (area.width() - gap * (count as f32 - 1.0)) / count as f32;
    (0..count)
        .map(|i| {
            Rect::from_min_size(
                Pos2::new(area.left() + i as f32 * (width + gap), area.top()),
                vec2(width, area.height()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    #[test]
    fn test_columns_fill_the_area() {
        let area = Rect::from_min_size(pos2(10.0, 0.0), vec2(320.0, 50.0));
        let cols = columns(area, 3, 10.0);
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[0].left(), 10.0);
        assert_eq!(cols[0].width(), 100.0);
        assert_eq!(cols[2].right(), 330.0);
    }

    #[test]
    fn test_hex_falls_back_to_gray() {
        assert_eq!(hex("#00d4aa"), Color32::from_rgb(0x00, 0xD4, 0xAA));
        assert_eq!(hex("teal"), Color32::GRAY);
    }
}

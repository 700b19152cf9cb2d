use eframe::egui::{Color32, Pos2, Rect, vec2};

use crate::deck::diagram::{CAPABILITY_TIERS, CapabilityTier};
use crate::motion::Part;
use crate::render::SlideFrame;
use crate::render::layouts::centered_top;
use crate::render::text::{Style, kicker};
use crate::theme::Theme;

use super::{BODY, FIGURE, SMALL, bullets, bullets_height, caption, column, hex};

/// Capability pyramid: centered tiers, narrowest on top. Each tier holds
/// its share of the workforce, its skills and its training.
pub fn paint(frame: &SlideFrame, area: Rect) {
    let area = column(frame, area, 1300.0);
    let gap = frame.px(12.0);
    let pad = frame.px(18.0);
    let figure_w = frame.px(120.0);

    let rows: Vec<&CapabilityTier> = CAPABILITY_TIERS.iter().rev().collect();
    let heights: Vec<f32> = rows
        .iter()
        .map(|tier| tier_height(frame, tier, area.width() * tier.width - pad * 2.0, figure_w) + pad * 2.0)
        .collect();
    let total = heights.iter().sum::<f32>() + gap * (heights.len() as f32 - 1.0);
    let mut y = centered_top(area, total);

    for (i, (tier, h)) in rows.iter().zip(&heights).enumerate() {
        let part = Part::Stage(i);
        let color = hex(tier.color);
        let width = area.width() * tier.width;
        let rect = Rect::from_min_size(Pos2::new(area.center().x - width / 2.0, y), vec2(width, *h));
        frame.card(part, rect, Theme::with_opacity(color, 0.25));

        let x = rect.left() + pad;
        let top = rect.top() + pad;
        let inner = width - pad * 2.0;
        frame.text(part, tier.percentage, x, top, figure_w, &figure_style(color));

        let text_x = x + figure_w;
        let text_w = inner - figure_w;
        let (heading_w, detail_x, detail_w) = split(text_w);
        let mut ty = top;
        ty += frame.text(part, tier.name, text_x, ty, heading_w, &name_style(frame)) + frame.px(4.0);
        frame.text(part, tier.description, text_x, ty, heading_w, &caption(frame));

        let dx = text_x + detail_x;
        let after = bullets(frame, tier.skills, |_| part, dx, top, detail_w, &skill_style(frame), color, 4.0);
        let label_y = after + frame.px(10.0);
        let label_h = frame.text(part, &kicker("Training"), dx, label_y, detail_w, &caption(frame));
        frame.text(
            part,
            tier.training,
            dx,
            label_y + label_h + frame.px(2.0),
            detail_w,
            &training_style(color),
        );
        y += h + gap;
    }
}

/// Heading column width, then the detail column's offset and width.
fn split(width: f32) -> (f32, f32, f32) {
    let heading = width * 0.38;
    let offset = heading + width * 0.04;
    (heading, offset, width - offset)
}

fn figure_style(color: Color32) -> Style {
    Style::new(FIGURE, color).mono()
}

fn name_style(frame: &SlideFrame) -> Style {
    Style::new(BODY * 1.15, frame.theme.text_primary)
}

fn skill_style(frame: &SlideFrame) -> Style {
    Style::new(SMALL, frame.theme.text_secondary)
}

fn training_style(color: Color32) -> Style {
    Style::new(SMALL, color)
}

fn tier_height(frame: &SlideFrame, tier: &CapabilityTier, inner: f32, figure_w: f32) -> f32 {
    let (heading_w, _, detail_w) = split(inner - figure_w);
    let heading = frame.measure(tier.name, heading_w, &name_style(frame))
        + frame.px(4.0)
        + frame.measure(tier.description, heading_w, &caption(frame));
    let detail = bullets_height(frame, tier.skills, detail_w, &skill_style(frame), 4.0)
        + frame.px(10.0)
        + frame.measure("TRAINING", detail_w, &caption(frame))
        + frame.px(2.0)
        + frame.measure(tier.training, detail_w, &training_style(Color32::WHITE));
    let figure = frame.measure(tier.percentage, figure_w, &figure_style(Color32::WHITE));
    heading.max(detail).max(figure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_a_gutter() {
        let (heading, offset, detail) = split(1000.0);
        assert!((heading - 380.0).abs() < 1e-3);
        assert!(offset > heading);
        assert!((offset + detail - 1000.0).abs() < 1e-3);
    }
}

use eframe::egui::{Pos2, Rect, vec2};

use crate::deck::diagram::{MATURITY_LEVELS, MaturityLevel};
use crate::motion::Part;
use crate::render::SlideFrame;
use crate::render::layouts::centered_top;
use crate::render::text::Style;
use crate::theme::Theme;

use super::{FIGURE, body, caption, column, hex, title};

/// Five left-aligned bars, widest at the bottom, each growing in from the
/// left edge.
pub fn paint(frame: &SlideFrame, area: Rect) {
    let area = column(frame, area, 1200.0);
    let pad = frame.px(14.0);
    let gap = frame.px(12.0);
    let number_w = frame.px(44.0);

    let heights: Vec<f32> = MATURITY_LEVELS
        .iter()
        .map(|level| bar_height(frame, level, area.width() * level.width - pad * 2.0, number_w))
        .collect();
    let total = heights.iter().sum::<f32>() + gap * (heights.len() as f32 - 1.0);
    let mut y = centered_top(area, total);

    let number_style = Style::new(
        FIGURE * 0.7,
        Theme::with_opacity(frame.theme.accent, 0.6),
    )
    .mono();
    // Drawn top-down, highest level first.
    for (i, level) in MATURITY_LEVELS.iter().enumerate().rev() {
        let part = Part::Stage(i);
        let width = area.width() * level.width;
        let rect = Rect::from_min_size(Pos2::new(area.left(), y), vec2(width, heights[i]));
        let fill = Theme::with_opacity(hex(level.color), level.fill);
        frame.panel(part, rect, fill, frame.theme.glass_border);

        let x = rect.left() + pad;
        let inner = width - pad * 2.0;
        let mut ty = rect.top() + pad;
        frame.text(part, &(i + 1).to_string(), x, ty, number_w, &number_style);
        ty += frame.text(part, level.name, x + number_w, ty + frame.px(4.0), inner - number_w, &title(frame))
            + frame.px(8.0);
        ty += frame.text(part, level.description, x, ty, inner, &body(frame)) + frame.px(4.0);
        frame.text(part, level.detail, x, ty, inner, &caption(frame));

        y += heights[i] + gap;
    }
}

fn bar_height(frame: &SlideFrame, level: &MaturityLevel, inner: f32, number_w: f32) -> f32 {
    frame.px(14.0) * 2.0
        + frame.measure(level.name, inner - number_w, &title(frame))
        + frame.px(12.0)
        + frame.measure(level.description, inner, &body(frame))
        + frame.px(4.0)
        + frame.measure(level.detail, inner, &caption(frame))
}

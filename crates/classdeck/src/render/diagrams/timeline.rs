use eframe::egui::{Color32, Pos2, Rect, Stroke, vec2};

use crate::deck::diagram::{MILESTONES, Milestone};
use crate::motion::Part;
use crate::render::SlideFrame;
use crate::render::layouts::centered_top;
use crate::render::text::Style;
use crate::theme::Theme;

use super::{BODY, SMALL, bullets, bullets_height, caption, column, hex};

/// Milestones down a vertical line. Each card keeps its headline on the left
/// and what happened on the right.
pub fn paint(frame: &SlideFrame, area: Rect) {
    let area = column(frame, area, 1400.0);
    let rail_x = area.left() + frame.px(32.0);
    let card_x = rail_x + frame.px(36.0);
    let card_w = area.right() - card_x;
    let pad = frame.px(16.0);
    let gap = frame.px(10.0);
    let split = frame.px(24.0);
    let left_w = (card_w - pad * 2.0) * 0.4;
    let right_w = card_w - pad * 2.0 - left_w - split;

    let heights: Vec<f32> = MILESTONES
        .iter()
        .map(|m| {
            headline_height(frame, m, left_w).max(bullets_height(frame, m.items, right_w, &item_style(frame), 4.0))
                + pad * 2.0
        })
        .collect();
    let total = heights.iter().sum::<f32>() + gap * (heights.len() as f32 - 1.0);
    let top = centered_top(area, total);
    rail(frame, rail_x, top, top + total);

    let mut y = top;
    for (i, (milestone, h)) in MILESTONES.iter().zip(&heights).enumerate() {
        let color = hex(milestone.color);
        node(frame, i, Pos2::new(rail_x, y + pad + frame.px(10.0)), color);

        let part = Part::Stage(i);
        let rect = Rect::from_min_size(Pos2::new(card_x, y), vec2(card_w, *h));
        frame.card(part, rect, frame.theme.glass_border);
        let x = rect.left() + pad;
        let mut ty = rect.top() + pad;
        let phase_style = Style::new(SMALL, color).mono();
        let phase_w = frame.measure_width(milestone.phase, &phase_style) + frame.px(12.0);
        frame.text(part, milestone.phase, x, ty, phase_w, &phase_style);
        ty += frame.text(part, milestone.period, x + phase_w, ty, left_w - phase_w, &caption(frame))
            + frame.px(6.0);
        ty += frame.text(part, milestone.title, x, ty, left_w, &title_style(frame)) + frame.px(4.0);
        frame.text(part, milestone.metric, x, ty, left_w, &metric_style(color));

        bullets(
            frame,
            milestone.items,
            |_| part,
            x + left_w + split,
            rect.top() + pad,
            right_w,
            &item_style(frame),
            Theme::with_opacity(Color32::WHITE, 0.2),
            4.0,
        );
        y += h + gap;
    }
}

fn title_style(frame: &SlideFrame) -> Style {
    Style::new(BODY * 1.15, frame.theme.text_primary)
}

fn metric_style(color: Color32) -> Style {
    Style::new(SMALL * 1.1, color)
}

fn item_style(frame: &SlideFrame) -> Style {
    Style::new(SMALL, frame.theme.text_secondary)
}

fn headline_height(frame: &SlideFrame, milestone: &Milestone, width: f32) -> f32 {
    frame.measure(milestone.period, width, &caption(frame))
        + frame.px(6.0)
        + frame.measure(milestone.title, width, &title_style(frame))
        + frame.px(4.0)
        + frame.measure(milestone.metric, width, &metric_style(Color32::WHITE))
}

/// Vertical line drawn downwards up to the `Line` pose's scale.
fn rail(frame: &SlideFrame, x: f32, top: f32, bottom: f32) {
    let pose = frame.pose(Part::Line);
    let end = top + (bottom - top) * pose.scale.clamp(0.0, 1.0);
    if end <= top {
        return;
    }
    let color = frame.fade(Theme::with_opacity(frame.theme.text_primary, 0.12), pose);
    frame
        .ui
        .painter()
        .line_segment([Pos2::new(x, top), Pos2::new(x, end)], Stroke::new(frame.px(2.0), color));
}

/// Milestone dot on the line, popping in with its `Connector` pose.
fn node(frame: &SlideFrame, index: usize, center: Pos2, color: Color32) {
    let pose = frame.pose(Part::Connector(index));
    let radius = frame.px(9.0) * pose.scale.max(0.0);
    if radius <= 0.0 {
        return;
    }
    let painter = frame.ui.painter();
    painter.circle_filled(center, radius, frame.fade(Theme::with_opacity(color, 0.2), pose));
    painter.circle_stroke(center, radius, Stroke::new(frame.px(2.0), frame.fade(color, pose)));
}

use std::f32::consts::FRAC_PI_2;

use eframe::egui::{self, Pos2, Rect, vec2};

use crate::deck::diagram::{QUADRANTS, Quadrant};
use crate::motion::{Part, Pose};
use crate::render::SlideFrame;
use crate::render::layouts::centered_top;
use crate::render::text::{self, Style, kicker};
use crate::theme::Theme;

use super::{SMALL, body, caption, column, hex, title};

const MIN_CELL: f32 = 160.0;

/// Effort against impact: a 2x2 grid of quadrants, each listing examples.
pub fn paint(frame: &SlideFrame, area: Rect) {
    let area = column(frame, area, 1240.0);
    let gutter = frame.px(40.0);
    let gap = frame.px(12.0);
    let pad = frame.px(22.0);
    let axis_h = frame.px(SMALL) + frame.px(14.0);
    let grid_x = area.left() + gutter;
    let cell_w = (area.right() - grid_x - gap) / 2.0;
    let inner = cell_w - pad * 2.0;

    let row_h = |row: usize| {
        QUADRANTS[row * 2..row * 2 + 2]
            .iter()
            .map(|q| quadrant_height(frame, q, inner) + pad * 2.0)
            .fold(frame.px(MIN_CELL), f32::max)
    };
    let rows = [row_h(0), row_h(1)];
    let total = axis_h + rows[0] + gap + rows[1];
    let top = centered_top(area, total);
    let grid_top = top + axis_h;

    let axis = Style::new(SMALL * 0.8, frame.theme.text_tertiary).mono();
    let low = kicker("Low effort");
    let high = kicker("High effort");
    frame.text(Part::Notes, &low, grid_x, top, cell_w, &axis);
    let high_w = frame.measure_width(&high, &axis);
    frame.text(Part::Notes, &high, area.right() - high_w, top, high_w + 1.0, &axis);
    vertical_label(frame, "High Impact", area.left(), grid_top, rows[0], &axis);
    vertical_label(frame, "Low Impact", area.left(), grid_top + rows[0] + gap, rows[1], &axis);

    let mut detail = 0;
    for (i, quadrant) in QUADRANTS.iter().enumerate() {
        let (row, col) = (i / 2, i % 2);
        let y = grid_top + if row == 0 { 0.0 } else { rows[0] + gap };
        let x = grid_x + col as f32 * (cell_w + gap);
        let rect = Rect::from_min_size(Pos2::new(x, y), vec2(cell_w, rows[row]));
        let color = hex(quadrant.color);
        let part = Part::Stage(i);
        frame.panel(
            part,
            rect,
            Theme::with_opacity(color, 0.05),
            Theme::with_opacity(color, 0.18),
        );

        let pose = frame.pose(part);
        let shift = vec2(frame.px(pose.dx), frame.px(pose.dy));
        let mut ty = rect.top() + pad;
        let dot = frame.px(4.0);
        frame.ui.painter().circle_filled(
            Pos2::new(rect.left() + pad + dot, ty + frame.px(14.0)) + shift,
            dot,
            frame.fade(color, pose),
        );
        let label_x = rect.left() + pad + frame.px(18.0);
        let label_w = frame.measure_width(quadrant.label, &title(frame));
        let heading = frame.text(part, quadrant.label, label_x, ty, inner, &title(frame));
        let sub_x = label_x + label_w + frame.px(12.0);
        frame.text(
            part,
            quadrant.sublabel,
            sub_x,
            ty + frame.px(8.0),
            (rect.right() - pad - sub_x).max(0.0),
            &caption(frame),
        );
        ty += heading + frame.px(16.0);

        for item in quadrant.items {
            ty += frame.text(Part::Detail(detail), item, label_x, ty, rect.right() - pad - label_x, &body(frame))
                + frame.px(8.0);
            detail += 1;
        }
    }
}

fn quadrant_height(frame: &SlideFrame, quadrant: &Quadrant, inner: f32) -> f32 {
    let list_w = inner - frame.px(18.0);
    let items: f32 = quadrant
        .items
        .iter()
        .map(|item| frame.measure(item, list_w, &body(frame)) + frame.px(8.0))
        .sum();
    frame.measure(quadrant.label, inner, &title(frame)) + frame.px(16.0) + items
}

/// Label running bottom to top along the left edge of a row.
fn vertical_label(frame: &SlideFrame, label: &str, x: f32, top: f32, height: f32, style: &Style) {
    let color = frame.fade(style.color, Pose::REST);
    let galley = text::layout(
        frame.ui,
        &kicker(label),
        style.font(frame.scale),
        color,
        f32::INFINITY,
        text::Align::Left,
    );
    let size = galley.rect.size();
    // Rotated a quarter turn back, the galley's top-left becomes its bottom-left.
    let pos = Pos2::new(x + frame.px(8.0), top + (height + size.x) / 2.0);
    frame.ui.painter().add(
        egui::epaint::TextShape::new(pos, galley, color).with_angle(-FRAC_PI_2),
    );
}

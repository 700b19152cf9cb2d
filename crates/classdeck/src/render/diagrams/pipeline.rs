use eframe::egui::{Color32, Pos2, Rect, Stroke, vec2};

use crate::deck::diagram::{ACKU_PHASES, Phase};
use crate::motion::Part;
use crate::render::SlideFrame;
use crate::render::layouts::centered_top;
use crate::render::text::Style;
use crate::theme::Theme;

use super::{BODY, SMALL, bullets, bullets_height, caption, column, columns, hairline, hex};

/// Four phase cards under a connector line that draws itself left to right,
/// with arrows between the cards.
pub fn paint(frame: &SlideFrame, area: Rect) {
    let area = column(frame, area, 1500.0);
    let gap = frame.px(14.0);
    let pad = frame.px(20.0);
    let line_gap = frame.px(36.0);
    let cells = columns(area, ACKU_PHASES.len(), gap);
    let inner = cells[0].width() - pad * 2.0;

    let card_h = ACKU_PHASES
        .iter()
        .map(|phase| phase_height(frame, phase, inner))
        .fold(0.0_f32, f32::max)
        + pad * 2.0;
    let top = centered_top(area, line_gap + card_h);
    connector_line(frame, area, top);

    let card_top = top + line_gap;
    for (i, (phase, cell)) in ACKU_PHASES.iter().zip(&cells).enumerate() {
        let part = Part::Stage(i);
        let color = hex(phase.color);
        let rect = Rect::from_min_size(Pos2::new(cell.left(), card_top), vec2(cell.width(), card_h));
        frame.panel(
            part,
            rect,
            Theme::with_opacity(color, 0.05),
            Theme::with_opacity(color, 0.18),
        );

        let x = rect.left() + pad;
        let mut y = rect.top() + pad;
        let number = format!("{:02}", i + 1);
        let number_w = frame.measure_width(&number, &caption(frame)) + frame.px(10.0);
        frame.text(part, &number, x, y + frame.px(3.0), number_w, &caption(frame));
        y += frame.text(part, phase.name, x + number_w, y, inner - number_w, &name_style(color))
            + frame.px(6.0);
        y += frame.text(part, phase.timeline, x, y, inner, &caption(frame)) + frame.px(14.0);
        y = bullets(frame, phase.items, |_| part, x, y, inner, &item_style(frame), color, 7.0);

        // Outputs sit on the card's floor, under a hairline.
        let outputs_h = frame.measure(phase.outputs, inner, &output_style(color));
        let outputs_y = (rect.bottom() - pad - outputs_h).max(y + frame.px(24.0));
        hairline(
            frame,
            part,
            x,
            rect.right() - pad,
            outputs_y - frame.px(12.0),
            Theme::with_opacity(frame.theme.text_primary, 0.06),
        );
        frame.text(part, phase.outputs, x, outputs_y, inner, &output_style(color));

        if i + 1 < ACKU_PHASES.len() {
            let arrow = Style::new(SMALL * 1.2, frame.theme.text_tertiary).mono().centered();
            frame.text(
                Part::Connector(i),
                "\u{2192}",
                rect.right(),
                rect.top() + frame.px(20.0),
                gap,
                &arrow,
            );
        }
    }
}

fn name_style(color: Color32) -> Style {
    Style::new(SMALL * 1.25, color).mono()
}

fn item_style(frame: &SlideFrame) -> Style {
    Style::new(BODY * 0.9, frame.theme.text_secondary)
}

fn output_style(color: Color32) -> Style {
    Style::new(SMALL, Theme::with_opacity(color, 0.7)).mono()
}

fn phase_height(frame: &SlideFrame, phase: &Phase, inner: f32) -> f32 {
    let color = hex(phase.color);
    frame.measure(phase.name, inner, &name_style(color))
        + frame.px(6.0)
        + frame.measure(phase.timeline, inner, &caption(frame))
        + frame.px(14.0)
        + bullets_height(frame, phase.items, inner, &item_style(frame), 7.0)
        + frame.px(36.0)
        + frame.measure(phase.outputs, inner, &output_style(color))
}

/// Line from 8% to 92% of the width, colored per phase, drawn up to the
/// `Line` pose's scale.
fn connector_line(frame: &SlideFrame, area: Rect, y: f32) {
    let pose = frame.pose(Part::Line);
    let start = area.left() + area.width() * 0.08;
    let span = area.width() * 0.84;
    let drawn = span * pose.scale.clamp(0.0, 1.0);
    let piece = span / ACKU_PHASES.len() as f32;
    let stroke_w = frame.px(1.5);
    for (i, phase) in ACKU_PHASES.iter().enumerate() {
        let from = i as f32 * piece;
        if from >= drawn {
            break;
        }
        let to = ((i + 1) as f32 * piece).min(drawn);
        let alpha = 0.3 - 0.05 * i as f32;
        let color = frame.fade(Theme::with_opacity(hex(phase.color), alpha), pose);
        frame.ui.painter().line_segment(
            [Pos2::new(start + from, y), Pos2::new(start + to, y)],
            Stroke::new(stroke_w, color),
        );
    }
}

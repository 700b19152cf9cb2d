use eframe::egui::{Color32, Pos2, Rect, vec2};

use crate::deck::diagram::{TRUST_DENOMINATOR, TRUST_DENOMINATOR_NOTE, TRUST_FACTORS};
use crate::motion::Part;
use crate::render::SlideFrame;
use crate::render::layouts::centered_top;
use crate::render::text::Style;
use crate::theme::Theme;

use super::{BODY, SMALL, body, caption, column, columns, hairline, hex};

const RED: &str = "#f87171";

/// A chip: one term of the formula.
struct Chip<'a> {
    part: Part,
    label: &'a str,
    color: Color32,
    border: Color32,
}

/// The trust formula as chips over its denominator, then one card per
/// factor.
pub fn paint(frame: &SlideFrame, area: Rect) {
    let area = column(frame, area, 1400.0);
    let chip_style = |color| Style::new(BODY * 1.05, color).mono();
    let chip_pad = vec2(frame.px(22.0), frame.px(12.0));
    let chip_h = frame.measure("Trust", f32::INFINITY, &chip_style(Color32::WHITE)) + chip_pad.y * 2.0;
    let op_w = frame.px(44.0);
    let gap = frame.px(18.0);
    let card_pad = frame.px(20.0);

    let mut chips = vec![Chip {
        part: Part::Stage(0),
        label: "Trust",
        color: frame.theme.text_primary,
        border: Theme::with_opacity(frame.theme.accent, 0.6),
    }];
    for (i, factor) in TRUST_FACTORS.iter().enumerate() {
        let color = hex(factor.color);
        chips.push(Chip {
            part: Part::Stage(i + 1),
            label: factor.name,
            color,
            border: Theme::with_opacity(color, 0.3),
        });
    }
    let widths: Vec<f32> = chips
        .iter()
        .map(|chip| frame.measure_width(chip.label, &chip_style(chip.color)) + chip_pad.x * 2.0)
        .collect();
    let row_w = widths.iter().sum::<f32>() + op_w * (chips.len() as f32 - 1.0);

    let cells = columns(area, TRUST_FACTORS.len(), gap);
    let inner = cells[0].width() - card_pad * 2.0;
    let card_h = TRUST_FACTORS
        .iter()
        .map(|factor| {
            frame.measure(factor.name, inner, &chip_style(Color32::WHITE))
                + frame.px(10.0)
                + frame.measure(factor.description, inner, &body(frame))
                + frame.px(12.0)
                + frame.measure(factor.example, inner, &example_style(frame))
        })
        .fold(0.0_f32, f32::max)
        + card_pad * 2.0;
    let note_h = frame.measure(TRUST_DENOMINATOR_NOTE, area.width(), &note_style(frame));
    let total = chip_h * 2.0 + frame.px(36.0) + frame.px(28.0) + note_h + frame.px(36.0) + card_h;
    let top = centered_top(area, total);

    // Numerator row.
    let mut x = area.center().x - row_w / 2.0;
    let mut factors_span = (f32::MAX, f32::MIN);
    for (i, (chip, w)) in chips.iter().zip(&widths).enumerate() {
        if i > 0 {
            let op = if i == 1 { "=" } else { "+" };
            let op_style = Style::new(BODY * 1.3, frame.theme.text_tertiary).mono().centered();
            frame.text(Part::Connector(i - 1), op, x, top + chip_pad.y, op_w, &op_style);
            x += op_w;
        }
        let rect = Rect::from_min_size(Pos2::new(x, top), vec2(*w, chip_h));
        draw_chip(frame, chip, rect, chip_pad.y, &chip_style(chip.color));
        if i > 0 {
            factors_span = (factors_span.0.min(rect.left()), factors_span.1.max(rect.right()));
        }
        x += w;
    }

    // Fraction bar, then the denominator centered under the factors.
    let bar_y = top + chip_h + frame.px(18.0);
    let red = hex(RED);
    let denominator = Part::Stage(chips.len());
    hairline(
        frame,
        denominator,
        factors_span.0,
        factors_span.1,
        bar_y,
        Theme::with_opacity(frame.theme.text_primary, 0.3),
    );
    let denom_w = frame.measure_width(TRUST_DENOMINATOR, &chip_style(red)) + chip_pad.x * 2.0;
    let denom_x = (factors_span.0 + factors_span.1) / 2.0 - denom_w / 2.0;
    let denom_y = bar_y + frame.px(18.0);
    let denom = Chip {
        part: denominator,
        label: TRUST_DENOMINATOR,
        color: red,
        border: Theme::with_opacity(red, 0.4),
    };
    draw_chip(
        frame,
        &denom,
        Rect::from_min_size(Pos2::new(denom_x, denom_y), vec2(denom_w, chip_h)),
        chip_pad.y,
        &chip_style(red),
    );
    let aside_x = denom_x + denom_w + frame.px(14.0);
    frame.text(
        denominator,
        "(the denominator)",
        aside_x,
        denom_y + chip_pad.y,
        (area.right() - aside_x).max(0.0),
        &caption(frame),
    );

    let note_y = denom_y + chip_h + frame.px(28.0);
    frame.text(Part::Detail(0), TRUST_DENOMINATOR_NOTE, area.left(), note_y, area.width(), &note_style(frame));

    let card_top = note_y + note_h + frame.px(36.0);
    for (i, (factor, cell)) in TRUST_FACTORS.iter().zip(&cells).enumerate() {
        let part = Part::Detail(i + 1);
        let color = hex(factor.color);
        let rect = Rect::from_min_size(Pos2::new(cell.left(), card_top), vec2(cell.width(), card_h));
        frame.card(part, rect, Theme::with_opacity(color, 0.18));
        let x = rect.left() + card_pad;
        let mut y = rect.top() + card_pad;
        y += frame.text(part, factor.name, x, y, inner, &chip_style(color)) + frame.px(10.0);
        y += frame.text(part, factor.description, x, y, inner, &body(frame)) + frame.px(12.0);
        frame.text(part, factor.example, x, y, inner, &example_style(frame));
    }
}

fn draw_chip(frame: &SlideFrame, chip: &Chip, rect: Rect, pad_y: f32, style: &Style) {
    frame.panel(chip.part, rect, frame.theme.glass, chip.border);
    let style = style.clone().centered();
    frame.text(chip.part, chip.label, rect.left(), rect.top() + pad_y, rect.width(), &style);
}

fn note_style(frame: &SlideFrame) -> Style {
    Style::new(BODY, frame.theme.text_secondary).centered()
}

fn example_style(frame: &SlideFrame) -> Style {
    Style::new(SMALL, frame.theme.text_tertiary)
}

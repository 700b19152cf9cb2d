use eframe::egui::{Color32, Pos2, Rect, vec2};

use crate::deck::diagram::{USE_CASE_SCORE, USE_CASE_THRESHOLDS, USE_CASE_TIERS, UseCaseTier};
use crate::motion::Part;
use crate::render::SlideFrame;
use crate::render::layouts::centered_top;
use crate::render::text::Style;

use super::{BODY, SMALL, TITLE, bullets, bullets_height, caption, column, columns, hex};

/// Three tier cards of candidate use cases, with the scoring rule beneath.
pub fn paint(frame: &SlideFrame, area: Rect) {
    let area = column(frame, area, 1500.0);
    let gap = frame.px(16.0);
    let pad = frame.px(22.0);
    let cells = columns(area, USE_CASE_TIERS.len(), gap);
    let inner = cells[0].width() - pad * 2.0;
    let card_h = USE_CASE_TIERS
        .iter()
        .map(|tier| tier_height(frame, tier, inner))
        .fold(0.0_f32, f32::max)
        + pad * 2.0;
    let footer_pad = frame.px(16.0);
    let footer_h = frame.measure(USE_CASE_SCORE, area.width(), &score_style(frame))
        + frame.px(6.0)
        + frame.measure(USE_CASE_THRESHOLDS, area.width(), &caption(frame).centered())
        + footer_pad * 2.0;
    let top = centered_top(area, card_h + frame.px(24.0) + footer_h);

    let mut row = 0;
    for (i, (tier, cell)) in USE_CASE_TIERS.iter().zip(&cells).enumerate() {
        let part = Part::Stage(i);
        let color = hex(tier.color);
        let rect = Rect::from_min_size(Pos2::new(cell.left(), top), vec2(cell.width(), card_h));
        frame.card(part, rect, frame.theme.glass_border);

        let x = rect.left() + pad;
        let mut y = rect.top() + pad;
        let tier_style = Style::new(SMALL, color).mono();
        let tier_w = frame.measure_width(tier.tier, &tier_style) + frame.px(12.0);
        frame.text(part, tier.tier, x, y + frame.px(8.0), tier_w, &tier_style);
        y += frame.text(part, tier.label, x + tier_w, y, inner - tier_w, &label_style(frame)) + frame.px(4.0);
        y += frame.text(part, tier.sublabel, x, y, inner, &caption(frame)) + frame.px(18.0);

        let first = row;
        bullets(
            frame,
            tier.items,
            |k| Part::Detail(first + k),
            x,
            y,
            inner,
            &item_style(frame),
            color,
            10.0,
        );
        row += tier.items.len();
    }

    let footer = Rect::from_min_size(
        Pos2::new(area.left(), top + card_h + frame.px(24.0)),
        vec2(area.width(), footer_h),
    );
    frame.card(Part::Notes, footer, frame.theme.glass_border);
    let score_h = frame.text(
        Part::Notes,
        USE_CASE_SCORE,
        footer.left(),
        footer.top() + footer_pad,
        footer.width(),
        &score_style(frame),
    );
    frame.text(
        Part::Notes,
        USE_CASE_THRESHOLDS,
        footer.left(),
        footer.top() + footer_pad + score_h + frame.px(6.0),
        footer.width(),
        &caption(frame).centered(),
    );
}

fn label_style(frame: &SlideFrame) -> Style {
    Style::new(TITLE, frame.theme.text_primary)
}

fn item_style(frame: &SlideFrame) -> Style {
    Style::new(BODY * 0.9, frame.theme.text_secondary)
}

fn score_style(frame: &SlideFrame) -> Style {
    Style::new(BODY, frame.theme.text_primary).mono().centered()
}

fn tier_height(frame: &SlideFrame, tier: &UseCaseTier, inner: f32) -> f32 {
    let tier_w = frame.measure_width(tier.tier, &Style::new(SMALL, Color32::WHITE).mono()) + frame.px(12.0);
    frame.measure(tier.label, inner - tier_w, &label_style(frame))
        + frame.px(4.0)
        + frame.measure(tier.sublabel, inner, &caption(frame))
        + frame.px(18.0)
        + bullets_height(frame, tier.items, inner, &item_style(frame), 10.0)
}

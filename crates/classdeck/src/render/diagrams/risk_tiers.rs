use eframe::egui::{Color32, Pos2, Rect, vec2};

use crate::deck::diagram::{RISK_TIERS, RISK_TIERS_PRINCIPLE, RiskTier};
use crate::motion::Part;
use crate::render::SlideFrame;
use crate::render::layouts::centered_top;
use crate::render::text::{Style, kicker};
use crate::theme::Theme;

use super::{BODY, SMALL, body, caption, column, hex};

/// Three approval tiers as rows: what qualifies on the left, who signs off
/// and how fast on the right.
pub fn paint(frame: &SlideFrame, area: Rect) {
    let area = column(frame, area, 1500.0);
    let pad = frame.px(20.0);
    let gap = frame.px(14.0);
    let badge = frame.px(48.0);
    let inner = area.width() - pad * 2.0;
    let left_w = inner * 0.45 - badge - frame.px(18.0);
    let right_x = pad + inner * 0.45 + frame.px(24.0);
    let field_w = (area.width() - pad - right_x) / 3.0;

    let heights: Vec<f32> = RISK_TIERS
        .iter()
        .map(|tier| row_height(frame, tier, left_w, field_w).max(badge) + pad * 2.0)
        .collect();
    let principle_h = frame.measure(RISK_TIERS_PRINCIPLE, area.width(), &principle_style(frame));
    let total = heights.iter().sum::<f32>() + gap * (heights.len() as f32 - 1.0) + frame.px(28.0) + principle_h;
    let mut y = centered_top(area, total);

    for (i, (tier, h)) in RISK_TIERS.iter().zip(&heights).enumerate() {
        let part = Part::Stage(i);
        let color = hex(tier.color);
        let rect = Rect::from_min_size(Pos2::new(area.left(), y), vec2(area.width(), *h));
        frame.panel(
            part,
            rect,
            Theme::with_opacity(color, 0.08),
            Theme::with_opacity(color, 0.15),
        );

        let x = rect.left() + pad;
        let top = rect.top() + pad;
        level_badge(frame, part, tier.level, Rect::from_min_size(Pos2::new(x, top), vec2(badge, badge)), color);
        let text_x = x + badge + frame.px(18.0);
        let name_h = frame.text(part, tier.name, text_x, top, left_w, &name_style(color));
        frame.text(part, tier.description, text_x, top + name_h + frame.px(6.0), left_w, &body(frame));

        let fields = [
            ("Approval", tier.approval, value_style(frame)),
            ("Review", tier.review, value_style(frame)),
            ("Turnaround", tier.turnaround, Style::new(BODY * 0.9, color).mono()),
        ];
        for (k, (label, value, style)) in fields.iter().enumerate() {
            let fx = rect.left() + right_x + k as f32 * field_w;
            let label_h = frame.text(part, &kicker(label), fx, top, field_w - gap, &caption(frame));
            frame.text(part, value, fx, top + label_h + frame.px(6.0), field_w - gap, style);
        }
        y += h + gap;
    }

    frame.text(
        Part::Notes,
        RISK_TIERS_PRINCIPLE,
        area.left(),
        y - gap + frame.px(28.0),
        area.width(),
        &principle_style(frame),
    );
}

fn level_badge(frame: &SlideFrame, part: Part, level: u8, rect: Rect, color: Color32) {
    frame.panel(part, rect, Theme::with_opacity(color, 0.2), Color32::TRANSPARENT);
    let style = Style::new(BODY * 1.2, color).mono().centered();
    let text_h = frame.measure("0", rect.width(), &style);
    frame.text(
        part,
        &level.to_string(),
        rect.left(),
        rect.center().y - text_h / 2.0,
        rect.width(),
        &style,
    );
}

fn name_style(color: Color32) -> Style {
    Style::new(BODY * 1.15, color)
}

fn value_style(frame: &SlideFrame) -> Style {
    Style::new(BODY * 0.9, frame.theme.text_primary)
}

fn principle_style(frame: &SlideFrame) -> Style {
    Style::new(SMALL * 1.1, frame.theme.text_secondary).centered()
}

fn row_height(frame: &SlideFrame, tier: &RiskTier, left_w: f32, field_w: f32) -> f32 {
    let left = frame.measure(tier.name, left_w, &name_style(Color32::WHITE))
        + frame.px(6.0)
        + frame.measure(tier.description, left_w, &body(frame));
    let label_h = frame.measure("APPROVAL", field_w, &caption(frame)) + frame.px(6.0);
    let right = [tier.approval, tier.review, tier.turnaround]
        .iter()
        .map(|value| label_h + frame.measure(value, field_w - frame.px(14.0), &value_style(frame)))
        .fold(0.0_f32, f32::max);
    left.max(right)
}

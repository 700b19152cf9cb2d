use eframe::egui::{Color32, CursorIcon, Id, Pos2, Rect, Sense, vec2};

use crate::deck::diagram::{RISK_CATEGORIES, RISK_FRAMEWORK_HINT, RiskCategory};
use crate::motion::Part;
use crate::render::SlideFrame;
use crate::render::layouts::centered_top;
use crate::render::text::Style;
use crate::theme::Theme;

use super::{BODY, SMALL, bullets, bullets_height, caption, hairline, hex};

/// Units an expanded card spans; the others span one.
const EXPANDED_SPAN: f32 = 2.0;
const BORDER: f32 = 0x10 as f32 / 255.0;
const OPEN_BORDER: f32 = 0x30 as f32 / 255.0;

/// Five risk categories side by side. Clicking a card widens it to show its
/// prevention strategy; clicking it again folds it back.
pub fn paint(frame: &SlideFrame, area: Rect) {
    let gap = frame.px(12.0);
    let pad = frame.px(18.0);
    // A fresh key per entrance, so leaving the slide folds every card.
    let state = Id::new(("risk-framework", frame.animator.entrances()));
    let expanded = frame.ui.ctx().data(|d| d.get_temp::<usize>(state));

    let widths = card_widths(area.width(), gap, RISK_CATEGORIES.len(), expanded);
    let card_h = RISK_CATEGORIES
        .iter()
        .zip(&widths)
        .enumerate()
        .map(|(i, (category, w))| category_height(frame, category, w - pad * 2.0, expanded == Some(i)))
        .fold(0.0_f32, f32::max)
        + pad * 2.0;
    let hint_h = frame.measure(RISK_FRAMEWORK_HINT, area.width(), &hint_style(frame));
    let top = centered_top(area, card_h + frame.px(24.0) + hint_h);

    let mut x = area.left();
    let mut clicked = None;
    for (i, (category, w)) in RISK_CATEGORIES.iter().zip(&widths).enumerate() {
        let part = Part::Stage(i);
        let open = expanded == Some(i);
        let color = hex(category.color);
        let rect = Rect::from_min_size(Pos2::new(x, top), vec2(*w, card_h));
        let border = Theme::with_opacity(color, if open { OPEN_BORDER } else { BORDER });
        frame.panel(part, rect, frame.theme.glass, border);

        let response = frame
            .ui
            .interact(rect, state.with(i), Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand);
        if response.clicked() {
            clicked = Some(i);
        }

        let inner = w - pad * 2.0;
        let cx = rect.left() + pad;
        let mut y = rect.top() + pad;
        let number = format!("{:02}", i + 1);
        let number_w = frame.measure_width(&number, &caption(frame)) + frame.px(10.0);
        frame.text(part, &number, cx, y + frame.px(2.0), number_w, &caption(frame));
        y += frame.text(part, category.category, cx + number_w, y, inner - number_w, &name_style(color))
            + frame.px(14.0);
        y = bullets(frame, category.risks, |_| part, cx, y, inner, &risk_style(frame), color, 6.0);

        if open {
            y += frame.px(14.0);
            hairline(frame, part, cx, rect.right() - pad, y, Theme::with_opacity(color, 0.2));
            y += frame.px(14.0);
            frame.text(part, category.prevention, cx, y, inner, &prevention_style(color));
        }
        x += w + gap;
    }

    frame.text(
        Part::Notes,
        RISK_FRAMEWORK_HINT,
        area.left(),
        top + card_h + frame.px(24.0),
        area.width(),
        &hint_style(frame),
    );

    if let Some(i) = clicked {
        tracing::debug!(category = RISK_CATEGORIES[i].category, "risk category toggled");
        frame.ui.ctx().data_mut(|d| match toggle(expanded, i) {
            Some(open) => d.insert_temp(state, open),
            None => {
                d.remove::<usize>(state);
            }
        });
    }
}

/// The expanded card after clicking `clicked`.
fn toggle(expanded: Option<usize>, clicked: usize) -> Option<usize> {
    if expanded == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Card widths across `total`: one unit each, two for the expanded card.
fn card_widths(total: f32, gap: f32, count: usize, expanded: Option<usize>) -> Vec<f32> {
    let units = count as f32 + if expanded.is_some() { EXPANDED_SPAN - 1.0 } else { 0.0 };
    let unit = (total - gap * (count as f32 - 1.0)) / units;
    (0..count)
        .map(|i| if expanded == Some(i) { unit * EXPANDED_SPAN } else { unit })
        .collect()
}

fn name_style(color: Color32) -> Style {
    Style::new(SMALL * 1.1, color).mono()
}

fn risk_style(frame: &SlideFrame) -> Style {
    Style::new(BODY * 0.85, frame.theme.text_secondary)
}

fn prevention_style(color: Color32) -> Style {
    Style::new(SMALL, Theme::with_opacity(color, 0.7)).mono()
}

fn hint_style(frame: &SlideFrame) -> Style {
    Style::new(SMALL, frame.theme.text_tertiary).centered()
}

fn category_height(frame: &SlideFrame, category: &RiskCategory, inner: f32, open: bool) -> f32 {
    let number_w = frame.measure_width("00", &caption(frame)) + frame.px(10.0);
    let closed = frame.measure(category.category, inner - number_w, &name_style(Color32::WHITE))
        + frame.px(14.0)
        + bullets_height(frame, category.risks, inner, &risk_style(frame), 6.0);
    if open {
        closed + frame.px(28.0) + frame.measure(category.prevention, inner, &prevention_style(Color32::WHITE))
    } else {
        closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_toggles_one_card() {
        assert_eq!(toggle(None, 2), Some(2));
        assert_eq!(toggle(Some(2), 2), None);
        assert_eq!(toggle(Some(2), 4), Some(4));
    }

    #[test]
    fn test_expanded_card_takes_two_units() {
        let widths = card_widths(440.0, 10.0, 5, None);
        assert!(widths.iter().all(|w| (w - 80.0).abs() < 1e-3));

        let widths = card_widths(440.0, 10.0, 5, Some(1));
        let unit = 400.0 / 6.0;
        assert!((widths[0] - unit).abs() < 1e-3);
        assert!((widths[1] - unit * 2.0).abs() < 1e-3);
        let total: f32 = widths.iter().sum::<f32>() + 40.0;
        assert!((total - 440.0).abs() < 1e-3);
    }
}

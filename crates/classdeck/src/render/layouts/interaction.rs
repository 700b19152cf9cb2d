use eframe::egui::{Pos2, Rect, Stroke, StrokeKind, vec2};

use crate::deck::Slide;
use crate::motion::Part;
use crate::render::SlideFrame;
use crate::theme::Theme;
use crate::render::text::{self, Style};

use super::{centered_top, safe_area};

const BADGE: &str = "Your turn";

/// Audience exercise: a badge, the heading, the prompt in a highlighted card
/// and numbered steps underneath.
pub fn render(frame: &SlideFrame, slide: &Slide) {
    let theme = frame.theme;
    let area = safe_area(frame, 240.0, 100.0);
    let width = area.width();

    let heading = Style::new(theme.h2_size, theme.text_primary).centered();
    let prompt_style = Style::new(theme.body_size, theme.text_primary).centered();
    let step_style = Style::new(theme.body_size * 0.8, theme.text_secondary);
    let body_style = Style::new(theme.body_size * 0.75, theme.text_tertiary).centered();
    let badge_style = Style::new(theme.small_size, frame.accent).mono().centered();

    let pad = frame.px(36.0);
    let badge_text = text::kicker(BADGE);
    let badge_h = frame.measure(&badge_text, width, &badge_style) + frame.px(20.0);
    let heading_h = frame.measure(slide.label(), width, &heading);
    let prompt_h = slide
        .interaction
        .as_deref()
        .map_or(0.0, |p| frame.measure(p, width - pad * 2.0, &prompt_style) + pad * 2.0);
    let steps_w = width * 0.8;
    let step_hs: Vec<f32> = slide
        .items
        .iter()
        .map(|item| frame.measure(item, steps_w - frame.px(64.0), &step_style))
        .collect();
    let step_gap = frame.px(20.0);
    let steps_h: f32 = step_hs.iter().map(|h| h + step_gap).sum();
    let body_h = slide
        .content
        .as_deref()
        .map_or(0.0, |c| frame.measure(c, width, &body_style) + frame.px(32.0));
    let total = badge_h + frame.px(32.0) + heading_h + frame.px(48.0) + prompt_h + frame.px(48.0)
        + steps_h
        + body_h;

    let mut y = centered_top(area, total);
    badge(frame, &badge_text, &badge_style, area.center().x, y, badge_h);
    y += badge_h + frame.px(32.0);

    y += frame.text(Part::Heading, slide.label(), area.left(), y, width, &heading);
    y += frame.px(48.0);

    if let Some(prompt) = slide.interaction.as_deref() {
        let rect = Rect::from_min_size(Pos2::new(area.left(), y), vec2(width, prompt_h));
        let card = frame.card(Part::Prompt, rect, frame.accent);
        let pose = frame.pose(Part::Prompt);
        // Accent edge along the left of the prompt card.
        let edge = Rect::from_min_size(card.min, vec2(frame.px(6.0), card.height()));
        frame
            .ui
            .painter()
            .rect_filled(edge, frame.px(3.0), frame.fade(frame.accent, pose));
        frame.text(
            Part::Prompt,
            prompt,
            rect.left() + pad,
            rect.top() + pad,
            width - pad * 2.0,
            &prompt_style,
        );
        y += prompt_h + frame.px(48.0);
    }

    let steps_x = area.center().x - steps_w / 2.0;
    let number_style = Style::new(theme.body_size * 0.8, frame.accent).mono();
    for (i, (item, h)) in slide.items.iter().zip(&step_hs).enumerate() {
        let part = Part::Item(i);
        frame.text(part, &format!("{}.", i + 1), steps_x, y, frame.px(56.0), &number_style);
        frame.text(
            part,
            item,
            steps_x + frame.px(64.0),
            y,
            steps_w - frame.px(64.0),
            &step_style,
        );
        y += h + step_gap;
    }

    if let Some(content) = slide.content.as_deref() {
        frame.text(Part::Body, content, area.left(), y + frame.px(12.0), width, &body_style);
    }
}

/// Pill around the badge label, popping in on the kicker's pose.
fn badge(frame: &SlideFrame, label: &str, style: &Style, center_x: f32, top: f32, height: f32) {
    let pose = frame.pose(Part::Kicker);
    let width = frame.px(260.0);
    let pill = Rect::from_min_size(Pos2::new(center_x - width / 2.0, top), vec2(width, height));
    let shown = Rect::from_center_size(pill.center(), pill.size() * pose.scale)
        .translate(vec2(frame.px(pose.dx), frame.px(pose.dy)));
    let radius = shown.height() / 2.0;
    frame.ui.painter().rect_filled(
        shown,
        radius,
        frame.fade(Theme::with_opacity(frame.accent, 0.15), pose),
    );
    frame.ui.painter().rect_stroke(
        shown,
        radius,
        Stroke::new(frame.px(1.5), frame.fade(frame.accent, pose)),
        StrokeKind::Inside,
    );
    frame.text(
        Part::Kicker,
        label,
        pill.left(),
        pill.top() + frame.px(10.0),
        pill.width(),
        style,
    );
}

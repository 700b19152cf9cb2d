use crate::deck::Slide;
use crate::motion::Part;
use crate::render::SlideFrame;
use crate::render::background::radial_glow;
use crate::render::text::Style;
use crate::theme::Theme;

use super::{Column, safe_area};

pub fn render(frame: &SlideFrame, slide: &Slide) {
    let theme = frame.theme;
    let area = safe_area(frame, 400.0, 140.0);

    let glow = Theme::with_opacity(frame.accent, 0.05 * frame.opacity);
    radial_glow(
        frame.ui.painter(),
        frame.rect.center(),
        frame.px(400.0),
        glow,
    );

    let mut column = Column::new();
    column.push(
        Part::Heading,
        slide.label(),
        Style::new(theme.h1_size * 0.85, theme.text_primary).centered(),
        36.0,
    );
    column.push_opt(
        Part::Body,
        slide.content.as_deref(),
        Style::new(theme.body_size, theme.text_secondary).centered(),
        36.0,
    );
    column.push_opt(
        Part::Subtitle,
        slide.subtitle.as_deref(),
        Style::new(theme.small_size, frame.accent).mono().centered(),
        0.0,
    );

    let rule_gap = frame.px(44.0);
    let height = column.height(frame, area.width()) + rule_gap;
    let top = super::centered_top(area, height);
    frame.rule(Part::Rule, area.center().x, top, 64.0);
    column.draw(frame, area.left(), top + rule_gap, area.width());
}

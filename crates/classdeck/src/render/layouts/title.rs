use crate::deck::Slide;
use crate::motion::Part;
use crate::render::SlideFrame;
use crate::render::text::{self, Style};

use super::{Column, safe_area};

/// Centered opener: accent rule, title, uppercase subtitle, lede.
pub fn render(frame: &SlideFrame, slide: &Slide) {
    let theme = frame.theme;
    let area = safe_area(frame, 360.0, 120.0);

    let mut column = Column::new();
    column.push(
        Part::Heading,
        slide.label(),
        Style::new(theme.h1_size, theme.text_primary).centered(),
        36.0,
    );
    if let Some(subtitle) = slide.subtitle.as_deref() {
        column.push(
            Part::Subtitle,
            text::kicker(subtitle),
            Style::new(theme.small_size, frame.accent).mono().centered(),
            40.0,
        );
    }
    column.push_opt(
        Part::Body,
        slide.content.as_deref(),
        Style::new(theme.body_size * 0.85, theme.text_secondary).centered(),
        0.0,
    );

    let rule_gap = frame.px(48.0);
    let height = column.height(frame, area.width()) + rule_gap;
    let top = super::centered_top(area, height);
    frame.rule(Part::Rule, area.center().x, top, 120.0);
    column.draw(frame, area.left(), top + rule_gap, area.width());
}

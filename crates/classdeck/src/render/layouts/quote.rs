use eframe::egui::{Color32, Rect};

use crate::deck::Slide;
use crate::motion::Part;
use crate::render::SlideFrame;
use crate::render::text::{self, Style};
use crate::theme::Theme;

use super::{Column, safe_area};

/// Full-bleed quote: centered, with the atmosphere image (if any) darkened
/// behind it.
pub fn render(frame: &SlideFrame, slide: &Slide) {
    let theme = frame.theme;

    if let Some(path) = slide.atmosphere_image.as_deref() {
        frame.image(Part::Image, path, frame.rect);
        let pose = frame.pose(Part::Image);
        let shade = Theme::with_opacity(
            Color32::from_black_alpha(200),
            frame.opacity * pose.opacity,
        );
        frame.ui.painter().rect_filled(frame.rect, 0.0, shade);
    }

    let area = safe_area(frame, 280.0, 120.0);
    let mut column = Column::new();
    if let Some(title) = slide.title.as_deref() {
        column.push(
            Part::Heading,
            text::kicker(title),
            Style::new(theme.small_size * 0.85, frame.accent).mono().centered(),
            48.0,
        );
    }
    column.push(
        Part::Quote,
        text::quoted(slide.quote.as_deref().unwrap_or_default()),
        Style::new(theme.h3_size * 1.1, theme.text_primary).centered(),
        44.0,
    );
    if let Some(attribution) = slide.attribution.as_deref() {
        column.push(
            Part::Attribution,
            text::attribution(attribution),
            Style::new(theme.small_size, theme.text_secondary).centered(),
            28.0,
        );
    }
    column.push_opt(
        Part::Body,
        slide.content.as_deref(),
        Style::new(theme.body_size * 0.75, theme.text_secondary).centered(),
        0.0,
    );
    column.draw_centered(frame, area);
}

/// Accent bar running the height of a quote block.
pub(crate) fn quote_bar(frame: &SlideFrame, part: Part, block: Rect) {
    let pose = frame.pose(part);
    let bar = Rect::from_min_size(
        block.left_top() + eframe::egui::vec2(-frame.px(28.0), 0.0),
        eframe::egui::vec2(frame.px(4.0), block.height()),
    )
    .translate(eframe::egui::vec2(frame.px(pose.dx), frame.px(pose.dy)));
    frame
        .ui
        .painter()
        .rect_filled(bar, frame.px(2.0), frame.fade(frame.accent, pose));
}

use eframe::egui::{Align2, FontId, Pos2, Rect, Stroke, vec2};

use crate::deck::Slide;
use crate::motion::Part;
use crate::render::SlideFrame;
use crate::render::text::{self, Style};
use crate::theme::Theme;

use super::quote::quote_bar;
use super::{Column, safe_area};

/// Narrative quote. With an atmosphere image the text takes the left half
/// and the image a framed panel on the right.
pub fn render(frame: &SlideFrame, slide: &Slide) {
    let theme = frame.theme;
    let area = safe_area(frame, 220.0, 120.0);

    let (text_area, panel) = match slide.atmosphere_image.as_deref() {
        Some(path) => {
            let gap = frame.px(64.0);
            let half = (area.width() - gap) / 2.0;
            let left = Rect::from_min_size(area.min, vec2(half, area.height()));
            let right = Rect::from_min_size(
                Pos2::new(area.left() + half + gap, area.top()),
                vec2(half, area.height()),
            )
            .shrink2(vec2(0.0, frame.px(60.0)));
            (left, Some((path, right)))
        }
        None => (area.shrink2(vec2(frame.px(80.0), 0.0)), None),
    };

    if let Some((path, panel)) = panel {
        frame.image(Part::Image, path, panel);
        let pose = frame.pose(Part::Image);
        frame.ui.painter().rect_stroke(
            panel,
            frame.px(20.0),
            Stroke::new(frame.px(1.0), frame.fade(theme.glass_border, pose)),
            eframe::egui::StrokeKind::Inside,
        );
    }

    let mut column = Column::new();
    if let Some(title) = slide.title.as_deref() {
        column.push(
            Part::Heading,
            text::kicker(title),
            Style::new(theme.small_size * 0.85, frame.accent).mono(),
            36.0,
        );
    }
    let quote = slide.quote.as_deref().unwrap_or_default();
    let quote_style = Style::new(theme.h3_size, theme.text_primary);
    column.push(Part::Quote, quote, quote_style.clone(), 36.0);
    if let Some(attribution) = slide.attribution.as_deref() {
        column.push(
            Part::Attribution,
            text::attribution(attribution),
            Style::new(theme.small_size, theme.text_secondary).mono(),
            28.0,
        );
    }
    column.push_opt(
        Part::Body,
        slide.content.as_deref(),
        Style::new(theme.body_size * 0.75, theme.text_secondary),
        0.0,
    );

    let height = column.height(frame, text_area.width());
    let top = super::centered_top(text_area, height);

    // Oversized opening mark behind the block.
    let mark_pose = frame.pose(Part::Quote);
    frame.ui.painter().text(
        Pos2::new(text_area.left() - frame.px(40.0), top - frame.px(60.0)),
        Align2::LEFT_TOP,
        "\u{201C}",
        FontId::proportional(frame.px(200.0)),
        Theme::with_opacity(frame.accent, frame.opacity * mark_pose.opacity * 0.5),
    );

    column.draw(frame, text_area.left(), top, text_area.width());

    let quote_top = if slide.title.is_some() {
        let style = Style::new(theme.small_size * 0.85, frame.accent).mono();
        top + frame.measure(&text::kicker(slide.label()), text_area.width(), &style)
            + frame.px(36.0)
    } else {
        top
    };
    let quote_h = frame.measure(quote, text_area.width(), &quote_style);
    quote_bar(
        frame,
        Part::Quote,
        Rect::from_min_size(
            Pos2::new(text_area.left(), quote_top),
            vec2(0.0, quote_h),
        ),
    );
}

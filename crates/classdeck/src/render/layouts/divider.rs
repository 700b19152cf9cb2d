use eframe::egui::{Align2, FontId, Pos2};

use crate::deck::Slide;
use crate::motion::Part;
use crate::render::SlideFrame;
use crate::render::text::{self, Style};
use crate::theme::Theme;

use super::{Column, safe_area};

/// Module opener: a huge faint module number in the corner, module label,
/// accent bar, title and lede.
pub fn render(frame: &SlideFrame, slide: &Slide) {
    let theme = frame.theme;
    let area = safe_area(frame, 240.0, 160.0);

    if let Some(number) = slide.module {
        let pose = frame.pose(Part::Kicker);
        let size = frame.px(500.0) * pose.scale;
        let color = Theme::with_opacity(frame.accent, frame.opacity * pose.opacity * 0.08);
        let anchor = Pos2::new(
            frame.rect.right() + frame.px(pose.dx) - frame.px(40.0),
            frame.rect.bottom() + frame.px(pose.dy) + frame.px(60.0),
        );
        frame.ui.painter().text(
            anchor,
            Align2::RIGHT_BOTTOM,
            number.to_string(),
            FontId::monospace(size),
            color,
        );
    }

    let label = match (slide.module, slide.subtitle.as_deref()) {
        (Some(n), Some(sub)) if !sub.eq_ignore_ascii_case(&format!("Module {n}")) => {
            format!("{}  |  {sub}", text::kicker(&format!("Module {n}")))
        }
        (Some(n), _) => text::kicker(&format!("Module {n}")),
        (None, sub) => sub.map(text::kicker).unwrap_or_default(),
    };

    let width = area.width() * 0.6;
    let mut head = Column::new();
    head.push(
        Part::Subtitle,
        label,
        Style::new(theme.small_size * 0.8, frame.accent).mono(),
        24.0,
    );
    let mut body = Column::new();
    body.push(
        Part::Heading,
        slide.label(),
        Style::new(theme.h1_size, theme.text_primary),
        32.0,
    );
    body.push_opt(
        Part::Body,
        slide.content.as_deref(),
        Style::new(theme.body_size * 0.85, theme.text_secondary),
        0.0,
    );

    let bar_gap = frame.px(36.0);
    let height = head.height(frame, width) + frame.px(24.0) + bar_gap + body.height(frame, width);
    let top = super::centered_top(area, height);
    let y = head.draw(frame, area.left(), top, width);
    // The bar grows from its left end.
    let bar_w = 80.0;
    let pose = frame.pose(Part::Rule);
    frame.rule(
        Part::Rule,
        area.left() + frame.px(bar_w) * pose.scale / 2.0,
        y,
        bar_w,
    );
    body.draw(frame, area.left(), y + bar_gap, width);
}

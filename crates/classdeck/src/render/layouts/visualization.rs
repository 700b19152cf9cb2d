use eframe::egui::{Pos2, Rect, vec2};

use crate::deck::Slide;
use crate::motion::Part;
use crate::render::SlideFrame;
use crate::render::diagrams;
use crate::render::text::{Style, kicker};

use super::{Column, safe_area};

/// Diagram slides. A known `visualization` key draws its built-in diagram
/// below the heading; an unknown key is shown on a single panel.
pub fn render(frame: &SlideFrame, slide: &Slide) {
    let theme = frame.theme;
    let area = safe_area(frame, 160.0, 100.0);

    let mut head = Column::new();
    head.push(
        Part::Heading,
        slide.label(),
        Style::new(theme.h2_size, theme.text_primary).centered(),
        16.0,
    );
    head.push_opt(
        Part::Subtitle,
        slide.subtitle.as_deref(),
        Style::new(theme.body_size * 0.8, theme.text_secondary).centered(),
        0.0,
    );
    let top = head.draw(frame, area.left(), area.top(), area.width()) + frame.px(48.0);
    let stage_area = Rect::from_min_max(Pos2::new(area.left(), top), area.max);

    match slide.diagram() {
        Some(diagram) => diagrams::paint(frame, diagram, stage_area),
        None => placeholder(frame, slide, stage_area),
    }
}

fn placeholder(frame: &SlideFrame, slide: &Slide, area: Rect) {
    let Some(id) = slide.visualization.as_deref() else {
        return;
    };
    let style = Style::new(frame.theme.small_size, frame.theme.text_tertiary)
        .mono()
        .centered();
    let label = kicker(&id.replace('-', " "));
    let panel = Rect::from_center_size(
        Pos2::new(area.center().x, area.top() + frame.px(140.0)),
        vec2(area.width() * 0.6, frame.px(280.0)),
    );
    frame.card(Part::Stage(0), panel, frame.theme.glass_border);
    let h = frame.measure(&label, panel.width(), &style);
    frame.text(
        Part::Stage(0),
        &label,
        panel.left(),
        panel.center().y - h / 2.0,
        panel.width(),
        &style,
    );
}

use eframe::egui::{Pos2, Rect, vec2};

use crate::deck::Slide;
use crate::motion::Part;
use crate::render::SlideFrame;
use crate::render::text::{self, Style};

use super::{Column, safe_area};

pub fn render(frame: &SlideFrame, slide: &Slide) {
    let theme = frame.theme;
    let area = safe_area(frame, 320.0, 110.0);

    let mut column = Column::new();
    if let Some(subtitle) = slide.subtitle.as_deref() {
        column.push(
            Part::Subtitle,
            text::kicker(subtitle),
            Style::new(theme.small_size * 0.85, frame.accent).mono().centered(),
            32.0,
        );
    }
    column.push(
        Part::Heading,
        slide.label(),
        Style::new(theme.h2_size, theme.text_primary).centered(),
        40.0,
    );
    column.push_opt(
        Part::Body,
        slide.content.as_deref(),
        Style::new(theme.body_size, theme.text_secondary).centered(),
        0.0,
    );

    let item_style = Style::new(theme.body_size * 0.75, theme.text_secondary);
    let list_w = area.width() * 0.8;
    let pad = frame.px(20.0);
    let item_heights: Vec<f32> = slide
        .items
        .iter()
        .map(|item| frame.measure(item, list_w - pad * 2.0, &item_style) + pad * 2.0)
        .collect();
    let gap = frame.px(12.0);
    let items_h: f32 = item_heights.iter().map(|h| h + gap).sum();
    let list_gap = if slide.items.is_empty() { 0.0 } else { frame.px(40.0) };

    let height = column.height(frame, area.width()) + list_gap + items_h;
    let top = super::centered_top(area, height);
    let mut y = column.draw(frame, area.left(), top, area.width()) + list_gap;

    let left = area.center().x - list_w / 2.0;
    for (i, (item, h)) in slide.items.iter().zip(&item_heights).enumerate() {
        let rect = Rect::from_min_size(Pos2::new(left, y), vec2(list_w, *h));
        frame.card(Part::Item(i), rect, frame.theme.glass_border);
        frame.text(
            Part::Item(i),
            item,
            rect.left() + pad,
            rect.top() + pad,
            list_w - pad * 2.0,
            &item_style,
        );
        y += h + gap;
    }
}

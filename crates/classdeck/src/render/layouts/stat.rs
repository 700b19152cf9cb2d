use eframe::egui::{Pos2, Rect, vec2};

use crate::deck::Slide;
use crate::motion::Part;
use crate::render::SlideFrame;
use crate::render::text::Style;

use super::{Column, grid_cells, safe_area};

/// Headline figures in glass cards, each number counting up on entry.
pub fn render(frame: &SlideFrame, slide: &Slide) {
    let theme = frame.theme;
    let area = safe_area(frame, 200.0, 110.0);

    let count = slide.stats.len();
    let grid_w = match count {
        0 | 1 => frame.px(640.0),
        2 => frame.px(1100.0),
        _ => area.width(),
    }
    .min(area.width());
    let pad = frame.px(36.0);
    let inner_w = grid_w / count.max(1) as f32 - pad * 2.0;

    let caption_style = Style::new(theme.small_size * 0.75, theme.text_tertiary)
        .mono()
        .centered();
    let number_style = Style::new(theme.stat_size, frame.accent).mono().centered();
    let label_style = Style::new(theme.small_size, theme.text_secondary).centered();

    let card_h = slide
        .stats
        .iter()
        .map(|stat| {
            let caption = stat
                .caption()
                .map_or(0.0, |c| frame.measure(c, inner_w, &caption_style) + frame.px(12.0));
            caption
                + frame.measure(&frame.animator.resting_stat_text(stat), inner_w, &number_style)
                + frame.px(16.0)
                + frame.measure(&stat.label, inner_w, &label_style)
        })
        .fold(0.0_f32, f32::max)
        + pad * 2.0;

    let mut head = Column::new();
    head.push(
        Part::Heading,
        slide.label(),
        Style::new(theme.h2_size, theme.text_primary).centered(),
        0.0,
    );
    let mut tail = Column::new();
    tail.push_opt(
        Part::Body,
        slide.content.as_deref(),
        Style::new(theme.small_size, theme.text_secondary).centered(),
        16.0,
    );
    tail.push_opt(
        Part::Notes,
        slide.notes.as_deref(),
        Style::new(theme.small_size * 0.7, theme.text_tertiary)
            .mono()
            .centered(),
        0.0,
    );

    let gap = frame.px(56.0);
    let tail_h = tail.height(frame, area.width());
    let height = head.height(frame, area.width())
        + gap
        + card_h
        + if tail_h > 0.0 { gap + tail_h } else { 0.0 };
    let top = super::centered_top(area, height);
    let mut y = head.draw(frame, area.left(), top, area.width()) + gap;

    let grid = Rect::from_min_size(
        Pos2::new(area.center().x - grid_w / 2.0, y),
        vec2(grid_w, card_h),
    );
    let cells = grid_cells(grid, count, count.max(1), card_h, frame.px(24.0));
    for (i, (stat, cell)) in slide.stats.iter().zip(cells).enumerate() {
        let part = Part::Card(i);
        // Text positions use the resting cell; the pose moves both together.
        frame.card(part, cell, frame.theme.glass_border);
        let x = cell.left() + pad;
        let w = cell.width() - pad * 2.0;
        let mut cy = cell.top() + pad;
        if let Some(caption) = stat.caption() {
            cy += frame.text(part, caption, x, cy, w, &caption_style) + frame.px(12.0);
        }
        let number = frame.animator.stat_text(i, stat, frame.now);
        cy += frame.text(part, &number, x, cy, w, &number_style) + frame.px(16.0);
        frame.text(part, &stat.label, x, cy, w, &label_style);
    }
    y += card_h + gap;

    if tail_h > 0.0 {
        tail.draw(frame, area.left(), y, area.width());
    }
}

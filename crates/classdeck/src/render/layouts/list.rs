use eframe::egui::{Pos2, Rect, Stroke, vec2};

use crate::deck::{Slide, SlideLayout};
use crate::motion::Part;
use crate::render::SlideFrame;
use crate::render::text::{self, Style};

use super::{Column, grid_cells, safe_area};

/// Bulleted list in one of three arrangements: a plain stack, an icon grid
/// of numbered cards, or two opposing columns (`split`, `comparison`).
pub fn render(frame: &SlideFrame, slide: &Slide) {
    let theme = frame.theme;
    let mut area = safe_area(frame, 160.0, 100.0);

    if let Some(path) = slide.atmosphere_image.as_deref() {
        let panel_w = area.width() * 0.36;
        let panel = Rect::from_min_max(
            Pos2::new(area.right() - panel_w, area.top()),
            area.max,
        );
        frame.image(Part::Image, path, panel);
        area.max.x = panel.left() - frame.px(64.0);
    }

    let mut head = Column::new();
    head.push(
        Part::Heading,
        slide.label(),
        Style::new(theme.h2_size, theme.text_primary),
        20.0,
    );
    head.push_opt(
        Part::Subtitle,
        slide.subtitle.as_deref(),
        Style::new(theme.body_size * 0.8, theme.text_secondary),
        0.0,
    );
    let mut y = head.draw(frame, area.left(), area.top(), area.width()) + frame.px(56.0);

    let body_style = Style::new(theme.body_size * 0.75, theme.text_secondary);
    let body_h = slide
        .content
        .as_deref()
        .map_or(0.0, |c| frame.measure(c, area.width(), &body_style) + frame.px(40.0));
    let items_area = Rect::from_min_max(
        Pos2::new(area.left(), y),
        Pos2::new(area.right(), area.bottom() - body_h),
    );

    y = if slide.is_two_column() {
        columns(frame, slide, items_area)
    } else if slide.layout == SlideLayout::IconGrid {
        icon_grid(frame, slide, items_area)
    } else {
        stack(frame, slide, items_area)
    };

    if let Some(content) = slide.content.as_deref() {
        frame.text(
            Part::Body,
            content,
            area.left(),
            y + frame.px(40.0),
            area.width(),
            &body_style,
        );
    }
}

fn item_size(frame: &SlideFrame) -> f32 {
    frame.px(frame.theme.body_size * 0.8)
}

/// `Label: text` job for `part`, faded by its pose.
fn item_job(
    frame: &SlideFrame,
    part: Part,
    item: &str,
    width: f32,
) -> eframe::egui::text::LayoutJob {
    let pose = frame.pose(part);
    text::labelled_job(
        item,
        item_size(frame),
        frame.fade(frame.theme.text_primary, pose),
        frame.fade(frame.accent, pose),
        width,
    )
}

fn job_height(frame: &SlideFrame, item: &str, width: f32) -> f32 {
    let job = text::labelled_job(
        item,
        item_size(frame),
        frame.theme.text_primary,
        frame.accent,
        width,
    );
    frame.ui.painter().layout_job(job).rect.height()
}

fn stack(frame: &SlideFrame, slide: &Slide, area: Rect) -> f32 {
    let marker = frame.px(10.0);
    let indent = frame.px(44.0);
    let width = area.width() - indent;
    let gap = frame.px(28.0);
    let mut y = area.top();
    for (i, item) in slide.items.iter().enumerate() {
        let part = Part::Item(i);
        let pose = frame.pose(part);
        let shift = vec2(frame.px(pose.dx), frame.px(pose.dy));
        let dot = Pos2::new(area.left() + marker, y + item_size(frame) * 0.6) + shift;
        frame
            .ui
            .painter()
            .circle_filled(dot, marker / 2.0, frame.fade(frame.accent, pose));
        let h = frame.job(
            part,
            item_job(frame, part, item, width),
            Pos2::new(area.left() + indent, y),
        );
        y += h + gap;
    }
    y - gap
}

fn icon_grid(frame: &SlideFrame, slide: &Slide, area: Rect) -> f32 {
    let count = slide.items.len();
    let columns = if count <= 4 { 2 } else { 3 };
    let gap = frame.px(24.0);
    let pad = frame.px(28.0);
    let cell_w = (area.width() - gap * (columns as f32 - 1.0)) / columns as f32;
    let badge_style = Style::new(frame.theme.small_size, frame.accent).mono();
    let badge_h = frame.measure("00", cell_w, &badge_style) + frame.px(12.0);
    let row_h = slide
        .items
        .iter()
        .map(|item| job_height(frame, item, cell_w - pad * 2.0))
        .fold(0.0_f32, f32::max)
        + badge_h
        + pad * 2.0;

    let cells = grid_cells(area, count, columns, row_h, gap);
    for (i, (item, cell)) in slide.items.iter().zip(&cells).enumerate() {
        let part = Part::Item(i);
        frame.card(part, *cell, frame.theme.glass_border);
        let x = cell.left() + pad;
        let w = cell.width() - pad * 2.0;
        let top = cell.top() + pad;
        frame.text(part, &format!("{:02}", i + 1), x, top, w, &badge_style);
        frame.job(part, item_job(frame, part, item, w), Pos2::new(x, top + badge_h));
    }
    cells.last().map_or(area.top(), |c| c.bottom())
}

fn columns(frame: &SlideFrame, slide: &Slide, area: Rect) -> f32 {
    let (left, right) = slide.split_items();
    let gap = frame.px(48.0);
    let col_w = (area.width() - gap) / 2.0;
    let left_x = area.left();
    let right_x = area.left() + col_w + gap;

    // Comparison slides get a divider between the halves.
    if slide.layout == SlideLayout::Comparison {
        let pose = frame.pose(Part::Heading);
        let x = area.left() + col_w + gap / 2.0;
        frame.ui.painter().line_segment(
            [Pos2::new(x, area.top()), Pos2::new(x, area.bottom())],
            Stroke::new(frame.px(1.0), frame.fade(frame.theme.glass_border, pose)),
        );
    }

    let bottom_l = column_cards(frame, left, Part::Left, left_x, area.top(), col_w);
    let bottom_r = column_cards(frame, right, Part::Right, right_x, area.top(), col_w);
    bottom_l.max(bottom_r)
}

fn column_cards(
    frame: &SlideFrame,
    items: &[String],
    part: fn(usize) -> Part,
    x: f32,
    top: f32,
    width: f32,
) -> f32 {
    let pad = frame.px(24.0);
    let gap = frame.px(16.0);
    let mut y = top;
    for (i, item) in items.iter().enumerate() {
        let part = part(i);
        let h = job_height(frame, item, width - pad * 2.0) + pad * 2.0;
        let rect = Rect::from_min_size(Pos2::new(x, y), vec2(width, h));
        frame.card(part, rect, frame.theme.glass_border);
        frame.job(
            part,
            item_job(frame, part, item, width - pad * 2.0),
            Pos2::new(x + pad, y + pad),
        );
        y += h + gap;
    }
    y - gap
}

pub mod closing;
pub mod content;
pub mod divider;
pub mod interaction;
pub mod list;
pub mod quote;
pub mod stat;
pub mod story;
pub mod title;
pub mod visualization;

use eframe::egui::{Pos2, Rect};

use crate::motion::Part;
use crate::render::SlideFrame;
use crate::render::text::Style;

/// Usable slide area after reference-pixel padding.
pub(crate) fn safe_area(frame: &SlideFrame, pad_x: f32, pad_y: f32) -> Rect {
    frame
        .rect
        .shrink2(eframe::egui::vec2(frame.px(pad_x), frame.px(pad_y)))
}

/// A centered-or-left column of text blocks, measured before painting so it
/// can be vertically centered.
pub(crate) struct Column {
    entries: Vec<Entry>,
}

struct Entry {
    part: Part,
    text: String,
    style: Style,
    /// Space after the block, reference pixels.
    gap: f32,
}

impl Column {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, part: Part, text: impl Into<String>, style: Style, gap: f32) {
        self.entries.push(Entry {
            part,
            text: text.into(),
            style,
            gap,
        });
    }

    /// Push only when `text` is present.
    pub fn push_opt(&mut self, part: Part, text: Option<&str>, style: Style, gap: f32) {
        if let Some(text) = text {
            self.push(part, text, style, gap);
        }
    }

    pub fn height(&self, frame: &SlideFrame, width: f32) -> f32 {
        let last = self.entries.len().saturating_sub(1);
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let gap = if i == last { 0.0 } else { frame.px(e.gap) };
                frame.measure(&e.text, width, &e.style) + gap
            })
            .sum()
    }

    /// Paint from `top`, returning the bottom edge.
    pub fn draw(&self, frame: &SlideFrame, x: f32, top: f32, width: f32) -> f32 {
        let mut y = top;
        for entry in &self.entries {
            y += frame.text(entry.part, &entry.text, x, y, width, &entry.style);
            y += frame.px(entry.gap);
        }
        y
    }

    /// Paint vertically centered in `area`, returning the bottom edge.
    pub fn draw_centered(&self, frame: &SlideFrame, area: Rect) -> f32 {
        let top = centered_top(area, self.height(frame, area.width()));
        self.draw(frame, area.left(), top, area.width())
    }
}

/// Top of a block of `height` centered in `area`, never above it.
pub(crate) fn centered_top(area: Rect, height: f32) -> f32 {
    (area.center().y - height / 2.0).max(area.top())
}

/// `count` equal cells in rows of at most `columns`, `gap` apart. A short
/// last row is centered.
pub(crate) fn grid_cells(area: Rect, count: usize, columns: usize, row_height: f32, gap: f32) -> Vec<Rect> {
    let columns = columns.max(1);
    let cell_w = (area.width() - gap * (columns as f32 - 1.0)) / columns as f32;
    let rows = count.div_ceil(columns);
    (0..count)
        .map(|i| {
            let row = i / columns;
            let col = i % columns;
            let in_row = if row + 1 == rows {
                count - row * columns
            } else {
                columns
            };
            let row_w = in_row as f32 * cell_w + (in_row as f32 - 1.0) * gap;
            let left = area.left() + (area.width() - row_w) / 2.0;
            Rect::from_min_size(
                Pos2::new(
                    left + col as f32 * (cell_w + gap),
                    area.top() + row as f32 * (row_height + gap),
                ),
                eframe::egui::vec2(cell_w, row_height),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, vec2};

    #[test]
    fn test_grid_cells_center_short_row() {
        let area = Rect::from_min_size(pos2(0.0, 0.0), vec2(320.0, 400.0));
        let cells = grid_cells(area, 5, 3, 100.0, 10.0);
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[0].left(), 0.0);
        assert_eq!(cells[2].right(), 320.0);
        assert_eq!(cells[3].top(), 110.0);
        // Two cells of 100 with a 10 gap, centered in 320.
        assert_eq!(cells[3].left(), 55.0);
    }

    #[test]
    fn test_centered_top_clamps() {
        let area = Rect::from_min_size(pos2(0.0, 100.0), vec2(100.0, 200.0));
        assert_eq!(centered_top(area, 100.0), 150.0);
        assert_eq!(centered_top(area, 400.0), 100.0);
    }
}

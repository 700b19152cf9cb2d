//! Slide overview: a grid of cards, one per slide, that jumps to the card
//! clicked. Also the corner affordance that opens it.

use eframe::egui::{self, Color32, FontFamily, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, vec2};

use crate::deck::Deck;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverviewAction {
    Select(usize),
    Close,
}

/// Cards per row for a grid `width` points wide.
pub fn columns_for(width: f32) -> usize {
    if width >= 1024.0 {
        6
    } else if width >= 768.0 {
        4
    } else {
        2
    }
}

/// Card `index` in a grid starting at `origin`.
pub fn cell_rect(origin: Pos2, width: f32, columns: usize, card_h: f32, gap: f32, index: usize) -> Rect {
    let columns = columns.max(1);
    let card_w = (width - gap * (columns as f32 - 1.0)) / columns as f32;
    let col = index % columns;
    let row = index / columns;
    Rect::from_min_size(
        origin + vec2(col as f32 * (card_w + gap), row as f32 * (card_h + gap)),
        vec2(card_w, card_h),
    )
}

fn grid_height(count: usize, columns: usize, card_h: f32, gap: f32) -> f32 {
    let rows = count.div_ceil(columns.max(1));
    if rows == 0 {
        0.0
    } else {
        rows as f32 * card_h + (rows as f32 - 1.0) * gap
    }
}

/// Paint the overview over `rect` and report what was clicked this frame.
pub fn show(
    ui: &mut egui::Ui,
    rect: Rect,
    theme: &Theme,
    deck: &Deck,
    current: usize,
) -> Option<OverviewAction> {
    let mut action = None;
    let padding = 24.0;

    let title_galley = ui.painter().layout_no_wrap(
        "Slide Overview".to_string(),
        FontId::proportional(24.0),
        theme.text_primary,
    );
    let header_h = title_galley.rect.height();
    ui.painter().galley(
        rect.min + vec2(padding, padding),
        title_galley,
        theme.text_primary,
    );

    let close_galley = ui.painter().layout_no_wrap(
        "Close (Esc)".to_string(),
        FontId::monospace(14.0),
        theme.accent,
    );
    let close_rect = Rect::from_min_size(
        Pos2::new(
            rect.right() - padding - close_galley.rect.width(),
            rect.top() + padding + (header_h - close_galley.rect.height()) / 2.0,
        ),
        close_galley.rect.size(),
    );
    let close = ui.interact(close_rect.expand(6.0), ui.id().with("overview_close"), Sense::click());
    let close_color = if close.hovered() {
        theme.text_primary
    } else {
        theme.accent
    };
    ui.painter().galley(close_rect.min, close_galley, close_color);
    if close.clicked() {
        action = Some(OverviewAction::Close);
    }

    let grid_rect = Rect::from_min_max(
        Pos2::new(rect.left() + padding, rect.top() + padding * 2.0 + header_h),
        Pos2::new(rect.right() - padding, rect.bottom() - padding),
    );
    let mut grid_ui = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(grid_rect)
            .id_salt("overview_grid"),
    );

    let columns = columns_for(grid_rect.width());
    let gap = 12.0;
    let card_h = 92.0;
    let content_h = grid_height(deck.len(), columns, card_h, gap);

    egui::ScrollArea::vertical()
        .id_salt("overview_scroll")
        .auto_shrink([false, false])
        .show(&mut grid_ui, |ui| {
            let (content, _) =
                ui.allocate_exact_size(vec2(grid_rect.width(), content_h), Sense::hover());
            for (i, slide) in deck.slides.iter().enumerate() {
                let cell = cell_rect(content.min, content.width(), columns, card_h, gap, i);
                let response = ui.interact(cell, ui.id().with(("overview_card", i)), Sense::click());
                let border = if i == current {
                    Theme::with_opacity(theme.accent, 0.5)
                } else if response.hovered() {
                    Theme::with_opacity(theme.accent, 0.3)
                } else {
                    theme.glass_border
                };
                card(ui, cell, theme, border, i, slide.label(), slide.kind.name());
                if response.clicked() {
                    action = Some(OverviewAction::Select(i));
                }
            }
        });

    action
}

fn card(ui: &egui::Ui, cell: Rect, theme: &Theme, border: Color32, index: usize, title: &str, kind: &str) {
    let painter = ui.painter();
    painter.rect_filled(cell, 8.0, theme.glass);
    painter.rect_stroke(cell, 8.0, Stroke::new(1.0, border), StrokeKind::Inside);

    let inner = cell.shrink(12.0);
    let number = painter.layout_no_wrap(
        (index + 1).to_string(),
        FontId::monospace(12.0),
        theme.text_tertiary,
    );
    let number_h = number.rect.height();
    painter.galley(inner.min, number, theme.text_tertiary);

    let mut job = egui::text::LayoutJob::simple(
        title.to_string(),
        FontId::new(12.0, FontFamily::Proportional),
        theme.text_primary,
        inner.width(),
    );
    job.wrap.max_rows = 2;
    job.wrap.overflow_character = Some('\u{2026}');
    let title_galley = painter.layout_job(job);
    painter.galley(
        inner.min + vec2(0.0, number_h + 4.0),
        title_galley,
        theme.text_primary,
    );

    let kind_galley = painter.layout_no_wrap(kind.to_string(), FontId::monospace(10.0), theme.text_tertiary);
    let kind_pos = Pos2::new(inner.left(), inner.bottom() - kind_galley.rect.height());
    painter.galley(kind_pos, kind_galley, theme.text_tertiary);
}

/// The "Overview (O)" pill in the top-right corner. Returns true when clicked.
pub fn toggle_button(ui: &egui::Ui, rect: Rect, theme: &Theme) -> bool {
    let galley = ui.painter().layout_no_wrap(
        "Overview (O)".to_string(),
        FontId::monospace(12.0),
        theme.text_tertiary,
    );
    let size = galley.rect.size() + vec2(16.0, 8.0);
    let button = Rect::from_min_size(
        Pos2::new(rect.right() - 16.0 - size.x, rect.top() + 16.0),
        size,
    );
    let response = ui.interact(button, ui.id().with("overview_toggle"), Sense::click());
    let color = if response.hovered() {
        theme.accent
    } else {
        theme.text_tertiary
    };
    ui.painter().rect_filled(button, 6.0, theme.glass);
    ui.painter()
        .rect_stroke(button, 6.0, Stroke::new(1.0, theme.glass_border), StrokeKind::Inside);
    ui.painter().galley(button.min + vec2(8.0, 4.0), galley, color);
    response.clicked()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_columns_follow_width() {
        assert_eq!(columns_for(1800.0), 6);
        assert_eq!(columns_for(900.0), 4);
        assert_eq!(columns_for(500.0), 2);
    }

    #[test]
    fn test_cell_rect() {
        let origin = pos2(10.0, 20.0);
        let first = cell_rect(origin, 420.0, 4, 90.0, 20.0, 0);
        assert_eq!(first, Rect::from_min_size(origin, vec2(90.0, 90.0)));
        let fifth = cell_rect(origin, 420.0, 4, 90.0, 20.0, 4);
        assert_eq!(fifth.min, pos2(10.0, 130.0));
        let last_in_row = cell_rect(origin, 420.0, 4, 90.0, 20.0, 3);
        assert_eq!(last_in_row.right(), 430.0);
    }

    #[test]
    fn test_grid_height() {
        assert_eq!(grid_height(0, 6, 90.0, 12.0), 0.0);
        assert_eq!(grid_height(6, 6, 90.0, 12.0), 90.0);
        assert_eq!(grid_height(7, 6, 90.0, 12.0), 192.0);
    }
}

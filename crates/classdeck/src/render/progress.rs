use eframe::egui::{self, FontId, Pos2, Rect};

use crate::deck::Module;
use crate::render::text::kicker;
use crate::theme::Theme;

/// Share of the deck reached when showing `current` (zero-based) of `total`.
pub fn fraction(current: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    ((current + 1) as f32 / total as f32).min(1.0)
}

/// `Module 2: Title`, spaced out for the footer.
pub fn module_label(module: &Module) -> String {
    kicker(&format!("Module {}: {}", module.number, module.title))
}

pub fn counter(current: usize, total: usize) -> String {
    format!("{} / {}", current + 1, total)
}

/// Footer strip: module label on the left, slide counter on the right and a
/// thin bar along the bottom edge.
pub fn paint(
    ui: &egui::Ui,
    rect: Rect,
    theme: &Theme,
    module: Option<&Module>,
    current: usize,
    total: usize,
    scale: f32,
) {
    let painter = ui.painter();
    let accent = theme.module_accent(module);
    let bar_h = (2.0 * scale).max(1.0);
    let text_y = rect.bottom() - bar_h - 36.0 * scale;
    let font = FontId::monospace(14.0 * scale);

    if let Some(module) = module {
        let galley = painter.layout_no_wrap(module_label(module), font.clone(), accent);
        painter.galley(Pos2::new(rect.left() + 24.0 * scale, text_y), galley, accent);
    }

    let galley = painter.layout_no_wrap(counter(current, total), font, theme.text_tertiary);
    let pos = Pos2::new(rect.right() - galley.rect.width() - 24.0 * scale, text_y);
    painter.galley(pos, galley, theme.text_tertiary);

    let track = Rect::from_min_max(
        Pos2::new(rect.left(), rect.bottom() - bar_h),
        rect.right_bottom(),
    );
    painter.rect_filled(track, 0.0, Theme::with_opacity(theme.text_primary, 0.05));
    let mut fill = track;
    fill.set_width(track.width() * fraction(current, total));
    painter.rect_filled(fill, 0.0, accent);
}

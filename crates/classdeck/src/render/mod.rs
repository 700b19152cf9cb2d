pub mod background;
pub mod diagrams;
pub mod image_cache;
pub mod layouts;
pub mod overview;
pub mod progress;
pub mod text;

use std::time::Instant;

use eframe::egui::{self, Color32, Pos2, Rect, Stroke};

use crate::deck::{Renderer, Slide};
use crate::motion::{Part, Pose, SlideAnimator};
use crate::theme::Theme;

use image_cache::ImageCache;
use text::{Align, Style};

/// Reference canvas the layouts are designed against.
pub const REFERENCE_SIZE: egui::Vec2 = egui::vec2(1920.0, 1080.0);

pub fn compute_scale(rect: Rect) -> f32 {
    (rect.width() / REFERENCE_SIZE.x).min(rect.height() / REFERENCE_SIZE.y)
}

/// Everything a layout needs to paint one slide for one frame.
pub struct SlideFrame<'a> {
    pub ui: &'a egui::Ui,
    pub theme: &'a Theme,
    /// Slide area, already shifted by the container offset.
    pub rect: Rect,
    /// Container opacity, multiplied into every element.
    pub opacity: f32,
    pub scale: f32,
    /// Module color for this slide, or the theme accent.
    pub accent: Color32,
    pub animator: &'a SlideAnimator,
    pub images: &'a ImageCache,
    pub now: Instant,
}

impl SlideFrame<'_> {
    /// Reference pixels to screen points.
    pub fn px(&self, v: f32) -> f32 {
        v * self.scale
    }

    pub fn pose(&self, part: Part) -> Pose {
        self.animator.pose(part, self.now)
    }

    pub fn fade(&self, color: Color32, pose: Pose) -> Color32 {
        Theme::with_opacity(color, self.opacity * pose.opacity)
    }

    fn shift(&self, pose: Pose) -> egui::Vec2 {
        egui::vec2(self.px(pose.dx), self.px(pose.dy))
    }

    /// Paint `text` for `part` with its top at `y`, wrapped to `width`.
    /// Returns the height at rest, so layout does not jitter while animating.
    pub fn text(&self, part: Part, text: &str, x: f32, y: f32, width: f32, style: &Style) -> f32 {
        let pose = self.pose(part);
        let color = self.fade(style.color, pose);
        let rest = text::layout(self.ui, text, style.font(self.scale), color, width, style.align);
        let height = rest.rect.height();
        if pose.opacity <= 0.0 || self.opacity <= 0.0 {
            return height;
        }

        let galley = if (pose.scale - 1.0).abs() > f32::EPSILON {
            let font = style.font(self.scale * pose.scale.max(0.01));
            text::layout(self.ui, text, font, color, width, style.align)
        } else {
            rest
        };
        // Keep a scaled block centered on where the resting block sits.
        let grow_y = (height - galley.rect.height()) / 2.0;
        let origin = match style.align {
            Align::Left => Pos2::new(x, y + grow_y),
            Align::Center => Pos2::new(x + width / 2.0, y + grow_y),
        };
        self.ui
            .painter()
            .galley(origin + self.shift(pose), galley, color);
        height
    }

    /// Height of `text` at rest, without painting.
    pub fn measure(&self, text: &str, width: f32, style: &Style) -> f32 {
        text::measure(self.ui, text, style.font(self.scale), width)
    }

    /// Paint a prepared job for `part`. Colors in the job must already be
    /// faded with [`fade`](Self::fade).
    pub fn job(&self, part: Part, job: egui::text::LayoutJob, pos: Pos2) -> f32 {
        let pose = self.pose(part);
        let galley = self.ui.painter().layout_job(job);
        let height = galley.rect.height();
        if pose.opacity > 0.0 && self.opacity > 0.0 {
            self.ui
                .painter()
                .galley(pos + self.shift(pose), galley, Color32::WHITE);
        }
        height
    }

    /// Width of `text` on one line, without painting.
    pub fn measure_width(&self, text: &str, style: &Style) -> f32 {
        text::width(self.ui, text, style.font(self.scale))
    }

    /// Translucent card for `part`, scaled around its center by the pose.
    pub fn card(&self, part: Part, rect: Rect, border: Color32) -> Rect {
        self.panel(part, rect, self.theme.glass, border)
    }

    /// Filled, bordered panel for `part`. The pose scales it around its
    /// center, then `scale_x` stretches it from the left edge.
    pub fn panel(&self, part: Part, rect: Rect, fill: Color32, border: Color32) -> Rect {
        let pose = self.pose(part);
        let scaled = Rect::from_center_size(rect.center(), rect.size() * pose.scale);
        let rect = Rect::from_min_size(
            scaled.min,
            egui::vec2(scaled.width() * pose.scale_x, scaled.height()),
        )
        .translate(self.shift(pose));
        let radius = self.px(16.0);
        self.ui
            .painter()
            .rect_filled(rect, radius, self.fade(fill, pose));
        self.ui.painter().rect_stroke(
            rect,
            radius,
            Stroke::new(self.px(1.5), self.fade(border, pose)),
            egui::StrokeKind::Inside,
        );
        rect
    }

    /// Horizontal accent line growing from `center_x` by the pose's scale.
    pub fn rule(&self, part: Part, center_x: f32, y: f32, width: f32) {
        let pose = self.pose(part);
        let half = self.px(width) * pose.scale / 2.0;
        if half <= 0.0 {
            return;
        }
        let rect = Rect::from_min_max(
            Pos2::new(center_x - half, y),
            Pos2::new(center_x + half, y + self.px(4.0)),
        )
        .translate(self.shift(pose));
        self.ui
            .painter()
            .rect_filled(rect, self.px(2.0), self.fade(self.accent, pose));
    }

    /// Atmosphere image for `part`, cover-fitted into `area`.
    pub fn image(&self, part: Part, path: &str, area: Rect) {
        let Some(texture) = self.images.get_or_load(self.ui, path) else {
            return;
        };
        let pose = self.pose(part);
        let tex = texture.size_vec2();
        let fit = (area.width() / tex.x).max(area.height() / tex.y) * pose.scale;
        let drawn = Rect::from_center_size(area.center(), tex * fit).translate(self.shift(pose));
        // Crop to the area through the UV rect.
        let visible = drawn.intersect(area);
        let uv = Rect::from_min_max(
            Pos2::new(
                (visible.left() - drawn.left()) / drawn.width(),
                (visible.top() - drawn.top()) / drawn.height(),
            ),
            Pos2::new(
                (visible.right() - drawn.left()) / drawn.width(),
                (visible.bottom() - drawn.top()) / drawn.height(),
            ),
        );
        let tint = self.fade(Color32::WHITE, pose);
        self.ui.painter().image(texture.id(), visible, uv, tint);
    }
}

/// Draw `slide` through its renderer.
pub fn render_slide(frame: &SlideFrame, slide: &Slide) {
    match slide.renderer() {
        Renderer::Title => layouts::title::render(frame, slide),
        Renderer::Divider => layouts::divider::render(frame, slide),
        Renderer::Content => layouts::content::render(frame, slide),
        Renderer::Stat => layouts::stat::render(frame, slide),
        Renderer::Quote => layouts::quote::render(frame, slide),
        Renderer::Story => layouts::story::render(frame, slide),
        Renderer::List => layouts::list::render(frame, slide),
        Renderer::Interaction => layouts::interaction::render(frame, slide),
        Renderer::Visualization => layouts::visualization::render(frame, slide),
        Renderer::Closing => layouts::closing::render(frame, slide),
    }
}

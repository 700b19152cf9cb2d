use std::f32::consts::TAU;

use eframe::egui::{self, Color32, Pos2, Rect};

use crate::theme::Theme;

const GLOW_SEGMENTS: usize = 48;

/// Second orb color, a cooler companion to the accent.
const COOL_ORB: Color32 = Color32::from_rgb(0x00, 0xA4, 0xD4);

/// Soft radial gradient: `color` at the center fading to nothing at `radius`.
pub fn radial_glow(painter: &egui::Painter, center: Pos2, radius: f32, color: Color32) {
    if radius <= 0.0 || color.a() == 0 {
        return;
    }
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(center, color);
    // Inner ring at 40% radius holds most of the color, the outer one none.
    let rings = [(0.4, Theme::with_opacity(color, 0.55)), (1.0, Color32::TRANSPARENT)];
    for (fraction, ring_color) in rings {
        for i in 0..GLOW_SEGMENTS {
            let angle = i as f32 / GLOW_SEGMENTS as f32 * TAU;
            let pos = center + egui::vec2(angle.cos(), angle.sin()) * radius * fraction;
            mesh.colored_vertex(pos, ring_color);
        }
    }

    let n = GLOW_SEGMENTS as u32;
    for i in 0..n {
        let j = (i + 1) % n;
        // Fan from the center to the inner ring.
        mesh.add_triangle(0, 1 + i, 1 + j);
        // Quad strip between the rings.
        let (a, b) = (1 + i, 1 + j);
        let (c, d) = (1 + n + i, 1 + n + j);
        mesh.add_triangle(a, c, b);
        mesh.add_triangle(b, c, d);
    }
    painter.add(egui::Shape::mesh(mesh));
}

/// Vertical wash from the base color down to a faint tint of `tint`.
fn tinted_gradient(painter: &egui::Painter, rect: Rect, base: Color32, tint: Color32) {
    let bottom = blend(base, tint, 0.06);
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), base);
    mesh.colored_vertex(rect.right_top(), base);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.add_triangle(0, 2, 1);
    mesh.add_triangle(1, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

pub(crate) fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// Offset of a glow orb after `elapsed` seconds: a slow figure of eight,
/// `reach` points across.
pub fn drift(elapsed: f32, phase: f32, reach: f32) -> egui::Vec2 {
    let t = elapsed * 0.08 + phase;
    egui::vec2(t.sin(), (t * 2.0).sin() * 0.5) * reach
}

/// Module-tinted base with two faint glow orbs drifting around the corners.
pub fn paint(
    painter: &egui::Painter,
    rect: Rect,
    theme: &Theme,
    accent: Color32,
    scale: f32,
    elapsed: f32,
) {
    tinted_gradient(painter, rect, theme.background, accent);

    let upper = Pos2::new(
        rect.right() - rect.width() * 0.1 + 60.0 * scale,
        rect.top() - rect.height() * 0.1 + 240.0 * scale,
    ) + drift(elapsed, 0.0, 40.0 * scale);
    radial_glow(painter, upper, 420.0 * scale, Theme::with_opacity(accent, 0.06));

    let lower = Pos2::new(
        rect.left() - rect.width() * 0.05 + 200.0 * scale,
        rect.bottom() - rect.height() * 0.1 - 200.0 * scale,
    ) + drift(elapsed, 2.1, 30.0 * scale);
    radial_glow(painter, lower, 280.0 * scale, Theme::with_opacity(COOL_ORB, 0.04));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Color32::from_rgb(100, 50, 25));
    }

    #[test]
    fn test_drift_stays_within_reach() {
        for step in 0..200 {
            let d = drift(step as f32 * 0.5, 1.0, 40.0);
            assert!(d.x.abs() <= 40.0 && d.y.abs() <= 20.0, "{d:?}");
        }
        assert_eq!(drift(0.0, 0.0, 40.0), egui::Vec2::ZERO);
    }
}

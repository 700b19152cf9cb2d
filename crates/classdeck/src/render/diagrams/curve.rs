use eframe::egui::{Color32, Mesh, Pos2, Rect, Shape, Stroke, pos2, vec2};

use crate::deck::diagram::{ADOPTION_SEGMENTS, Segment};
use crate::motion::Part;
use crate::render::SlideFrame;
use crate::render::background::blend;
use crate::render::layouts::centered_top;
use crate::render::text::Style;
use crate::theme::Theme;

use super::{BODY, FIGURE, SMALL, column, columns, hex};

/// Curve box in its own units; the curve is laid out against this and
/// scaled to the column width.
const VIEW: (f32, f32) = (800.0, 250.0);
const BASELINE: f32 = 210.0;
const DIVIDERS: [f32; 3] = [200.0, 500.0, 650.0];

/// Start point followed by (control, end) pairs of quadratic segments.
const START: (f32, f32) = (80.0, 210.0);
const QUADS: [((f32, f32), (f32, f32)); 6] = [
    ((150.0, 210.0), (200.0, 180.0)),
    ((280.0, 100.0), (350.0, 50.0)),
    ((420.0, 10.0), (450.0, 10.0)),
    ((480.0, 10.0), (500.0, 30.0)),
    ((560.0, 80.0), (620.0, 160.0)),
    ((680.0, 200.0), (720.0, 210.0)),
];
const SAMPLES_PER_QUAD: usize = 16;

/// Gradient stops across the curve, left to right.
const STOPS: [(f32, &str); 4] = [
    (0.0, "#00d4aa"),
    (0.5, "#00c4ba"),
    (0.75, "#00a4d4"),
    (1.0, "#787888"),
];

/// Bell curve of adoption that draws itself, fills in, then labels its
/// four segments.
pub fn paint(frame: &SlideFrame, area: Rect) {
    let area = column(frame, area, 1400.0);
    let gap = frame.px(16.0);
    let pad = frame.px(18.0);
    let curve_h = area.width() * VIEW.1 / VIEW.0;
    let cells = columns(area, ADOPTION_SEGMENTS.len(), gap);
    let inner = cells[0].width() - pad * 2.0;
    let card_h = ADOPTION_SEGMENTS
        .iter()
        .map(|segment| segment_height(frame, segment, inner))
        .fold(0.0_f32, f32::max)
        + pad * 2.0;

    let top = centered_top(area, curve_h + gap + card_h);
    let curve = Rect::from_min_size(Pos2::new(area.left(), top), vec2(area.width(), curve_h));
    let points = sample_curve();
    let to_screen = |p: Pos2| {
        Pos2::new(
            curve.left() + p.x / VIEW.0 * curve.width(),
            curve.top() + p.y / VIEW.1 * curve.height(),
        )
    };
    let screen: Vec<Pos2> = points.iter().map(|p| to_screen(*p)).collect();

    guides(frame, &to_screen);
    fill(frame, &screen, to_screen(pos2(0.0, BASELINE)).y, curve);
    stroke(frame, &screen);

    let card_top = curve.bottom() + gap;
    for (i, (segment, cell)) in ADOPTION_SEGMENTS.iter().zip(&cells).enumerate() {
        let part = Part::Stage(i);
        let color = hex(segment.color);
        let rect = Rect::from_min_size(Pos2::new(cell.left(), card_top), vec2(cell.width(), card_h));
        frame.card(part, rect, Theme::with_opacity(color, 0.18));
        let x = rect.left() + pad;
        let mut y = rect.top() + pad;
        y += frame.text(part, segment.percentage, x, y, inner, &percentage_style(color)) + frame.px(6.0);
        y += frame.text(part, segment.label, x, y, inner, &label_style(frame)) + frame.px(6.0);
        frame.text(part, segment.description, x, y, inner, &description_style(frame));
    }
}

fn percentage_style(color: Color32) -> Style {
    Style::new(FIGURE * 0.8, color).mono()
}

fn label_style(frame: &SlideFrame) -> Style {
    Style::new(BODY * 1.1, frame.theme.text_primary)
}

fn description_style(frame: &SlideFrame) -> Style {
    Style::new(SMALL, frame.theme.text_secondary)
}

fn segment_height(frame: &SlideFrame, segment: &Segment, inner: f32) -> f32 {
    frame.measure(segment.percentage, inner, &percentage_style(Color32::WHITE))
        + frame.px(6.0)
        + frame.measure(segment.label, inner, &label_style(frame))
        + frame.px(6.0)
        + frame.measure(segment.description, inner, &description_style(frame))
}

/// The curve as a polyline in view units.
fn sample_curve() -> Vec<Pos2> {
    let mut points = vec![pos2(START.0, START.1)];
    let mut from = pos2(START.0, START.1);
    for (control, end) in QUADS {
        let (control, end) = (pos2(control.0, control.1), pos2(end.0, end.1));
        for step in 1..=SAMPLES_PER_QUAD {
            let t = step as f32 / SAMPLES_PER_QUAD as f32;
            let u = 1.0 - t;
            let p = from.to_vec2() * (u * u) + control.to_vec2() * (2.0 * u * t) + end.to_vec2() * (t * t);
            points.push(p.to_pos2());
        }
        from = end;
    }
    points
}

/// Gradient color at `t` (0..1) across the curve.
fn gradient(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    for pair in STOPS.windows(2) {
        let ((t0, c0), (t1, c1)) = (pair[0], pair[1]);
        if t <= t1 {
            return blend(hex(c0), hex(c1), (t - t0) / (t1 - t0));
        }
    }
    hex(STOPS[STOPS.len() - 1].1)
}

/// Baseline plus dashed segment dividers, shown with the fill.
fn guides(frame: &SlideFrame, to_screen: &impl Fn(Pos2) -> Pos2) {
    let pose = frame.pose(Part::Fill);
    let width = frame.px(1.0);
    let painter = frame.ui.painter();
    painter.line_segment(
        [to_screen(pos2(50.0, BASELINE)), to_screen(pos2(750.0, BASELINE))],
        Stroke::new(width, frame.fade(Theme::with_opacity(Color32::WHITE, 0.05), pose)),
    );
    let dash = Stroke::new(width, frame.fade(Theme::with_opacity(Color32::WHITE, 0.08), pose));
    for x in DIVIDERS {
        let path = [to_screen(pos2(x, 30.0)), to_screen(pos2(x, BASELINE))];
        painter.extend(Shape::dashed_line(&path, dash, frame.px(4.0), frame.px(4.0)));
    }
}

/// Gradient strip between the curve and the baseline.
fn fill(frame: &SlideFrame, points: &[Pos2], baseline: f32, curve: Rect) {
    let pose = frame.pose(Part::Fill);
    let alpha = 0.15 * pose.opacity * frame.opacity;
    if alpha <= 0.0 || points.len() < 2 {
        return;
    }
    let mut mesh = Mesh::default();
    for p in points {
        let color = Theme::with_opacity(gradient((p.x - curve.left()) / curve.width()), alpha);
        mesh.colored_vertex(*p, color);
        mesh.colored_vertex(Pos2::new(p.x, baseline), color);
    }
    for i in 0..points.len() as u32 - 1 {
        let (a, b, c, d) = (i * 2, i * 2 + 1, i * 2 + 2, i * 2 + 3);
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(b, d, c);
    }
    frame.ui.painter().add(Shape::mesh(mesh));
}

/// The curve itself, drawn up to the `Line` pose's scale along its length.
fn stroke(frame: &SlideFrame, points: &[Pos2]) {
    let pose = frame.pose(Part::Line);
    let drawn = polyline_length(points) * pose.scale.clamp(0.0, 1.0);
    if drawn <= 0.0 {
        return;
    }
    let path = truncate(points, drawn);
    let color = frame.fade(hex(STOPS[0].1), pose);
    frame
        .ui
        .painter()
        .add(Shape::line(path, Stroke::new(frame.px(3.0), color)));
}

fn polyline_length(points: &[Pos2]) -> f32 {
    points.windows(2).map(|w| (w[1] - w[0]).length()).sum()
}

/// The first `distance` of a polyline.
fn truncate(points: &[Pos2], distance: f32) -> Vec<Pos2> {
    let mut out = Vec::with_capacity(points.len());
    let Some(first) = points.first() else {
        return out;
    };
    out.push(*first);
    let mut remaining = distance;
    for w in points.windows(2) {
        let seg = (w[1] - w[0]).length();
        if remaining <= seg {
            let t = remaining / seg.max(0.001);
            out.push(w[0] + (w[1] - w[0]) * t);
            return out;
        }
        out.push(w[1]);
        remaining -= seg;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_spans_start_to_end() {
        let points = sample_curve();
        assert_eq!(points.first(), Some(&pos2(80.0, 210.0)));
        assert_eq!(points.last(), Some(&pos2(720.0, 210.0)));
        // Peak sits near the top of the box.
        let peak = points.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        assert!(peak < 20.0, "peak at {peak}");
    }

    #[test]
    fn test_truncate_stops_partway() {
        let points = [pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 10.0)];
        assert_eq!(polyline_length(&points), 20.0);
        assert_eq!(truncate(&points, 5.0), vec![pos2(0.0, 0.0), pos2(5.0, 0.0)]);
        assert_eq!(
            truncate(&points, 15.0),
            vec![pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 5.0)]
        );
        assert_eq!(truncate(&points, 50.0).len(), 3);
    }

    #[test]
    fn test_gradient_hits_its_stops() {
        assert_eq!(gradient(0.0), hex("#00d4aa"));
        assert_eq!(gradient(0.5), hex("#00c4ba"));
        assert_eq!(gradient(1.0), hex("#787888"));
        assert_eq!(gradient(2.0), hex("#787888"));
    }
}

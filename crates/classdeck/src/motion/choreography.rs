//! Entrance timelines for each slide renderer.
//!
//! Elements rise or slide 10 to 40 reference pixels into place with a
//! decelerating finish. Groups stagger 0.08 to 0.2s apart.

use std::time::Instant;

use super::animator::{EntranceScope, Part};
use super::counter::CountUp;
use super::ease::Ease;
use super::tween::{Pose, Tween, stagger};
use crate::deck::diagram::{self, Diagram};
use crate::deck::{Renderer, Slide, SlideLayout};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choreography {
    /// Time scale; 2.0 plays everything twice as fast.
    pub speed: f32,
    /// Decimal places for fractional counters.
    pub decimals: usize,
}

impl Default for Choreography {
    fn default() -> Self {
        Self {
            speed: 1.0,
            decimals: 1,
        }
    }
}

/// Accumulates tracks for one entrance, applying the time scale.
struct Builder {
    scope: EntranceScope,
    now: Instant,
    speed: f32,
}

impl Builder {
    fn secs(&self, s: f32) -> f32 {
        s / self.speed
    }

    fn track(&mut self, part: Part, from: Pose, delay: f32, duration: f32, ease: Ease) {
        let tween = Tween::new(from, Pose::REST, self.now)
            .delay(self.secs(delay))
            .duration(self.secs(duration))
            .ease(ease);
        self.scope.add(part, tween);
    }

    fn rise(&mut self, part: Part, dy: f32, delay: f32, duration: f32) {
        self.track(part, Pose::rise(dy), delay, duration, Ease::OutCubic);
    }

    /// Stagger `parts` starting at `delay`, `step` seconds apart.
    fn group(
        &mut self,
        parts: impl IntoIterator<Item = Part>,
        from: Pose,
        delay: f32,
        step: f32,
        duration: f32,
        ease: Ease,
    ) {
        for (i, part) in parts.into_iter().enumerate() {
            self.track(part, from, stagger(delay, step, i), duration, ease);
        }
    }
}

impl Choreography {
    pub fn new(speed: f32) -> Self {
        Self {
            speed: if speed > 0.0 { speed } else { 1.0 },
            ..Self::default()
        }
    }

    /// Build the entrance for `slide`, anchored at `now`.
    pub fn entrance(&self, slide: &Slide, now: Instant) -> EntranceScope {
        let mut b = Builder {
            scope: EntranceScope::new(),
            now,
            speed: if self.speed > 0.0 { self.speed } else { 1.0 },
        };

        match slide.renderer() {
            Renderer::Title => {
                b.track(Part::Rule, Pose::REST.with_scale(0.0), 0.4, 0.8, Ease::InOutCubic);
                b.rise(Part::Heading, 30.0, 0.5, 0.8);
                b.rise(Part::Subtitle, 20.0, 0.8, 0.6);
                b.track(Part::Body, Pose::HIDDEN, 1.1, 0.6, Ease::OutCubic);
            }
            Renderer::Divider => {
                // The oversized module number drops in from above.
                b.track(
                    Part::Kicker,
                    Pose::rise(-40.0).with_scale(3.0),
                    0.1,
                    1.0,
                    Ease::OutCubic,
                );
                b.track(Part::Rule, Pose::REST.with_scale(0.0), 0.2, 0.6, Ease::InOutCubic);
                b.track(Part::Heading, Pose::slide(-40.0), 0.3, 0.7, Ease::OutCubic);
                b.track(Part::Subtitle, Pose::HIDDEN, 0.6, 0.5, Ease::OutCubic);
                b.rise(Part::Body, 20.0, 0.8, 0.5);
            }
            Renderer::Content => {
                let mut parts = Vec::new();
                if slide.subtitle.is_some() {
                    parts.push(Part::Subtitle);
                }
                parts.push(Part::Heading);
                if slide.content.is_some() {
                    parts.push(Part::Body);
                }
                parts.extend((0..slide.items.len()).map(Part::Item));
                b.group(parts, Pose::rise(20.0), 0.18, 0.12, 0.52, Ease::OutCubic);
            }
            Renderer::Stat => {
                b.rise(Part::Heading, 20.0, 0.1, 0.5);
                b.group(
                    (0..slide.stats.len()).map(Part::Card),
                    Pose::rise(30.0).with_scale(0.95),
                    0.3,
                    0.2,
                    0.5,
                    Ease::OutBack,
                );
                for stat in &slide.stats {
                    let counter = CountUp::for_stat(stat, now)
                        .map(|c| c.decimals(self.decimals).timing(b.secs(0.6), b.secs(2.0)));
                    b.scope.add_counter(counter);
                }
                if slide.content.is_some() {
                    b.rise(Part::Body, 10.0, 1.2, 0.5);
                }
                if slide.notes.is_some() {
                    b.track(Part::Notes, Pose::HIDDEN, 1.5, 0.5, Ease::OutCubic);
                }
            }
            Renderer::Quote | Renderer::Story => {
                let mut parts = Vec::new();
                if slide.title.is_some() {
                    parts.push(Part::Heading);
                }
                parts.push(Part::Quote);
                if slide.attribution.is_some() {
                    parts.push(Part::Attribution);
                }
                if slide.content.is_some() {
                    parts.push(Part::Body);
                }
                if slide.atmosphere_image.is_some() {
                    parts.push(Part::Image);
                }
                b.group(parts, Pose::rise(20.0), 0.12, 0.1, 0.55, Ease::OutCubic);
            }
            Renderer::List => list(&mut b, slide),
            Renderer::Interaction => {
                b.track(
                    Part::Kicker,
                    Pose::HIDDEN.with_scale(0.5),
                    0.1,
                    0.4,
                    Ease::OutBack,
                );
                b.rise(Part::Heading, 20.0, 0.3, 0.5);
                if slide.interaction.is_some() {
                    b.track(
                        Part::Prompt,
                        Pose::HIDDEN.with_scale(0.95),
                        0.5,
                        0.5,
                        Ease::OutCubic,
                    );
                }
                b.group(
                    (0..slide.items.len()).map(Part::Item),
                    Pose::rise(15.0),
                    0.7,
                    0.1,
                    0.4,
                    Ease::OutCubic,
                );
                if slide.content.is_some() {
                    b.track(Part::Body, Pose::HIDDEN, 1.0, 0.5, Ease::OutCubic);
                }
            }
            Renderer::Visualization => {
                b.rise(Part::Heading, 15.0, 0.1, 0.5);
                if slide.subtitle.is_some() {
                    b.track(Part::Subtitle, Pose::HIDDEN, 0.3, 0.4, Ease::OutCubic);
                }
                match slide.diagram() {
                    Some(d) => diagram(&mut b, d),
                    None if slide.visualization.is_some() => {
                        b.rise(Part::Stage(0), 20.0, 0.45, 0.5);
                    }
                    None => {}
                }
            }
            Renderer::Closing => {
                b.track(Part::Rule, Pose::REST.with_scale(0.0), 0.2, 0.8, Ease::InOutCubic);
                b.rise(Part::Heading, 30.0, 0.4, 0.7);
                b.rise(Part::Body, 20.0, 0.7, 0.6);
                b.track(Part::Subtitle, Pose::HIDDEN, 1.0, 0.8, Ease::OutCubic);
            }
        }

        b.scope
    }
}

fn list(b: &mut Builder, slide: &Slide) {
    b.group(
        [Part::Heading, Part::Subtitle],
        Pose::rise(18.0),
        0.08,
        0.08,
        0.45,
        Ease::OutCubic,
    );

    if slide.is_two_column() {
        let (left, right) = slide.split_items();
        b.group(
            (0..left.len()).map(Part::Left),
            Pose::slide(-40.0).with_dy(10.0),
            0.2,
            0.12,
            0.48,
            Ease::OutCubic,
        );
        b.group(
            (0..right.len()).map(Part::Right),
            Pose::slide(40.0).with_dy(10.0),
            0.24,
            0.12,
            0.48,
            Ease::OutCubic,
        );
    } else {
        let from = match slide.layout {
            SlideLayout::IconGrid => Pose::rise(24.0).with_scale(0.92),
            _ => Pose::rise(24.0),
        };
        b.group(
            (0..slide.items.len()).map(Part::Item),
            from,
            0.22,
            0.12,
            0.46,
            Ease::OutCubic,
        );
    }

    if slide.atmosphere_image.is_some() {
        b.track(Part::Image, Pose::HIDDEN.with_scale(1.04), 0.1, 0.9, Ease::OutCubic);
    }
    if slide.content.is_some() {
        b.rise(Part::Body, 10.0, 0.52, 0.4);
    }
}

/// Diagram timelines. Offsets and staggers per diagram; the heading and
/// subtitle are already queued.
fn diagram(b: &mut Builder, d: Diagram) {
    let stages = |n: usize| (0..n).map(Part::Stage);
    match d {
        Diagram::MaturityModel => b.group(
            stages(diagram::MATURITY_LEVELS.len()),
            Pose::slide(-40.0).with_scale_x(0.3),
            0.3,
            0.15,
            0.5,
            Ease::OutQuad,
        ),
        Diagram::ImpactMatrix => {
            b.group(
                stages(diagram::QUADRANTS.len()),
                Pose::rise(15.0).with_scale(0.92),
                0.3,
                0.12,
                0.5,
                Ease::OutCubic,
            );
            b.group(
                (0..diagram::quadrant_item_count()).map(Part::Detail),
                Pose::slide(-8.0),
                0.7,
                0.04,
                0.3,
                Ease::OutQuad,
            );
        }
        Diagram::AckuPipeline => {
            let n = diagram::ACKU_PHASES.len();
            b.track(Part::Line, Pose::REST.with_scale(0.0), 0.2, 1.2, Ease::InOutQuad);
            b.group(stages(n), Pose::rise(24.0), 0.4, 0.15, 0.5, Ease::OutCubic);
            b.group(
                (0..n - 1).map(Part::Connector),
                Pose::slide(-8.0),
                0.8,
                0.15,
                0.3,
                Ease::OutQuad,
            );
        }
        Diagram::AdoptionCurve => {
            b.track(Part::Line, Pose::REST.with_scale(0.0), 0.3, 1.5, Ease::InOutQuad);
            b.track(Part::Fill, Pose::HIDDEN, 1.0, 0.8, Ease::OutQuad);
            b.group(
                stages(diagram::ADOPTION_SEGMENTS.len()),
                Pose::rise(20.0),
                1.2,
                0.15,
                0.5,
                Ease::OutQuad,
            );
        }
        Diagram::TrustEquation => {
            // Trust, three factors, then the denominator.
            b.group(
                stages(diagram::TRUST_FACTORS.len() + 2),
                Pose::rise(20.0).with_scale(0.8),
                0.3,
                0.2,
                0.5,
                Ease::OutBack,
            );
            b.group(
                (0..diagram::TRUST_FACTORS.len()).map(Part::Connector),
                Pose::HIDDEN.with_scale(0.0),
                0.5,
                0.2,
                0.3,
                Ease::OutBack,
            );
            // The denominator note, then one card per factor.
            b.group(
                (0..diagram::TRUST_FACTORS.len() + 1).map(Part::Detail),
                Pose::rise(15.0),
                1.2,
                0.15,
                0.4,
                Ease::OutQuad,
            );
        }
        Diagram::Timeline => {
            let n = diagram::MILESTONES.len();
            b.track(Part::Line, Pose::REST.with_scale(0.0), 0.2, 1.2, Ease::InOutQuad);
            b.group(
                (0..n).map(Part::Connector),
                Pose::HIDDEN.with_scale(0.0),
                0.4,
                0.15,
                0.4,
                Ease::OutBack,
            );
            b.group(stages(n), Pose::slide(-30.0), 0.6, 0.15, 0.5, Ease::OutQuad);
        }
        Diagram::RiskFramework => b.group(
            stages(diagram::RISK_CATEGORIES.len()),
            Pose::rise(18.0).with_scale(0.97),
            0.3,
            0.08,
            0.45,
            Ease::OutCubic,
        ),
        Diagram::RiskTiers => b.group(
            stages(diagram::RISK_TIERS.len()),
            Pose::slide(-30.0),
            0.3,
            0.2,
            0.5,
            Ease::OutQuad,
        ),
        Diagram::UseCaseTiers => {
            b.group(
                stages(diagram::USE_CASE_TIERS.len()),
                Pose::rise(25.0),
                0.3,
                0.2,
                0.5,
                Ease::OutQuad,
            );
            b.group(
                (0..diagram::use_case_item_count()).map(Part::Detail),
                Pose::slide(-15.0),
                0.6,
                0.06,
                0.3,
                Ease::OutQuad,
            );
        }
        // Stages run top-down: the narrowest tier first.
        Diagram::CapabilityTiers => b.group(
            stages(diagram::CAPABILITY_TIERS.len()),
            Pose::rise(25.0).with_scale(0.95),
            0.3,
            0.2,
            0.5,
            Ease::OutBack,
        ),
    }

    // Axis labels, hints and footers.
    let notes = match d {
        Diagram::ImpactMatrix => Some(0.2),
        Diagram::RiskFramework => Some(0.8),
        Diagram::RiskTiers => Some(1.0),
        Diagram::UseCaseTiers => Some(1.2),
        _ => None,
    };
    if let Some(delay) = notes {
        b.track(Part::Notes, Pose::HIDDEN, delay, 0.4, Ease::OutCubic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Deck, parse_yaml};
    use std::time::Duration;

    fn find(deck: &Deck, id: &str) -> Slide {
        deck.slides.iter().find(|s| s.id == id).unwrap().clone()
    }

    #[test]
    fn test_every_builtin_slide_settles() {
        let deck = Deck::builtin().unwrap();
        let t0 = Instant::now();
        let end = t0 + Duration::from_secs(10);
        for slide in &deck.slides {
            let scope = Choreography::default().entrance(slide, t0);
            assert!(!scope.is_empty(), "{} has no entrance", slide.id);
            assert!(!scope.is_complete(t0), "{} starts complete", slide.id);
            assert!(scope.is_complete(end), "{} never settles", slide.id);
        }
    }

    #[test]
    fn test_split_list_animates_columns_from_opposite_sides() {
        let deck = Deck::builtin().unwrap();
        let slide = find(&deck, "stakeholder-mapping");
        let t0 = Instant::now();
        let scope = Choreography::default().entrance(&slide, t0);
        assert!(scope.has(Part::Left(2)));
        assert!(scope.has(Part::Right(2)));
        assert!(!scope.has(Part::Left(3)));
        assert!(!scope.has(Part::Item(0)));
        assert!(scope.pose(Part::Left(0), t0).dx < 0.0);
        assert!(scope.pose(Part::Right(0), t0).dx > 0.0);
    }

    #[test]
    fn test_default_list_staggers_items() {
        let deck = Deck::builtin().unwrap();
        let slide = find(&deck, "key-lessons");
        let t0 = Instant::now();
        let scope = Choreography::default().entrance(&slide, t0);
        let t = t0 + Duration::from_secs_f32(0.5);
        let a = scope.pose(Part::Item(0), t).opacity;
        let b = scope.pose(Part::Item(1), t).opacity;
        assert!(a > b, "item 0 ({a}) should lead item 1 ({b})");
        assert!(!scope.has(Part::Body));
    }

    #[test]
    fn test_stat_counters_follow_stats() {
        let deck = Deck::builtin().unwrap();
        let slide = find(&deck, "governance-before-scale");
        let scope = Choreography::default().entrance(&slide, Instant::now());
        assert!(scope.counter(0).is_some());
        assert!(scope.counter(1).is_some());
        assert!(scope.counter(2).is_none());
    }

    #[test]
    fn test_speed_shortens_timeline() {
        let deck = Deck::builtin().unwrap();
        let slide = find(&deck, "ai-theater-problem");
        let t0 = Instant::now();
        let t = t0 + Duration::from_secs_f32(1.5);
        assert!(!Choreography::default().entrance(&slide, t0).is_complete(t));
        assert!(Choreography::new(4.0).entrance(&slide, t0).is_complete(t));
    }

    #[test]
    fn test_maturity_steps_grow_from_the_left() {
        let deck = Deck::builtin().unwrap();
        let slide = find(&deck, "maturity-model");
        let t0 = Instant::now();
        let scope = Choreography::default().entrance(&slide, t0);

        let first = scope.pose(Part::Stage(0), t0);
        assert_eq!(first.opacity, 0.0);
        assert_eq!(first.dx, -40.0);
        assert_eq!(first.scale_x, 0.3);
        assert!(scope.has(Part::Stage(4)));
        assert!(!scope.has(Part::Stage(5)));

        // 0.3s in, then 0.15s apart.
        let t = t0 + Duration::from_secs_f32(0.4);
        assert!(scope.pose(Part::Stage(0), t).opacity > 0.0);
        assert_eq!(scope.pose(Part::Stage(1), t).opacity, 0.0);
        let end = t0 + Duration::from_secs_f32(1.5);
        assert_eq!(scope.pose(Part::Stage(4), end), Pose::REST);
    }

    #[test]
    fn test_diagram_groups_follow_their_content() {
        let deck = Deck::builtin().unwrap();
        let t0 = Instant::now();
        let entrance = |id: &str| Choreography::default().entrance(&find(&deck, id), t0);

        let matrix = entrance("quick-wins-matrix");
        assert!(matrix.has(Part::Stage(3)));
        assert!(!matrix.has(Part::Stage(4)));
        assert!(matrix.has(Part::Detail(14)));
        assert!(!matrix.has(Part::Detail(15)));

        let acku = entrance("acku-framework");
        assert!(acku.has(Part::Connector(2)));
        assert!(!acku.has(Part::Connector(3)));
        let line = acku.pose(Part::Line, t0);
        assert_eq!(line.scale, 0.0);
        assert_eq!(line.opacity, 1.0);

        let trust = entrance("trust-equation");
        assert!(trust.has(Part::Stage(4)));
        assert!(trust.has(Part::Connector(2)));
        assert!(trust.has(Part::Detail(3)));
        assert!(!trust.has(Part::Detail(4)));

        let curve = entrance("adoption-curve");
        assert_eq!(curve.pose(Part::Fill, t0).opacity, 0.0);
        // Labels wait for the curve.
        let t = t0 + Duration::from_secs_f32(1.0);
        assert!(curve.pose(Part::Line, t).scale > 0.0);
        assert_eq!(curve.pose(Part::Stage(0), t).opacity, 0.0);

        let timeline = entrance("case-study-timeline");
        assert!(timeline.has(Part::Connector(4)));
        assert!(timeline.pose(Part::Stage(0), t0).dx < 0.0);
    }

    #[test]
    fn test_diagram_notes_fade_in_last() {
        let deck = Deck::builtin().unwrap();
        let t0 = Instant::now();
        let tiers = Choreography::default().entrance(&find(&deck, "risk-tiers"), t0);
        let t = t0 + Duration::from_secs_f32(0.9);
        assert!(tiers.pose(Part::Stage(0), t).opacity > 0.0);
        assert_eq!(tiers.pose(Part::Notes, t).opacity, 0.0);

        let maturity = Choreography::default().entrance(&find(&deck, "maturity-model"), t0);
        assert!(!maturity.has(Part::Notes));
    }

    #[test]
    fn test_unknown_diagram_gets_placeholder_entrance() {
        let deck = parse_yaml(
            "slides:\n  - id: v\n    type: visualization\n    title: T\n    visualization: org-chart\n  - id: w\n    type: visualization\n    title: T\n",
        )
        .unwrap();
        let t0 = Instant::now();
        let scope = Choreography::default().entrance(&deck.slides[0], t0);
        assert!(scope.has(Part::Stage(0)));
        assert!(!scope.has(Part::Stage(1)));
        assert!(!scope.has(Part::Line));
        let bare = Choreography::default().entrance(&deck.slides[1], t0);
        assert!(bare.has(Part::Heading));
        assert!(!bare.has(Part::Stage(0)));
    }

    #[test]
    fn test_unknown_kind_uses_content_choreography() {
        let deck =
            parse_yaml("slides:\n  - id: x\n    type: hologram\n    title: T\n").unwrap();
        let scope = Choreography::default().entrance(&deck.slides[0], Instant::now());
        assert!(scope.has(Part::Heading));
        assert!(!scope.has(Part::Body));
        assert!(!scope.has(Part::Kicker));
    }
}

//! One-shot entrance animation for the mounted slide.

use std::time::Instant;

use super::choreography::Choreography;
use super::counter::{self, CountUp};
use super::tween::{Pose, Tween};
use crate::deck::{Slide, Stat};

/// An animatable element of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Kicker,
    Heading,
    Subtitle,
    Body,
    Rule,
    Item(usize),
    Left(usize),
    Right(usize),
    Card(usize),
    /// A diagram's main blocks: levels, quadrants, phases, tiers.
    Stage(usize),
    /// Rows inside diagram blocks, numbered across the whole diagram.
    Detail(usize),
    /// Arrows, operators and markers between blocks.
    Connector(usize),
    /// A diagram's drawn line or curve; its scale is the drawn fraction.
    Line,
    Fill,
    Quote,
    Attribution,
    Prompt,
    Notes,
    Image,
}

/// Owns every tween created for one entrance. Dropping it releases them all,
/// so nothing keeps animating a slide that is no longer mounted.
#[derive(Debug)]
pub struct EntranceScope {
    tracks: Vec<(Part, Tween<Pose>)>,
    counters: Vec<Option<CountUp>>,
}

impl EntranceScope {
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            counters: Vec::new(),
        }
    }

    pub fn add(&mut self, part: Part, tween: Tween<Pose>) {
        self.tracks.push((part, tween));
    }

    /// Counters are indexed like the slide's stats; non-numeric stats get `None`.
    pub fn add_counter(&mut self, counter: Option<CountUp>) {
        self.counters.push(counter);
    }

    pub fn len(&self) -> usize {
        self.tracks.len() + self.counters.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has(&self, part: Part) -> bool {
        self.tracks.iter().any(|(p, _)| *p == part)
    }

    pub fn pose(&self, part: Part, now: Instant) -> Pose {
        self.tracks
            .iter()
            .find(|(p, _)| *p == part)
            .map_or(Pose::REST, |(_, t)| t.value(now))
    }

    pub fn counter(&self, index: usize) -> Option<&CountUp> {
        self.counters.get(index).and_then(Option::as_ref)
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        self.tracks.iter().all(|(_, t)| t.is_complete(now))
            && self.counters.iter().flatten().all(|c| c.is_complete(now))
    }
}

impl Default for EntranceScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EntranceScope {
    fn drop(&mut self) {
        tracing::trace!(tweens = self.len(), "entrance scope released");
    }
}

/// Lifecycle of a slide's entrance: `Idle → Animating → Settled`, back to
/// `Idle` on deactivation.
#[derive(Debug, Default)]
pub enum EntranceState {
    #[default]
    Idle,
    Animating(EntranceScope),
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrancePhase {
    Idle,
    Animating,
    Settled,
}

#[derive(Debug)]
pub struct SlideAnimator {
    choreography: Choreography,
    state: EntranceState,
    entrances: u32,
}

impl SlideAnimator {
    pub fn new(choreography: Choreography) -> Self {
        Self {
            choreography,
            state: EntranceState::Idle,
            entrances: 0,
        }
    }

    pub fn phase(&self) -> EntrancePhase {
        match self.state {
            EntranceState::Idle => EntrancePhase::Idle,
            EntranceState::Animating(_) => EntrancePhase::Animating,
            EntranceState::Settled => EntrancePhase::Settled,
        }
    }

    /// How many entrances have started over this animator's life.
    pub fn entrances(&self) -> u32 {
        self.entrances
    }

    /// Report the slide's active flag. Returns `true` when this call started
    /// an entrance; staying active never starts a second one.
    pub fn set_active(&mut self, slide: &Slide, active: bool, now: Instant) -> bool {
        if !active {
            if !matches!(self.state, EntranceState::Idle) {
                tracing::trace!(slide = %slide.id, "deactivated, entrance reset");
            }
            self.state = EntranceState::Idle;
            return false;
        }
        if !matches!(self.state, EntranceState::Idle) {
            return false;
        }

        let scope = self.choreography.entrance(slide, now);
        self.entrances += 1;
        tracing::debug!(
            slide = %slide.id,
            renderer = ?slide.renderer(),
            tweens = scope.len(),
            "entrance started"
        );
        self.state = EntranceState::Animating(scope);
        true
    }

    /// Drop the scope once every tween has finished.
    pub fn update(&mut self, now: Instant) {
        if let EntranceState::Animating(scope) = &self.state {
            if scope.is_complete(now) {
                self.state = EntranceState::Settled;
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, EntranceState::Animating(_))
    }

    pub fn pose(&self, part: Part, now: Instant) -> Pose {
        match &self.state {
            EntranceState::Animating(scope) => scope.pose(part, now),
            EntranceState::Idle | EntranceState::Settled => Pose::REST,
        }
    }

    /// Display text for the `index`-th stat.
    pub fn stat_text(&self, index: usize, stat: &Stat, now: Instant) -> String {
        match &self.state {
            EntranceState::Animating(scope) => scope
                .counter(index)
                .map_or_else(|| self.resting_stat_text(stat), |c| c.text(now)),
            EntranceState::Idle | EntranceState::Settled => self.resting_stat_text(stat),
        }
    }

    /// The text a stat shows once its count-up is over.
    pub fn resting_stat_text(&self, stat: &Stat) -> String {
        counter::settled_text(stat, self.choreography.decimals)
    }
}

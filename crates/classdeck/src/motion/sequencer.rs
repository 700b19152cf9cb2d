//! Exit → hide → swap → enter pipeline for the slide container.
//!
//! The sequencer never reads the clock itself: every call takes `now`, and
//! the caller applies the returned [`SequencerEvent`]s in order.

use std::time::Instant;

use super::ease::Ease;
use super::tween::{Lerp, Tween};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Direction of travel from `from` to `to`, `None` when they are equal.
    pub fn between(from: usize, to: usize) -> Option<Self> {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Some(Self::Forward),
            std::cmp::Ordering::Less => Some(Self::Backward),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// Timing for one transition. Passed into every [`TransitionSequencer::begin`]
/// call, so no transition can leak settings into the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub exit_duration: f32,
    pub enter_duration: f32,
    /// Horizontal travel in reference pixels.
    pub offset: f32,
    pub exit_ease: Ease,
    pub enter_ease: Ease,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            exit_duration: 0.24,
            enter_duration: 0.34,
            offset: 40.0,
            exit_ease: Ease::InCubic,
            enter_ease: Ease::OutCubic,
        }
    }
}

impl TransitionConfig {
    /// Same curves, durations divided by `speed`.
    pub fn scaled(self, speed: f32) -> Self {
        let speed = if speed > 0.0 { speed } else { 1.0 };
        Self {
            exit_duration: self.exit_duration / speed,
            enter_duration: self.enter_duration / speed,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerPose {
    pub opacity: f32,
    pub offset_x: f32,
}

impl ContainerPose {
    pub const VISIBLE: ContainerPose = ContainerPose {
        opacity: 1.0,
        offset_x: 0.0,
    };

    fn hidden_at(offset_x: f32) -> Self {
        Self {
            opacity: 0.0,
            offset_x,
        }
    }
}

impl Lerp for ContainerPose {
    fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            opacity: self.opacity.lerp(to.opacity, t),
            offset_x: self.offset_x.lerp(to.offset_x, t),
        }
    }
}

/// The mounted slide frame. At most one tween drives it at a time.
#[derive(Debug)]
struct Container {
    pose: ContainerPose,
    tween: Option<Tween<ContainerPose>>,
}

impl Container {
    fn new() -> Self {
        Self {
            pose: ContainerPose::VISIBLE,
            tween: None,
        }
    }

    fn pose(&self, now: Instant) -> ContainerPose {
        self.tween.map_or(self.pose, |t| t.value(now))
    }

    /// Stop any running tween, freezing the container where it is.
    fn kill(&mut self, now: Instant) {
        if let Some(tween) = self.tween.take() {
            self.pose = tween.value(now);
        }
    }

    fn set(&mut self, pose: ContainerPose) {
        self.tween = None;
        self.pose = pose;
    }

    fn animate(&mut self, to: ContainerPose, duration: f32, ease: Ease, now: Instant) {
        self.kill(now);
        self.tween = Some(
            Tween::new(self.pose, to, now)
                .duration(duration)
                .ease(ease),
        );
    }

    /// True once no tween is running; commits the final pose.
    fn settle(&mut self, now: Instant) -> bool {
        match self.tween {
            Some(tween) if tween.is_complete(now) => {
                self.set(tween.target());
                true
            }
            Some(_) => false,
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SequencerEvent {
    /// Make `index` the active slide. The container is already hidden.
    Swap(usize),
    /// The transition is over; navigation may resume.
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Exiting,
    AwaitingEnter,
    Entering,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Idle,
    Exiting {
        target: usize,
        direction: Direction,
        config: TransitionConfig,
    },
    AwaitingEnter {
        config: TransitionConfig,
    },
    Entering,
}

#[derive(Debug)]
pub struct TransitionSequencer {
    state: State,
    container: Option<Container>,
}

impl Default for TransitionSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionSequencer {
    /// A sequencer with a mounted, visible container.
    pub fn new() -> Self {
        Self {
            state: State::Idle,
            container: Some(Container::new()),
        }
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Exiting { .. } => Phase::Exiting,
            State::AwaitingEnter { .. } => Phase::AwaitingEnter,
            State::Entering => Phase::Entering,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle)
    }

    /// Mount the container, visible and at rest.
    pub fn attach(&mut self) {
        if self.container.is_none() {
            self.container = Some(Container::new());
        }
    }

    /// Unmount the container. Any phase that still needs it finishes
    /// without animation on the next [`update`](Self::update).
    pub fn detach(&mut self) {
        self.container = None;
    }

    /// Current container pose; a detached container reads as visible.
    pub fn container_pose(&self, now: Instant) -> ContainerPose {
        self.container
            .as_ref()
            .map_or(ContainerPose::VISIBLE, |c| c.pose(now))
    }

    /// Start a transition to `target`. Returns events that must be applied
    /// immediately (only when there is no container to animate).
    pub fn begin(
        &mut self,
        target: usize,
        direction: Direction,
        config: TransitionConfig,
        now: Instant,
    ) -> Vec<SequencerEvent> {
        if !self.is_idle() {
            tracing::trace!(index = target, phase = ?self.phase(), "sequencer busy, begin ignored");
            return Vec::new();
        }

        let Some(container) = self.container.as_mut() else {
            tracing::trace!(index = target, "no container, swapping without animation");
            return vec![SequencerEvent::Swap(target), SequencerEvent::Released];
        };

        let exit = ContainerPose::hidden_at(-config.offset * direction.sign());
        container.animate(exit, config.exit_duration, config.exit_ease, now);
        self.state = State::Exiting {
            target,
            direction,
            config,
        };
        tracing::trace!(index = target, ?direction, "exit started");
        Vec::new()
    }

    /// Advance the state machine.
    pub fn update(&mut self, now: Instant) -> Vec<SequencerEvent> {
        match self.state {
            State::Idle => Vec::new(),
            State::Exiting {
                target,
                direction,
                config,
            } => {
                let Some(container) = self.container.as_mut() else {
                    self.state = State::Idle;
                    return vec![SequencerEvent::Swap(target), SequencerEvent::Released];
                };
                if !container.settle(now) {
                    return Vec::new();
                }
                // Hide at the entry side before the swap so the incoming
                // slide never paints visible and centered.
                container.set(ContainerPose::hidden_at(config.offset * direction.sign()));
                self.state = State::AwaitingEnter { config };
                tracing::trace!(index = target, "exit complete, swapping");
                vec![SequencerEvent::Swap(target)]
            }
            State::AwaitingEnter { .. } => {
                if self.container.is_some() {
                    return Vec::new();
                }
                self.state = State::Idle;
                vec![SequencerEvent::Released]
            }
            State::Entering => {
                let settled = self.container.as_mut().is_none_or(|c| c.settle(now));
                if !settled {
                    return Vec::new();
                }
                self.state = State::Idle;
                tracing::trace!("enter complete");
                vec![SequencerEvent::Released]
            }
        }
    }

    /// Called once the swapped-in slide has been laid out and painted.
    pub fn after_paint(&mut self, now: Instant) {
        let State::AwaitingEnter { config } = self.state else {
            return;
        };
        let Some(container) = self.container.as_mut() else {
            return;
        };
        container.animate(
            ContainerPose::VISIBLE,
            config.enter_duration,
            config.enter_ease,
            now,
        );
        self.state = State::Entering;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(t0: Instant, secs: f32) -> Instant {
        t0 + Duration::from_secs_f32(secs)
    }

    #[test]
    fn test_direction_between() {
        assert_eq!(Direction::between(2, 5), Some(Direction::Forward));
        assert_eq!(Direction::between(5, 2), Some(Direction::Backward));
        assert_eq!(Direction::between(3, 3), None);
    }

    #[test]
    fn test_full_pipeline_order() {
        let t0 = Instant::now();
        let mut seq = TransitionSequencer::new();
        let config = TransitionConfig::default();

        assert!(seq.begin(1, Direction::Forward, config, t0).is_empty());
        assert_eq!(seq.phase(), Phase::Exiting);

        // Mid-exit: fading and moving left.
        let mid = seq.container_pose(at(t0, 0.12));
        assert!(mid.opacity < 1.0 && mid.opacity > 0.0);
        assert!(mid.offset_x < 0.0);
        assert!(seq.update(at(t0, 0.12)).is_empty());

        // Exit done: swap is emitted with the container already hidden on the right.
        let events = seq.update(at(t0, 0.25));
        assert_eq!(events, vec![SequencerEvent::Swap(1)]);
        let hidden = seq.container_pose(at(t0, 0.25));
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.offset_x, 40.0);
        assert_eq!(seq.phase(), Phase::AwaitingEnter);

        // Nothing happens until the new content has been painted.
        assert!(seq.update(at(t0, 1.0)).is_empty());
        assert_eq!(seq.container_pose(at(t0, 1.0)).opacity, 0.0);

        seq.after_paint(at(t0, 1.0));
        assert_eq!(seq.phase(), Phase::Entering);
        assert!(seq.update(at(t0, 1.2)).is_empty());
        assert_eq!(seq.update(at(t0, 1.35)), vec![SequencerEvent::Released]);
        assert!(seq.is_idle());
        assert_eq!(seq.container_pose(at(t0, 1.35)), ContainerPose::VISIBLE);
    }

    #[test]
    fn test_backward_mirrors_offsets() {
        let t0 = Instant::now();
        let mut seq = TransitionSequencer::new();
        seq.begin(0, Direction::Backward, TransitionConfig::default(), t0);
        assert!(seq.container_pose(at(t0, 0.2)).offset_x > 0.0);
        seq.update(at(t0, 0.3));
        assert_eq!(seq.container_pose(at(t0, 0.3)).offset_x, -40.0);
    }

    #[test]
    fn test_detached_container_swaps_immediately() {
        let t0 = Instant::now();
        let mut seq = TransitionSequencer::new();
        seq.detach();
        let events = seq.begin(4, Direction::Forward, TransitionConfig::default(), t0);
        assert_eq!(
            events,
            vec![SequencerEvent::Swap(4), SequencerEvent::Released]
        );
        assert!(seq.is_idle());
    }

    #[test]
    fn test_detach_mid_exit_finishes_on_next_update() {
        let t0 = Instant::now();
        let mut seq = TransitionSequencer::new();
        seq.begin(2, Direction::Forward, TransitionConfig::default(), t0);
        seq.detach();
        assert_eq!(
            seq.update(at(t0, 0.05)),
            vec![SequencerEvent::Swap(2), SequencerEvent::Released]
        );
        assert!(seq.is_idle());
    }

    #[test]
    fn test_detach_while_awaiting_enter_releases() {
        let t0 = Instant::now();
        let mut seq = TransitionSequencer::new();
        seq.begin(2, Direction::Forward, TransitionConfig::default(), t0);
        seq.update(at(t0, 0.3));
        seq.detach();
        seq.after_paint(at(t0, 0.3));
        assert_eq!(seq.update(at(t0, 0.31)), vec![SequencerEvent::Released]);
    }

    #[test]
    fn test_detach_mid_enter_releases() {
        let t0 = Instant::now();
        let mut seq = TransitionSequencer::new();
        seq.begin(2, Direction::Forward, TransitionConfig::default(), t0);
        seq.update(at(t0, 0.3));
        seq.after_paint(at(t0, 0.3));
        seq.detach();
        assert_eq!(seq.update(at(t0, 0.31)), vec![SequencerEvent::Released]);
        seq.attach();
        assert_eq!(seq.container_pose(at(t0, 0.31)), ContainerPose::VISIBLE);
    }

    #[test]
    fn test_begin_while_busy_is_ignored() {
        let t0 = Instant::now();
        let mut seq = TransitionSequencer::new();
        seq.begin(1, Direction::Forward, TransitionConfig::default(), t0);
        assert!(
            seq.begin(3, Direction::Forward, TransitionConfig::default(), t0)
                .is_empty()
        );
        assert_eq!(seq.update(at(t0, 0.3)), vec![SequencerEvent::Swap(1)]);
    }

    #[test]
    fn test_config_is_scoped_per_call() {
        let t0 = Instant::now();
        let mut seq = TransitionSequencer::new();
        let fast = TransitionConfig::default().scaled(2.0);
        seq.begin(1, Direction::Forward, fast, t0);
        assert_eq!(seq.update(at(t0, 0.13)), vec![SequencerEvent::Swap(1)]);
        seq.after_paint(at(t0, 0.13));
        assert_eq!(seq.update(at(t0, 0.31)), vec![SequencerEvent::Released]);

        // The next call uses its own, nominal timing.
        seq.begin(2, Direction::Forward, TransitionConfig::default(), at(t0, 1.0));
        assert!(seq.update(at(t0, 1.13)).is_empty());
        assert_eq!(seq.update(at(t0, 1.25)), vec![SequencerEvent::Swap(2)]);
    }

    #[test]
    fn test_scaled_ignores_nonpositive_speed() {
        let config = TransitionConfig::default();
        assert_eq!(config.scaled(0.0), config);
        assert_eq!(config.scaled(-3.0), config);
    }
}

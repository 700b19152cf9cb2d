//! Slide navigation: the current index, the transition guard and overview
//! mode, driven by [`NavCommand`]s from the input adapters.

pub mod input;

use std::time::Instant;

use crate::motion::sequencer::{
    ContainerPose, Direction, SequencerEvent, TransitionConfig, TransitionSequencer,
};

pub use input::{ClickZones, NavCommand, SwipeTracker};

#[derive(Debug)]
pub struct NavigationController {
    len: usize,
    current: usize,
    transitioning: bool,
    overview: bool,
    config: TransitionConfig,
    sequencer: TransitionSequencer,
}

impl NavigationController {
    /// Start at slide 0 with the overview closed.
    pub fn new(len: usize, config: TransitionConfig) -> Self {
        Self {
            len,
            current: 0,
            transitioning: false,
            overview: false,
            config,
            sequencer: TransitionSequencer::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn is_overview_open(&self) -> bool {
        self.overview
    }

    pub fn container_pose(&self, now: Instant) -> ContainerPose {
        self.sequencer.container_pose(now)
    }

    /// Request a transition to `target`. Out-of-range, same-index and
    /// mid-transition requests are dropped and return `false`.
    pub fn go_to(&mut self, target: usize, now: Instant) -> bool {
        if target >= self.len {
            tracing::trace!(index = target, len = self.len, "out of range, ignored");
            return false;
        }
        if self.transitioning {
            tracing::trace!(index = target, "transition in flight, ignored");
            return false;
        }
        let Some(direction) = Direction::between(self.current, target) else {
            return false;
        };

        self.transitioning = true;
        tracing::debug!(from = self.current, to = target, ?direction, "navigating");
        let events = self.sequencer.begin(target, direction, self.config, now);
        self.apply(events);
        true
    }

    pub fn next(&mut self, now: Instant) -> bool {
        self.step(1, now)
    }

    pub fn previous(&mut self, now: Instant) -> bool {
        self.step(-1, now)
    }

    /// Move `delta` slides from the current one. Never wraps.
    pub fn step(&mut self, delta: isize, now: Instant) -> bool {
        match self.current.checked_add_signed(delta) {
            Some(target) => self.go_to(target, now),
            None => false,
        }
    }

    /// Advance the transition and apply whatever it emits.
    /// Returns `true` when the current slide changed.
    pub fn update(&mut self, now: Instant) -> bool {
        let events = self.sequencer.update(now);
        self.apply(events)
    }

    /// The swapped-in slide has been painted; let it enter.
    pub fn after_paint(&mut self, now: Instant) {
        self.sequencer.after_paint(now);
    }

    fn apply(&mut self, events: Vec<SequencerEvent>) -> bool {
        let mut swapped = false;
        for event in events {
            match event {
                SequencerEvent::Swap(index) => {
                    self.current = index;
                    swapped = true;
                }
                SequencerEvent::Released => {
                    self.transitioning = false;
                    tracing::trace!(index = self.current, "navigation released");
                }
            }
        }
        swapped
    }

    pub fn open_overview(&mut self) {
        if self.overview {
            return;
        }
        self.overview = true;
        // The slide container is unmounted behind the grid; a transition
        // still in flight finishes without animation on the next update.
        self.sequencer.detach();
        tracing::debug!(index = self.current, "overview opened");
    }

    pub fn close_overview(&mut self) {
        if !self.overview {
            return;
        }
        self.overview = false;
        self.sequencer.attach();
        tracing::debug!(index = self.current, "overview closed");
    }

    pub fn toggle_overview(&mut self) {
        if self.overview {
            self.close_overview();
        } else {
            self.open_overview();
        }
    }

    /// Jump to thumbnail `index` and leave the overview.
    pub fn select_thumbnail(&mut self, index: usize, now: Instant) -> bool {
        let accepted = self.go_to(index, now);
        self.close_overview();
        accepted
    }

    /// Dispatch one input command. Returns `true` if it changed anything.
    pub fn handle(&mut self, command: NavCommand, now: Instant) -> bool {
        match command {
            NavCommand::Next => self.next(now),
            NavCommand::Previous => self.previous(now),
            NavCommand::First => self.go_to(0, now),
            NavCommand::Last => self.go_to(self.len.saturating_sub(1), now),
            NavCommand::GoTo(index) => self.go_to(index, now),
            NavCommand::ToggleOverview => {
                self.toggle_overview();
                true
            }
            NavCommand::CloseOverview => {
                let open = self.overview;
                self.close_overview();
                open
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const FRAME: Duration = Duration::from_millis(16);

    fn nav(len: usize) -> NavigationController {
        NavigationController::new(len, TransitionConfig::default())
    }

    /// Drive frames until the guard clears, painting after every update.
    fn settle(nav: &mut NavigationController, mut now: Instant) -> Instant {
        for _ in 0..200 {
            nav.update(now);
            nav.after_paint(now);
            if !nav.is_transitioning() {
                return now;
            }
            now += FRAME;
        }
        panic!("navigation never released");
    }

    #[test]
    fn test_starts_at_first_slide() {
        let n = nav(5);
        assert_eq!(n.current(), 0);
        assert!(!n.is_transitioning());
        assert!(!n.is_overview_open());
    }

    #[test]
    fn test_bounds_invariant() {
        let mut n = nav(3);
        let mut now = Instant::now();
        assert!(!n.go_to(3, now));
        assert!(!n.go_to(usize::MAX, now));
        assert!(!n.step(-1, now));
        assert!(!n.is_transitioning());
        assert_eq!(n.current(), 0);

        let moves: [isize; 9] = [1, 1, 1, 1, -1, -1, -1, -1, 2];
        for delta in moves {
            n.step(delta, now);
            now = settle(&mut n, now);
            assert!(n.current() < n.len());
        }
        assert_eq!(n.current(), 2);
    }

    #[test]
    fn test_at_most_one_transition() {
        let mut n = nav(5);
        let t0 = Instant::now();
        assert!(n.go_to(3, t0));
        assert!(!n.go_to(1, t0 + FRAME));
        assert!(!n.go_to(4, t0 + FRAME * 2));
        assert_eq!(n.current(), 0);
        settle(&mut n, t0);
        assert_eq!(n.current(), 3);
    }

    #[test]
    fn test_same_index_is_noop() {
        let mut n = nav(5);
        let t0 = Instant::now();
        assert!(!n.go_to(0, t0));
        assert!(!n.is_transitioning());
        assert_eq!(n.container_pose(t0), ContainerPose::VISIBLE);
    }

    #[test]
    fn test_boundary_no_wrap() {
        let mut n = nav(4);
        let t0 = Instant::now();
        assert!(!n.previous(t0));
        assert_eq!(n.current(), 0);

        assert!(n.handle(NavCommand::Last, t0));
        let t = settle(&mut n, t0);
        assert_eq!(n.current(), 3);
        assert!(!n.next(t));
        assert!(!n.is_transitioning());
        assert_eq!(n.current(), 3);
    }

    #[test]
    fn test_rapid_next_only_first_accepted() {
        let mut n = nav(5);
        let t0 = Instant::now();
        assert!(n.next(t0));
        assert!(!n.next(t0 + Duration::from_millis(30)));
        assert!(!n.next(t0 + Duration::from_millis(60)));
        let t = settle(&mut n, t0);
        assert_eq!(n.current(), 1);

        // Serial calls after each release all go through.
        let t = settle(&mut n, t + FRAME);
        assert!(n.next(t));
        let t = settle(&mut n, t);
        assert!(n.next(t));
        settle(&mut n, t);
        assert_eq!(n.current(), 3);
    }

    #[test]
    fn test_swap_waits_for_exit() {
        let mut n = nav(5);
        let t0 = Instant::now();
        n.next(t0);
        assert!(!n.update(t0 + Duration::from_millis(100)));
        assert_eq!(n.current(), 0);
        assert!(n.update(t0 + Duration::from_millis(250)));
        assert_eq!(n.current(), 1);
        // Still guarded until the enter animation has played.
        assert!(n.is_transitioning());
        assert!(!n.next(t0 + Duration::from_millis(260)));
    }

    #[test]
    fn test_overview_round_trip() {
        let mut n = nav(6);
        let t0 = Instant::now();
        n.open_overview();
        assert!(n.is_overview_open());
        assert!(n.select_thumbnail(4, t0));
        assert_eq!(n.current(), 4);
        assert!(!n.is_overview_open());
        assert!(!n.is_transitioning());

        n.handle(NavCommand::ToggleOverview, t0);
        n.handle(NavCommand::ToggleOverview, t0);
        assert!(!n.is_overview_open());
        assert_eq!(n.current(), 4);
    }

    #[test]
    fn test_select_current_thumbnail_just_closes() {
        let mut n = nav(3);
        n.open_overview();
        assert!(!n.select_thumbnail(0, Instant::now()));
        assert!(!n.is_overview_open());
        assert_eq!(n.current(), 0);
    }

    #[test]
    fn test_overview_mid_transition_releases_guard() {
        let mut n = nav(5);
        let t0 = Instant::now();
        n.next(t0);
        n.open_overview();
        n.update(t0 + FRAME);
        assert_eq!(n.current(), 1);
        assert!(!n.is_transitioning());
        n.close_overview();
        assert!(n.next(t0 + FRAME * 2));
    }

    #[test]
    fn test_overview_open_after_swap_releases_guard() {
        let mut n = nav(5);
        let t0 = Instant::now();
        n.next(t0);
        n.update(t0 + Duration::from_millis(250));
        assert_eq!(n.current(), 1);
        n.open_overview();
        n.update(t0 + Duration::from_millis(270));
        assert!(!n.is_transitioning());
    }

    #[test]
    fn test_keys_navigate_immediately_in_overview() {
        let mut n = nav(5);
        let t0 = Instant::now();
        n.open_overview();
        assert!(n.handle(NavCommand::Next, t0));
        assert_eq!(n.current(), 1);
        assert!(!n.is_transitioning());
        assert!(n.handle(NavCommand::CloseOverview, t0));
        assert!(!n.handle(NavCommand::CloseOverview, t0));
    }

    #[test]
    fn test_empty_deck_never_moves() {
        let mut n = nav(0);
        let t0 = Instant::now();
        assert!(n.is_empty());
        assert!(!n.next(t0));
        assert!(!n.handle(NavCommand::Last, t0));
        assert!(!n.go_to(0, t0));
    }
}

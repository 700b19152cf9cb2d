//! Keyboard, touch and click-zone adapters producing [`NavCommand`]s.

use eframe::egui::{self, Key, Modifiers, Pos2, Rect};

/// Minimum horizontal travel for a swipe, in logical points.
pub const SWIPE_MIN_DX: f32 = 50.0;
/// Width of the previous/next click strips at the window edges.
pub const CLICK_ZONE_WIDTH: f32 = 64.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    First,
    Last,
    GoTo(usize),
    ToggleOverview,
    CloseOverview,
}

const KEYMAP: &[(Key, NavCommand)] = &[
    (Key::ArrowRight, NavCommand::Next),
    (Key::Space, NavCommand::Next),
    (Key::PageDown, NavCommand::Next),
    (Key::ArrowLeft, NavCommand::Previous),
    (Key::PageUp, NavCommand::Previous),
    (Key::Home, NavCommand::First),
    (Key::End, NavCommand::Last),
    (Key::O, NavCommand::ToggleOverview),
];

/// Command bound to `key`. Escape only means something while the overview
/// is open.
pub fn command_for_key(key: Key, overview_open: bool) -> Option<NavCommand> {
    if key == Key::Escape {
        return overview_open.then_some(NavCommand::CloseOverview);
    }
    KEYMAP
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, command)| *command)
}

/// Consume every bound key press from this frame's input, in keymap order.
///
/// Consumed keys are removed from the queue so no other widget reacts to them.
pub fn read_keyboard(input: &mut egui::InputState, overview_open: bool) -> Vec<NavCommand> {
    let keys = KEYMAP.iter().map(|(key, _)| *key).chain([Key::Escape]);
    let mut commands = Vec::new();
    for key in keys {
        let Some(command) = command_for_key(key, overview_open) else {
            continue;
        };
        // `O` and `Shift+O` both toggle; Modifiers::NONE matches either.
        if input.consume_key(Modifiers::NONE, key) {
            commands.push(command);
        }
    }
    commands
}

/// A swipe is mostly horizontal and long enough: `|dx| > 50` and
/// `|dx| > 2|dy|`. Leftward swipes advance.
pub fn classify_swipe(dx: f32, dy: f32) -> Option<NavCommand> {
    if dx.abs() > SWIPE_MIN_DX && dx.abs() > 2.0 * dy.abs() {
        Some(if dx < 0.0 {
            NavCommand::Next
        } else {
            NavCommand::Previous
        })
    } else {
        None
    }
}

/// Remembers where the current touch started.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start: Option<(egui::TouchId, Pos2)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_start(&mut self, id: egui::TouchId, pos: Pos2) {
        self.start = Some((id, pos));
    }

    /// Finish the touch `id` at `pos`, classifying it against its start.
    pub fn touch_end(&mut self, id: egui::TouchId, pos: Pos2) -> Option<NavCommand> {
        match self.start {
            Some((start_id, origin)) if start_id == id => {
                self.start = None;
                let delta = pos - origin;
                let command = classify_swipe(delta.x, delta.y);
                tracing::trace!(dx = delta.x, dy = delta.y, ?command, "touch ended");
                command
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Feed this frame's raw events; returns a command for each completed swipe.
    pub fn read_events(&mut self, events: &[egui::Event]) -> Vec<NavCommand> {
        let mut commands = Vec::new();
        for event in events {
            let egui::Event::Touch { id, phase, pos, .. } = event else {
                continue;
            };
            match phase {
                egui::TouchPhase::Start => self.touch_start(*id, *pos),
                egui::TouchPhase::End => commands.extend(self.touch_end(*id, *pos)),
                egui::TouchPhase::Cancel => self.cancel(),
                egui::TouchPhase::Move => {}
            }
        }
        commands
    }
}

/// Previous/next strips along the left and right edges of the frame.
#[derive(Debug, Clone, Copy)]
pub struct ClickZones {
    pub width: f32,
}

impl Default for ClickZones {
    fn default() -> Self {
        Self {
            width: CLICK_ZONE_WIDTH,
        }
    }
}

impl ClickZones {
    pub fn left(&self, frame: Rect) -> Rect {
        Rect::from_min_max(frame.min, egui::pos2(frame.left() + self.width, frame.bottom()))
    }

    pub fn right(&self, frame: Rect) -> Rect {
        Rect::from_min_max(egui::pos2(frame.right() - self.width, frame.top()), frame.max)
    }

    pub fn hit(&self, frame: Rect, pos: Pos2) -> Option<NavCommand> {
        if self.left(frame).contains(pos) {
            Some(NavCommand::Previous)
        } else if self.right(frame).contains(pos) {
            Some(NavCommand::Next)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{TouchDeviceId, TouchId, TouchPhase, pos2};

    fn touch(id: u64, phase: TouchPhase, x: f32, y: f32) -> egui::Event {
        egui::Event::Touch {
            device_id: TouchDeviceId(0),
            id: TouchId(id),
            phase,
            pos: pos2(x, y),
            force: None,
        }
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(command_for_key(Key::ArrowRight, false), Some(NavCommand::Next));
        assert_eq!(command_for_key(Key::Space, false), Some(NavCommand::Next));
        assert_eq!(command_for_key(Key::PageDown, false), Some(NavCommand::Next));
        assert_eq!(command_for_key(Key::ArrowLeft, false), Some(NavCommand::Previous));
        assert_eq!(command_for_key(Key::PageUp, false), Some(NavCommand::Previous));
        assert_eq!(command_for_key(Key::Home, false), Some(NavCommand::First));
        assert_eq!(command_for_key(Key::End, false), Some(NavCommand::Last));
        assert_eq!(command_for_key(Key::O, false), Some(NavCommand::ToggleOverview));
        assert_eq!(command_for_key(Key::A, false), None);
    }

    fn key_press(key: Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_read_keyboard_consumes_bound_keys() {
        let mut input = egui::InputState::default();
        input.events = vec![key_press(Key::Space), key_press(Key::A), key_press(Key::Escape)];
        let commands = read_keyboard(&mut input, false);
        assert_eq!(commands, vec![NavCommand::Next]);
        // Unbound keys, and Escape with the overview closed, stay in the queue.
        assert_eq!(input.events.len(), 2);

        let mut input = egui::InputState::default();
        input.events = vec![key_press(Key::Escape)];
        assert_eq!(read_keyboard(&mut input, true), vec![NavCommand::CloseOverview]);
        assert!(input.events.is_empty());
    }

    #[test]
    fn test_escape_only_closes_open_overview() {
        assert_eq!(command_for_key(Key::Escape, false), None);
        assert_eq!(
            command_for_key(Key::Escape, true),
            Some(NavCommand::CloseOverview)
        );
    }

    #[test]
    fn test_swipe_classification() {
        assert_eq!(classify_swipe(-60.0, 10.0), Some(NavCommand::Next));
        assert_eq!(classify_swipe(60.0, 10.0), Some(NavCommand::Previous));
        assert_eq!(classify_swipe(60.0, 40.0), None);
        assert_eq!(classify_swipe(-50.0, 0.0), None);
        assert_eq!(classify_swipe(0.0, 200.0), None);
    }

    #[test]
    fn test_tracker_pairs_start_and_end() {
        let mut tracker = SwipeTracker::new();
        let events = [
            touch(1, TouchPhase::Start, 300.0, 200.0),
            touch(1, TouchPhase::Move, 270.0, 203.0),
            touch(1, TouchPhase::End, 240.0, 210.0),
        ];
        assert_eq!(tracker.read_events(&events), vec![NavCommand::Next]);

        let steep = [
            touch(2, TouchPhase::Start, 100.0, 100.0),
            touch(2, TouchPhase::End, 160.0, 140.0),
        ];
        assert!(tracker.read_events(&steep).is_empty());
    }

    #[test]
    fn test_tracker_ignores_unmatched_end() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.touch_end(TouchId(9), pos2(0.0, 0.0)), None);
        tracker.touch_start(TouchId(1), pos2(200.0, 0.0));
        assert_eq!(tracker.touch_end(TouchId(2), pos2(0.0, 0.0)), None);
        tracker.cancel();
        assert_eq!(tracker.touch_end(TouchId(1), pos2(0.0, 0.0)), None);
    }

    #[test]
    fn test_click_zones() {
        let frame = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(1280.0, 720.0));
        let zones = ClickZones::default();
        assert_eq!(zones.hit(frame, pos2(10.0, 300.0)), Some(NavCommand::Previous));
        assert_eq!(zones.hit(frame, pos2(1270.0, 300.0)), Some(NavCommand::Next));
        assert_eq!(zones.hit(frame, pos2(640.0, 300.0)), None);
        assert_eq!(zones.hit(frame, pos2(80.0, 300.0)), None);
    }
}

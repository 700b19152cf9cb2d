use eframe::egui;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::deck::Deck;
use crate::motion::{Choreography, SlideAnimator, TransitionConfig};
use crate::nav::{ClickZones, NavCommand, NavigationController, SwipeTracker, input};
use crate::render::image_cache::ImageCache;
use crate::render::overview::{self, OverviewAction};
use crate::render::{self, SlideFrame, background, progress};
use crate::theme::Theme;

/// Repaint interval while nothing is animating, enough for the drifting glow.
const IDLE_REPAINT: Duration = Duration::from_millis(50);

/// Slides are laid out on a 16:9 stage letterboxed inside the window.
const STAGE_ASPECT: f32 = 16.0 / 9.0;

pub struct PresentationApp {
    deck: Deck,
    theme: Theme,
    nav: NavigationController,
    animator: SlideAnimator,
    /// Slide the animator is currently mounted on.
    mounted: Option<usize>,
    images: ImageCache,
    swipes: SwipeTracker,
    zones: ClickZones,
    started: Instant,
}

impl PresentationApp {
    fn new(deck: Deck, base_dir: PathBuf, speed: f32) -> Self {
        let nav = NavigationController::new(deck.len(), TransitionConfig::default().scaled(speed));
        Self {
            theme: Theme::default(),
            nav,
            animator: SlideAnimator::new(Choreography::new(speed)),
            mounted: None,
            images: ImageCache::new(base_dir),
            swipes: SwipeTracker::new(),
            zones: ClickZones::default(),
            started: Instant::now(),
            deck,
        }
    }

    fn handle(&mut self, command: NavCommand, now: Instant) {
        self.nav.handle(command, now);
    }

    fn handle_overview(&mut self, action: OverviewAction, now: Instant) {
        match action {
            OverviewAction::Select(index) => {
                self.nav.select_thumbnail(index, now);
            }
            OverviewAction::Close => self.nav.close_overview(),
        }
    }

    /// Keep the animator on the current slide. The slide is unmounted while
    /// the overview covers it, so closing the overview plays its entrance again.
    fn sync(&mut self, now: Instant) {
        let current = self.nav.current();
        let active = !self.nav.is_overview_open();
        if self.mounted != Some(current) {
            if let Some(old) = self.mounted.and_then(|i| self.deck.slide(i)) {
                self.animator.set_active(old, false, now);
            }
            self.mounted = Some(current);
        }
        if let Some(slide) = self.deck.slide(current) {
            self.animator.set_active(slide, active, now);
        }
        self.animator.update(now);
    }

    fn is_animating(&self) -> bool {
        self.nav.is_transitioning() || self.animator.is_animating()
    }

    fn draw_slide(&self, ui: &mut egui::Ui, stage: egui::Rect, now: Instant) {
        let index = self.nav.current();
        let Some(slide) = self.deck.slide(index) else {
            return;
        };
        let scale = render::compute_scale(stage);
        let container = self.nav.container_pose(now);
        let rect = stage.translate(egui::vec2(container.offset_x * scale, 0.0));
        let accent = self.theme.module_accent(self.deck.module_at(index));

        let child = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(stage)
                .id_salt(("slide", index)),
        );
        let frame = SlideFrame {
            ui: &child,
            theme: &self.theme,
            rect,
            opacity: container.opacity,
            scale,
            accent,
            animator: &self.animator,
            images: &self.images,
            now,
        };
        render::render_slide(&frame, slide);
    }

    /// Faint arrows in the edge click zones while the pointer is over them.
    fn draw_zone_hints(&self, ui: &egui::Ui, rect: egui::Rect) {
        let Some(pos) = ui.ctx().input(|i| i.pointer.hover_pos()) else {
            return;
        };
        let (zone, arrow) = if self.zones.left(rect).contains(pos) {
            (self.zones.left(rect), "\u{2190}")
        } else if self.zones.right(rect).contains(pos) {
            (self.zones.right(rect), "\u{2192}")
        } else {
            return;
        };
        let center = zone.center();
        ui.painter().circle_filled(center, 16.0, self.theme.glass);
        ui.painter().text(
            center,
            egui::Align2::CENTER_CENTER,
            arrow,
            egui::FontId::proportional(16.0),
            self.theme.text_tertiary,
        );
    }
}

impl eframe::App for PresentationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let overview_open = self.nav.is_overview_open();

        // Collect viewport commands to send after the input closure
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();
        let mut commands: Vec<NavCommand> = Vec::new();

        ctx.input_mut(|i| {
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }
            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
            }
            commands = input::read_keyboard(i, overview_open);
            commands.extend(self.swipes.read_events(&i.events));
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        for command in commands {
            self.handle(command, now);
        }

        self.nav.update(now);
        self.sync(now);

        let mut clicked: Option<NavCommand> = None;
        let mut overview_action: Option<OverviewAction> = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.theme.background).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let scale = render::compute_scale(rect);
                let index = self.nav.current();
                let module = self.deck.module_at(index);
                let accent = self.theme.module_accent(module);
                let elapsed = now.duration_since(self.started).as_secs_f32();
                background::paint(ui.painter(), rect, &self.theme, accent, scale, elapsed);

                if self.nav.is_overview_open() {
                    overview_action = overview::show(ui, rect, &self.theme, &self.deck, index);
                    return;
                }

                self.draw_slide(ui, fit_stage(rect), now);
                progress::paint(
                    ui,
                    rect,
                    &self.theme,
                    module,
                    index,
                    self.deck.len(),
                    scale,
                );
                self.draw_zone_hints(ui, rect);

                if overview::toggle_button(ui, rect, &self.theme) {
                    clicked = Some(NavCommand::ToggleOverview);
                } else if let Some(pos) = ui
                    .ctx()
                    .input(|i| i.pointer.primary_clicked().then(|| i.pointer.interact_pos()))
                    .flatten()
                {
                    clicked = self.zones.hit(rect, pos);
                }
            });

        self.nav.after_paint(now);

        if let Some(command) = clicked {
            self.handle(command, now);
        }
        if let Some(action) = overview_action {
            self.handle_overview(action, now);
        }

        if self.is_animating() || clicked.is_some() || overview_action.is_some() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(IDLE_REPAINT);
        }
    }
}

/// Largest 16:9 rect centered in `rect`.
pub fn fit_stage(rect: egui::Rect) -> egui::Rect {
    let size = if rect.width() / rect.height() > STAGE_ASPECT {
        egui::vec2(rect.height() * STAGE_ASPECT, rect.height())
    } else {
        egui::vec2(rect.width(), rect.width() / STAGE_ASPECT)
    };
    egui::Rect::from_center_size(rect.center(), size)
}

/// Window icon: an accent ring on the dark base color.
fn app_icon(theme: &Theme) -> egui::IconData {
    const SIZE: u32 = 64;
    let bg = theme.background;
    let accent = theme.accent;
    let center = (SIZE as f32 - 1.0) / 2.0;
    let image = image::RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let d = ((x as f32 - center).powi(2) + (y as f32 - center).powi(2)).sqrt();
        if (18.0..=26.0).contains(&d) {
            image::Rgba([accent.r(), accent.g(), accent.b(), 255])
        } else if d < 31.5 {
            image::Rgba([bg.r(), bg.g(), bg.b(), 255])
        } else {
            image::Rgba([0, 0, 0, 0])
        }
    });
    egui::IconData {
        rgba: image.into_raw(),
        width: SIZE,
        height: SIZE,
    }
}

pub fn run(deck: Deck, base_dir: PathBuf, windowed: bool, speed: f32) -> anyhow::Result<()> {
    if deck.is_empty() {
        anyhow::bail!("Deck has no slides");
    }
    let title = deck.display_title().to_string();
    tracing::info!(slides = deck.len(), windowed, speed, "starting presentation");

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };
    let viewport = viewport.with_icon(std::sync::Arc::new(app_icon(&Theme::default())));

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(PresentationApp::new(deck, base_dir, speed)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::animator::EntrancePhase;

    const FRAME: Duration = Duration::from_millis(16);

    fn app() -> PresentationApp {
        PresentationApp::new(Deck::builtin().unwrap(), PathBuf::from("."), 1.0)
    }

    /// Run frames without painting until nothing is animating.
    fn settle(app: &mut PresentationApp, mut now: Instant) -> Instant {
        for _ in 0..2000 {
            app.nav.update(now);
            app.sync(now);
            app.nav.after_paint(now);
            if !app.is_animating() {
                return now;
            }
            now += FRAME;
        }
        panic!("app never settled");
    }

    /// Paint the current slide in one headless pass. Returns the shape count.
    fn paint(app: &PresentationApp, now: Instant) -> usize {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(1920.0, 1080.0),
            )),
            ..Default::default()
        };
        let output = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let stage = fit_stage(ui.max_rect());
                app.draw_slide(ui, stage, now);
            });
        });
        output.shapes.len()
    }

    #[test]
    fn test_every_builtin_slide_paints() {
        let mut app = app();
        let mut now = Instant::now();
        app.sync(now);
        for index in 0..app.deck.len() {
            app.nav.go_to(index, now);
            now = settle(&mut app, now);
            assert_eq!(app.mounted, Some(index));
            assert!(paint(&app, now) > 1, "slide {index} painted nothing");
        }
    }

    #[test]
    fn test_first_frame_mounts_slide_zero() {
        let mut app = app();
        let t0 = Instant::now();
        app.sync(t0);
        assert_eq!(app.mounted, Some(0));
        assert_eq!(app.animator.phase(), EntrancePhase::Animating);
        assert_eq!(app.animator.entrances(), 1);
    }

    #[test]
    fn test_navigation_remounts_after_swap() {
        let mut app = app();
        let t0 = Instant::now();
        app.sync(t0);
        let now = settle(&mut app, t0);

        app.handle(NavCommand::Next, now);
        app.nav.update(now);
        app.sync(now);
        // Still showing slide 0 while it exits.
        assert_eq!(app.mounted, Some(0));

        settle(&mut app, now);
        assert_eq!(app.nav.current(), 1);
        assert_eq!(app.mounted, Some(1));
        assert_eq!(app.animator.entrances(), 2);
        assert_eq!(app.animator.phase(), EntrancePhase::Settled);
    }

    #[test]
    fn test_overview_unmounts_and_replays_entrance() {
        let mut app = app();
        let t0 = Instant::now();
        app.sync(t0);
        let now = settle(&mut app, t0);

        app.handle(NavCommand::ToggleOverview, now);
        app.sync(now);
        assert_eq!(app.animator.phase(), EntrancePhase::Idle);

        app.handle_overview(OverviewAction::Close, now);
        app.sync(now);
        assert_eq!(app.animator.phase(), EntrancePhase::Animating);
        assert_eq!(app.animator.entrances(), 2);
    }

    #[test]
    fn test_thumbnail_selection_jumps() {
        let mut app = app();
        let t0 = Instant::now();
        app.sync(t0);
        app.handle(NavCommand::ToggleOverview, t0);
        app.handle_overview(OverviewAction::Select(7), t0);
        assert!(!app.nav.is_overview_open());
        settle(&mut app, t0);
        assert_eq!(app.nav.current(), 7);
        assert_eq!(app.mounted, Some(7));
    }

    #[test]
    fn test_fit_stage() {
        let wide = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(2560.0, 1080.0));
        let stage = fit_stage(wide);
        assert_eq!(stage.size(), egui::vec2(1920.0, 1080.0));
        assert_eq!(stage.center(), wide.center());

        let tall = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1280.0, 1024.0));
        assert_eq!(fit_stage(tall).size(), egui::vec2(1280.0, 720.0));
    }

    #[test]
    fn test_app_icon_size() {
        let icon = app_icon(&Theme::default());
        assert_eq!(icon.rgba.len(), (icon.width * icon.height * 4) as usize);
    }
}

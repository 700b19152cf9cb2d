use std::time::Instant;

use super::ease::Ease;

/// Linear interpolation between two values of the same kind.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for f64 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t as f64
    }
}

/// Visual offset of one animated element relative to its laid-out position.
/// Offsets are in reference pixels (1920x1080 space) and get scaled at paint time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub dx: f32,
    pub dy: f32,
    pub scale: f32,
    /// Extra horizontal stretch on top of `scale`, for bars that grow sideways.
    pub scale_x: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        dx: 0.0,
        dy: 0.0,
        scale: 1.0,
        scale_x: 1.0,
    };

    /// Invisible, otherwise at rest.
    pub const HIDDEN: Pose = Pose {
        opacity: 0.0,
        ..Pose::REST
    };

    pub fn rise(dy: f32) -> Self {
        Self { dy, ..Self::HIDDEN }
    }

    pub fn slide(dx: f32) -> Self {
        Self { dx, ..Self::HIDDEN }
    }

    pub fn with_dy(self, dy: f32) -> Self {
        Self { dy, ..self }
    }

    pub fn with_scale(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    pub fn with_scale_x(self, scale_x: f32) -> Self {
        Self { scale_x, ..self }
    }
}

impl Lerp for Pose {
    fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            opacity: self.opacity.lerp(to.opacity, t),
            dx: self.dx.lerp(to.dx, t),
            dy: self.dy.lerp(to.dy, t),
            scale: self.scale.lerp(to.scale, t),
            scale_x: self.scale_x.lerp(to.scale_x, t),
        }
    }
}

/// A single from→to animation anchored at a start instant.
///
/// Durations and delays are seconds. Before `start + delay` the tween reports
/// its `from` value, after `start + delay + duration` its exact `to` value.
#[derive(Debug, Clone, Copy)]
pub struct Tween<T> {
    from: T,
    to: T,
    start: Instant,
    delay: f32,
    duration: f32,
    ease: Ease,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, start: Instant) -> Self {
        Self {
            from,
            to,
            start,
            delay: 0.0,
            duration: 0.5,
            ease: Ease::OutCubic,
        }
    }

    pub fn delay(mut self, secs: f32) -> Self {
        self.delay = secs.max(0.0);
        self
    }

    pub fn duration(mut self, secs: f32) -> Self {
        self.duration = secs.max(0.0);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn target(&self) -> T {
        self.to
    }

    /// Raw (un-eased) progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32() - self.delay;
        if self.duration == 0.0 {
            return if elapsed >= 0.0 { 1.0 } else { 0.0 };
        }
        if elapsed <= 0.0 {
            return 0.0;
        }
        (elapsed / self.duration).min(1.0)
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn value(&self, now: Instant) -> T {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, self.ease.apply(p))
    }
}

/// Delay of the `index`-th element in a staggered group.
pub fn stagger(base: f32, step: f32, index: usize) -> f32 {
    base + step * index as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(start: Instant, secs: f32) -> Instant {
        start + Duration::from_secs_f32(secs)
    }

    #[test]
    fn test_holds_from_value_during_delay() {
        let t0 = Instant::now();
        let tween = Tween::new(0.0f32, 10.0, t0).delay(0.5).duration(1.0);
        assert_eq!(tween.value(t0), 0.0);
        assert_eq!(tween.value(at(t0, 0.4)), 0.0);
        assert!(!tween.is_complete(at(t0, 1.4)));
    }

    #[test]
    fn test_lands_exactly_on_target() {
        let t0 = Instant::now();
        let tween = Tween::new(0.0f64, 87.0, t0).duration(2.0).ease(Ease::OutBack);
        assert_eq!(tween.value(at(t0, 2.0)), 87.0);
        assert_eq!(tween.value(at(t0, 30.0)), 87.0);
        assert!(tween.is_complete(at(t0, 2.0)));
    }

    #[test]
    fn test_linear_midpoint() {
        let t0 = Instant::now();
        let tween = Tween::new(Pose::HIDDEN, Pose::REST, t0)
            .duration(1.0)
            .ease(Ease::Linear);
        let mid = tween.value(at(t0, 0.5));
        assert!((mid.opacity - 0.5).abs() < 0.01);
        assert!((mid.scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let t0 = Instant::now();
        let tween = Tween::new(1.0f32, 0.0, t0).duration(0.0);
        assert!(tween.is_complete(t0));
        assert_eq!(tween.value(t0), 0.0);
    }

    #[test]
    fn test_time_before_start_is_clamped() {
        let t0 = Instant::now() + Duration::from_secs(5);
        let tween = Tween::new(0.0f32, 1.0, t0).duration(0.3);
        assert_eq!(tween.progress(Instant::now()), 0.0);
    }

    #[test]
    fn test_pose_builders() {
        let p = Pose::rise(30.0).with_scale(0.95);
        assert_eq!(p.opacity, 0.0);
        assert_eq!(p.dy, 30.0);
        assert_eq!(p.scale, 0.95);
        assert_eq!(Pose::slide(-40.0).with_dy(10.0).dx, -40.0);
        let bar = Pose::slide(-40.0).with_scale_x(0.3);
        assert_eq!(bar.scale, 1.0);
        assert_eq!(bar.scale_x, 0.3);
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0.2, 0.1, 0), 0.2);
        assert!((stagger(0.2, 0.1, 3) - 0.5).abs() < 1e-6);
    }
}

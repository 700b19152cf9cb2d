/// Easing curves. `OutCubic` is the decelerate-into-rest curve used by
/// almost every entrance; `InCubic` accelerates out of an exit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    /// Overshoots slightly past the target before settling.
    OutBack,
}

const BACK_OVERSHOOT: f32 = 1.3;

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => ease_in_out(t),
            Self::OutBack => {
                let u = t - 1.0;
                1.0 + (BACK_OVERSHOOT + 1.0) * u.powi(3) + BACK_OVERSHOOT * u.powi(2)
            }
        }
    }
}

/// Symmetric cubic ease, used for the overview zoom.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 7] = [
        Ease::Linear,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::OutBack,
    ];

    #[test]
    fn endpoints_are_stable() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-6, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{ease:?} at 1");
        }
    }

    #[test]
    fn out_curves_lead_in_curves() {
        assert!(Ease::OutCubic.apply(0.3) > Ease::Linear.apply(0.3));
        assert!(Ease::InCubic.apply(0.3) < Ease::Linear.apply(0.3));
        assert!(Ease::OutQuad.apply(0.3) > Ease::Linear.apply(0.3));
        assert!(Ease::OutCubic.apply(0.3) > Ease::OutQuad.apply(0.3));
        assert!((Ease::InOutQuad.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn back_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::OutBack.apply(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Ease::OutCubic.apply(-1.0), 0.0);
        assert_eq!(Ease::OutCubic.apply(2.0), 1.0);
    }
}

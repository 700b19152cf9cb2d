use std::time::Instant;

use super::ease::Ease;
use super::tween::Tween;
use crate::deck::Stat;

/// A number counting up from zero to a stat's value.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: f64,
    decimals: usize,
    prefix: String,
    suffix: String,
    tween: Tween<f64>,
}

impl CountUp {
    pub fn new(target: f64, start: Instant) -> Self {
        Self {
            target,
            decimals: 1,
            prefix: String::new(),
            suffix: String::new(),
            tween: Tween::new(0.0, target, start)
                .duration(2.0)
                .ease(Ease::OutCubic),
        }
    }

    /// Counter for a stat, or `None` when its value is not numeric.
    pub fn for_stat(stat: &Stat, start: Instant) -> Option<Self> {
        let target = stat.target()?;
        Some(Self::new(target, start).affixes(stat.inline_prefix(), stat.suffix()))
    }

    pub fn affixes(mut self, prefix: &str, suffix: &str) -> Self {
        self.prefix = prefix.to_string();
        self.suffix = suffix.to_string();
        self
    }

    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn timing(mut self, delay: f32, duration: f32) -> Self {
        self.tween = self.tween.delay(delay).duration(duration);
        self
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        self.tween.is_complete(now)
    }

    pub fn value(&self, now: Instant) -> f64 {
        if self.is_complete(now) {
            self.target
        } else {
            self.tween.value(now)
        }
    }

    pub fn text(&self, now: Instant) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            format_count(self.value(now), self.target, self.decimals),
            self.suffix
        )
    }
}

/// Text a counter for `stat` lands on. Non-numeric stats show their raw value.
pub fn settled_text(stat: &Stat, decimals: usize) -> String {
    match stat.target() {
        Some(target) => format!(
            "{}{}{}",
            stat.inline_prefix(),
            format_count(target, target, decimals),
            stat.suffix()
        ),
        None => stat.display(),
    }
}

/// Whole targets count in integers; fractional ones keep `decimals` places.
pub fn format_count(value: f64, target: f64, decimals: usize) -> String {
    if target.fract() == 0.0 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.decimals$}")
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
    fn test_whole_target_counts_in_integers() {
        let t0 = Instant::now();
        let counter = CountUp::new(87.0, t0).affixes("", "%");
        assert_eq!(counter.text(t0), "0%");
        let mid = counter.text(at(t0, 0.7));
        assert!(!mid.contains('.'), "{mid}");
        assert_eq!(counter.text(at(t0, 2.0)), "87%");
        assert_eq!(counter.text(at(t0, 9.0)), "87%");
    }

    #[test]
    fn test_fractional_target_keeps_precision() {
        let t0 = Instant::now();
        let counter = CountUp::new(4.5, t0).affixes("$", "M");
        assert_eq!(counter.text(t0), "$0.0M");
        assert_eq!(counter.text(at(t0, 2.0)), "$4.5M");

        let precise = CountUp::new(2.75, t0).decimals(2);
        assert_eq!(precise.text(at(t0, 3.0)), "2.75");
    }

    #[test]
    fn test_delay_holds_at_zero() {
        let t0 = Instant::now();
        let counter = CountUp::new(70.0, t0).timing(0.6, 2.0);
        assert_eq!(counter.value(at(t0, 0.5)), 0.0);
        assert!(!counter.is_complete(at(t0, 2.5)));
        assert_eq!(counter.text(at(t0, 2.6)), "70");
    }

    #[test]
    fn test_count_is_monotonic() {
        let t0 = Instant::now();
        let counter = CountUp::new(80.0, t0);
        let mut last = -1.0;
        for i in 0..=20 {
            let v = counter.value(at(t0, i as f32 * 0.1));
            assert!(v >= last);
            last = v;
        }
        assert_eq!(last, 80.0);
    }

    #[test]
    fn test_for_stat() {
        let t0 = Instant::now();
        let stat = Stat {
            value: "74".into(),
            label: "IBM".into(),
            prefix: None,
            suffix: Some("%".into()),
        };
        let counter = CountUp::for_stat(&stat, t0).unwrap();
        assert_eq!(counter.text(at(t0, 2.0)), stat.display());

        let text = Stat {
            value: "n/a".into(),
            ..stat
        };
        assert!(CountUp::for_stat(&text, t0).is_none());
        assert_eq!(settled_text(&text, 1), "n/a%");
    }

    #[test]
    fn test_settled_text_matches_final_count() {
        let t0 = Instant::now();
        for (value, expected) in [("70.0", "70%"), ("4.50", "4.5%"), ("12", "12%")] {
            let stat = Stat {
                value: value.into(),
                label: "x".into(),
                prefix: None,
                suffix: Some("%".into()),
            };
            let counter = CountUp::for_stat(&stat, t0).unwrap();
            assert_eq!(counter.text(at(t0, 2.0)), expected);
            assert_eq!(settled_text(&stat, 1), expected);
        }
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(69.6, 70.0, 1), "70");
        assert_eq!(format_count(3.14159, 3.5, 1), "3.1");
        assert_eq!(format_count(0.0, 0.5, 0), "0");
    }
}

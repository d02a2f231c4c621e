use embassy_time::Duration;

/// One brightness level of a fade
///
/// Firing applies `level`; while `level` differs from `target` the next
/// level is scheduled `step` later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeStep {
    pub level: u8,
    pub target: u8,
    pub step: Duration,
    pub constant_color: bool,
}

impl FadeStep {
    /// First step of a fade from `from` to `to` over `duration`
    ///
    /// For `n` levels between the two values, level `k` (1..=n) fires at
    /// `k * (duration / n)`, so the first step is due one spacing from now
    /// and the target lands on `duration` (integer milliseconds).
    /// Returns `None` if there is nothing to fade.
    pub fn plan(from: u8, to: u8, duration: Duration, constant_color: bool) -> Option<Self> {
        let levels = from.abs_diff(to);
        if levels == 0 {
            return None;
        }
        let step = Duration::from_millis(duration.as_millis() / u64::from(levels));
        let first = Self {
            level: from,
            target: to,
            step,
            constant_color,
        };
        first.next()
    }

    /// The following level, or `None` once the target is reached
    pub fn next(self) -> Option<Self> {
        let level = match self.level.cmp(&self.target) {
            core::cmp::Ordering::Less => self.level + 1,
            core::cmp::Ordering::Greater => self.level - 1,
            core::cmp::Ordering::Equal => return None,
        };
        Some(Self { level, ..self })
    }

    pub const fn is_last(&self) -> bool {
        self.level == self.target
    }
}

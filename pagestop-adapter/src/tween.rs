use pagestop::Point;

pub(crate) const DEFAULT_SCROLL_ANIMATION_MS: u64 = 300;

/// A smooth-step tween between two content offsets.
///
/// The clock starts on the first `begin` call, so callers can request an animated scroll
/// without knowing the current frame time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Tween {
    pub from: Point,
    pub to: Point,
    pub start_ms: Option<u64>,
    pub duration_ms: u64,
}

impl Tween {
    pub fn new(from: Point, to: Point, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            start_ms: None,
            duration_ms: duration_ms.max(1),
        }
    }

    pub fn begin(&mut self, now_ms: u64) {
        self.start_ms.get_or_insert(now_ms);
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        match self.start_ms {
            Some(start_ms) => now_ms.saturating_sub(start_ms) >= self.duration_ms,
            None => false,
        }
    }

    pub fn sample(&self, now_ms: u64) -> Point {
        let Some(start_ms) = self.start_ms else {
            return self.from;
        };
        let elapsed = now_ms.saturating_sub(start_ms);
        let t = (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0);
        let eased = t * t * (3.0 - 2.0 * t);
        if eased >= 1.0 {
            return self.to;
        }
        Point::new(
            self.from.x + (self.to.x - self.from.x) * eased,
            self.from.y + (self.to.y - self.from.y) * eased,
        )
    }
}

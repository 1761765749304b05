/// Smooth-scroll animation
///
/// Clicking a navigation entry glides the page to the target section instead
/// of snapping. The toolkit has no built-in smooth scrolling, so the update
/// loop samples this record on timer ticks and repositions the scrollable
/// each frame. Nothing awaits the animation; it is fire-and-forget.

use std::time::{Duration, Instant};

/// How long a navigation scroll takes from click to rest.
pub const SCROLL_DURATION: Duration = Duration::from_millis(450);

/// An in-flight glide from one scroll offset to another.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, started: Instant) -> Self {
        ScrollAnimation { from, to, started }
    }

    /// The offset the page should sit at right now, and whether the
    /// animation has finished. Past the duration the sample is exactly the
    /// target, so the final frame never undershoots.
    pub fn sample(&self, now: Instant) -> (f32, bool) {
        let elapsed = now.saturating_duration_since(self.started);

        if elapsed >= SCROLL_DURATION {
            return (self.to, true);
        }

        let t = elapsed.as_secs_f32() / SCROLL_DURATION.as_secs_f32();
        let eased = ease_out_cubic(t);

        (self.from + (self.to - self.from) * eased, false)
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}

/// Fast start, gentle landing.
fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_at_start_is_origin() {
        let start = Instant::now();
        let animation = ScrollAnimation::new(120.0, 900.0, start);

        let (offset, done) = animation.sample(start);
        assert_eq!(offset, 120.0);
        assert!(!done);
    }

    #[test]
    fn test_sample_past_duration_lands_on_target() {
        let start = Instant::now();
        let animation = ScrollAnimation::new(120.0, 900.0, start);

        let (offset, done) = animation.sample(start + SCROLL_DURATION);
        assert_eq!(offset, 900.0);
        assert!(done);

        let (offset, done) = animation.sample(start + SCROLL_DURATION * 3);
        assert_eq!(offset, 900.0);
        assert!(done);
    }

    #[test]
    fn test_offsets_move_monotonically_toward_target() {
        let start = Instant::now();
        let animation = ScrollAnimation::new(0.0, 1000.0, start);

        let mut previous = 0.0;
        for ms in (0..=450).step_by(30) {
            let (offset, _) = animation.sample(start + Duration::from_millis(ms));
            assert!(offset >= previous, "offset regressed at {}ms", ms);
            assert!(offset <= 1000.0);
            previous = offset;
        }
    }

    #[test]
    fn test_downward_scroll_works_too() {
        let start = Instant::now();
        let animation = ScrollAnimation::new(2000.0, 0.0, start);

        let (mid, _) = animation.sample(start + SCROLL_DURATION / 2);
        assert!(mid < 2000.0 && mid > 0.0);

        let (end, done) = animation.sample(start + SCROLL_DURATION);
        assert_eq!(end, 0.0);
        assert!(done);
    }
}

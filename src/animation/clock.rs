use std::time::Duration;

use tracing::{event, Level};

/// Elapsed time of one attached spinner, advanced by the frame scheduler.
#[derive(Debug, Default)]
pub struct AnimationClock {
    elapsed_ms: f64,
}

impl AnimationClock {
    pub fn new() -> Self {
        event!(Level::DEBUG, "attach animation clock");
        Self::default()
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn advance(&mut self, delta: Duration) {
        self.advance_ms(delta.as_secs_f64() * 1000.0);
    }

    /// Time only moves forward, so negative or non-finite steps are dropped.
    pub fn advance_ms(&mut self, delta_ms: f64) {
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.elapsed_ms += delta_ms;
        }
    }
}

impl Drop for AnimationClock {
    fn drop(&mut self) {
        event!(Level::DEBUG, "detach animation clock at {:.0}ms", self.elapsed_ms);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(0.0, AnimationClock::new().elapsed_ms());
    }

    #[test]
    fn advance() {
        let mut clock = AnimationClock::new();
        clock.advance(Duration::from_millis(500));
        clock.advance_ms(4.5);
        assert_eq!(504.5, clock.elapsed_ms());
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn ignores_invalid_steps(#[case] delta_ms: f64) {
        let mut clock = AnimationClock::new();
        clock.advance_ms(10.0);
        clock.advance_ms(delta_ms);
        assert_eq!(10.0, clock.elapsed_ms());
    }
}

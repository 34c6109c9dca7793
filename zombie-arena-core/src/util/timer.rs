use crate::resource::Time;

/// Counts down toward zero as simulation time is fed in.
#[derive(Clone, Debug)]
pub struct Timer {
    remaining: f32,
}

impl Timer {
    /// A timer that has already run out.
    pub fn elapsed() -> Timer {
        Timer { remaining: 0.0 }
    }

    pub fn with_remaining(remaining: f32) -> Timer {
        Timer { remaining }
    }

    /// Advances the timer and reports whether it has run out.
    pub fn step_and_is_elapsed(&mut self, time: &Time) -> bool {
        self.remaining = (self.remaining - time.elapsed_seconds).max(0.0);
        self.remaining == 0.0
    }

    pub fn reset(&mut self, seconds: f32) {
        self.remaining = seconds;
    }
}

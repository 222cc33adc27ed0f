//! Movement domain: countdown timers shared by the jump and dash arbiters.

/// Seconds remaining on a grace window or cooldown.
///
/// Ticking never clamps, so an expired countdown keeps drifting negative;
/// only the sign is ever inspected.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    pub fn arm(&mut self, seconds: f32) {
        self.remaining = seconds;
    }

    pub fn tick(&mut self, dt: f32) {
        self.remaining -= dt;
    }

    /// Consume the window. Leaves exactly zero.
    pub fn clear(&mut self) {
        self.remaining = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

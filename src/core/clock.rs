/// Animation time fed to renderers. Host timestamps may arrive out of
/// order; the clock never runs backwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationClock {
    last_ms: f64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a host timestamp (ms). Non-finite values are ignored.
    pub fn advance(&mut self, timestamp_ms: f64) {
        if timestamp_ms.is_finite() && timestamp_ms > self.last_ms {
            self.last_ms = timestamp_ms;
        }
    }

    pub fn millis(&self) -> f64 {
        self.last_ms
    }

    pub fn seconds(&self) -> f32 {
        (self.last_ms / 1000.0) as f32
    }
}

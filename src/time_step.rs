/// Explicit simulation-step configuration.
///
/// The step length is supplied at construction rather than hidden in a
/// global constant, so variable-rate or test-time stepping stays possible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeStep {
    pub dt: f32,
    pub inv_dt: f32,
}

impl TimeStep {
    pub const DEFAULT_FRAME_RATE: f32 = 60.0;

    pub fn new(dt: f32) -> Self {
        TimeStep {
            dt,
            inv_dt: if dt > 0.0 { 1.0 / dt } else { 0.0 },
        }
    }

    /// Fixed step of `1 / frames_per_second`. Panics if the rate is not
    /// positive.
    pub fn from_frame_rate(frames_per_second: f32) -> Self {
        assert!(frames_per_second > 0.0, "frame rate must be positive");
        Self::new(1.0 / frames_per_second)
    }
}

impl Default for TimeStep {
    #[inline(always)]
    fn default() -> Self {
        Self::from_frame_rate(Self::DEFAULT_FRAME_RATE)
    }
}

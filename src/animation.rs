mod clock;
mod curve;
mod frame;

pub use clock::AnimationClock;
pub use curve::ScaleLevels;
pub use frame::compute_frame;

/// Length of one scale cycle. Progress restarts from -1 after it.
pub const CYCLE_MS: f64 = 800.0;
/// Time for one leg of the translation ping-pong.
pub const TRANSLATION_MS: f64 = CYCLE_MS / 2.0;

use embassy_time::Instant;

use crate::Clock;

/// A clock sourced from the `embassy-time` driver of the target.
///
/// Embassy's instant is 64-bit; truncating to `u32` yields the wrapping
/// counters the ticker arithmetic expects.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn micros(&self) -> u32 {
        Instant::now().as_micros() as u32
    }

    fn millis(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

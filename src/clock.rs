/// A monotonic tick source backing a [`Ticker`](crate::Ticker).
///
/// Both counters increase monotonically and wrap at `2^32`; all elapsed-time
/// arithmetic in the crate is wrapping subtraction, so a wrap is transparent
/// as long as no single measured span exceeds one full counter period.
pub trait Clock {
    /// The current microsecond counter value.
    fn micros(&self) -> u32;

    /// The current millisecond counter value.
    fn millis(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn micros(&self) -> u32 {
        (**self).micros()
    }

    fn millis(&self) -> u32 {
        (**self).millis()
    }
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn micros(&self) -> u32 {
        (**self).micros()
    }

    fn millis(&self) -> u32 {
        (**self).millis()
    }
}

pub mod fakes {
    use super::Clock;
    use core::cell::Cell;

    /// A manually driven clock for deterministic tests.
    ///
    /// The two counters are independent; advance whichever one matches the
    /// resolution under test. Advancing wraps at `2^32` like a real counter.
    pub struct FakeClock {
        pub micros: Cell<u32>,
        pub millis: Cell<u32>,
    }

    impl FakeClock {
        pub const fn new() -> Self {
            Self {
                micros: Cell::new(0),
                millis: Cell::new(0),
            }
        }

        pub fn advance_micros(&self, ticks: u32) {
            self.micros.set(self.micros.get().wrapping_add(ticks));
        }

        pub fn advance_millis(&self, ticks: u32) {
            self.millis.set(self.millis.get().wrapping_add(ticks));
        }
    }

    impl Default for FakeClock {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Clock for FakeClock {
        fn micros(&self) -> u32 {
            self.micros.get()
        }

        fn millis(&self) -> u32 {
            self.millis.get()
        }
    }
}

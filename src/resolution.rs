/// The clock granularity a [`Ticker`](crate::Ticker) operates in.
///
/// The interval and every derived quantity are expressed in the selected
/// unit, and only the matching [`Clock`](crate::Clock) counter is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// Microsecond ticks. The counter wraps after roughly 71 minutes, which
    /// bounds the longest measurable interval.
    Micros,
    /// Millisecond ticks, for intervals beyond the microsecond range.
    Millis,
}

impl Default for Resolution {
    fn default() -> Self {
        Self::Micros
    }
}

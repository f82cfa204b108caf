/// Lifecycle state of a [`Ticker`](crate::Ticker).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Not armed. Also entered when a repeat-limited ticker exhausts its
    /// repeat count.
    Stopped,
    /// Armed; `update()` fires the callback on elapsed-interval boundaries.
    Running,
    /// Suspended with elapsed progress retained for `resume()`.
    Paused,
}

impl Default for State {
    fn default() -> Self {
        Self::Stopped
    }
}

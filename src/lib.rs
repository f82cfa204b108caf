//! Polled interval timer for embedded main loops.
//!
//! A [`Ticker`] invokes a caller-supplied callback when a configured
//! interval elapses, optionally repeating a fixed number of times or
//! indefinitely. It never blocks and never fires on its own: the owning
//! loop calls [`Ticker::update`] every iteration, and the callback runs
//! synchronously inside that call.
//!
//! Time comes from an injected [`Clock`], a monotonic wrapping `u32` tick
//! source in two granularities. Production backends live in [`drv`];
//! [`fakes::FakeClock`] drives deterministic tests.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod clock;
pub mod drv;
mod resolution;
mod state;
mod ticker;

pub use self::{
    clock::{fakes, Clock},
    resolution::Resolution,
    state::State,
    ticker::{Callback, Ticker},
};

//! Production [`Clock`](crate::Clock) backends, selected by Cargo feature.

#[cfg(feature = "embassy")]
pub mod embassy;

#[cfg(feature = "std")]
pub mod host;

#![deny(missing_docs)]

//! Host interface tools for mutator guest modules
//!
//! A guest is a webassembly module exporting `receive(length)`. The host calls it once
//! per data unit, and the guest talks back through three functions imported from the
//! `env` module: `get_data`, `send` and `error`.
//!
//! This crate wraps that ABI:
//! * [`Host`]: the three host primitives behind a safe, slice-based trait.
//! * [`Announced`] and [`GuestBuffer`]: allocation and population of the per-invocation buffer.
//! * [`Channels`]: the emission and error signaling channels for one invocation.
//!
//! You are likely to be interested in the sibling crates:
//! * `mutator`: transform dispatch and the `mutator!` export macro.
//! * `mutator-log`: standard `log` adapter.

mod buffer;
mod channel;
mod host;
#[cfg(target_arch = "wasm32")]
mod sys;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use buffer::{Announced, GuestBuffer};
pub use channel::Channels;
pub use host::Host;
#[cfg(target_arch = "wasm32")]
pub use host::StaticHost;

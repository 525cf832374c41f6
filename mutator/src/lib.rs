//! Transform dispatch for mutator guest modules
//!
//! A guest module exports `receive(length)`. For each data unit the host announces its
//! length, the guest fetches it, applies a transform policy, and emits the result:
//!
//! * [`TransformResult::Unchanged`]: the original bytes are emitted once.
//! * [`TransformResult::Mutated`]: the new bytes are emitted [`Transform::fan_out`] times.
//! * [`TransformResult::Error`]: the message is signaled once and the original bytes
//!   are emitted, so a unit is never dropped because one plugin could not read it.
//!
//! Use the [`mutator!`] macro to generate the export for a policy.
//!
//! You are likely to be interested in the sibling crates:
//! * `mutator-host`: the host ABI, buffers and channels.
//! * `mutator-log`: standard `log` adapter.

mod dispatch;
mod error;
mod macros;
pub mod policies;
mod substitution;
mod transform;

pub use dispatch::{Path, Report, receive_template};
pub use error::{ConfigError, ErrorKind, TransformError};
pub use substitution::SubstitutionTable;
pub use transform::{Transform, TransformResult};

/// Re-exported host interfaces, used by the [`mutator!`] macro.
pub use mutator_host as host;

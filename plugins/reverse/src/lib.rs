//! Reverses text by Unicode scalar value, and emits every result twice.
//!
//! The duplicate is deliberate: it exercises hosts that fan one input out into
//! several output units.

use std::num::NonZeroUsize;

use mutator::policies::ScalarReverse;

const COPIES: NonZeroUsize = NonZeroUsize::new(2).unwrap();

/// Reversal, emitted twice.
pub fn policy() -> ScalarReverse {
    ScalarReverse::new().with_fan_out(COPIES)
}

mutator::mutator!(policy());

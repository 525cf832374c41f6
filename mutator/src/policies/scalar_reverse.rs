use std::num::NonZeroUsize;

use crate::{Transform, TransformError, TransformResult};

/// Reverses the order of the Unicode scalar values in a UTF-8 buffer.
///
/// Multi-byte encodings are never split. Input that is not UTF-8 is an error.
/// The output always counts as mutated and may be emitted more than once.
#[derive(Debug, Clone, Copy)]
pub struct ScalarReverse {
    fan_out: NonZeroUsize,
}

impl ScalarReverse {
    /// Reverse, emitting the result once.
    pub fn new() -> Self {
        Self {
            fan_out: NonZeroUsize::MIN,
        }
    }

    /// Emit the reversed output `copies` times.
    pub fn with_fan_out(mut self, copies: NonZeroUsize) -> Self {
        self.fan_out = copies;
        self
    }
}

impl Default for ScalarReverse {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for ScalarReverse {
    fn transform(&self, input: &[u8]) -> TransformResult {
        match std::str::from_utf8(input) {
            Ok(text) => TransformResult::Mutated(text.chars().rev().collect::<String>().into_bytes()),
            Err(e) => TransformResult::Error(TransformError::from(e)),
        }
    }

    fn fan_out(&self) -> NonZeroUsize {
        self.fan_out
    }
}

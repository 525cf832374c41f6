use crate::{Transform, TransformResult};

/// Sorts the raw bytes of the buffer in ascending order.
///
/// Works below any text encoding. Length and the multiset of byte values are
/// preserved; an already sorted buffer is `Unchanged`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ByteSort;

impl Transform for ByteSort {
    fn transform(&self, input: &[u8]) -> TransformResult {
        if input.is_sorted() {
            return TransformResult::Unchanged;
        }
        let mut output = input.to_vec();
        output.sort_unstable();
        TransformResult::Mutated(output)
    }
}

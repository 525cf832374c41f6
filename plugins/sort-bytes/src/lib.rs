//! Sorts the raw bytes of each data unit in ascending order.

use mutator::policies::ByteSort;

pub fn policy() -> ByteSort {
    ByteSort
}

mutator::mutator!(policy());

//! Reference transform policies

mod byte_sort;
mod field_substitution;
mod scalar_reverse;

pub use byte_sort::ByteSort;
pub use field_substitution::FieldSubstitution;
pub use scalar_reverse::ScalarReverse;

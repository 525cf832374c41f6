//! Reverses each data unit by Unicode scalar value and emits the result once.
//!
//! Despite the name this does not parse JSON: a JSON record comes out as its
//! mirror image, which downstream stages can use to check that every unit was
//! mutated exactly once. See the `reverse` plugin for the fanned-out variant.

use mutator::policies::ScalarReverse;

/// Reversal, emitted once.
pub fn policy() -> ScalarReverse {
    ScalarReverse::new()
}

mutator::mutator!(policy());

#[cfg(test)]
mod tests {
    use mutator::{Path, receive_template};
    use mutator_host::testing::RecordingHost;

    use super::*;

    fn receive(input: &[u8]) -> (Path, RecordingHost) {
        let mut host = RecordingHost::new(input);
        let report = receive_template(&mut host, input.len(), &policy());
        (report.path, host)
    }

    #[test]
    fn record_is_mirrored_once() {
        let (path, host) = receive(r#"{"name":"Zoë"}"#.as_bytes());

        assert_eq!(path, Path::Mutated);
        assert_eq!(host.accepted(), [r#"}"ëoZ":"eman"{"#.as_bytes().to_vec()]);
        assert!(host.errors().is_empty());
    }

    #[test]
    fn palindrome_is_still_sent() {
        let (path, host) = receive(b"abba");

        assert_eq!(path, Path::Mutated);
        assert_eq!(host.sends(), 1);
        assert_eq!(host.accepted(), [b"abba".to_vec()]);
    }
}

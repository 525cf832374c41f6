//! Replaces well-known words anywhere in the data unit with emoji.
//!
//! Unlike `agent-emoji` this works on the raw bytes and does not care about their
//! structure: `xagent` becomes `x🕵️`.

use std::borrow::Cow;

use mutator::{ConfigError, SubstitutionTable, Transform, TransformResult};

const WORD_EMOJI: &[(&str, &str)] = &[
    ("agent", "🕵️"),
    ("allow", "👍"),
    ("cloud", "☁️"),
    ("container", "📦"),
    ("docker", "🐳"),
    ("eye", "👁"),
    ("hash", "#️⃣"),
    ("host", "💻"),
    ("id", "🪪"),
    ("image", "🖼"),
    ("kubernetes", "🧑‍✈️"),
    ("label", "🏷"),
    ("log", "🪵"),
    ("message", "✉️"),
    ("path", "🛣"),
    ("pod", "🛰"),
    ("space", "🚀"),
    ("stream", "🚿"),
    ("time", "⏰"),
    ("user", "🧑"),
];

/// Whole-buffer substitution.
#[derive(Debug, Clone)]
pub struct Emojify {
    table: SubstitutionTable,
}

impl Emojify {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            table: SubstitutionTable::new(WORD_EMOJI.iter().copied())?,
        })
    }
}

impl Transform for Emojify {
    fn transform(&self, input: &[u8]) -> TransformResult {
        match self.table.apply_bytes(input) {
            Cow::Borrowed(_) => TransformResult::Unchanged,
            Cow::Owned(output) => TransformResult::Mutated(output),
        }
    }
}

mutator::mutator!(Emojify::new());

#[cfg(test)]
mod tests {
    use mutator::{Path, receive_template};
    use mutator_host::testing::RecordingHost;

    use super::*;

    fn emojify(input: &[u8]) -> Vec<u8> {
        match Emojify::new().unwrap().transform(input) {
            TransformResult::Mutated(output) => output,
            TransformResult::Unchanged => input.to_vec(),
            TransformResult::Error(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn it_works() {
        assert_eq!(emojify(b"xagent"), "x🕵️".as_bytes());
    }

    #[test]
    fn replaces_every_occurrence() {
        assert_eq!(
            emojify(br#"{"host":"pod-7","message":"user login"}"#),
            r#"{"💻":"🛰-7","✉️":"🧑 🪵in"}"#.as_bytes()
        );
    }

    #[test]
    fn binary_input_survives() {
        let input = [0xff, b'i', b'd', 0x00, 0xfe];
        let mut expected = vec![0xff];
        expected.extend_from_slice("🪪".as_bytes());
        expected.extend_from_slice(&[0x00, 0xfe]);

        assert_eq!(emojify(&input), expected);
    }

    #[test]
    fn nothing_to_replace_is_unchanged() {
        let input = b"quiet";
        let mut host = RecordingHost::new(&input[..]);

        let report = receive_template(&mut host, input.len(), &Emojify::new());

        assert_eq!(report.path, Path::Unchanged);
        assert_eq!(host.accepted(), [input.to_vec()]);
    }
}

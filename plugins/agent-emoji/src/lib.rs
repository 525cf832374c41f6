//! Replaces well-known words in a record's `agent` field with emoji.
//!
//! Invoke with a JSON object such as `{"agent": "Mozilla/5.0 (X11; Linux x86_64)"}`;
//! the output is `{"agent": "🦖/5.0 (X11; 🐧 x86_64)"}`. Records without an `agent`
//! string are reported and passed through untouched.

use mutator::policies::FieldSubstitution;
use mutator::{ConfigError, SubstitutionTable};

const AGENT_EMOJI: &[(&str, &str)] = &[
    ("Android", "🤖"),
    ("Apple", "🍏"),
    ("ARM", "🦾"),
    ("Build", "🏗"),
    ("Chrome", "🛞"),
    ("Chromium", "⚙️"),
    ("Edge", "🌊"),
    ("Fedora", "🎩"),
    ("Firefox", "🦊"),
    ("Gecko", "🦎"),
    ("Iceweasel", "❄️"),
    ("IE", "🪐"),
    ("J2ME", "☕️"),
    ("Linux", "🐧"),
    ("Macintosh", "🍎"),
    ("Mobile", "📱"),
    ("Mozilla", "🦖"),
    ("Opera", "🍩"),
    ("Phone", "☎️"),
    ("Presto", "🪄"),
    ("Safari", "🧭"),
    ("Touch", "🖐"),
    ("Trident", "🔱"),
    ("Vivaldi", "🎻"),
    ("Web", "🕸"),
    ("Windows", "🪟"),
];

/// Substitution over the `agent` field.
pub fn policy() -> Result<FieldSubstitution, ConfigError> {
    let table = SubstitutionTable::new(AGENT_EMOJI.iter().copied())?;
    Ok(FieldSubstitution::new("agent", table))
}

mutator::mutator!(policy(), log_level = log::LevelFilter::Warn);

#[cfg(test)]
mod tests {
    use mutator::{Path, receive_template};
    use mutator_host::testing::RecordingHost;

    use super::*;

    fn receive(input: &[u8]) -> RecordingHost {
        let mut host = RecordingHost::new(input);
        receive_template(&mut host, input.len(), &policy());
        host
    }

    #[test]
    fn browser_agent() {
        let host = receive(
            br#"{"agent":"Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36","code":"200"}"#,
        );

        assert!(host.errors().is_empty());
        assert_eq!(
            String::from_utf8(host.accepted().concat()).unwrap(),
            r#"{"agent":"🦖/5.0 (X11; 🐧 x86_64) 🍏🕸Kit/537.36 (KHTML, like 🦎) 🛞/120.0 🧭/537.36","code":"200"}"#
        );
    }

    #[test]
    fn chromium_is_not_read_as_chrome() {
        let host = receive(br#"{"agent":"Chromium/119"}"#);

        assert_eq!(host.accepted(), [r#"{"agent":"⚙️/119"}"#.as_bytes().to_vec()]);
    }

    #[test]
    fn record_without_agent_passes_through() {
        let input = br#"{"remote":"10.0.0.1"}"#;
        let mut host = RecordingHost::new(&input[..]);

        let report = receive_template(&mut host, input.len(), &policy());

        assert_eq!(report.path, Path::Error);
        assert_eq!(host.errors(), ["field `agent` not found"]);
        assert_eq!(host.accepted(), [input.to_vec()]);
    }

    #[test]
    fn table_is_well_formed() {
        assert_eq!(policy().map(|_| ()), Ok(()));
    }
}

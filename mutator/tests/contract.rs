use std::num::NonZeroUsize;

use mutator::policies::{ByteSort, FieldSubstitution, ScalarReverse};
use mutator::{Path, Report, SubstitutionTable, TransformResult, receive_template};
use mutator_host::testing::RecordingHost;

fn run(host: &mut RecordingHost, input: &[u8], policy: &impl mutator::Transform) -> Report {
    host.serve(input);
    receive_template(host, input.len(), policy)
}

fn agent_emoji() -> FieldSubstitution {
    let table = SubstitutionTable::new([
        ("Chrome", "🛞"),
        ("Chromium", "⚙️"),
        ("Linux", "🐧"),
    ])
    .unwrap();
    FieldSubstitution::new("agent", table)
}

#[test]
fn zero_length_never_fetches_emits_or_errors() {
    let mut host = RecordingHost::new(Vec::new());

    let report = receive_template(&mut host, 0, &ByteSort);

    assert_eq!(report.path, Path::Skipped);
    assert_eq!(host.fetches(), 0);
    assert_eq!(host.sends(), 0);
    assert!(host.errors().is_empty());
}

#[test]
fn missing_field_signals_once_and_passes_the_input_through() {
    let input = br#"{"message": "no agent here"}"#;
    let mut host = RecordingHost::new(Vec::new());

    let report = run(&mut host, input, &agent_emoji());

    assert_eq!(report.path, Path::Error);
    assert!(report.error_signaled);
    assert_eq!(host.errors(), ["field `agent` not found"]);
    assert_eq!(host.accepted(), [input.to_vec()]);
}

#[test]
fn field_without_matches_takes_the_unchanged_path() {
    let input = br#"{ "agent" : "curl/8.4.0",   "code": "200" }"#;
    let mut host = RecordingHost::new(Vec::new());

    let report = run(&mut host, input, &agent_emoji());

    assert_eq!(report.path, Path::Unchanged);
    assert!(host.errors().is_empty());
    assert_eq!(host.accepted(), [input.to_vec()]);
}

#[test]
fn overlapping_patterns_resolve_by_priority_on_every_run() {
    let input = br#"{"agent":"Chromium Chrome"}"#;
    let mut host = RecordingHost::new(Vec::new());

    for _ in 0..32 {
        run(&mut host, input, &agent_emoji());
    }

    let expected = r#"{"agent":"⚙️ 🛞"}"#.as_bytes().to_vec();
    assert_eq!(host.sends(), 32);
    assert!(host.accepted().iter().all(|output| *output == expected));
}

#[test]
fn reversal_fans_out_as_independent_sends() {
    let mut host = RecordingHost::new(Vec::new()).accept_when(|index| index == 0);
    let policy = ScalarReverse::new().with_fan_out(NonZeroUsize::new(2).unwrap());

    let report = run(&mut host, "héllo".as_bytes(), &policy);

    assert_eq!(report.path, Path::Mutated);
    assert_eq!((report.emitted, report.rejected), (1, 1));
    assert_eq!(host.sends(), 2);
    assert!(host.sent().iter().all(|sent| sent.bytes == "olléh".as_bytes()));
    assert!(host.errors().is_empty());
}

#[test]
fn rejected_emissions_do_not_error_retry_or_leak_into_the_next_invocation() {
    let mut host = RecordingHost::new(Vec::new()).accept_when(|index| index != 0);

    let first = run(&mut host, b"cab", &ByteSort);
    assert_eq!(first.path, Path::Mutated);
    assert_eq!((first.emitted, first.rejected), (0, 1));
    assert!(!first.error_signaled);
    assert_eq!(host.sends(), 1);

    let second = run(&mut host, b"cab", &ByteSort);
    assert_eq!(second, Report {
        path: Path::Mutated,
        emitted: 1,
        rejected: 0,
        error_signaled: false,
    });
    assert_eq!(host.sends(), 2);
    assert_eq!(host.accepted(), [b"abc".to_vec()]);
    assert!(host.errors().is_empty());
}

#[test]
fn invalid_utf8_reversal_passes_the_original_through() {
    let input = [b'o', b'k', 0xF0, 0x9F];
    let mut host = RecordingHost::new(Vec::new());

    let report = run(&mut host, &input, &ScalarReverse::new());

    assert_eq!(report.path, Path::Error);
    assert_eq!(host.errors().len(), 1);
    assert_eq!(host.accepted(), [input.to_vec()]);
}

#[test]
fn error_path_emits_the_original_even_when_rejected() {
    let mut host = RecordingHost::new(Vec::new()).rejecting();
    let policy = |_: &[u8]| TransformResult::Error(mutator::TransformError::internal("nope"));

    let report = run(&mut host, b"unit", &policy);

    assert_eq!(report.path, Path::Error);
    assert_eq!((report.emitted, report.rejected), (0, 1));
    assert_eq!(host.errors(), ["transform failed: nope"]);
    assert_eq!(host.sent()[0].bytes, b"unit");
}

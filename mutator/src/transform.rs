use std::num::NonZeroUsize;

use crate::{ConfigError, TransformError};

/// What a transform policy made of one data unit.
#[derive(Debug)]
pub enum TransformResult {
    /// The output would be byte-identical to the input. The original buffer is emitted.
    Unchanged,
    /// The new output.
    Mutated(Vec<u8>),
    /// The input could not be transformed. The message is signaled and the original
    /// buffer is emitted, so the unit is never silently dropped.
    Error(TransformError),
}

impl TransformResult {
    /// `Unchanged` when `output` equals `input`, `Mutated` otherwise.
    pub fn compare(input: &[u8], output: Vec<u8>) -> Self {
        if output == input {
            TransformResult::Unchanged
        } else {
            TransformResult::Mutated(output)
        }
    }

    /// The variant name, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            TransformResult::Unchanged => "unchanged",
            TransformResult::Mutated(_) => "mutated",
            TransformResult::Error(_) => "error",
        }
    }
}

/// `Ok(None)` means unchanged.
impl From<Result<Option<Vec<u8>>, TransformError>> for TransformResult {
    fn from(result: Result<Option<Vec<u8>>, TransformError>) -> Self {
        match result {
            Ok(Some(output)) => TransformResult::Mutated(output),
            Ok(None) => TransformResult::Unchanged,
            Err(e) => TransformResult::Error(e),
        }
    }
}

/// A transform policy: maps the fetched buffer to a [`TransformResult`].
///
/// Policies are pure functions of their input and their own immutable configuration.
pub trait Transform {
    /// Transform one data unit.
    fn transform(&self, input: &[u8]) -> TransformResult;

    /// How many times a `Mutated` output is emitted. Each copy is an independent `send`.
    fn fan_out(&self) -> NonZeroUsize {
        NonZeroUsize::MIN
    }
}

impl<F> Transform for F
where
    F: Fn(&[u8]) -> TransformResult,
{
    fn transform(&self, input: &[u8]) -> TransformResult {
        self(input)
    }
}

/// A policy whose construction failed reports the failure for every data unit,
/// which then passes through unchanged.
impl<T: Transform> Transform for Result<T, ConfigError> {
    fn transform(&self, input: &[u8]) -> TransformResult {
        match self {
            Ok(policy) => policy.transform(input),
            Err(e) => TransformResult::Error(e.clone().into()),
        }
    }

    fn fan_out(&self) -> NonZeroUsize {
        match self {
            Ok(policy) => policy.fan_out(),
            Err(_) => NonZeroUsize::MIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_detects_identity() {
        assert!(matches!(
            TransformResult::compare(b"abc", b"abc".to_vec()),
            TransformResult::Unchanged
        ));
        assert!(matches!(
            TransformResult::compare(b"abc", b"cba".to_vec()),
            TransformResult::Mutated(output) if output == b"cba"
        ));
    }

    #[test]
    fn closures_are_policies_with_single_fan_out() {
        let policy = |input: &[u8]| TransformResult::Mutated(input.to_ascii_uppercase());

        assert!(matches!(policy.transform(b"ab"), TransformResult::Mutated(o) if o == b"AB"));
        assert_eq!(policy.fan_out().get(), 1);
    }

    #[test]
    fn misconfigured_policy_reports_an_internal_error() {
        let policy: Result<fn(&[u8]) -> TransformResult, ConfigError> =
            Err(ConfigError::EmptyPattern { index: 0 });

        let TransformResult::Error(error) = policy.transform(b"x") else {
            panic!("expected an error");
        };
        assert_eq!(error.kind(), crate::ErrorKind::Internal);
        assert_eq!(
            error.to_string(),
            "transform is misconfigured: substitution pattern #0 is empty"
        );
    }
}

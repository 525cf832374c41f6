/// Export a guest's `receive` entry point, driven by a transform policy.
///
/// The policy expression is evaluated on every invocation, so it should be a cheap
/// constructor over constants. Anything implementing [crate::Transform] works:
/// the reference policies in [crate::policies], a closure over `&[u8]`, or a
/// `Result<impl Transform, ConfigError>` when construction can fail.
///
/// The export is only generated for `wasm32` targets. Off-target, call
/// [crate::receive_template] with a test host instead.
///
/// **Reference policy:**
/// ```rust
/// use mutator::policies::ByteSort;
///
/// mutator::mutator!(ByteSort);
/// ```
///
/// **Closure, with logging to stderr** (build for `wasm32-wasip1`; on
/// `wasm32-unknown-unknown` the logger is refused and the guest runs without logs):
/// ```rust,ignore
/// use mutator::TransformResult;
///
/// mutator::mutator!(
///     |input: &[u8]| TransformResult::compare(input, input.to_ascii_uppercase()),
///     log_level = log::LevelFilter::Debug
/// );
/// ```
#[macro_export]
macro_rules! mutator {
    ($policy: expr) => {
        #[cfg(target_arch = "wasm32")]
        #[unsafe(no_mangle)]
        pub extern "C" fn receive(length: usize) {
            let policy = $policy;
            $crate::receive_template(&mut $crate::host::StaticHost, length, &policy);
        }
    };

    ($policy: expr, log_level = $level: expr) => {
        #[cfg(target_arch = "wasm32")]
        #[unsafe(no_mangle)]
        pub extern "C" fn receive(length: usize) {
            // only the first invocation installs the logger
            let _ = mutator_log::configure_logging($level, mutator_log::LogMode::Stderr);
            let policy = $policy;
            $crate::receive_template(&mut $crate::host::StaticHost, length, &policy);
        }
    };
}

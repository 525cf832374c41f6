//! An in-memory host for exercising guests off-target.

use crate::Host;

/// One `send` as the host saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sent {
    /// The emitted bytes.
    pub bytes: Vec<u8>,
    /// Whether the host accepted them.
    pub accepted: bool,
}

/// A [`Host`] that serves one data unit and records every call made against it.
///
/// It panics on contract violations: a second fetch, or a fetch into a buffer that is
/// not exactly the data unit's length.
pub struct RecordingHost {
    data: Option<Vec<u8>>,
    fetches: usize,
    errors: Vec<String>,
    sent: Vec<Sent>,
    accept: Box<dyn Fn(usize) -> bool>,
}

impl RecordingHost {
    /// A host serving `data`, accepting every emission.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Some(data.into()),
            fetches: 0,
            errors: Vec::new(),
            sent: Vec::new(),
            accept: Box::new(|_| true),
        }
    }

    /// Decide acceptance per emission. The rule receives the zero-based index of the `send`.
    pub fn accept_when(mut self, rule: impl Fn(usize) -> bool + 'static) -> Self {
        self.accept = Box::new(rule);
        self
    }

    /// Reject every emission.
    pub fn rejecting(self) -> Self {
        self.accept_when(|_| false)
    }

    /// Serve another data unit, keeping the recorded history.
    pub fn serve(&mut self, data: impl Into<Vec<u8>>) {
        self.data = Some(data.into());
    }

    /// How many times `get_data` was called.
    pub fn fetches(&self) -> usize {
        self.fetches
    }

    /// Error messages received, lossily decoded as UTF-8.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Every `send`, accepted or not, in call order.
    pub fn sent(&self) -> &[Sent] {
        &self.sent
    }

    /// How many times `send` was called.
    pub fn sends(&self) -> usize {
        self.sent.len()
    }

    /// The bytes of every accepted emission, in call order.
    pub fn accepted(&self) -> Vec<Vec<u8>> {
        self.sent
            .iter()
            .filter(|sent| sent.accepted)
            .map(|sent| sent.bytes.clone())
            .collect()
    }
}

impl Host for RecordingHost {
    fn error(&mut self, message: &[u8]) {
        self.errors
            .push(String::from_utf8_lossy(message).into_owned());
    }

    fn get_data(&mut self, buffer: &mut [u8]) {
        self.fetches += 1;
        let data = self
            .data
            .take()
            .unwrap_or_else(|| panic!("get_data called {} times for one data unit", self.fetches));
        assert_eq!(
            buffer.len(),
            data.len(),
            "guest buffer does not match the announced length"
        );
        buffer.copy_from_slice(&data);
    }

    fn send(&mut self, output: &[u8]) -> bool {
        let accepted = (self.accept)(self.sent.len());
        self.sent.push(Sent {
            bytes: output.to_vec(),
            accepted,
        });
        accepted
    }
}

use crate::Host;

/// The emission and error signaling channels of one invocation.
///
/// Emissions are discrete events: each [`Channels::emit`] is one `send`, which the host
/// accepts or rejects on its own. A rejection is only counted. It is not an error and
/// it is not retried.
///
/// The error channel is one-shot. The first [`Channels::signal_error`] reaches the host;
/// later ones in the same invocation are dropped.
pub struct Channels<'h, H: Host> {
    host: &'h mut H,
    error_signaled: bool,
    emitted: usize,
    rejected: usize,
}

impl<'h, H: Host> Channels<'h, H> {
    /// Open the channels for one invocation.
    pub fn new(host: &'h mut H) -> Self {
        Self {
            host,
            error_signaled: false,
            emitted: 0,
            rejected: 0,
        }
    }

    /// Emit `output` as one output unit. Returns whether the host accepted it.
    pub fn emit(&mut self, output: &[u8]) -> bool {
        let accepted = self.host.send(output);
        if accepted {
            self.emitted += 1;
        } else {
            self.rejected += 1;
            log::debug!("host rejected a {} byte emission", output.len());
        }
        accepted
    }

    /// Report `message` to the host, once per invocation.
    ///
    /// Returns false when an error was already signaled; the message is then dropped.
    pub fn signal_error(&mut self, message: &str) -> bool {
        if self.error_signaled {
            log::warn!("dropping additional error for this invocation: {message}");
            return false;
        }
        self.error_signaled = true;
        self.host.error(message.as_bytes());
        true
    }

    /// Emissions the host accepted so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Emissions the host rejected so far.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Whether the error channel has been used.
    pub fn error_signaled(&self) -> bool {
        self.error_signaled
    }
}

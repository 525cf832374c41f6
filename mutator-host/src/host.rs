/// The host environment, as seen from inside one invocation.
///
/// The raw ABI passes pointer/length pairs. Here every primitive takes a slice instead,
/// so the length handed to the host always matches the memory behind the pointer.
pub trait Host {
    /// Report a non-fatal error message. Does not abort the invocation.
    fn error(&mut self, message: &[u8]);

    /// Ask the host to copy the current data unit into `buffer`.
    ///
    /// `buffer` must be exactly as long as the length announced to `receive`.
    /// Prefer [`crate::Announced::fetch`], which guarantees this.
    fn get_data(&mut self, buffer: &mut [u8]);

    /// Emit `output` as one output unit. Returns whether the host accepted it.
    fn send(&mut self, output: &[u8]) -> bool;
}

impl<H: Host + ?Sized> Host for &mut H {
    fn error(&mut self, message: &[u8]) {
        (**self).error(message)
    }

    fn get_data(&mut self, buffer: &mut [u8]) {
        (**self).get_data(buffer)
    }

    fn send(&mut self, output: &[u8]) -> bool {
        (**self).send(output)
    }
}

/// The host reached through the module's `env` imports.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticHost;

#[cfg(target_arch = "wasm32")]
impl Host for StaticHost {
    fn error(&mut self, message: &[u8]) {
        // SAFETY: the pointer and length describe a live slice for the duration of the call.
        unsafe { crate::sys::error(message.as_ptr(), message.len()) }
    }

    fn get_data(&mut self, buffer: &mut [u8]) {
        // SAFETY: callers size the buffer to the announced length, which is exactly
        // what the host writes.
        unsafe { crate::sys::get_data(buffer.as_mut_ptr()) }
    }

    fn send(&mut self, output: &[u8]) -> bool {
        // SAFETY: the pointer and length describe a live slice for the duration of the call.
        unsafe { crate::sys::send(output.as_ptr(), output.len()) }
    }
}

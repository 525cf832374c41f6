//! Raw imports from the host's `env` module.

#[link(wasm_import_module = "env")]
unsafe extern "C" {
    /// Report a non-fatal message of `len` bytes at `ptr`.
    pub fn error(ptr: *const u8, len: usize);

    /// Copy the current data unit into the buffer at `ptr`.
    /// The buffer must be exactly the length announced to `receive`.
    pub fn get_data(ptr: *mut u8);

    /// Emit `len` bytes at `ptr` as one output unit. Returns whether the host accepted it.
    pub fn send(ptr: *const u8, len: usize) -> bool;
}

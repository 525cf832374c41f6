use std::ops::Deref;

use crate::Host;

/// A data unit length announced by the host, not yet fetched.
///
/// Fetching consumes the announcement, so a single invocation can only fetch once.
#[derive(Debug, PartialEq, Eq)]
pub struct Announced {
    length: usize,
}

impl Announced {
    /// Accept the length passed to `receive`.
    ///
    /// An empty data unit is nothing to process, so a zero length yields `None`.
    pub fn new(length: usize) -> Option<Self> {
        (length != 0).then_some(Self { length })
    }

    /// Allocate a buffer of exactly the announced length and have the host fill it.
    pub fn fetch(self, host: &mut impl Host) -> GuestBuffer {
        let mut buffer = vec![0u8; self.length].into_boxed_slice();
        host.get_data(&mut buffer);
        log::debug!("fetched {} byte data unit", buffer.len());
        GuestBuffer { buffer }
    }
}

/// The guest's copy of one data unit.
///
/// Backed by a boxed slice: it keeps the announced length for its whole life.
/// It lives only as long as the invocation that fetched it.
pub struct GuestBuffer {
    buffer: Box<[u8]>,
}

impl GuestBuffer {
    /// The fetched bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}

impl Deref for GuestBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.buffer
    }
}

impl std::fmt::Debug for GuestBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuestBuffer")
            .field("length", &self.buffer.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingHost;

    #[test]
    fn zero_length_is_not_announced() {
        assert_eq!(Announced::new(0), None);
        assert_eq!(Announced::new(3), Some(Announced { length: 3 }));
    }

    #[test]
    fn fetch_fills_exactly_the_announced_length() {
        let mut host = RecordingHost::new(b"hello".to_vec());
        let announced = Announced::new(5).expect("non-zero");

        let buffer = announced.fetch(&mut host);

        assert_eq!(buffer.as_bytes(), b"hello");
        assert_eq!(buffer.len(), 5);
        assert_eq!(host.fetches(), 1);
        assert_eq!(format!("{buffer:?}"), "GuestBuffer { length: 5 }");
    }
}

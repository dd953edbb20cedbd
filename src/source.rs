//! Melody text access.
//!
//! The sequencer reads melody text one byte at a time through [`MelodySource`], so
//! the same parser works whether the text sits in a plain buffer or behind a
//! byte-at-a-time store with its own address space (flash, program memory, ...).
//! A `0` byte is the end-of-text sentinel in every backing.

/// Which kind of storage a melody is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backing {
    /// Directly addressable buffer
    Ram,
    /// Separately addressed store, fetched one byte at a time
    Store,
}

/// Read-only, position-indexed melody text terminated by a `0` byte.
pub trait MelodySource {
    /// Byte at `position`, or `0` at and beyond the end of the text.
    fn peek(&self, position: usize) -> u8;

    fn backing(&self) -> Backing;
}

/// A store addressed independently of working memory.
pub trait ByteStore {
    /// Byte at `address`. Addresses past the end read as `0`.
    fn read_byte(&self, address: usize) -> u8;
}

impl ByteStore for [u8] {
    fn read_byte(&self, address: usize) -> u8 {
        self.get(address).copied().unwrap_or(0)
    }
}

impl ByteStore for Vec<u8> {
    fn read_byte(&self, address: usize) -> u8 {
        self.as_slice().read_byte(address)
    }
}

impl<const N: usize> ByteStore for [u8; N] {
    fn read_byte(&self, address: usize) -> u8 {
        self.as_slice().read_byte(address)
    }
}

/// Melody text borrowed from the caller.
#[derive(Clone, Copy)]
pub enum Melody<'a> {
    Ram(&'a [u8]),
    Store {
        store: &'a dyn ByteStore,
        base: usize,
    },
}

impl<'a> Melody<'a> {
    pub fn ram(text: &'a str) -> Self {
        Melody::Ram(text.as_bytes())
    }

    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Melody::Ram(bytes)
    }

    /// Melody starting at `base` inside `store`.
    pub fn stored(store: &'a dyn ByteStore, base: usize) -> Self {
        Melody::Store { store, base }
    }
}

impl MelodySource for Melody<'_> {
    fn peek(&self, position: usize) -> u8 {
        match self {
            Melody::Ram(bytes) => bytes.get(position).copied().unwrap_or(0),
            Melody::Store { store, base } => match base.checked_add(position) {
                Some(address) => store.read_byte(address),
                None => 0,
            },
        }
    }

    fn backing(&self) -> Backing {
        match self {
            Melody::Ram(_) => Backing::Ram,
            Melody::Store { .. } => Backing::Store,
        }
    }
}

impl std::fmt::Debug for Melody<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Melody::Ram(bytes) => f.debug_tuple("Ram").field(&bytes.len()).finish(),
            Melody::Store { base, .. } => f.debug_struct("Store").field("base", base).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ram_sentinel_past_end() {
        let melody = Melody::ram("ab");
        assert_eq!(melody.peek(0), b'a');
        assert_eq!(melody.peek(1), b'b');
        assert_eq!(melody.peek(2), 0);
        assert_eq!(melody.peek(100), 0);
        assert_eq!(melody.backing(), Backing::Ram);
    }

    #[test]
    fn test_embedded_nul_terminates() {
        let melody = Melody::from_bytes(b"ab\0cd");
        assert_eq!(melody.peek(2), 0);
    }

    #[test]
    fn test_store_reads_from_base() {
        let flash: Vec<u8> = b"xxxSong:c".to_vec();
        let melody = Melody::stored(&flash, 3);
        assert_eq!(melody.peek(0), b'S');
        assert_eq!(melody.peek(5), b'c');
        assert_eq!(melody.peek(6), 0);
        assert_eq!(melody.backing(), Backing::Store);
    }

    #[test]
    fn test_store_address_overflow_reads_sentinel() {
        let flash = b"abc";
        let melody = Melody::stored(flash, usize::MAX);
        assert_eq!(melody.peek(1), 0);
    }
}

//! Bounds-checked cursors over caller-supplied byte spans.
//!
//! The codec walks flat byte regions section by section. These cursors
//! replace raw offset arithmetic with checked access: every read and write
//! is validated against the span's declared length before any bytes move,
//! and a failed access names the [`Section`] it was serving.

use super::{Section, WireError};

/// Write cursor over a destination span.
#[derive(Debug)]
pub struct WriteCursor<'a> {
    span: &'a mut [u8],
    pos: usize,
}

impl<'a> WriteCursor<'a> {
    /// Creates a cursor positioned at the start of `span`.
    #[must_use]
    pub const fn new(span: &'a mut [u8]) -> Self {
        Self { span, pos: 0 }
    }

    /// Number of bytes written so far.
    #[must_use]
    pub const fn written(&self) -> usize {
        self.pos
    }

    /// Number of bytes still available.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.span.len() - self.pos
    }

    /// Copies `bytes` into the span at the current position and advances
    /// past them.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::DestinationFull`] attributed to `section` when
    /// fewer than `bytes.len()` bytes remain. The span is untouched in that
    /// case.
    pub fn put(&mut self, section: Section, bytes: &[u8]) -> Result<(), WireError> {
        let remaining = self.remaining();
        let end = self
            .pos
            .checked_add(bytes.len())
            .filter(|&candidate| candidate <= self.span.len())
            .ok_or(WireError::DestinationFull {
                section,
                needed: bytes.len(),
                remaining,
            })?;
        let dest = self
            .span
            .get_mut(self.pos..end)
            .ok_or(WireError::DestinationFull {
                section,
                needed: bytes.len(),
                remaining,
            })?;
        dest.copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }
}

/// Read cursor over a source span.
#[derive(Debug)]
pub struct ReadCursor<'a> {
    span: &'a [u8],
    pos: usize,
}

impl<'a> ReadCursor<'a> {
    /// Creates a cursor positioned at the start of `span`.
    #[must_use]
    pub const fn new(span: &'a [u8]) -> Self {
        Self { span, pos: 0 }
    }

    /// Number of bytes consumed so far.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.pos
    }

    /// Number of bytes still unread.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.span.len() - self.pos
    }

    /// Borrows the next `len` bytes and advances past them.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::SourceExhausted`] attributed to `section` when
    /// fewer than `len` bytes remain.
    pub fn take(&mut self, section: Section, len: usize) -> Result<&'a [u8], WireError> {
        let remaining = self.remaining();
        let end = self
            .pos
            .checked_add(len)
            .filter(|&candidate| candidate <= self.span.len())
            .ok_or(WireError::SourceExhausted {
                section,
                needed: len,
                remaining,
            })?;
        let bytes = self
            .span
            .get(self.pos..end)
            .ok_or(WireError::SourceExhausted {
                section,
                needed: len,
                remaining,
            })?;
        self.pos = end;
        Ok(bytes)
    }

    /// Reads a fixed-width byte array and advances past it.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::SourceExhausted`] attributed to `section` when
    /// fewer than `N` bytes remain.
    pub fn take_array<const N: usize>(&mut self, section: Section) -> Result<[u8; N], WireError> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.take(section, N)?);
        Ok(array)
    }

    /// Borrows the bytes before the next NUL byte and advances past the
    /// terminator itself.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnterminatedTitle`] when no NUL byte remains in
    /// the span. The cursor does not advance in that case.
    pub fn take_until_nul(&mut self) -> Result<&'a [u8], WireError> {
        let rest = self.span.get(self.pos..).unwrap_or_default();
        let Some(terminator) = rest.iter().position(|&byte| byte == 0) else {
            return Err(WireError::UnterminatedTitle {
                searched: rest.len(),
            });
        };
        let text = rest.get(..terminator).unwrap_or_default();
        self.pos += terminator + 1;
        Ok(text)
    }
}

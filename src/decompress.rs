use core::fmt::{self};

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Decompression errors
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecompressError {
    /// The input ran out before the requested amount of output was produced.
    InputTruncated,
    /// A backreference pointed before the start of the output.
    InvalidBackreference,
    /// The output buffer is smaller than the requested decompressed size.
    OutputTooSmall,
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecompressError::InputTruncated => write!(f, "input was truncated"),
            DecompressError::InvalidBackreference => write!(f, "invalid backreference"),
            DecompressError::OutputTooSmall => write!(f, "output buffer was insufficient"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecompressError {}

/// Internal abstraction for the two different types of outputs
///
/// Every sink has a fixed limit (the decompressed size). Writes that would go
/// past the limit are clamped to it, so callers only need to check
/// [is_full](OutputSink::is_full) between symbols.
pub(crate) trait OutputSink {
    /// Number of bytes written so far
    fn pos(&self) -> usize;
    /// Total number of bytes this sink will accept
    fn limit(&self) -> usize;
    fn is_full(&self) -> bool {
        self.pos() >= self.limit()
    }
    /// Add a single literal byte to the output
    fn put_lit(&mut self, c: u8);
    /// Add `len` copies of `value` to the output
    fn put_run(&mut self, value: u8, len: usize);
    /// Add a backreference to the output
    ///
    /// A `disp` of 0 means the current position minus 1.
    /// Increasing `disp` means further backwards
    ///
    /// Copy `len` bytes, which as usual for LZ77 may exceed `disp`.
    fn put_backref(&mut self, disp: usize, len: usize) -> Result<(), DecompressError>;
}

pub(crate) struct BufOutput<'a> {
    pos: usize,
    limit: usize,
    buf: &'a mut [u8],
}
impl<'a> BufOutput<'a> {
    pub(crate) fn new(buf: &'a mut [u8], limit: usize) -> Result<Self, DecompressError> {
        if buf.len() < limit {
            return Err(DecompressError::OutputTooSmall);
        }
        Ok(Self { pos: 0, limit, buf })
    }
}
impl<'a> OutputSink for BufOutput<'a> {
    fn pos(&self) -> usize {
        self.pos
    }

    fn limit(&self) -> usize {
        self.limit
    }

    fn put_lit(&mut self, c: u8) {
        if self.pos < self.limit {
            self.buf[self.pos] = c;
            self.pos += 1;
        }
    }

    fn put_run(&mut self, value: u8, len: usize) {
        let len = usize::min(len, self.limit - self.pos);
        self.buf[self.pos..self.pos + len].fill(value);
        self.pos += len;
    }

    fn put_backref(&mut self, disp: usize, len: usize) -> Result<(), DecompressError> {
        if disp + 1 > self.pos {
            return Err(DecompressError::InvalidBackreference);
        }

        let len = usize::min(len, self.limit - self.pos);

        // must go forwards one byte at a time, overlapping copies reread
        // bytes written earlier in the same copy
        for i in 0..len {
            self.buf[self.pos + i] = self.buf[self.pos - disp - 1 + i];
        }
        self.pos += len;

        Ok(())
    }
}

#[cfg(feature = "alloc")]
pub(crate) struct VecOutput {
    limit: usize,
    pub(crate) vec: alloc::vec::Vec<u8>,
}
#[cfg(feature = "alloc")]
impl VecOutput {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            limit,
            vec: alloc::vec::Vec::with_capacity(limit),
        }
    }
}
#[cfg(feature = "alloc")]
impl OutputSink for VecOutput {
    fn pos(&self) -> usize {
        self.vec.len()
    }

    fn limit(&self) -> usize {
        self.limit
    }

    fn put_lit(&mut self, c: u8) {
        if self.vec.len() < self.limit {
            self.vec.push(c);
        }
    }

    fn put_run(&mut self, value: u8, len: usize) {
        let len = usize::min(len, self.limit - self.vec.len());
        self.vec.resize(self.vec.len() + len, value);
    }

    fn put_backref(&mut self, disp: usize, len: usize) -> Result<(), DecompressError> {
        let pos = self.vec.len();
        if disp + 1 > pos {
            return Err(DecompressError::InvalidBackreference);
        }

        let len = usize::min(len, self.limit - pos);
        for i in 0..len {
            let c = self.vec[pos - disp - 1 + i];
            self.vec.push(c);
        }

        Ok(())
    }
}

/// Bounds-checked cursor over the compressed input
pub(crate) trait InputHelper {
    fn take_u8(&mut self) -> Result<u8, DecompressError>;
    fn take_u16_be(&mut self) -> Result<u16, DecompressError>;
}
impl InputHelper for &[u8] {
    fn take_u8(&mut self) -> Result<u8, DecompressError> {
        let (&c, rest) = self
            .split_first()
            .ok_or(DecompressError::InputTruncated)?;
        *self = rest;
        Ok(c)
    }

    fn take_u16_be(&mut self) -> Result<u16, DecompressError> {
        let (bytes, rest) = self
            .split_first_chunk::<2>()
            .ok_or(DecompressError::InputTruncated)?;
        *self = rest;
        Ok(u16::from_be_bytes(*bytes))
    }
}

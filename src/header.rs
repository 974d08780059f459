//! Metadata record that precedes LZSS payloads
//!
//! Five big-endian `u32` fields, 20 bytes in total. Nothing here is checked by
//! the decoders; callers pick out [original_size](Header::original_size) and
//! pass it on as the decompressed size.

use core::fmt;

#[cfg(feature = "std")]
extern crate std;

/// Size of the encoded header
pub const HEADER_LEN: usize = 20;

/// `"LZSS"`
pub const LZSS_MAGIC: u32 = u32::from_be_bytes(*b"LZSS");

/// What the decompressed bytes contain (not how they were compressed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum FileType {
    /// `"LZSS"`
    Lz = LZSS_MAGIC,
    /// `".PCM"`
    Pcm = 0x2E50434D,
    /// `".SND"`, packed PCM sound
    Snd = 0x2E534E44,
    /// `".TGA"`
    Tga = 0x2E544741,
    /// `".TM\0"`, packed VDP1 image
    Tm = 0x2E544D00,
    /// `".BIN"`
    Bin = 0x2E42494E,
}
impl FileType {
    pub const fn as_u32(self) -> u32 {
        self as u32
    }
}
impl TryFrom<u32> for FileType {
    type Error = u32;

    fn try_from(v: u32) -> Result<Self, u32> {
        match v {
            x if x == FileType::Lz as u32 => Ok(FileType::Lz),
            x if x == FileType::Pcm as u32 => Ok(FileType::Pcm),
            x if x == FileType::Snd as u32 => Ok(FileType::Snd),
            x if x == FileType::Tga as u32 => Ok(FileType::Tga),
            x if x == FileType::Tm as u32 => Ok(FileType::Tm),
            x if x == FileType::Bin as u32 => Ok(FileType::Bin),
            _ => Err(v),
        }
    }
}

/// Header errors
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum HeaderError {
    /// Fewer than [HEADER_LEN] bytes were available
    Truncated,
    /// The header's original size disagrees with the size the caller wants to decode
    SizeMismatch { expected: u32, actual: usize },
}
impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderError::Truncated => write!(f, "header was truncated"),
            HeaderError::SizeMismatch { expected, actual } => write!(
                f,
                "header says {} bytes but {} were requested",
                expected, actual
            ),
        }
    }
}
#[cfg(feature = "std")]
impl std::error::Error for HeaderError {}

/// LZSS file header
///
/// Fields are kept as raw values, so unknown file types and versions survive a
/// [parse](Header::parse) / [to_bytes](Header::to_bytes) trip untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub magic: u32,
    pub version: u32,
    pub file_type: u32,
    pub original_size: u32,
    pub reserved: u32,
}
impl Header {
    /// Build a header with the LZSS magic and zeroed version/reserved fields
    pub const fn new(file_type: FileType, original_size: u32) -> Self {
        Self {
            magic: LZSS_MAGIC,
            version: 0,
            file_type: file_type as u32,
            original_size,
            reserved: 0,
        }
    }

    /// Split a header off the front of `data`
    ///
    /// Returns the header and the payload following it.
    pub fn parse(data: &[u8]) -> Result<(Self, &[u8]), HeaderError> {
        let (hdr, payload) = data
            .split_first_chunk::<HEADER_LEN>()
            .ok_or(HeaderError::Truncated)?;

        let field = |i: usize| u32::from_be_bytes([hdr[i], hdr[i + 1], hdr[i + 2], hdr[i + 3]]);
        let ret = Self {
            magic: field(0),
            version: field(4),
            file_type: field(8),
            original_size: field(12),
            reserved: field(16),
        };
        tracing::trace!(
            magic = ret.magic,
            file_type = ret.file_type,
            original_size = ret.original_size,
            "parsed header"
        );

        Ok((ret, payload))
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut ret = [0u8; HEADER_LEN];
        for (chunk, v) in ret.chunks_exact_mut(4).zip([
            self.magic,
            self.version,
            self.file_type,
            self.original_size,
            self.reserved,
        ]) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }
        ret
    }

    pub fn has_lzss_magic(&self) -> bool {
        self.magic == LZSS_MAGIC
    }

    /// The file type, if it is one of the known ones
    pub fn file_type(&self) -> Option<FileType> {
        FileType::try_from(self.file_type).ok()
    }

    /// Check that the header agrees with the size about to be handed to a decoder
    pub fn check_size(&self, decompressed_size: usize) -> Result<(), HeaderError> {
        if usize::try_from(self.original_size) == Ok(decompressed_size) {
            Ok(())
        } else {
            tracing::debug!(
                expected = self.original_size,
                actual = decompressed_size,
                "header size mismatch"
            );
            Err(HeaderError::SizeMismatch {
                expected: self.original_size,
                actual: decompressed_size,
            })
        }
    }
}

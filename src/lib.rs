//! RLE and LZSS decoders for buffers whose decompressed size is known up front
//!
//! ```
//! let mut out = [0u8; 6];
//! satlz::lzss::decompress_to_buf(&[0x80, b'A', 0x00, 0x02], &mut out, 6).unwrap();
//! assert_eq!(&out, b"AAAAAA");
//! ```

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(all(test, feature = "alloc"))]
mod compress;
mod decompress;
pub mod header;
pub mod lzss;
pub mod rle;

pub use decompress::DecompressError;
pub use header::{FileType, Header, HeaderError};

/// Compression scheme of a payload
///
/// Which one applies is decided outside this crate, usually from file metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Rle,
    Lzss,
}
impl Scheme {
    /// Decompress the input into the first `decompressed_size` bytes of a preallocated buffer
    ///
    /// Returns the number of input bytes consumed on success
    pub fn decompress_to_buf(
        self,
        inp: &[u8],
        outp: &mut [u8],
        decompressed_size: usize,
    ) -> Result<usize, DecompressError> {
        match self {
            Scheme::Rle => rle::decompress_to_buf(inp, outp, decompressed_size),
            Scheme::Lzss => lzss::decompress_to_buf(inp, outp, decompressed_size),
        }
    }

    #[cfg(feature = "alloc")]
    /// Decompress the input into a [Vec](alloc::vec::Vec) of exactly `decompressed_size` bytes
    pub fn decompress_to_vec(
        self,
        inp: &[u8],
        decompressed_size: usize,
    ) -> Result<alloc::vec::Vec<u8>, DecompressError> {
        match self {
            Scheme::Rle => rle::decompress_to_vec(inp, decompressed_size),
            Scheme::Lzss => lzss::decompress_to_vec(inp, decompressed_size),
        }
    }
}

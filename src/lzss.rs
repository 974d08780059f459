//! LZSS decoder
//!
//! The stream is a sequence of groups: one flags byte followed by up to eight
//! symbols. Flag bits are consumed MSB first. A set bit is a literal byte, a
//! clear bit is a two-byte big-endian pair `oooo_oooo oooo_llll` holding a
//! 12-bit offset and a 4-bit length. The distance back into the output is
//! `offset + 1` (1..=4096) and the copy length is `length + 3` (3..=18).

use crate::decompress::*;

#[cfg(feature = "alloc")]
extern crate alloc;

/// Size of the sliding window, i.e. the furthest a backreference can reach
pub const WINDOW_SIZE: usize = 1 << 12;
/// Shortest backreference
pub const MIN_MATCH: usize = 3;
/// Longest backreference
pub const MAX_MATCH: usize = 0xf + MIN_MATCH;

fn decompress_impl(
    mut inp: &[u8],
    outp: &mut impl OutputSink,
) -> Result<usize, DecompressError> {
    let orig_len = inp.len();

    let mut flags = 0u8;
    let mut mask = 0u8;

    while !outp.is_full() {
        if mask == 0 {
            flags = inp.take_u8()?;
            mask = 0x80;
        }

        if flags & mask != 0 {
            outp.put_lit(inp.take_u8()?);
        } else {
            let pair = inp.take_u16_be()?;
            let disp = ((pair >> 4) & 0x0fff) as usize;
            let len = (pair & 0x000f) as usize + MIN_MATCH;
            outp.put_backref(disp, len)?;
        }

        mask >>= 1;
    }

    Ok(orig_len - inp.len())
}

fn decompress_logged(inp: &[u8], outp: &mut impl OutputSink) -> Result<usize, DecompressError> {
    tracing::trace!(inp_len = inp.len(), size = outp.limit(), "lzss decode");
    match decompress_impl(inp, outp) {
        Ok(consumed) => {
            tracing::trace!(consumed, "lzss decode done");
            Ok(consumed)
        }
        Err(e) => {
            tracing::debug!(pos = outp.pos(), size = outp.limit(), "lzss decode failed: {}", e);
            Err(e)
        }
    }
}

/// Decompress the input into the first `decompressed_size` bytes of a preallocated buffer
///
/// Returns the number of input bytes consumed on success. Anything after that
/// in `inp` is never looked at.
pub fn decompress_to_buf(
    inp: &[u8],
    outp: &mut [u8],
    decompressed_size: usize,
) -> Result<usize, DecompressError> {
    let mut outp = BufOutput::new(outp, decompressed_size)?;
    decompress_logged(inp, &mut outp)
}

/// Decompress the input into a [Vec](alloc::vec::Vec) of exactly `decompressed_size` bytes
#[cfg(feature = "alloc")]
pub fn decompress_to_vec(
    inp: &[u8],
    decompressed_size: usize,
) -> Result<alloc::vec::Vec<u8>, DecompressError> {
    let mut ret = VecOutput::new(decompressed_size);
    decompress_logged(inp, &mut ret)?;
    Ok(ret.vec)
}

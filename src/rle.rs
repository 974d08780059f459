//! Run-length decoder
//!
//! The stream is a flat sequence of `(run, value)` byte pairs.

use crate::decompress::*;

#[cfg(feature = "alloc")]
extern crate alloc;

fn decompress_impl(
    mut inp: &[u8],
    outp: &mut impl OutputSink,
) -> Result<usize, DecompressError> {
    let orig_len = inp.len();

    while !outp.is_full() {
        let run = inp.take_u8()?;
        let value = inp.take_u8()?;
        // run of 0 is legal and emits nothing
        outp.put_run(value, run as usize);
    }

    Ok(orig_len - inp.len())
}

fn decompress_logged(inp: &[u8], outp: &mut impl OutputSink) -> Result<usize, DecompressError> {
    tracing::trace!(inp_len = inp.len(), size = outp.limit(), "rle decode");
    decompress_impl(inp, outp).map_err(|e| {
        tracing::debug!(pos = outp.pos(), size = outp.limit(), "rle decode failed: {}", e);
        e
    })
}

/// Decompress the input into the first `decompressed_size` bytes of a preallocated buffer
///
/// Returns the number of input bytes consumed on success
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

//! Reference encoders, only used to produce test vectors for the decoders

use core::mem;

use crate::lzss::{MAX_MATCH, MIN_MATCH, WINDOW_SIZE};

extern crate alloc;
use alloc::vec::Vec;

const HTAB_LOG2: usize = 12;
const HTAB_SZ: usize = 1 << HTAB_LOG2;

fn lzss_hash(v: u32) -> usize {
    let h = v.wrapping_mul(2654435769);
    let h = h >> (32 - HTAB_LOG2);
    h as usize
}

/// Greedy single-probe LZSS encoder
pub struct LzssEncoder {
    /// Last position seen for each hash, plus one (0 is empty)
    htab: [usize; HTAB_SZ],
}
impl LzssEncoder {
    pub fn new() -> Self {
        Self { htab: [0; HTAB_SZ] }
    }

    fn find_match(&mut self, inp: &[u8], pos: usize) -> Option<(usize, usize)> {
        let head = inp.get(pos..pos + MIN_MATCH)?;
        let hash = lzss_hash(u32::from_le_bytes([head[0], head[1], head[2], 0]));
        let ref_pos = mem::replace(&mut self.htab[hash], pos + 1).checked_sub(1)?;

        let disp = pos - ref_pos - 1;
        if disp >= WINDOW_SIZE || inp[ref_pos..ref_pos + MIN_MATCH] != *head {
            return None;
        }

        let max_len = usize::min(MAX_MATCH, inp.len() - pos);
        let len = MIN_MATCH
            + inp[pos + MIN_MATCH..pos + max_len]
                .iter()
                .zip(inp[ref_pos + MIN_MATCH..].iter())
                .take_while(|(a, b)| a == b)
                .count();
        Some((disp, len))
    }

    pub fn compress(&mut self, inp: &[u8]) -> Vec<u8> {
        self.htab.fill(0);

        let mut out = Vec::new();
        let mut flags_pos = 0;
        let mut mask = 0u8;
        let mut pos = 0;

        while pos < inp.len() {
            if mask == 0 {
                flags_pos = out.len();
                out.push(0);
                mask = 0x80;
            }

            if let Some((disp, len)) = self.find_match(inp, pos) {
                let pair = ((disp as u16) << 4) | (len - MIN_MATCH) as u16;
                out.extend_from_slice(&pair.to_be_bytes());
                pos += len;
            } else {
                out[flags_pos] |= mask;
                out.push(inp[pos]);
                pos += 1;
            }

            mask >>= 1;
        }

        out
    }
}

pub fn rle_compress(inp: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    for run in inp.chunk_by(|a, b| a == b) {
        for piece in run.chunks(0xff) {
            out.push(piece.len() as u8);
            out.push(piece[0]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lzss_encoding() {
        let mut enc = LzssEncoder::new();
        assert!(enc.compress(&[]).is_empty());
        assert_eq!(enc.compress(&[1, 2]), [0xc0, 1, 2]);
        // first byte can't match, the rest is one distance-1 run
        assert_eq!(enc.compress(&[7; 6]), [0x80, 7, 0x00, 0x02]);
        assert_eq!(
            enc.compress(&[1, 2, 3, 1, 2, 3, 1, 2, 3]),
            [0xe0, 1, 2, 3, 0x00, 0x23]
        );
    }

    #[test]
    fn test_lzss_long_run_splits() {
        let mut enc = LzssEncoder::new();
        // 1 literal, then copies of 18, 18 and 3; only match starts are hashed,
        // so the later ones reach back to the start of the previous match
        let out = enc.compress(&[0; 40]);
        assert_eq!(out, [0x80, 0, 0x00, 0x0f, 0x01, 0x1f, 0x01, 0x10]);
    }

    #[test]
    fn test_rle_encoding() {
        assert!(rle_compress(&[]).is_empty());
        assert_eq!(rle_compress(b"aaab"), [3, b'a', 1, b'b']);
        let out = rle_compress(&[9; 300]);
        assert_eq!(out, [255, 9, 45, 9]);
    }
}

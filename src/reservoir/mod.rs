//! Two-buffer bit reservoir
//!
//! A native draw yields 31 bits, while most requests only need a few. The
//! reservoir keeps the unused bits of past draws in two 32-bit buffers and
//! serves requests from the low end of the active one, going back to the
//! native source only when the active buffer runs dry.
//!
//! Invariants:
//! - `counts[i] <= NATIVE_WIDTH`,
//! - the low `counts[i]` bits of `bits[i]` are live, every bit above them
//!   is zero,
//! - a bit is handed out at most once.
//!
//! Callers alternate between the buffers with [`Reservoir::flip`] so that a
//! refill on one buffer does not force the next request to refill too.

use crate::bits::{NATIVE_WIDTH, mask};
use crate::native::NativeSource;

#[derive(Clone, Debug)]
pub(crate) struct Reservoir {
    bits: [u32; 2],
    counts: [u8; 2],
    active: usize,
}

impl Reservoir {
    /// Fills both buffers with one native draw each.
    pub(crate) fn prime<S: NativeSource>(source: &mut S) -> Self {
        let first = draw_word(source);
        let second = draw_word(source);

        Self {
            bits: [first, second],
            counts: [NATIVE_WIDTH; 2],
            active: 0,
        }
    }

    /// Selects the other buffer for the next operation.
    #[inline(always)]
    pub(crate) fn flip(&mut self) {
        self.active ^= 1;
    }

    /// Live-bit counts of both buffers.
    pub(crate) fn live_bits(&self) -> [u8; 2] {
        self.counts
    }

    /// Consumes the next `n` bits of the active buffer (`n <= 31`).
    ///
    /// If the buffer holds fewer than `n` bits, the remaining ones become
    /// the high-order part of the result, the buffer is refilled from
    /// `source`, and the low-order part is taken from the fresh word.
    pub(crate) fn take<S: NativeSource>(&mut self, n: u8, source: &mut S) -> u32 {
        let i = self.active;
        let available = self.counts[i];

        if n <= available {
            return self.consume(n);
        }

        let rest = n - available;
        let high = self.bits[i] << rest;

        log::trace!("refilling buffer {i}, carrying {available} bits");
        self.bits[i] = draw_word(source);
        self.counts[i] = NATIVE_WIDTH;

        high | self.consume(rest)
    }

    /// Consumes the low `n` bits of the active buffer only if they are
    /// already there and their value is below `bound`.
    ///
    /// Leaves the reservoir untouched and returns `None` otherwise.
    pub(crate) fn peek_below(&mut self, n: u8, bound: u32) -> Option<u32> {
        let i = self.active;

        if self.counts[i] >= n && (self.bits[i] & mask(n)) < bound {
            Some(self.consume(n))
        } else {
            None
        }
    }

    /// Pops `n` live bits off the active buffer. Requires `n <= count`.
    #[inline(always)]
    fn consume(&mut self, n: u8) -> u32 {
        let i = self.active;
        let value = self.bits[i] & mask(n);

        // `n` can be 31 at most, so the shift is always in range.
        self.bits[i] >>= n;
        self.counts[i] -= n;

        value
    }
}

/// One full-width native draw, trimmed to the bits the source guarantees.
#[inline(always)]
fn draw_word<S: NativeSource>(source: &mut S) -> u32 {
    source.random(i32::MAX) as u32 & mask(NATIVE_WIDTH)
}

//! Public generator
//!
//! [`Generator`] sits on top of a [`NativeSource`] and amortizes its cost:
//! each native draw is split into as many requests as its 31 bits can
//! serve. Requests come in two shapes:
//! - [`Generator::random_bits`]: `n` uniformly random bits,
//! - [`Generator::random_range`]: a value in a half-open range, obtained by
//!   bounded rejection sampling over the reservoir.
//!
//! No operation fails. Degenerate or oversized inputs map to documented
//! values (zero, the offset, or a clamped request).

use crate::bits::{DEFAULT_MAX_BITS, NATIVE_WIDTH, required_bits};
use crate::native::NativeSource;
use crate::reservoir::Reservoir;

/// Bit-reservoir random number generator.
///
/// `MAX_WIDTH` is the largest number of bits one request may ask for. It
/// defaults to [`DEFAULT_MAX_BITS`] and may be set anywhere in `1..=31`;
/// other values are rejected at compile time.
///
/// The generator owns its two buffers but only borrows entropy from `S`.
/// Several generators may share one source (see
/// [`native`](crate::native)), in which case their streams interleave.
#[derive(Clone, Debug)]
pub struct Generator<S, const MAX_WIDTH: u8 = DEFAULT_MAX_BITS> {
    source: S,
    reservoir: Reservoir,
}

impl<S: NativeSource> Generator<S> {
    /// Creates a generator with the default width, seeding the source
    /// with `0`.
    ///
    /// Equivalent to `Generator::seeded(source, 0)`.
    pub fn new(source: S) -> Self {
        Self::seeded(source, 0)
    }
}

impl<S: NativeSource, const MAX_WIDTH: u8> Generator<S, MAX_WIDTH> {
    /// Largest width served by [`random_bits`](Self::random_bits).
    pub const MAX_BITS: u8 = MAX_WIDTH;

    /// Largest span honored by [`random_range`](Self::random_range).
    pub const MAX_RANGE: i32 = ((1u32 << MAX_WIDTH) - 1) as i32;

    const WIDTH_IS_VALID: () = assert!(
        MAX_WIDTH >= 1 && MAX_WIDTH <= NATIVE_WIDTH,
        "MAX_WIDTH must be in 1..=31"
    );

    /// Creates a generator and seeds the source with `seed`.
    ///
    /// Both buffers are primed first, so the two priming draws come from
    /// whatever state the source was in before the call.
    pub fn seeded(mut source: S, seed: u32) -> Self {
        let () = Self::WIDTH_IS_VALID;

        let reservoir = Reservoir::prime(&mut source);
        source.seed(seed);

        Self { source, reservoir }
    }

    /// Reseeds the native source.
    ///
    /// The reservoir is left as is: bits drawn before the reseed are still
    /// handed out first.
    pub fn set_seed(&mut self, seed: u32) {
        log::debug!("reseeding native source with {seed}");
        self.source.seed(seed);
    }

    /// Returns a value in `[0, 2^n)`, with `n` clamped to `MAX_BITS`.
    ///
    /// `random_bits(0)` returns `0`.
    #[inline]
    pub fn random_bits(&mut self, n: u8) -> i32 {
        self.random_bits_offset(n, 0)
    }

    /// Returns `offset` plus a value in `[0, 2^n)`, with `n` clamped to
    /// `MAX_BITS`. `offset` may be negative; the addition wraps.
    ///
    /// A zero width returns `offset` and leaves the reservoir untouched.
    pub fn random_bits_offset(&mut self, n: u8, offset: i32) -> i32 {
        if n == 0 {
            return offset;
        }

        (self.draw(n.min(MAX_WIDTH)) as i32).wrapping_add(offset)
    }

    /// Returns a value in `[lo, hi)`.
    ///
    /// If `hi - lo <= 1` the result is `0`, whatever `lo` is. Spans wider
    /// than `MAX_RANGE` are clamped, so the result then lies in
    /// `[lo, lo + MAX_RANGE)`.
    ///
    /// The value is drawn by rejection sampling with a fixed ceiling: two
    /// fresh draws, then a peek at each buffer, then a single call to the
    /// native source.
    pub fn random_range(&mut self, lo: i32, hi: i32) -> i32 {
        let span = i64::from(hi) - i64::from(lo) - 1;
        if span <= 0 {
            return 0;
        }

        let span = span.min(i64::from(Self::MAX_RANGE)) as u32;

        lo.wrapping_add(self.draw_below(span) as i32)
    }

    /// Returns a value in `[0, hi)`. Same as `random_range(0, hi)`.
    #[inline]
    pub fn random_below(&mut self, hi: i32) -> i32 {
        self.random_range(0, hi)
    }

    /// Live-bit counts of the two buffers.
    pub fn live_bits(&self) -> [u8; 2] {
        self.reservoir.live_bits()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Switches buffers, then takes `n` bits from the new active one.
    #[inline(always)]
    fn draw(&mut self, n: u8) -> u32 {
        self.reservoir.flip();
        self.reservoir.take(n, &mut self.source)
    }

    /// Returns a value in `[0, span)`, `1 <= span <= MAX_RANGE`.
    fn draw_below(&mut self, span: u32) -> u32 {
        let width = required_bits(span);

        let value = self.draw(width);
        if value < span {
            return value;
        }

        // Both draws flipped the index, so the two peeks below look at
        // the buffer served second, then the one served first.
        let value = self.draw(width);
        if value < span {
            return value;
        }

        if let Some(value) = self.reservoir.peek_below(width, span) {
            return value;
        }

        self.reservoir.flip();
        if let Some(value) = self.reservoir.peek_below(width, span) {
            return value;
        }

        log::debug!("reservoir rejected span {span} four times, using native source");
        self.source.random(span as i32) as u32
    }
}

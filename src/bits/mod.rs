//! Bit-width helpers
//!
//! This module holds the two constant tables the reservoir leans on:
//! - the bit length of every byte value (`0..=255`),
//! - the low-bit masks for widths `0..=31`.
//!
//! Both exist so that small cores without a barrel shifter or a
//! count-leading-zeros instruction can answer "how many bits" and
//! "keep the low n bits" with a handful of table lookups. With the
//! `speed` feature enabled, the lookups are replaced by `leading_zeros`
//! and a plain shift; results are identical.

/// Width, in bits, of one draw from the native source.
pub const NATIVE_WIDTH: u8 = 31;

/// Largest width a single request may ask for unless the generator is
/// configured otherwise. Can be raised up to [`NATIVE_WIDTH`].
pub const DEFAULT_MAX_BITS: u8 = 20;

/// Bit length of each byte value.
///
/// `REQUIRED_BITS[n]` is the position of the most significant set bit of
/// `n`, plus one. Entry `0` is `0`.
#[cfg(not(feature = "speed"))]
#[rustfmt::skip]
const REQUIRED_BITS: [u8; 256] = [
    0, 1, 2, 2, 3, 3, 3, 3,
    4, 4, 4, 4, 4, 4, 4, 4,
    5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5,
    6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6,
    7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7,
    8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8,
];

/// `MASKS[n] == (1 << n) - 1` for every width a native draw can carry.
#[cfg(not(feature = "speed"))]
#[rustfmt::skip]
const MASKS: [u32; 32] = [
    0x0000_0000, 0x0000_0001, 0x0000_0003, 0x0000_0007,
    0x0000_000f, 0x0000_001f, 0x0000_003f, 0x0000_007f,
    0x0000_00ff, 0x0000_01ff, 0x0000_03ff, 0x0000_07ff,
    0x0000_0fff, 0x0000_1fff, 0x0000_3fff, 0x0000_7fff,
    0x0000_ffff, 0x0001_ffff, 0x0003_ffff, 0x0007_ffff,
    0x000f_ffff, 0x001f_ffff, 0x003f_ffff, 0x007f_ffff,
    0x00ff_ffff, 0x01ff_ffff, 0x03ff_ffff, 0x07ff_ffff,
    0x0fff_ffff, 0x1fff_ffff, 0x3fff_ffff, 0x7fff_ffff,
];

/// Returns the minimum number of bits needed to represent `num`.
///
/// This is the smallest `w` with `2^w > num`, so `required_bits(0) == 0`,
/// `required_bits(255) == 8` and `required_bits(256) == 9`.
///
/// The table path walks the value one byte at a time from the bottom and
/// stops at the first shift that leaves nothing behind: at most four
/// lookups and three shifts.
#[cfg(not(feature = "speed"))]
#[inline(always)]
pub fn required_bits(num: u32) -> u8 {
    let b1 = num >> 8;
    if b1 == 0 {
        return REQUIRED_BITS[num as usize];
    }

    let b2 = b1 >> 8;
    if b2 == 0 {
        return 8 + REQUIRED_BITS[b1 as usize];
    }

    let b3 = b2 >> 8;
    if b3 == 0 {
        return 16 + REQUIRED_BITS[b2 as usize];
    }

    24 + REQUIRED_BITS[b3 as usize]
}

#[cfg(feature = "speed")]
#[inline(always)]
pub fn required_bits(num: u32) -> u8 {
    (u32::BITS - num.leading_zeros()) as u8
}

/// Returns `(1 << n) - 1`, the mask keeping the low `n` bits of a word.
///
/// # Panics
/// Panics if `n > 31`.
#[cfg(not(feature = "speed"))]
#[inline(always)]
pub fn mask(n: u8) -> u32 {
    MASKS[n as usize]
}

#[cfg(feature = "speed")]
#[inline(always)]
pub fn mask(n: u8) -> u32 {
    assert!(n <= NATIVE_WIDTH, "mask width out of range");
    (1u32 << n) - 1
}

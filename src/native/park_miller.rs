//! "Minimal standard" Lehmer generator
//!
//! `x' = 16807 * x mod (2^31 - 1)`, evaluated with Schrage's decomposition
//! so that no intermediate exceeds 32 signed bits on the target. This is
//! the generator behind `random()` in several small-MCU C runtimes, and it
//! follows their conventions:
//! - the state starts at `1`,
//! - a zero state is replaced by `123459876` before stepping,
//! - seeding with `0` is ignored,
//! - `random(0)` returns `0`, otherwise the draw is reduced with `%`.

use super::NativeSource;

const MULTIPLIER: i64 = 16_807;
const QUOTIENT: i64 = 127_773; // (2^31 - 1) / MULTIPLIER
const REMAINDER: i64 = 2_836; // (2^31 - 1) % MULTIPLIER
const MODULUS: i64 = 0x7fff_ffff;
const ZERO_STATE_REPLACEMENT: i64 = 123_459_876;

/// Park–Miller pseudo-random generator with 31-bit output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParkMiller {
    state: u32,
}

impl ParkMiller {
    /// Creates a generator in its power-on state.
    pub const fn new() -> Self {
        Self { state: 1 }
    }

    /// Advances the state and returns the full 31-bit draw.
    pub fn next_value(&mut self) -> i32 {
        // The state is a signed 32-bit quantity on the target.
        let mut x = self.state as i32 as i64;
        if x == 0 {
            x = ZERO_STATE_REPLACEMENT;
        }

        let hi = x / QUOTIENT;
        let lo = x % QUOTIENT;
        x = MULTIPLIER * lo - REMAINDER * hi;
        if x < 0 {
            x += MODULUS;
        }

        self.state = x as u32;
        (x & MODULUS) as i32
    }
}

impl Default for ParkMiller {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeSource for ParkMiller {
    fn seed(&mut self, seed: u32) {
        if seed != 0 {
            self.state = seed;
        }
    }

    fn random(&mut self, upper: i32) -> i32 {
        if upper == 0 {
            return 0;
        }

        self.next_value() % upper
    }
}

//! Native random source abstraction
//!
//! The generator never produces entropy on its own. Every bit it hands out
//! was drawn from a platform-provided pseudo-random source, reached through
//! the [`NativeSource`] capability defined here.
//!
//! The platform source is usually process-wide state (a C library's
//! `random()`/`srandom()` pair, for instance). To let several generators
//! draw from one such source on a single thread, `NativeSource` is also
//! implemented for `&RefCell<T>`. Generators sharing a source do not
//! produce independent streams: their draws interleave in call order.
//!
//! Available sources:
//! - [`FnSource`], wrapping a seed function and a draw function,
//! - [`ParkMiller`], the "minimal standard" Lehmer generator found in
//!   small C runtimes, usable on the host and in tests.

use core::cell::RefCell;

mod fn_source;
mod park_miller;

pub use fn_source::FnSource;
pub use park_miller::ParkMiller;

/// A platform pseudo-random generator yielding 31 bits per draw.
pub trait NativeSource {
    /// Reseeds the source.
    fn seed(&mut self, seed: u32);

    /// Returns an integer in `[0, upper)`.
    ///
    /// When `upper` is `i32::MAX`, the result must carry at least
    /// [`NATIVE_WIDTH`](crate::bits::NATIVE_WIDTH) bits of entropy.
    fn random(&mut self, upper: i32) -> i32;
}

impl<T: NativeSource + ?Sized> NativeSource for &mut T {
    #[inline]
    fn seed(&mut self, seed: u32) {
        (**self).seed(seed)
    }

    #[inline]
    fn random(&mut self, upper: i32) -> i32 {
        (**self).random(upper)
    }
}

impl<T: NativeSource + ?Sized> NativeSource for &RefCell<T> {
    #[inline]
    fn seed(&mut self, seed: u32) {
        self.borrow_mut().seed(seed)
    }

    #[inline]
    fn random(&mut self, upper: i32) -> i32 {
        self.borrow_mut().random(upper)
    }
}

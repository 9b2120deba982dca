use super::NativeSource;

/// A native source built from a seed function and a draw function.
///
/// This is the usual way to hand a platform's global generator to the
/// reservoir, e.g. thin wrappers around `randomSeed()` and `random()`.
#[derive(Clone, Copy, Debug)]
pub struct FnSource<F, G> {
    seed: F,
    draw: G,
}

impl<F, G> FnSource<F, G>
where
    F: FnMut(u32),
    G: FnMut(i32) -> i32,
{
    /// Pairs `seed` (called on reseed) with `draw` (called with the
    /// exclusive upper bound, must return a value in `[0, upper)`).
    pub fn new(seed: F, draw: G) -> Self {
        Self { seed, draw }
    }
}

impl<F, G> NativeSource for FnSource<F, G>
where
    F: FnMut(u32),
    G: FnMut(i32) -> i32,
{
    #[inline]
    fn seed(&mut self, seed: u32) {
        (self.seed)(seed)
    }

    #[inline]
    fn random(&mut self, upper: i32) -> i32 {
        (self.draw)(upper)
    }
}

#![allow(dead_code)]

use bit_reservoir::NativeSource;

/// Native source replaying a fixed script and recording every call.
///
/// Each draw returns the next scripted value (wrapping around at the end),
/// reduced modulo the requested bound.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    script: Vec<i32>,
    cursor: usize,
    pub bounds: Vec<i32>,
    pub seeds: Vec<u32>,
}

impl ScriptedSource {
    pub fn new(script: &[i32]) -> Self {
        assert!(!script.is_empty());

        Self {
            script: script.to_vec(),
            ..Self::default()
        }
    }
}

impl NativeSource for ScriptedSource {
    fn seed(&mut self, seed: u32) {
        self.seeds.push(seed);
    }

    fn random(&mut self, upper: i32) -> i32 {
        self.bounds.push(upper);

        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;

        if upper == 0 { 0 } else { value % upper }
    }
}

/// Wraps a source and counts full-width draws.
#[derive(Clone, Debug, Default)]
pub struct Counting<S> {
    pub inner: S,
    pub full_draws: usize,
    pub bounded_draws: usize,
}

impl<S> Counting<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            full_draws: 0,
            bounded_draws: 0,
        }
    }
}

impl<S: NativeSource> NativeSource for Counting<S> {
    fn seed(&mut self, seed: u32) {
        self.inner.seed(seed);
    }

    fn random(&mut self, upper: i32) -> i32 {
        if upper == i32::MAX {
            self.full_draws += 1;
        } else {
            self.bounded_draws += 1;
        }

        self.inner.random(upper)
    }
}

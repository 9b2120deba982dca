//! Bit-reservoir random numbers for small microcontrollers
//!
//! Calling a platform's `random()` is expensive on an 8-bit core, and each
//! call returns 31 bits while most callers want a handful. This crate keeps
//! the bits a request did not use and hands them out to later requests,
//! so one native draw serves many requests.
//!
//! The crate is `no_std` and allocation-free.
//!
//! # Module overview
//!
//! - `bits`
//!   Width constants and the two lookup tables (bit length of a byte,
//!   low-bit masks) together with `required_bits` and `mask`.
//!
//! - `native`
//!   The [`NativeSource`] capability through which all entropy enters,
//!   adapters for closures and shared sources, and [`ParkMiller`], the
//!   "minimal standard" generator small C runtimes ship as `random()`.
//!
//! - `generator`
//!   [`Generator`], the public object: `random_bits`, `random_range`,
//!   and reseeding. Internally it drives a two-buffer reservoir that
//!   alternates between buffers on every request.
//!
//! # Example
//!
//! ```
//! use bit_reservoir::{Generator, ParkMiller};
//!
//! let mut rng: Generator<_> = Generator::seeded(ParkMiller::new(), 42);
//!
//! let coin = rng.random_bits(1);
//! assert!(coin == 0 || coin == 1);
//!
//! let die = rng.random_range(1, 7);
//! assert!((1..7).contains(&die));
//! ```
//!
//! # Non-goals
//!
//! - Cryptographic randomness
//! - Statistical quality beyond that of the native source
//! - Thread safety: one generator per execution context

#![no_std]

pub mod bits;
pub mod generator;
pub mod native;

mod reservoir;

pub use generator::Generator;
pub use native::{FnSource, NativeSource, ParkMiller};

//! Chord-and-tangent arithmetic on short Weierstrass curves over prime
//! fields, with interchangeable binary and signed-digit scalar multipliers.
#![deny(clippy::dbg_macro)]
#![deny(clippy::all)]

pub mod arithmetic;
pub mod curve;
pub mod keypair;

pub use bigint::U256;

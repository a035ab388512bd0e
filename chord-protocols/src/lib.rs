//! Thin protocol layers over the `chord-curve` arithmetic core: a
//! Diffie-Hellman exchange, Schnorr signatures and Pedersen commitments.
#![deny(clippy::dbg_macro)]
#![deny(clippy::all)]

pub mod dh;
mod hasher;
pub mod pedersen;
pub mod schnorr;

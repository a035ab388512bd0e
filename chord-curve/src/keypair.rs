use crate::arithmetic::{bits, Point};
use crate::curve::Curve;

use bigint::Encoding;
use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeypairError {
    /// The random source could not supply the requested bytes. The
    /// failure is reported immediately; there is no retry.
    #[error("random source failure: {0}")]
    RandomSource(#[from] rand_core::Error),
}

/// A private scalar and the public point derived from it.
///
/// The private key is a raw byte string whose bit length matches the
/// order of the curve's base point; the public key is `priv * G`. The
/// pair does not record which curve it belongs to beyond its type
/// parameter, and it is immutable after generation.
#[derive(Clone, Debug)]
pub struct Keypair<C: Curve> {
    privkey: Vec<u8>,
    pubkey: Point<C>,
}

impl<C: Curve> Keypair<C> {
    /// Derives the public point for a caller-supplied private key.
    pub fn new(privkey: Vec<u8>) -> Self {
        let pubkey = Point::<C>::GENERATOR.scalar_mul(&privkey);
        Self { privkey, pubkey }
    }

    /// Draws a fresh private key from `rng` and derives its public
    /// point. The only failure mode is the random source itself.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, KeypairError> {
        let mut privkey = vec![0u8; bits::bit_len(&C::ORDER.to_be_bytes()) / 8];
        rng.try_fill_bytes(&mut privkey)?;
        Ok(Self::new(privkey))
    }

    pub fn pubkey(&self) -> &Point<C> {
        &self.pubkey
    }

    pub fn privkey(&self) -> &[u8] {
        &self.privkey
    }
}

use crate::hasher::PointHasher;

use chord_curve::arithmetic::{Modular, Point, Scalar};
use chord_curve::curve::Curve;
use chord_curve::keypair::Keypair;

use bigint::Encoding;
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CHALLENGE_HASH_ID: &[u8] = b"schnorr-challenge";

#[derive(Error, Debug)]
pub enum SchnorrError {
    /// The random source could not supply the nonce bytes.
    #[error("random source failure: {0}")]
    RandomSource(#[from] rand_core::Error),
}

/// A Schnorr signature over a message digest: the challenge `e` and the
/// response `s = k - e * priv mod n`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature<C: Curve> {
    s: Scalar<C>,
    e: Scalar<C>,
}

/// Signs a message digest. The nonce `k` is drawn fresh from `rng` for
/// every call; reusing a nonce across two digests reveals the private
/// key.
pub fn sign<C: Curve, R: RngCore + CryptoRng>(
    rng: &mut R,
    keypair: &Keypair<C>,
    digest: &[u8],
) -> Result<Signature<C>, SchnorrError> {
    let mut nonce_bytes = vec![0u8; C::BIT_SIZE / 8];
    rng.try_fill_bytes(&mut nonce_bytes)?;
    let k = Scalar::<C>::from_be_slice(&nonce_bytes);

    let commitment = Point::<C>::GENERATOR.scalar_mul(&k.to_be_bytes());
    let e = challenge(&commitment, digest);
    let s = k - e * Scalar::from_be_slice(keypair.privkey());

    Ok(Signature { s, e })
}

/// Verifies a signature by recomputing the nonce commitment as
/// `e * pub + s * G` and rederiving the challenge from it.
pub fn verify<C: Curve>(pubkey: &Point<C>, digest: &[u8], signature: &Signature<C>) -> bool {
    let commitment = (pubkey * &signature.e).geometric_add(&(&Point::<C>::GENERATOR * &signature.s));
    challenge(&commitment, digest) == signature.e
}

// e = H(x(R) || digest) reduced modulo the base point order
fn challenge<C: Curve>(commitment: &Point<C>, digest: &[u8]) -> Scalar<C> {
    let mut hasher = PointHasher::new(CHALLENGE_HASH_ID);
    hasher.insert_bytes(&commitment.x().inner().to_be_bytes());
    hasher.insert_bytes(digest);
    Scalar::new(hasher.finalize())
}

use chord_curve::arithmetic::{Point, Scalar};
use chord_curve::curve::Curve;

use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

/// A pair of commitment bases `g` and `h`, both random multiples of the
/// base point, with unknown discrete log relative to each other.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PedersenGenerator<C: Curve> {
    g: Point<C>,
    h: Point<C>,
}

impl<C: Curve> PedersenGenerator<C> {
    pub fn new<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        Self {
            g: &Point::<C>::GENERATOR * Scalar::random(rng),
            h: &Point::<C>::GENERATOR * Scalar::random(rng),
        }
    }

    /// Commits to `secret` with fresh randomness: `C = secret * g + r * h`.
    pub fn commit<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        secret: Scalar<C>,
    ) -> PedersenCommitment<C> {
        let randomness = Scalar::random(rng);
        self.commit_with_randomness(secret, randomness)
    }

    pub fn commit_with_randomness(
        &self,
        secret: Scalar<C>,
        randomness: Scalar<C>,
    ) -> PedersenCommitment<C> {
        let commitment = (&self.g * &secret).geometric_add(&(&self.h * &randomness));
        PedersenCommitment {
            commitment,
            randomness,
        }
    }

    /// Checks that `commitment` opens to `secret` under its recorded
    /// randomness.
    pub fn open(&self, secret: Scalar<C>, commitment: &PedersenCommitment<C>) -> bool {
        let expected = self.commit_with_randomness(secret, *commitment.randomness());
        expected.commitment() == commitment.commitment()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PedersenCommitment<C: Curve> {
    commitment: Point<C>,
    randomness: Scalar<C>,
}

impl<C: Curve> PedersenCommitment<C> {
    pub fn new(commitment: Point<C>, randomness: Scalar<C>) -> Self {
        Self {
            commitment,
            randomness,
        }
    }

    pub fn commitment(&self) -> &Point<C> {
        &self.commitment
    }

    pub fn into_commitment(self) -> Point<C> {
        self.commitment
    }

    pub fn randomness(&self) -> &Scalar<C> {
        &self.randomness
    }
}

impl<C: Curve> std::ops::Add<&PedersenCommitment<C>> for &PedersenCommitment<C> {
    type Output = PedersenCommitment<C>;
    fn add(self, rhs: &PedersenCommitment<C>) -> Self::Output {
        PedersenCommitment {
            commitment: &self.commitment + &rhs.commitment,
            randomness: self.randomness + rhs.randomness,
        }
    }
}

impl<C: Curve> std::ops::Sub<&PedersenCommitment<C>> for &PedersenCommitment<C> {
    type Output = PedersenCommitment<C>;
    fn sub(self, rhs: &PedersenCommitment<C>) -> Self::Output {
        PedersenCommitment {
            commitment: &self.commitment - &rhs.commitment,
            randomness: self.randomness - rhs.randomness,
        }
    }
}

use super::modular::Modular;
use crate::curve::Curve;

use bigint::{Encoding, NonZero, U256};
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use std::marker::PhantomData;

/// An element of the scalar field F_n, where n is the order of the
/// curve's base point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scalar<C: Curve>(pub(crate) U256, pub(crate) PhantomData<C>);

impl<C: Curve> Modular for Scalar<C> {
    const MODULUS: U256 = C::ORDER;

    fn new(number: U256) -> Self {
        // NOTE unwrap is fine here because the modulus
        // can be safely assumed to be nonzero
        Self(number % NonZero::new(Self::MODULUS).unwrap(), PhantomData)
    }

    fn inner(&self) -> &U256 {
        &self.0
    }
}

impl<C: Curve> Scalar<C> {
    pub const ONE: Self = Self(U256::ONE, PhantomData);
    pub const ZERO: Self = Self(U256::ZERO, PhantomData);

    /// Draws a uniformly random scalar.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Self::new(U256::from_be_bytes(bytes))
    }

    /// Interprets a big-endian byte string as an unsigned integer and
    /// reduces it. Buffers longer than 32 bytes keep their low 32.
    pub fn from_be_slice(bytes: &[u8]) -> Self {
        let src = if bytes.len() > 32 {
            &bytes[bytes.len() - 32..]
        } else {
            bytes
        };
        let mut padded = [0u8; 32];
        padded[32 - src.len()..].copy_from_slice(src);
        Self::new(U256::from_be_bytes(padded))
    }

    pub fn to_be_bytes(self) -> [u8; 32] {
        self.0.to_be_bytes()
    }
}

impl<C: Curve> std::ops::Add for Scalar<C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Modular::add(&self, &rhs)
    }
}

impl<C: Curve> std::ops::Sub for Scalar<C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Modular::sub(&self, &rhs)
    }
}

impl<C: Curve> std::ops::Neg for Scalar<C> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Modular::neg(&self)
    }
}

impl<C: Curve> std::ops::Mul for Scalar<C> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Modular::mul(&self, &rhs)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::curve::NistP256;

    type ScalarLarge = Scalar<NistP256>;

    #[test]
    fn reduction_on_construction() {
        // the order itself reduces to zero
        assert_eq!(ScalarLarge::new(NistP256::ORDER), ScalarLarge::ZERO);
        let above = NistP256::ORDER.wrapping_add(&U256::from_u8(5));
        assert_eq!(ScalarLarge::new(above), ScalarLarge::new(U256::from_u8(5)));
    }

    #[test]
    fn byte_round_trip() {
        let scalar = ScalarLarge::new(U256::from_u64(0xdead_beef_0123));
        assert_eq!(ScalarLarge::from_be_slice(&scalar.to_be_bytes()), scalar);
        // short buffers are left-padded
        assert_eq!(
            ScalarLarge::from_be_slice(&[0x01, 0x00]),
            ScalarLarge::new(U256::from_u64(256))
        );
    }

    #[test]
    fn ring_operations() {
        let a = ScalarLarge::new(U256::from_u8(7));
        let b = ScalarLarge::new(U256::from_u8(11));
        assert_eq!(a + b, ScalarLarge::new(U256::from_u8(18)));
        assert_eq!(b - a, ScalarLarge::new(U256::from_u8(4)));
        assert_eq!(a - b, -(b - a));
        assert_eq!(a * b, ScalarLarge::new(U256::from_u8(77)));
    }
}

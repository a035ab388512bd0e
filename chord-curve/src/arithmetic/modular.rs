use super::ArithmeticError;

use bigint::{Encoding, NonZero, Split, U256, U512};

/// Arithmetic modulo a fixed prime. Elements are kept reduced, so the
/// `bigint` mod-arithmetic primitives can be used directly.
pub trait Modular: Sized {
    const MODULUS: U256;

    fn new(number: U256) -> Self;

    fn inner(&self) -> &U256;

    fn add(&self, other: &Self) -> Self {
        Self::new(self.inner().add_mod(other.inner(), &Self::MODULUS))
    }

    fn neg(&self) -> Self {
        Self::new(self.inner().neg_mod(&Self::MODULUS))
    }

    fn sub(&self, other: &Self) -> Self {
        Self::new(self.inner().sub_mod(other.inner(), &Self::MODULUS))
    }

    fn mul(&self, other: &Self) -> Self {
        Self::new(mul_mod_u256(self.inner(), other.inner(), &Self::MODULUS))
    }

    /// Multiplicative inverse computed as `self^(MODULUS - 2)`, which
    /// requires the modulus to be prime. Zero is the only element
    /// without an inverse.
    fn inverse(&self) -> Result<Self, ArithmeticError> {
        if self.inner() == &U256::ZERO {
            return Err(ArithmeticError::NonInvertible);
        }
        let exponent = Self::MODULUS.wrapping_sub(&U256::from_u8(2));
        Ok(Self::new(pow_mod_u256(
            self.inner(),
            &exponent,
            &Self::MODULUS,
        )))
    }
}

pub fn mul_mod_u256(lhs: &U256, rhs: &U256, modulus: &U256) -> U256 {
    // NOTE modulus is never zero, so unwrap is fine here
    let mod512 = NonZero::new(U512::from((*modulus, U256::ZERO))).unwrap();
    // U512::from((lo, hi))
    let product = U512::from(lhs.mul_wide(rhs));
    // split the remainder result of a % b into a (lo, hi) U256 pair
    // 'hi' should always be zero because the modulus is an U256 number
    let (rem, _) = (product % mod512).split();
    rem
}

/// Square-and-multiply exponentiation over the big-endian bits of the
/// exponent.
pub fn pow_mod_u256(base: &U256, exponent: &U256, modulus: &U256) -> U256 {
    let mut result = U256::ONE;
    for byte in exponent.to_be_bytes() {
        for shift in (0..8).rev() {
            result = mul_mod_u256(&result, &result, modulus);
            if (byte >> shift) & 1 == 1 {
                result = mul_mod_u256(&result, base, modulus);
            }
        }
    }
    result
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mul_mod_small() {
        let modulus = U256::from_u8(13);
        assert_eq!(
            mul_mod_u256(&U256::from_u8(5), &U256::from_u8(8), &modulus),
            U256::ONE
        );
        assert_eq!(
            mul_mod_u256(&U256::from_u8(12), &U256::from_u8(12), &modulus),
            U256::ONE
        );
    }

    #[test]
    fn pow_mod_small() {
        let modulus = U256::from_u8(13);
        // 2^11 = 2048 = 157 * 13 + 7
        assert_eq!(
            pow_mod_u256(&U256::from_u8(2), &U256::from_u8(11), &modulus),
            U256::from_u8(7)
        );
        // Fermat: a^(p-1) = 1 mod p
        assert_eq!(
            pow_mod_u256(&U256::from_u8(6), &U256::from_u8(12), &modulus),
            U256::ONE
        );
        assert_eq!(
            pow_mod_u256(&U256::from_u8(6), &U256::ZERO, &modulus),
            U256::ONE
        );
    }
}

use crate::U256;
use serde::{Deserialize, Serialize};

/// Parameter bundle of a short Weierstrass curve y^2 = x^3 + Ax + B over
/// the prime field F_p. Implementors are zero-sized markers; every field
/// element, scalar and point is tagged with its curve type, so values
/// living under different parameter sets cannot be mixed up.
pub trait Curve: Clone + Copy + std::fmt::Debug + PartialEq + Eq + Send + Sync {
    const PRIME_MODULUS: U256;
    const ORDER: U256;
    const GENERATOR_X: U256;
    const GENERATOR_Y: U256;
    const COEFF_A: U256;
    const COEFF_B: U256;
    const BIT_SIZE: usize;
    const NAME: &'static str;
}

/// The NIST P-256 curve of FIPS 186-3, section D.2.3. The coefficient
/// a = -3 is stored in its reduced form p - 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NistP256;

impl Curve for NistP256 {
    const PRIME_MODULUS: U256 =
        U256::from_be_hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");
    const ORDER: U256 =
        U256::from_be_hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");
    const GENERATOR_X: U256 =
        U256::from_be_hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296");
    const GENERATOR_Y: U256 =
        U256::from_be_hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5");
    const COEFF_A: U256 =
        U256::from_be_hex("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc");
    const COEFF_B: U256 =
        U256::from_be_hex("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");
    const BIT_SIZE: usize = 256;
    const NAME: &'static str = "P-256";
}

use super::bits;
use super::field::FieldElement;
use super::modular::Modular;
use super::naf;
use super::scalar::Scalar;
use crate::curve::Curve;
use crate::U256;

use bigint::Encoding;
use serde::{Deserialize, Serialize};

use std::fmt;
use std::marker::PhantomData;

/// An affine point on the curve `C`, or the group identity.
///
/// The identity ("point at infinity") is the sentinel pair (0, 0). The
/// sentinel is generally not a solution of the curve equation; it is a
/// reserved encoding, and [`Point::is_identity`] is the authoritative
/// check for it.
///
/// The arithmetic in this module assumes its inputs are on the curve and
/// performs no membership validation. Off-curve, non-identity inputs
/// produce well-defined but meaningless coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point<C: Curve> {
    x: FieldElement<C>,
    y: FieldElement<C>,
}

impl<C: Curve> fmt::Display for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "x: {}", self.x)?;
        writeln!(f, "y: {}", self.y)
    }
}

impl<C: Curve> std::ops::Neg for Point<C> {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl<C: Curve> std::ops::Neg for &Point<C> {
    type Output = Point<C>;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<C: Curve> std::ops::Add for Point<C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.geometric_add(&rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Add<&'b Point<C>> for &'a Point<C> {
    type Output = Point<C>;
    fn add(self, rhs: &'b Point<C>) -> Self::Output {
        self.geometric_add(rhs)
    }
}

impl<C: Curve> std::ops::AddAssign<&Point<C>> for Point<C> {
    fn add_assign(&mut self, rhs: &Self) {
        *self = &*self + rhs
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl<C: Curve> std::ops::Sub for Point<C> {
    type Output = Point<C>;
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl<'a, 'b, C: Curve> std::ops::Sub<&'b Point<C>> for &'a Point<C> {
    type Output = Point<C>;
    fn sub(self, rhs: &'b Point<C>) -> Self::Output {
        self + &(-rhs)
    }
}

impl<C: Curve> std::ops::Mul<Scalar<C>> for &Point<C> {
    type Output = Point<C>;
    fn mul(self, rhs: Scalar<C>) -> Self::Output {
        self.scalar_mul(&rhs.inner().to_be_bytes())
    }
}

impl<'a, 'b, C: Curve> std::ops::Mul<&'b Scalar<C>> for &'a Point<C> {
    type Output = Point<C>;
    fn mul(self, rhs: &'b Scalar<C>) -> Self::Output {
        self.scalar_mul(&rhs.inner().to_be_bytes())
    }
}

impl<C: Curve> Point<C> {
    pub const GENERATOR: Self = Self {
        x: FieldElement(C::GENERATOR_X, PhantomData),
        y: FieldElement(C::GENERATOR_Y, PhantomData),
    };

    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ZERO,
    };

    pub fn new(x: FieldElement<C>, y: FieldElement<C>) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn x(&self) -> &FieldElement<C> {
        &self.x
    }

    #[inline(always)]
    pub fn y(&self) -> &FieldElement<C> {
        &self.y
    }

    #[inline(always)]
    pub fn is_identity(&self) -> bool {
        self.x == FieldElement::ZERO && self.y == FieldElement::ZERO
    }

    /// Checks the curve equation y^2 = x^3 + Ax + B. The identity
    /// sentinel passes the check, so a `true` result is not a
    /// membership certificate and must not serve as a security boundary.
    pub fn is_on_curve(&self) -> bool {
        if self.is_identity() {
            return true;
        }
        let a = FieldElement::new(C::COEFF_A);
        let b = FieldElement::new(C::COEFF_B);

        let y2 = self.y * self.y;
        let x3 = self.x * self.x * self.x;
        let ax = a * self.x;

        y2 == x3 + ax + b
    }

    /// The group law by the chord-and-tangent rule.
    ///
    /// The identity is the two-sided neutral element. A pair of points
    /// sharing an x coordinate sums to the identity: either they are
    /// additive inverses, or a point with y = 0 is being doubled and the
    /// tangent is vertical.
    pub fn geometric_add(&self, rhs: &Self) -> Self {
        if self.is_identity() {
            return rhs.clone();
        }
        if rhs.is_identity() {
            return self.clone();
        }

        let lambda = if self.x == rhs.x {
            if self.y != rhs.y || self.y == FieldElement::ZERO {
                return Self::IDENTITY;
            }
            // tangent slope (3x^2 + A) / 2y
            let three = FieldElement::new(U256::from_u8(3));
            let a = FieldElement::new(C::COEFF_A);
            let top = three * self.x * self.x + a;
            let bottom = self.y + self.y;
            // NOTE unwrap is fine because the y = 0 case returned above
            top * bottom.inverse().unwrap()
        } else {
            // chord slope (y2 - y1) / (x2 - x1)
            let top = rhs.y - self.y;
            let bottom = rhs.x - self.x;
            // NOTE unwrap is fine because the x coordinates differ
            top * bottom.inverse().unwrap()
        };

        let x = lambda * lambda - self.x - rhs.x;
        let y = lambda * (self.x - x) - self.y;
        Self { x, y }
    }

    pub fn double(&self) -> Self {
        self + self
    }

    /// A copy of the point mirrored across the x axis.
    pub fn negate(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
        }
    }

    /// Binary double-and-add multiplication by the big-endian unsigned
    /// integer `n`. Bits are consumed from the least significant end;
    /// the loop stops once the remaining magnitude of `n` is exhausted,
    /// so an empty or all-zero buffer yields the identity.
    pub fn scalar_mul(&self, n: &[u8]) -> Self {
        let mut ret = Self::IDENTITY;
        let mut doubles = self.clone();
        for i in 0..bits::bit_len(n) {
            if bits::bit(n, i) == 1 {
                ret = ret.geometric_add(&doubles);
            }
            doubles = doubles.double();
        }
        ret
    }

    /// Double-and-add-or-subtract multiplication over the signed digits
    /// of [`naf::recode`]. Agrees with [`Point::scalar_mul`] for every
    /// `(n, P)` pair.
    pub fn scalar_mul_naf(&self, n: &[u8]) -> Self {
        let mut ret = Self::IDENTITY;
        let mut doubles = self.clone();
        for digit in naf::recode(n) {
            if digit == 1 {
                ret = ret.geometric_add(&doubles);
            }
            if digit == -1 {
                ret = ret.geometric_add(&doubles.negate());
            }
            doubles = doubles.double();
        }
        ret
    }
}

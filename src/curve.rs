//! Secp256k1 point representation, group law and scalar multiplication

use crate::field::FieldElement;
use lazy_static::lazy_static;
use num_bigint::BigUint;

/// Curve coefficient b in y^2 = x^3 + b (a = 0 for secp256k1).
pub const CURVE_B: u64 = 7;

lazy_static! {
    /// The base point G.  See SEC 2, section 2.4.1.
    pub static ref GENERATOR: CurvePoint = CurvePoint::Affine {
        x: FieldElement::new(
            BigUint::parse_bytes(
                b"79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
                16,
            )
            .expect("generator x constant"),
        ),
        y: FieldElement::new(
            BigUint::parse_bytes(
                b"483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
                16,
            )
            .expect("generator y constant"),
        ),
    };

    /// The order n of the group generated by G.  Distinct from the field
    /// prime p; valid private keys lie in [1, n-1].
    pub static ref GROUP_ORDER: BigUint = BigUint::parse_bytes(
        b"fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
        16,
    )
    .expect("group order constant");
}

/// A point on secp256k1: either the point at infinity (the additive
/// identity) or an affine coordinate pair satisfying y^2 = x^3 + 7.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurvePoint {
    Infinity,
    Affine { x: FieldElement, y: FieldElement },
}

impl CurvePoint {
    pub fn from_coords(x: FieldElement, y: FieldElement) -> Self {
        CurvePoint::Affine { x, y }
    }

    /// The base point G.
    pub fn generator() -> CurvePoint {
        GENERATOR.clone()
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, CurvePoint::Infinity)
    }

    /// Check the curve equation.  Infinity counts as on the curve.
    pub fn is_on_curve(&self) -> bool {
        match self {
            CurvePoint::Infinity => true,
            CurvePoint::Affine { x, y } => {
                let rhs = x.square().mul(x).add(&FieldElement::from_u64(CURVE_B));
                y.square() == rhs
            }
        }
    }

    /// Additive inverse: (x, y) -> (x, -y); infinity is its own inverse.
    pub fn negate(&self) -> CurvePoint {
        match self {
            CurvePoint::Infinity => CurvePoint::Infinity,
            CurvePoint::Affine { x, y } => CurvePoint::Affine {
                x: x.clone(),
                y: y.negate(),
            },
        }
    }

    /// Point addition.
    ///
    /// Covers the identity cases, P + (-P) = infinity, doubling and the
    /// general chord case.
    pub fn add(&self, other: &CurvePoint) -> CurvePoint {
        let (x1, y1, x2, y2) = match (self, other) {
            (CurvePoint::Infinity, _) => return other.clone(),
            (_, CurvePoint::Infinity) => return self.clone(),
            (CurvePoint::Affine { x: x1, y: y1 }, CurvePoint::Affine { x: x2, y: y2 }) => {
                (x1, y1, x2, y2)
            }
        };

        if self == other {
            return self.double();
        }
        if x1 == x2 {
            // Same x with different y means Q = -P; the chord is vertical.
            return CurvePoint::Infinity;
        }

        // slope = (y2 - y1) / (x2 - x1)
        let slope = y2.sub(y1).mul(
            &x2.sub(x1)
                .inverse()
                .expect("x1 != x2 in the chord case"),
        );
        Self::apply_slope(&slope, x1, y1, x2)
    }

    /// Point doubling.  A point with y = 0 has a vertical tangent and
    /// doubles to infinity.
    pub fn double(&self) -> CurvePoint {
        match self {
            CurvePoint::Infinity => CurvePoint::Infinity,
            CurvePoint::Affine { x, y } => {
                if y.is_zero() {
                    return CurvePoint::Infinity;
                }
                // slope = 3x^2 / 2y
                let numerator = x.square().mul(&FieldElement::from_u64(3));
                let denominator = y.mul(&FieldElement::from_u64(2));
                let slope = numerator.mul(
                    &denominator
                        .inverse()
                        .expect("2y is nonzero when y is nonzero"),
                );
                Self::apply_slope(&slope, x, y, x)
            }
        }
    }

    /// x3 = slope^2 - x1 - x2; y3 = slope * (x1 - x3) - y1.
    fn apply_slope(
        slope: &FieldElement,
        x1: &FieldElement,
        y1: &FieldElement,
        x2: &FieldElement,
    ) -> CurvePoint {
        let x3 = slope.square().sub(x1).sub(x2);
        let y3 = slope.mul(&x1.sub(&x3)).sub(y1);
        CurvePoint::Affine { x: x3, y: y3 }
    }

    /// Scalar multiplication d * P by double-and-add, consuming the
    /// scalar's bits from least to most significant.  d = 0 yields
    /// infinity.
    ///
    /// Not constant time; the loop shape leaks the scalar's bit pattern.
    pub fn multiply(&self, d: &BigUint) -> CurvePoint {
        let mut accumulator = CurvePoint::Infinity;
        let mut addend = self.clone();
        for i in 0..d.bits() {
            if d.bit(i) {
                accumulator = accumulator.add(&addend);
            }
            addend = addend.double();
        }
        accumulator
    }
}

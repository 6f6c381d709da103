//! Montgomery Curve25519 point operations
//!
//! Points are affine (x, y) on y^2 = x^3 + A*x^2 + x plus a designated
//! identity element. The group law uses the Montgomery chord/tangent
//! formulas; scalar multiplication runs the x-only ladder with
//! constant-time conditional swaps and recovers y afterwards.

use std::any::Any;
use std::fmt;

use rand::RngCore;
use subtle::Choice;

use ecsuite_api::{validate, Error, Marshaling, Result};
use ecsuite_params::montgomery::{
    CURVE25519_A, CURVE25519_A24, CURVE25519_BASE_X, CURVE25519_BASE_Y, CURVE25519_EMBED_LEN,
    CURVE25519_FIELD_ELEMENT_SIZE,
};

use crate::mont::field::FieldElement;
use crate::mont::scalar::Scalar;

/// A point on the Montgomery form of Curve25519.
///
/// The canonical encoding is the 32-byte little-endian x-coordinate with
/// the parity of y in bit 255; the identity encodes as all zeros.
#[derive(Clone, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl Default for Point {
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        let self_is_identity: bool = self.is_identity.into();
        let other_is_identity: bool = other.is_identity.into();
        if self_is_identity || other_is_identity {
            return self_is_identity == other_is_identity;
        }
        self.x == other.x && self.y == other.y
    }
}

impl Point {
    /// Create the identity element.
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::ZERO,
            y: FieldElement::ZERO,
        }
    }

    /// The standard base point (x = 9).
    pub fn generator() -> Self {
        Point {
            is_identity: Choice::from(0),
            x: FieldElement::from_bytes(&CURVE25519_BASE_X),
            y: FieldElement::from_bytes(&CURVE25519_BASE_Y),
        }
    }

    /// Check if this point is the identity element.
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// The right-hand side of the curve equation: x^3 + A*x^2 + x.
    fn curve_rhs(x: &FieldElement) -> FieldElement {
        let a = FieldElement::from_u64(CURVE25519_A);
        let x2 = x.square();
        x2.mul(x).add(&a.mul(&x2)).add(x)
    }

    fn add_points(a: &Point, b: &Point) -> Point {
        if a.is_identity() {
            return b.clone();
        }
        if b.is_identity() {
            return a.clone();
        }
        if a.x == b.x {
            if a.y == b.y.neg() {
                return Point::identity();
            }
            return Self::double_point(a);
        }

        // lambda = (y2 - y1) / (x2 - x1)
        let lambda = b.y.sub(&a.y).mul(&b.x.sub(&a.x).invert());
        Self::from_chord(a, b, &lambda)
    }

    fn double_point(a: &Point) -> Point {
        if a.is_identity() || a.y.is_zero() {
            // The order-2 point (0, 0) doubles to the identity.
            return Point::identity();
        }

        // lambda = (3*x^2 + 2*A*x + 1) / (2*y)
        let ca = FieldElement::from_u64(CURVE25519_A);
        let x2 = a.x.square();
        let three_x2 = x2.add(&x2).add(&x2);
        let two_ax = ca.mul(&a.x.add(&a.x));
        let num = three_x2.add(&two_ax).add(&FieldElement::ONE);
        let lambda = num.mul(&a.y.add(&a.y).invert());
        Self::from_chord(a, a, &lambda)
    }

    /// x3 = lambda^2 - A - x1 - x2; y3 = lambda*(x1 - x3) - y1.
    fn from_chord(a: &Point, b: &Point, lambda: &FieldElement) -> Point {
        let ca = FieldElement::from_u64(CURVE25519_A);
        let x3 = lambda.square().sub(&ca).sub(&a.x).sub(&b.x);
        let y3 = lambda.mul(&a.x.sub(&x3)).sub(&a.y);
        Point {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
        }
    }

    /// Scalar multiplication by the canonical little-endian value of `s`.
    ///
    /// Runs the x-only Montgomery ladder over a fixed 255 iterations with
    /// constant-time swaps, then recovers the y-coordinate from the two
    /// ladder accumulators (Okeya-Sakurai). Undefined for the order-2
    /// point (0, 0), which no public constructor produces.
    pub(crate) fn scalar_mul(p: &Point, s: &Scalar) -> Point {
        if p.is_identity() {
            return Point::identity();
        }

        let sb = s.to_bytes();
        let x1 = p.x;

        let mut x2 = FieldElement::ONE;
        let mut z2 = FieldElement::ZERO;
        let mut x3 = x1;
        let mut z3 = FieldElement::ONE;
        let a24 = FieldElement::from_u64(CURVE25519_A24);

        let mut swap = Choice::from(0);
        for t in (0..255).rev() {
            let bit = Choice::from((sb[t >> 3] >> (t & 7)) & 1);
            swap ^= bit;
            FieldElement::conditional_swap(&mut x2, &mut x3, swap);
            FieldElement::conditional_swap(&mut z2, &mut z3, swap);
            swap = bit;

            let a = x2.add(&z2);
            let aa = a.square();
            let b = x2.sub(&z2);
            let bb = b.square();
            let e = aa.sub(&bb);
            let c = x3.add(&z3);
            let d = x3.sub(&z3);
            let da = d.mul(&a);
            let cb = c.mul(&b);
            x3 = da.add(&cb).square();
            z3 = da.sub(&cb).square().mul(&x1);
            x2 = aa.mul(&bb);
            z2 = e.mul(&aa.add(&a24.mul(&e)));
        }
        FieldElement::conditional_swap(&mut x2, &mut x3, swap);
        FieldElement::conditional_swap(&mut z2, &mut z3, swap);

        if z2.is_zero() {
            // s*P is the identity.
            return Point::identity();
        }
        if z3.is_zero() {
            // (s+1)*P is the identity, so s*P = -P; the recovery formula
            // degenerates here.
            return Point {
                is_identity: Choice::from(0),
                x: p.x,
                y: p.y.neg(),
            };
        }

        // y-recovery from (x2:z2) = s*P and (x3:z3) = (s+1)*P.
        let two_a = FieldElement::from_u64(2 * CURVE25519_A);
        let mut v1 = x1.mul(&z2);
        let mut v2 = x2.add(&v1);
        let v3 = x2.sub(&v1).square().mul(&x3);
        v1 = two_a.mul(&z2);
        v2 = v2.add(&v1);
        let v4 = x1.mul(&x2).add(&z2);
        v2 = v2.mul(&v4);
        v1 = v1.mul(&z2);
        v2 = v2.sub(&v1).mul(&z3);
        let yq = v2.sub(&v3);
        v1 = p.y.add(&p.y).mul(&z2).mul(&z3);
        let xq = v1.mul(&x2);
        let zq = v1.mul(&z2);

        let zinv = zq.invert();
        Point {
            is_identity: Choice::from(0),
            x: xq.mul(&zinv),
            y: yq.mul(&zinv),
        }
    }

    /// Set the receiver to a curve point whose x-coordinate carries the
    /// optional payload, drawing candidate bytes from `rng` until one
    /// lands on the curve.
    fn pick_point(&mut self, data: Option<&[u8]>, rng: &mut dyn RngCore) {
        let embed_len = CURVE25519_EMBED_LEN;
        let dl = data.map(|d| d.len().min(embed_len)).unwrap_or(0);

        loop {
            let mut buf = [0u8; CURVE25519_FIELD_ELEMENT_SIZE];
            rng.fill_bytes(&mut buf);
            buf[31] &= 0x7f;
            if let Some(d) = data {
                buf[0] = dl as u8;
                buf[1..1 + dl].copy_from_slice(&d[..dl]);
            }

            let x = FieldElement::from_bytes(&buf);
            // Reject the negligible band [p, 2^255) so the canonical
            // encoding reproduces the payload bytes exactly.
            if x.to_bytes() != buf {
                continue;
            }
            if let Some(y) = Self::curve_rhs(&x).sqrt() {
                self.is_identity = Choice::from(0);
                self.x = x;
                self.y = y;
                return;
            }
        }
    }

    fn cast(p: &dyn ecsuite_api::Point) -> &Point {
        p.as_any()
            .downcast_ref::<Point>()
            .expect("curve25519: point from a different group")
    }
}

impl Marshaling for Point {
    fn marshal_size(&self) -> usize {
        CURVE25519_FIELD_ELEMENT_SIZE
    }

    fn marshal_binary(&self) -> Result<Vec<u8>> {
        if self.is_identity() {
            return Ok(vec![0u8; CURVE25519_FIELD_ELEMENT_SIZE]);
        }
        let mut bytes = self.x.to_bytes();
        if self.y.is_odd() {
            bytes[31] |= 0x80;
        }
        Ok(bytes.to_vec())
    }

    fn unmarshal_binary(&mut self, data: &[u8]) -> Result<()> {
        validate::length(
            "Curve25519 point",
            data.len(),
            CURVE25519_FIELD_ELEMENT_SIZE,
        )?;
        if data.iter().all(|&b| b == 0) {
            *self = Point::identity();
            return Ok(());
        }

        let sign = data[31] >> 7;
        let mut buf = [0u8; CURVE25519_FIELD_ELEMENT_SIZE];
        buf.copy_from_slice(data);
        buf[31] &= 0x7f;

        let x = FieldElement::from_bytes(&buf);
        if x.to_bytes() != buf {
            return Err(Error::Decoding {
                context: "Curve25519 point",
                reason: "x-coordinate not canonical",
            });
        }
        let mut y = Self::curve_rhs(&x).sqrt().ok_or(Error::Decoding {
            context: "Curve25519 point",
            reason: "x-coordinate not on curve",
        })?;
        if y.is_odd() != (sign == 1) {
            y = y.neg();
        }

        self.is_identity = Choice::from(0);
        self.x = x;
        self.y = y;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ecsuite_api::Point for Point {
    fn equal(&self, other: &dyn ecsuite_api::Point) -> bool {
        match other.as_any().downcast_ref::<Point>() {
            Some(other) => self == other,
            None => false,
        }
    }

    fn null(&mut self) -> &mut dyn ecsuite_api::Point {
        *self = Point::identity();
        self
    }

    fn base(&mut self) -> &mut dyn ecsuite_api::Point {
        *self = Point::generator();
        self
    }

    fn pick(&mut self, rng: &mut dyn RngCore) -> &mut dyn ecsuite_api::Point {
        self.pick_point(None, rng);
        self
    }

    fn set(&mut self, a: &dyn ecsuite_api::Point) -> &mut dyn ecsuite_api::Point {
        *self = Self::cast(a).clone();
        self
    }

    fn clone_boxed(&self) -> Box<dyn ecsuite_api::Point> {
        Box::new(self.clone())
    }

    fn embed_len(&self) -> usize {
        CURVE25519_EMBED_LEN
    }

    fn embed(&mut self, data: &[u8], rng: &mut dyn RngCore) -> &mut dyn ecsuite_api::Point {
        self.pick_point(Some(data), rng);
        self
    }

    fn data(&self) -> Result<Vec<u8>> {
        if self.is_identity() {
            return Err(Error::Decoding {
                context: "Curve25519 point",
                reason: "no data embedded in the identity element",
            });
        }
        let bytes = self.x.to_bytes();
        let dl = bytes[0] as usize;
        if dl > CURVE25519_EMBED_LEN {
            return Err(Error::Decoding {
                context: "Curve25519 point",
                reason: "invalid embedded data length",
            });
        }
        Ok(bytes[1..1 + dl].to_vec())
    }

    fn add(&mut self, a: &dyn ecsuite_api::Point, b: &dyn ecsuite_api::Point) -> &mut dyn ecsuite_api::Point {
        *self = Self::add_points(Self::cast(a), Self::cast(b));
        self
    }

    fn sub(&mut self, a: &dyn ecsuite_api::Point, b: &dyn ecsuite_api::Point) -> &mut dyn ecsuite_api::Point {
        let b = Self::cast(b);
        let neg_b = Point {
            is_identity: b.is_identity,
            x: b.x,
            y: b.y.neg(),
        };
        *self = Self::add_points(Self::cast(a), &neg_b);
        self
    }

    fn neg(&mut self, a: &dyn ecsuite_api::Point) -> &mut dyn ecsuite_api::Point {
        let a = Self::cast(a);
        *self = Point {
            is_identity: a.is_identity,
            x: a.x,
            y: a.y.neg(),
        };
        self
    }

    fn mul(
        &mut self,
        s: &dyn ecsuite_api::Scalar,
        base: Option<&dyn ecsuite_api::Point>,
    ) -> &mut dyn ecsuite_api::Point {
        let s = s
            .as_any()
            .downcast_ref::<Scalar>()
            .expect("curve25519: scalar from a different group");
        let p = match base {
            Some(p) => Self::cast(p).clone(),
            None => Point::generator(),
        };
        *self = Self::scalar_mul(&p, s);
        self
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.marshal_binary().unwrap_or_default()))
    }
}

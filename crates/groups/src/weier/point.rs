//! Short Weierstrass point operations

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::RngCore;

use ecsuite_api::{validate, Error, Marshaling, Result};

use crate::fp;
use crate::int::Int;
use crate::weier::Curve;

/// A point on a short Weierstrass curve in affine coordinates, plus the
/// point at infinity as the identity.
///
/// The canonical encoding is the big-endian x-coordinate over the field
/// length; the identity encodes as all zeros. Decoding recovers the even
/// square root for y, and equality compares x-coordinates, so a point and
/// its negation are identified.
#[derive(Clone, Debug)]
pub struct Point {
    pub(crate) inf: bool,
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
    pub(crate) c: Arc<Curve>,
}

/// Jacobian projective coordinates (x = X/Z^2, y = Y/Z^3) used
/// internally by repeated-addition paths.
#[derive(Clone, Debug)]
struct ProjectivePoint {
    inf: bool,
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

impl ProjectivePoint {
    fn identity() -> Self {
        ProjectivePoint {
            inf: true,
            x: BigUint::zero(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        if self.inf || other.inf {
            return self.inf == other.inf;
        }
        self.x == other.x
    }
}

impl Point {
    /// The identity element (point at infinity) of `curve`.
    pub(crate) fn identity(c: Arc<Curve>) -> Self {
        Point {
            inf: true,
            x: BigUint::zero(),
            y: BigUint::zero(),
            c,
        }
    }

    pub(crate) fn is_identity(&self) -> bool {
        self.inf
    }

    fn generator(c: Arc<Curve>) -> Self {
        Point {
            inf: false,
            x: c.gx.clone(),
            y: c.gy.clone(),
            c,
        }
    }

    /// x^3 + a*x + b
    fn curve_rhs(c: &Curve, x: &BigUint) -> BigUint {
        let p = &c.p;
        let x3 = fp::mul(p, &fp::mul(p, x, x), x);
        fp::add(p, &fp::add(p, &x3, &fp::mul(p, &c.a, x)), &c.b)
    }

    fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            inf: self.inf,
            x: self.x.clone(),
            y: self.y.clone(),
            z: BigUint::one(),
        }
    }

    fn from_projective(c: &Arc<Curve>, pt: &ProjectivePoint) -> Point {
        let p = &c.p;
        if pt.inf {
            return Point::identity(c.clone());
        }
        let zi = fp::inv(p, &pt.z);
        let zi2 = fp::mul(p, &zi, &zi);
        let zi3 = fp::mul(p, &zi2, &zi);
        Point {
            inf: false,
            x: fp::mul(p, &pt.x, &zi2),
            y: fp::mul(p, &pt.y, &zi3),
            c: c.clone(),
        }
    }

    fn projective_double(c: &Curve, a: &ProjectivePoint) -> ProjectivePoint {
        let p = &c.p;
        if a.inf || a.y.is_zero() {
            return ProjectivePoint::identity();
        }

        // S = 4*X*Y^2; M = 3*X^2 + a*Z^4
        let y2 = fp::mul(p, &a.y, &a.y);
        let xy2 = fp::mul(p, &a.x, &y2);
        let s = fp::add(p, &fp::add(p, &xy2, &xy2), &fp::add(p, &xy2, &xy2));
        let x2 = fp::mul(p, &a.x, &a.x);
        let z2 = fp::mul(p, &a.z, &a.z);
        let z4 = fp::mul(p, &z2, &z2);
        let m = fp::add(
            p,
            &fp::add(p, &fp::add(p, &x2, &x2), &x2),
            &fp::mul(p, &c.a, &z4),
        );

        // X' = M^2 - 2*S; Y' = M*(S - X') - 8*Y^4; Z' = 2*Y*Z
        let x3 = fp::sub(p, &fp::mul(p, &m, &m), &fp::add(p, &s, &s));
        let y4 = fp::mul(p, &y2, &y2);
        let mut eight_y4 = fp::add(p, &y4, &y4);
        eight_y4 = fp::add(p, &eight_y4, &eight_y4);
        eight_y4 = fp::add(p, &eight_y4, &eight_y4);
        let y3 = fp::sub(p, &fp::mul(p, &m, &fp::sub(p, &s, &x3)), &eight_y4);
        let two_y = fp::add(p, &a.y, &a.y);
        ProjectivePoint {
            inf: false,
            x: x3,
            y: y3,
            z: fp::mul(p, &two_y, &a.z),
        }
    }

    fn projective_add(c: &Curve, a: &ProjectivePoint, b: &ProjectivePoint) -> ProjectivePoint {
        let p = &c.p;
        if a.inf {
            return b.clone();
        }
        if b.inf {
            return a.clone();
        }

        let z1_sq = fp::mul(p, &a.z, &a.z);
        let z2_sq = fp::mul(p, &b.z, &b.z);
        let u1 = fp::mul(p, &a.x, &z2_sq);
        let u2 = fp::mul(p, &b.x, &z1_sq);
        let s1 = fp::mul(p, &fp::mul(p, &a.y, &z2_sq), &b.z);
        let s2 = fp::mul(p, &fp::mul(p, &b.y, &z1_sq), &a.z);

        let h = fp::sub(p, &u2, &u1);
        if h.is_zero() {
            if s1 == s2 {
                return Self::projective_double(c, a);
            }
            return ProjectivePoint::identity();
        }

        let r = fp::sub(p, &s2, &s1);
        let h_sq = fp::mul(p, &h, &h);
        let h_cu = fp::mul(p, &h_sq, &h);
        let v = fp::mul(p, &u1, &h_sq);

        let x3 = fp::sub(
            p,
            &fp::sub(p, &fp::mul(p, &r, &r), &h_cu),
            &fp::add(p, &v, &v),
        );
        let y3 = fp::sub(
            p,
            &fp::mul(p, &r, &fp::sub(p, &v, &x3)),
            &fp::mul(p, &s1, &h_cu),
        );
        let z3 = fp::mul(p, &fp::mul(p, &a.z, &b.z), &h);
        ProjectivePoint {
            inf: false,
            x: x3,
            y: y3,
            z: z3,
        }
    }

    fn add_points(a: &Point, b: &Point) -> Point {
        let sum = Self::projective_add(&a.c, &a.to_projective(), &b.to_projective());
        Self::from_projective(&a.c, &sum)
    }

    /// Double-and-add over the bits of `k`, most significant first,
    /// entirely in Jacobian coordinates.
    pub(crate) fn mul_big(base: &Point, k: &BigUint) -> Point {
        let c = &base.c;
        let bp = base.to_projective();
        let mut r = ProjectivePoint::identity();
        for i in (0..k.bits()).rev() {
            r = Self::projective_double(c, &r);
            if k.bit(i) {
                r = Self::projective_add(c, &r, &bp);
            }
        }
        Self::from_projective(c, &r)
    }

    /// Candidate loop shared by `pick` and `embed`: draw x-coordinate
    /// bytes from `rng` (with the optional payload and its length in the
    /// low-order bytes) until the candidate lands on the curve. Both
    /// curves have cofactor 1, so no subgroup rejection is needed.
    fn pick_point(&mut self, data: Option<&[u8]>, rng: &mut dyn RngCore) {
        let c = self.c.clone();
        let l = c.element_len;
        let dl = data.map(|d| d.len().min(c.embed_len)).unwrap_or(0);

        loop {
            let mut buf = vec![0u8; l];
            rng.fill_bytes(&mut buf);
            buf[0] &= c.top_mask;
            if let Some(d) = data {
                buf[l - 1] = dl as u8;
                buf[l - 1 - dl..l - 1].copy_from_slice(&d[..dl]);
            }

            let x = BigUint::from_bytes_be(&buf);
            if x >= c.p {
                continue;
            }
            if let Some(y) = fp::sqrt(&c.p, &Self::curve_rhs(&c, &x)) {
                self.inf = false;
                self.x = x;
                self.y = y;
                return;
            }
        }
    }

    fn cast(p: &dyn ecsuite_api::Point) -> &Point {
        p.as_any()
            .downcast_ref::<Point>()
            .expect("weierstrass: point from a different group")
    }
}

impl Marshaling for Point {
    fn marshal_size(&self) -> usize {
        self.c.element_len
    }

    fn marshal_binary(&self) -> Result<Vec<u8>> {
        if self.inf {
            return Ok(vec![0u8; self.c.element_len]);
        }
        Ok(fp::to_bytes_be(&self.x, self.c.element_len))
    }

    fn unmarshal_binary(&mut self, data: &[u8]) -> Result<()> {
        validate::length("Weierstrass point", data.len(), self.c.element_len)?;
        let c = self.c.clone();

        if data.iter().all(|&b| b == 0) {
            *self = Point::identity(c);
            return Ok(());
        }

        let x = fp::from_bytes_be(&c.p, data, "Weierstrass point")?;
        let y = fp::sqrt(&c.p, &Self::curve_rhs(&c, &x)).ok_or(Error::Decoding {
            context: "Weierstrass point",
            reason: "x-coordinate not on curve",
        })?;
        // Canonical decode: the even root.
        let y = if y.bit(0) { fp::neg(&c.p, &y) } else { y };

        self.inf = false;
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
        *self = Point::identity(self.c.clone());
        self
    }

    fn base(&mut self) -> &mut dyn ecsuite_api::Point {
        *self = Point::generator(self.c.clone());
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
        self.c.embed_len
    }

    fn embed(&mut self, data: &[u8], rng: &mut dyn RngCore) -> &mut dyn ecsuite_api::Point {
        self.pick_point(Some(data), rng);
        self
    }

    fn data(&self) -> Result<Vec<u8>> {
        if self.inf {
            return Err(Error::Decoding {
                context: "Weierstrass point",
                reason: "no data embedded in the identity element",
            });
        }
        let l = self.c.element_len;
        let buf = fp::to_bytes_be(&self.x, l);
        let dl = buf[l - 1] as usize;
        if dl > self.c.embed_len {
            return Err(Error::Decoding {
                context: "Weierstrass point",
                reason: "invalid embedded data length",
            });
        }
        Ok(buf[l - 1 - dl..l - 1].to_vec())
    }

    fn add(&mut self, a: &dyn ecsuite_api::Point, b: &dyn ecsuite_api::Point) -> &mut dyn ecsuite_api::Point {
        *self = Self::add_points(Self::cast(a), Self::cast(b));
        self
    }

    fn sub(&mut self, a: &dyn ecsuite_api::Point, b: &dyn ecsuite_api::Point) -> &mut dyn ecsuite_api::Point {
        let b = Self::cast(b);
        let neg_b = Point {
            inf: b.inf,
            x: b.x.clone(),
            y: fp::neg(&b.c.p, &b.y),
            c: b.c.clone(),
        };
        *self = Self::add_points(Self::cast(a), &neg_b);
        self
    }

    fn neg(&mut self, a: &dyn ecsuite_api::Point) -> &mut dyn ecsuite_api::Point {
        let a = Self::cast(a);
        *self = Point {
            inf: a.inf,
            x: a.x.clone(),
            y: fp::neg(&a.c.p, &a.y),
            c: a.c.clone(),
        };
        self
    }

    fn mul(
        &mut self,
        s: &dyn ecsuite_api::Scalar,
        base: Option<&dyn ecsuite_api::Point>,
    ) -> &mut dyn ecsuite_api::Point {
        let k = s
            .as_any()
            .downcast_ref::<Int>()
            .expect("weierstrass: scalar from a different group")
            .value()
            .clone();
        let base = match base {
            Some(p) => Self::cast(p).clone(),
            None => Point::generator(self.c.clone()),
        };
        *self = Self::mul_big(&base, &k);
        self
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.marshal_binary().unwrap_or_default()))
    }
}

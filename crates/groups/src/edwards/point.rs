//! Twisted Edwards point operations

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::RngCore;

use ecsuite_api::{validate, Error, Marshaling, Result};

use crate::edwards::Curve;
use crate::fp;
use crate::int::Int;

/// A point on a twisted Edwards curve in affine coordinates.
///
/// The identity is (0, 1). The canonical encoding is the big-endian
/// y-coordinate over the curve's element length with the parity of x in
/// the top bit of the first byte; every parameter set in scope leaves
/// that bit free.
#[derive(Clone, Debug)]
pub struct Point {
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
    pub(crate) c: Arc<Curve>,
}

/// Homogeneous projective form (x = X/Z, y = Y/Z) used internally by
/// repeated-addition paths.
#[derive(Clone, Debug)]
struct Projective {
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Point {
    /// The identity element of `curve`.
    pub(crate) fn identity(c: Arc<Curve>) -> Self {
        Point {
            x: BigUint::zero(),
            y: BigUint::one(),
            c,
        }
    }

    pub(crate) fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_one()
    }

    fn generator(c: Arc<Curve>) -> Self {
        Point {
            x: c.gx.clone(),
            y: c.gy.clone(),
            c,
        }
    }

    fn to_projective(&self) -> Projective {
        Projective {
            x: self.x.clone(),
            y: self.y.clone(),
            z: BigUint::one(),
        }
    }

    fn from_projective(c: &Arc<Curve>, pt: &Projective) -> Point {
        // The complete formulas never produce z = 0 for valid inputs.
        let zi = fp::inv(&c.p, &pt.z);
        Point {
            x: fp::mul(&c.p, &pt.x, &zi),
            y: fp::mul(&c.p, &pt.y, &zi),
            c: c.clone(),
        }
    }

    /// Complete unified addition in projective coordinates, so repeated
    /// additions defer the single field inversion to the final
    /// conversion back to affine form.
    fn projective_add(c: &Curve, lhs: &Projective, rhs: &Projective) -> Projective {
        let p = &c.p;
        let a = fp::mul(p, &lhs.z, &rhs.z);
        let b = fp::mul(p, &a, &a);
        let cc = fp::mul(p, &lhs.x, &rhs.x);
        let dd = fp::mul(p, &lhs.y, &rhs.y);
        let e = fp::mul(p, &c.d, &fp::mul(p, &cc, &dd));
        let f = fp::sub(p, &b, &e);
        let g = fp::add(p, &b, &e);

        let cross = fp::sub(
            p,
            &fp::sub(
                p,
                &fp::mul(p, &fp::add(p, &lhs.x, &lhs.y), &fp::add(p, &rhs.x, &rhs.y)),
                &cc,
            ),
            &dd,
        );
        Projective {
            x: fp::mul(p, &fp::mul(p, &a, &f), &cross),
            y: fp::mul(
                p,
                &fp::mul(p, &a, &g),
                &fp::sub(p, &dd, &fp::mul(p, &c.a, &cc)),
            ),
            z: fp::mul(p, &f, &g),
        }
    }

    fn add_points(a: &Point, b: &Point) -> Point {
        let sum = Self::projective_add(&a.c, &a.to_projective(), &b.to_projective());
        Self::from_projective(&a.c, &sum)
    }

    fn neg_point(a: &Point) -> Point {
        Point {
            x: fp::neg(&a.c.p, &a.x),
            y: a.y.clone(),
            c: a.c.clone(),
        }
    }

    /// Double-and-add over the bits of `k`, most significant first,
    /// entirely in projective coordinates.
    pub(crate) fn mul_big(base: &Point, k: &BigUint) -> Point {
        let c = &base.c;
        let bp = base.to_projective();
        let mut r = Projective {
            x: BigUint::zero(),
            y: BigUint::one(),
            z: BigUint::one(),
        };
        for i in (0..k.bits()).rev() {
            r = Self::projective_add(c, &r, &r);
            if k.bit(i) {
                r = Self::projective_add(c, &r, &bp);
            }
        }
        Self::from_projective(c, &r)
    }

    /// Solve the curve equation for x given y:
    /// x^2 = (1 - y^2) / (a - d*y^2).
    fn solve_x(c: &Curve, y: &BigUint) -> Option<BigUint> {
        let p = &c.p;
        let one = BigUint::one();
        let y2 = fp::mul(p, y, y);
        let num = fp::sub(p, &one, &y2);
        let den = fp::sub(p, &c.a, &fp::mul(p, &c.d, &y2));
        if den.is_zero() {
            return None;
        }
        fp::sqrt(p, &fp::mul(p, &num, &fp::inv(p, &den)))
    }

    /// Candidate loop shared by `pick` and `embed`: draw y-coordinate
    /// bytes from `rng` (with the optional payload and its length in the
    /// low-order bytes), solve for x, and reject candidates outside the
    /// prime-order subgroup unless the full group was selected.
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

            let y = BigUint::from_bytes_be(&buf);
            if y >= c.p {
                continue;
            }
            let x = match Self::solve_x(&c, &y) {
                Some(x) => x,
                None => continue,
            };
            // Canonical sign choice for embedding: the even root.
            let x = if x.bit(0) { fp::neg(&c.p, &x) } else { x };

            let candidate = Point {
                x,
                y,
                c: c.clone(),
            };
            if !c.full_group && !Self::mul_big(&candidate, &c.q).is_identity() {
                continue;
            }
            *self = candidate;
            return;
        }
    }

    fn cast(p: &dyn ecsuite_api::Point) -> &Point {
        p.as_any()
            .downcast_ref::<Point>()
            .expect("edwards: point from a different group")
    }
}

impl Marshaling for Point {
    fn marshal_size(&self) -> usize {
        self.c.element_len
    }

    fn marshal_binary(&self) -> Result<Vec<u8>> {
        let mut buf = fp::to_bytes_be(&self.y, self.c.element_len);
        if self.x.bit(0) {
            buf[0] |= 0x80;
        }
        Ok(buf)
    }

    fn unmarshal_binary(&mut self, data: &[u8]) -> Result<()> {
        validate::length("Edwards point", data.len(), self.c.element_len)?;
        let c = self.c.clone();

        let sign = data[0] & 0x80 != 0;
        let mut buf = data.to_vec();
        buf[0] &= 0x7f;

        let y = fp::from_bytes_be(&c.p, &buf, "Edwards point")?;
        let mut x = Self::solve_x(&c, &y).ok_or(Error::Decoding {
            context: "Edwards point",
            reason: "y-coordinate not on curve",
        })?;
        if x.is_zero() && sign {
            return Err(Error::Decoding {
                context: "Edwards point",
                reason: "invalid sign bit on zero x-coordinate",
            });
        }
        if x.bit(0) != sign {
            x = fp::neg(&c.p, &x);
        }

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
        let l = self.c.element_len;
        let buf = fp::to_bytes_be(&self.y, l);
        let dl = buf[l - 1] as usize;
        if dl > self.c.embed_len {
            return Err(Error::Decoding {
                context: "Edwards point",
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
        let neg_b = Self::neg_point(Self::cast(b));
        *self = Self::add_points(Self::cast(a), &neg_b);
        self
    }

    fn neg(&mut self, a: &dyn ecsuite_api::Point) -> &mut dyn ecsuite_api::Point {
        *self = Self::neg_point(Self::cast(a));
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
            .expect("edwards: scalar from a different group")
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

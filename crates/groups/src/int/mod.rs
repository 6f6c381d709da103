//! Big-integer scalars modulo a group order
//!
//! [`Int`] backs the scalars of every variable-time family: an arbitrary
//! modulus is fixed at construction and all arithmetic reduces into it.
//! Encodings are big-endian, padded to the modulus byte length, matching
//! the conventions of the big-integer ecosystem the original families
//! interoperate with.

use std::any::Any;
use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::RngCore;

use ecsuite_api::{validate, Marshaling, Result};

use crate::fp;

/// An integer modulo a fixed group order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Int {
    v: BigUint,
    m: BigUint,
}

impl Int {
    /// Fresh zero scalar with modulus `m`.
    pub fn new(m: BigUint) -> Self {
        Int {
            v: BigUint::zero(),
            m,
        }
    }

    /// A scalar with an initial value, reduced mod `m`.
    pub fn with_value(v: BigUint, m: BigUint) -> Self {
        Int { v: &v % &m, m }
    }

    /// The reduced value.
    pub fn value(&self) -> &BigUint {
        &self.v
    }

    /// The modulus this scalar reduces into.
    pub fn modulus(&self) -> &BigUint {
        &self.m
    }

    fn len(&self) -> usize {
        ((self.m.bits() + 7) / 8) as usize
    }

    fn cast(s: &dyn ecsuite_api::Scalar) -> &Int {
        s.as_any()
            .downcast_ref::<Int>()
            .expect("scalar from a different group")
    }
}

impl Marshaling for Int {
    fn marshal_size(&self) -> usize {
        self.len()
    }

    fn marshal_binary(&self) -> Result<Vec<u8>> {
        Ok(fp::to_bytes_be(&self.v, self.len()))
    }

    fn unmarshal_binary(&mut self, data: &[u8]) -> Result<()> {
        validate::length("scalar", data.len(), self.len())?;
        self.v = BigUint::from_bytes_be(data) % &self.m;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ecsuite_api::Scalar for Int {
    fn equal(&self, other: &dyn ecsuite_api::Scalar) -> bool {
        match other.as_any().downcast_ref::<Int>() {
            Some(other) => self.v == other.v && self.m == other.m,
            None => false,
        }
    }

    fn set(&mut self, a: &dyn ecsuite_api::Scalar) -> &mut dyn ecsuite_api::Scalar {
        let a = Self::cast(a);
        self.v = a.v.clone();
        self.m = a.m.clone();
        self
    }

    fn clone_boxed(&self) -> Box<dyn ecsuite_api::Scalar> {
        Box::new(self.clone())
    }

    fn set_int64(&mut self, v: i64) -> &mut dyn ecsuite_api::Scalar {
        let mag = BigUint::from(v.unsigned_abs()) % &self.m;
        self.v = if v < 0 { fp::neg(&self.m, &mag) } else { mag };
        self
    }

    fn zero(&mut self) -> &mut dyn ecsuite_api::Scalar {
        self.v = BigUint::zero();
        self
    }

    fn one(&mut self) -> &mut dyn ecsuite_api::Scalar {
        self.v = BigUint::one() % &self.m;
        self
    }

    fn add(&mut self, a: &dyn ecsuite_api::Scalar, b: &dyn ecsuite_api::Scalar) -> &mut dyn ecsuite_api::Scalar {
        self.v = fp::add(&self.m, &Self::cast(a).v, &Self::cast(b).v);
        self
    }

    fn sub(&mut self, a: &dyn ecsuite_api::Scalar, b: &dyn ecsuite_api::Scalar) -> &mut dyn ecsuite_api::Scalar {
        self.v = fp::sub(&self.m, &Self::cast(a).v, &Self::cast(b).v);
        self
    }

    fn neg(&mut self, a: &dyn ecsuite_api::Scalar) -> &mut dyn ecsuite_api::Scalar {
        self.v = fp::neg(&self.m, &Self::cast(a).v);
        self
    }

    fn mul(&mut self, a: &dyn ecsuite_api::Scalar, b: &dyn ecsuite_api::Scalar) -> &mut dyn ecsuite_api::Scalar {
        self.v = fp::mul(&self.m, &Self::cast(a).v, &Self::cast(b).v);
        self
    }

    fn div(&mut self, a: &dyn ecsuite_api::Scalar, b: &dyn ecsuite_api::Scalar) -> &mut dyn ecsuite_api::Scalar {
        let b_inv = fp::inv(&self.m, &Self::cast(b).v);
        self.v = fp::mul(&self.m, &Self::cast(a).v, &b_inv);
        self
    }

    fn inv(&mut self, a: &dyn ecsuite_api::Scalar) -> &mut dyn ecsuite_api::Scalar {
        self.v = fp::inv(&self.m, &Self::cast(a).v);
        self
    }

    fn pick(&mut self, rng: &mut dyn RngCore) -> &mut dyn ecsuite_api::Scalar {
        let mut buf = vec![0u8; self.len()];
        rng.fill_bytes(&mut buf);
        self.v = BigUint::from_bytes_be(&buf) % &self.m;
        self
    }

    fn set_bytes(&mut self, bytes: &[u8]) -> &mut dyn ecsuite_api::Scalar {
        self.v = BigUint::from_bytes_be(bytes) % &self.m;
        self
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(fp::to_bytes_be(&self.v, self.len())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecsuite_api::Scalar as _;

    fn modulus() -> BigUint {
        // The P-256 group order: prime, so Fermat inversion applies.
        fp::parse_unreduced(
            "115792089210356248762697446949407573529996955224135760342422259061068512044369",
        )
    }

    #[test]
    fn test_arithmetic_mod_m() {
        let m = modulus();
        let mut a = Int::new(m.clone());
        let mut b = Int::new(m.clone());
        a.set_int64(1234567);
        b.set_int64(-1234567);

        let mut sum = Int::new(m.clone());
        sum.add(&a, &b);
        let mut zero = Int::new(m.clone());
        zero.zero();
        assert!(sum.equal(&zero));

        let mut prod = Int::new(m.clone());
        prod.mul(&a, &a);
        let mut quot = Int::new(m.clone());
        quot.div(&prod, &a);
        assert!(quot.equal(&a));
    }

    #[test]
    fn test_marshal_roundtrip() {
        let m = modulus();
        let mut a = Int::new(m.clone());
        a.set_int64(0x0102030405060708);
        let buf = a.marshal_binary().unwrap();
        assert_eq!(buf.len(), 32);

        let mut b = Int::new(m);
        b.unmarshal_binary(&buf).unwrap();
        assert!(a.equal(&b));
    }

    #[test]
    fn test_unmarshal_rejects_wrong_length() {
        let m = modulus();
        let mut a = Int::new(m);
        assert!(a.unmarshal_binary(&[0u8; 31]).is_err());
        assert!(a.unmarshal_binary(&[0u8; 33]).is_err());
    }

    #[test]
    fn test_set_bytes_reduces() {
        let m = modulus();
        let mut a = Int::new(m.clone());
        a.set_bytes(&[0xff; 32]);
        assert!(a.value() < &m);
    }

    #[test]
    fn test_different_moduli_compare_unequal() {
        let mut a = Int::new(modulus());
        let mut b = Int::new(BigUint::from(101u32));
        a.one();
        b.one();
        assert!(!a.equal(&b));
    }
}

//! Montgomery Curve25519 scalar arithmetic
//!
//! Scalars in this family are field elements modulo the prime 2^255 - 19,
//! encoded little-endian, so they interoperate with other Curve25519
//! implementations. The value is zeroized on drop.

use std::any::Any;
use std::fmt;

use byteorder::{ByteOrder, LittleEndian};
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use ecsuite_api::{validate, Marshaling, Result};
use ecsuite_params::montgomery::CURVE25519_FIELD_ELEMENT_SIZE;

use crate::mont::field::FieldElement;

/// A Curve25519 scalar: a field element modulo 2^255 - 19.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct Scalar {
    fe: FieldElement,
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar {
            fe: FieldElement::ZERO,
        }
    }
}

impl Scalar {
    /// Canonical little-endian encoding of the value.
    pub(crate) fn to_bytes(&self) -> [u8; CURVE25519_FIELD_ELEMENT_SIZE] {
        self.fe.to_bytes()
    }

    fn cast(s: &dyn ecsuite_api::Scalar) -> &Scalar {
        s.as_any()
            .downcast_ref::<Scalar>()
            .expect("curve25519: scalar from a different group")
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.fe == other.fe
    }
}

impl Marshaling for Scalar {
    fn marshal_size(&self) -> usize {
        CURVE25519_FIELD_ELEMENT_SIZE
    }

    fn marshal_binary(&self) -> Result<Vec<u8>> {
        Ok(self.fe.to_bytes().to_vec())
    }

    fn unmarshal_binary(&mut self, data: &[u8]) -> Result<()> {
        validate::length(
            "Curve25519 scalar",
            data.len(),
            CURVE25519_FIELD_ELEMENT_SIZE,
        )?;
        let mut buf = [0u8; CURVE25519_FIELD_ELEMENT_SIZE];
        buf.copy_from_slice(data);
        self.fe = FieldElement::from_bytes(&buf);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ecsuite_api::Scalar for Scalar {
    fn equal(&self, other: &dyn ecsuite_api::Scalar) -> bool {
        match other.as_any().downcast_ref::<Scalar>() {
            Some(other) => self == other,
            None => false,
        }
    }

    fn set(&mut self, a: &dyn ecsuite_api::Scalar) -> &mut dyn ecsuite_api::Scalar {
        self.fe = Self::cast(a).fe;
        self
    }

    fn clone_boxed(&self) -> Box<dyn ecsuite_api::Scalar> {
        Box::new(self.clone())
    }

    fn set_int64(&mut self, v: i64) -> &mut dyn ecsuite_api::Scalar {
        let mut buf = [0u8; CURVE25519_FIELD_ELEMENT_SIZE];
        LittleEndian::write_u64(&mut buf[..8], v.unsigned_abs());
        let fe = FieldElement::from_bytes(&buf);
        self.fe = if v < 0 { fe.neg() } else { fe };
        self
    }

    fn zero(&mut self) -> &mut dyn ecsuite_api::Scalar {
        self.fe = FieldElement::ZERO;
        self
    }

    fn one(&mut self) -> &mut dyn ecsuite_api::Scalar {
        self.fe = FieldElement::ONE;
        self
    }

    fn add(&mut self, a: &dyn ecsuite_api::Scalar, b: &dyn ecsuite_api::Scalar) -> &mut dyn ecsuite_api::Scalar {
        self.fe = Self::cast(a).fe.add(&Self::cast(b).fe);
        self
    }

    fn sub(&mut self, a: &dyn ecsuite_api::Scalar, b: &dyn ecsuite_api::Scalar) -> &mut dyn ecsuite_api::Scalar {
        self.fe = Self::cast(a).fe.sub(&Self::cast(b).fe);
        self
    }

    fn neg(&mut self, a: &dyn ecsuite_api::Scalar) -> &mut dyn ecsuite_api::Scalar {
        self.fe = Self::cast(a).fe.neg();
        self
    }

    fn mul(&mut self, a: &dyn ecsuite_api::Scalar, b: &dyn ecsuite_api::Scalar) -> &mut dyn ecsuite_api::Scalar {
        self.fe = Self::cast(a).fe.mul(&Self::cast(b).fe);
        self
    }

    fn div(&mut self, a: &dyn ecsuite_api::Scalar, b: &dyn ecsuite_api::Scalar) -> &mut dyn ecsuite_api::Scalar {
        self.fe = Self::cast(a).fe.mul(&Self::cast(b).fe.invert());
        self
    }

    fn inv(&mut self, a: &dyn ecsuite_api::Scalar) -> &mut dyn ecsuite_api::Scalar {
        self.fe = Self::cast(a).fe.invert();
        self
    }

    fn pick(&mut self, rng: &mut dyn RngCore) -> &mut dyn ecsuite_api::Scalar {
        let mut buf = [0u8; CURVE25519_FIELD_ELEMENT_SIZE];
        rng.fill_bytes(&mut buf);
        self.fe = FieldElement::from_bytes(&buf);
        self
    }

    fn set_bytes(&mut self, bytes: &[u8]) -> &mut dyn ecsuite_api::Scalar {
        let mut buf = [0u8; CURVE25519_FIELD_ELEMENT_SIZE];
        let n = bytes.len().min(CURVE25519_FIELD_ELEMENT_SIZE);
        buf[..n].copy_from_slice(&bytes[..n]);
        self.fe = FieldElement::from_bytes(&buf);
        self
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.fe.to_bytes()))
    }
}

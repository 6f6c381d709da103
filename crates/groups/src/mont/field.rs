//! Curve25519 field arithmetic implementation

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use ecsuite_params::montgomery::CURVE25519_FIELD_ELEMENT_SIZE;

const LOW_51_BIT_MASK: u64 = (1u64 << 51) - 1;

/// Curve25519 field element representing values in F_p, p = 2^255 - 19
///
/// Internally stored as 5 little-endian 51-bit limbs in `u64` words.
/// Limb values between operations may exceed 51 bits (a relaxed form);
/// every byte-level observation goes through a full canonical reduction,
/// so public results are always in `[0, p)`.
#[derive(Clone, Copy, Debug, Zeroize)]
pub struct FieldElement(pub(crate) [u64; 5]);

impl FieldElement {
    /// The additive identity element: 0
    pub const ZERO: FieldElement = FieldElement([0, 0, 0, 0, 0]);

    /// The multiplicative identity element: 1
    pub const ONE: FieldElement = FieldElement([1, 0, 0, 0, 0]);

    /// sqrt(-1) mod p, used to fix up square-root candidates since
    /// p = 5 (mod 8).
    pub(crate) const SQRT_M1: FieldElement = FieldElement([
        0x00061b274a0ea0b0,
        0x0000d5a5fc8f189d,
        0x0007ef5e9cbd0c60,
        0x00078595a6804c9e,
        0x0002b8324804fc1d,
    ]);

    /// The exponent p - 2 in little-endian bytes, used for Fermat
    /// inversion.
    const P_MINUS_2: [u8; 32] = [
        0xeb, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0x7f,
    ];

    /// The exponent (p + 3) / 8 in little-endian bytes, used for the
    /// square-root candidate.
    const SQRT_EXP: [u8; 32] = [
        0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0x0f,
    ];

    /// 2*p in 51-bit limbs, added before subtraction so no limb
    /// underflows.
    const TWO_P: [u64; 5] = [
        0x000fffffffffffda,
        0x000ffffffffffffe,
        0x000ffffffffffffe,
        0x000ffffffffffffe,
        0x000ffffffffffffe,
    ];

    /// A small field element from a value below 2^51.
    pub(crate) fn from_u64(v: u64) -> Self {
        debug_assert!(v <= LOW_51_BIT_MASK);
        FieldElement([v, 0, 0, 0, 0])
    }

    /// Create a field element from little-endian byte representation.
    ///
    /// Bit 255 is masked off; the value is interpreted modulo p, so inputs
    /// in `[p, 2^255)` are accepted and reduced on the next canonical
    /// observation.
    pub fn from_bytes(bytes: &[u8; CURVE25519_FIELD_ELEMENT_SIZE]) -> Self {
        let mut limbs = [0u64; 5];
        let mut acc: u128 = 0;
        let mut acc_bits = 0u32;
        let mut limb = 0usize;
        for &byte in bytes.iter() {
            acc |= (byte as u128) << acc_bits;
            acc_bits += 8;
            if acc_bits >= 51 && limb < 5 {
                limbs[limb] = (acc as u64) & LOW_51_BIT_MASK;
                acc >>= 51;
                acc_bits -= 51;
                limb += 1;
            }
        }
        FieldElement(limbs)
    }

    /// Convert to canonical little-endian byte representation in `[0, p)`.
    pub fn to_bytes(&self) -> [u8; CURVE25519_FIELD_ELEMENT_SIZE] {
        let mut limbs = Self::weak_reduce(self.0);

        // Compute q = 1 iff the value is >= p, by rippling (value + 19)
        // through the limbs and watching for overflow past bit 255.
        let mut q = (limbs[0] + 19) >> 51;
        q = (limbs[1] + q) >> 51;
        q = (limbs[2] + q) >> 51;
        q = (limbs[3] + q) >> 51;
        q = (limbs[4] + q) >> 51;

        // Adding 19*q and discarding bit 255 below subtracts q*p.
        limbs[0] += 19 * q;
        for i in 0..4 {
            let carry = limbs[i] >> 51;
            limbs[i] &= LOW_51_BIT_MASK;
            limbs[i + 1] += carry;
        }
        limbs[4] &= LOW_51_BIT_MASK;

        let mut bytes = [0u8; CURVE25519_FIELD_ELEMENT_SIZE];
        let mut acc: u128 = 0;
        let mut acc_bits = 0u32;
        let mut byte = 0usize;
        for &limb in limbs.iter() {
            acc |= (limb as u128) << acc_bits;
            acc_bits += 51;
            while acc_bits >= 8 {
                bytes[byte] = acc as u8;
                acc >>= 8;
                acc_bits -= 8;
                byte += 1;
            }
        }
        if byte < CURVE25519_FIELD_ELEMENT_SIZE {
            bytes[byte] = acc as u8;
        }
        bytes
    }

    /// Constant-time field addition: (self + other) mod p
    #[inline(always)]
    pub fn add(&self, other: &Self) -> Self {
        let mut sum = [0u64; 5];
        for i in 0..5 {
            sum[i] = self.0[i] + other.0[i];
        }
        FieldElement(Self::weak_reduce(sum))
    }

    /// Constant-time field subtraction: (self - other) mod p
    ///
    /// Adds 2p to the minuend first so no limb underflows.
    #[inline(always)]
    pub fn sub(&self, other: &Self) -> Self {
        let mut diff = [0u64; 5];
        for i in 0..5 {
            diff[i] = self.0[i] + Self::TWO_P[i] - other.0[i];
        }
        FieldElement(Self::weak_reduce(diff))
    }

    /// Constant-time field negation: -self mod p
    #[inline(always)]
    pub fn neg(&self) -> Self {
        Self::ZERO.sub(self)
    }

    /// Field multiplication: (self * other) mod p
    ///
    /// Schoolbook multiplication of 51-bit limbs with the high half folded
    /// back via 2^255 = 19 (mod p), then one carry sweep.
    pub fn mul(&self, other: &Self) -> Self {
        #[inline(always)]
        fn m(a: u64, b: u64) -> u128 {
            (a as u128) * (b as u128)
        }

        let a = &self.0;
        let b = &other.0;

        // Premultiplied high limbs: b[i] * 19 folds a[j]*b[i]*2^255 terms.
        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let mut c0 = m(a[0], b[0]) + m(a[4], b1_19) + m(a[3], b2_19) + m(a[2], b3_19) + m(a[1], b4_19);
        let mut c1 = m(a[1], b[0]) + m(a[0], b[1]) + m(a[4], b2_19) + m(a[3], b3_19) + m(a[2], b4_19);
        let mut c2 = m(a[2], b[0]) + m(a[1], b[1]) + m(a[0], b[2]) + m(a[4], b3_19) + m(a[3], b4_19);
        let mut c3 = m(a[3], b[0]) + m(a[2], b[1]) + m(a[1], b[2]) + m(a[0], b[3]) + m(a[4], b4_19);
        let mut c4 = m(a[4], b[0]) + m(a[3], b[1]) + m(a[2], b[2]) + m(a[1], b[3]) + m(a[0], b[4]);

        let mut out = [0u64; 5];
        c1 += (c0 >> 51) as u128;
        out[0] = (c0 as u64) & LOW_51_BIT_MASK;
        c2 += (c1 >> 51) as u128;
        out[1] = (c1 as u64) & LOW_51_BIT_MASK;
        c3 += (c2 >> 51) as u128;
        out[2] = (c2 as u64) & LOW_51_BIT_MASK;
        c4 += (c3 >> 51) as u128;
        out[3] = (c3 as u64) & LOW_51_BIT_MASK;
        let carry = (c4 >> 51) as u64;
        out[4] = (c4 as u64) & LOW_51_BIT_MASK;

        out[0] += carry * 19;
        out[1] += out[0] >> 51;
        out[0] &= LOW_51_BIT_MASK;

        FieldElement(out)
    }

    /// Field squaring: self^2 mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Exponentiation by a fixed public little-endian exponent.
    ///
    /// The square-and-multiply pattern depends only on the exponent, which
    /// is always a compile-time constant here, never a secret.
    pub(crate) fn pow(&self, exp_le: &[u8; 32]) -> Self {
        let mut result = Self::ONE;
        for bit in (0..255).rev() {
            result = result.square();
            if (exp_le[bit >> 3] >> (bit & 7)) & 1 == 1 {
                result = result.mul(self);
            }
        }
        result
    }

    /// Compute the modular multiplicative inverse via Fermat's little
    /// theorem: self^(p-2) mod p.
    ///
    /// Inverting zero yields zero; callers must avoid it.
    pub fn invert(&self) -> Self {
        self.pow(&Self::P_MINUS_2)
    }

    /// Compute a modular square root.
    ///
    /// Since p = 5 (mod 8) the candidate is self^((p+3)/8), corrected by
    /// sqrt(-1) when its square comes out negated. Returns `None` when
    /// self is not a quadratic residue.
    pub fn sqrt(&self) -> Option<Self> {
        let candidate = self.pow(&Self::SQRT_EXP);
        let square = candidate.square();
        if bool::from(square.ct_eq(self)) {
            return Some(candidate);
        }
        if bool::from(square.ct_eq(&self.neg())) {
            return Some(candidate.mul(&Self::SQRT_M1));
        }
        None
    }

    /// Check if the field element represents zero.
    pub fn is_zero(&self) -> bool {
        bool::from(self.ct_eq(&Self::ZERO))
    }

    /// Return `true` if the canonical representation is odd.
    ///
    /// Used to pack the y-coordinate parity into the spare encoding bit.
    pub fn is_odd(&self) -> bool {
        (self.to_bytes()[0] & 1) == 1
    }

    /// Constant-time conditional swap of two field elements.
    pub fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        for i in 0..5 {
            u64::conditional_swap(&mut a.0[i], &mut b.0[i], choice);
        }
    }

    /// Carry-propagate so every limb fits in 52 bits again.
    ///
    /// Accepts limbs up to 2^63; the top carry folds back through
    /// 2^255 = 19 (mod p).
    #[inline(always)]
    fn weak_reduce(mut limbs: [u64; 5]) -> [u64; 5] {
        let c0 = limbs[0] >> 51;
        let c1 = limbs[1] >> 51;
        let c2 = limbs[2] >> 51;
        let c3 = limbs[3] >> 51;
        let c4 = limbs[4] >> 51;

        limbs[0] &= LOW_51_BIT_MASK;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[3] &= LOW_51_BIT_MASK;
        limbs[4] &= LOW_51_BIT_MASK;

        limbs[0] += c4 * 19;
        limbs[1] += c0;
        limbs[2] += c1;
        limbs[3] += c2;
        limbs[4] += c3;

        limbs
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..])
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for FieldElement {}

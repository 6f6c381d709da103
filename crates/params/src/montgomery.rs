//! Constants for the Montgomery Curve25519 group
//!
//! The curve is `y^2 = x^3 + A*x^2 + x` over F_p with p = 2^255 - 19 and
//! A = 486662. Byte encodings in this family are little-endian, matching
//! the wider Curve25519 ecosystem.

/// Size in bytes of an encoded field element, scalar and point.
pub const CURVE25519_FIELD_ELEMENT_SIZE: usize = 32;

/// The Montgomery curve coefficient A.
pub const CURVE25519_A: u64 = 486662;

/// (A - 2) / 4, the ladder constant.
pub const CURVE25519_A24: u64 = 121665;

/// Maximum number of payload bytes embeddable in one group element.
pub const CURVE25519_EMBED_LEN: usize = 28;

/// Base point x-coordinate (little-endian): u = 9.
pub const CURVE25519_BASE_X: [u8; 32] = [
    9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0,
];

/// Base point y-coordinate (little-endian):
/// 14781619447589544791020593568409986887264606134616475288964881837755586237401.
pub const CURVE25519_BASE_Y: [u8; 32] = [
    0xd9, 0xd3, 0xce, 0x7e, 0xa2, 0xc5, 0xe9, 0x29, 0xb2, 0x61, 0x7c, 0x6d, 0x7e, 0x4d, 0x3d,
    0x92, 0x4c, 0xd1, 0x48, 0x77, 0x2c, 0xdd, 0x1e, 0xe0, 0xb4, 0x86, 0xa0, 0xb8, 0xa1, 0x19,
    0xae, 0x20,
];

/// Order of the prime-order subgroup generated by the base point
/// (little-endian): 2^252 + 27742317777372353535851937790883648493.
pub const CURVE25519_ORDER: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
    0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x10,
];

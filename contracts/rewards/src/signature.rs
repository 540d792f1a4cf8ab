//! secp256k1 signer recovery for claim signatures.

use k256::{
    elliptic_curve::{point::DecompressPoint, subtle::Choice},
    AffinePoint, FieldBytes,
};
use soroban_sdk::{crypto::Hash, Bytes, BytesN, Env};

use crate::types::{ClaimSignature, RewardsError};

/// secp256k1 group order `n`, big-endian.
const CURVE_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// `n / 2`, the largest `s` accepted (EIP-2 low-s rule).
const HALF_CURVE_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

/// Recovers the Ethereum-style address that produced `signature` over
/// `digest`.
///
/// Malformed signatures are rejected here with `InvalidSignature` so that the
/// host's recovery never sees an out-of-range or malleable input, nor an `r`
/// that is not the x-coordinate of a curve point.
pub fn recover_signer(
    env: &Env,
    digest: &Hash<32>,
    signature: &ClaimSignature,
) -> Result<[u8; 20], RewardsError> {
    let recovery_id = match signature.v {
        0 | 1 => signature.v,
        27 | 28 => signature.v - 27,
        _ => return Err(RewardsError::InvalidSignature),
    };

    let r = signature.r.to_array();
    let s = signature.s.to_array();
    if is_zero(&r) || r >= CURVE_ORDER || is_zero(&s) || s > HALF_CURVE_ORDER {
        return Err(RewardsError::InvalidSignature);
    }
    if !is_curve_x(&r) {
        return Err(RewardsError::InvalidSignature);
    }

    let mut compact = [0u8; 64];
    compact[..32].copy_from_slice(&r);
    compact[32..].copy_from_slice(&s);

    let public_key =
        env.crypto()
            .secp256k1_recover(digest, &BytesN::from_array(env, &compact), recovery_id);
    Ok(eth_address(env, &public_key))
}

/// Last 20 bytes of `keccak256` over an uncompressed public key (without the
/// `0x04` prefix).
pub fn eth_address(env: &Env, public_key: &BytesN<65>) -> [u8; 20] {
    let key = Bytes::from(public_key.clone()).slice(1..65);
    let hash = env.crypto().keccak256(&key).to_array();
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Equality whose running time does not depend on where the inputs differ.
pub fn constant_time_eq(a: &[u8; 20], b: &[u8; 20]) -> bool {
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Whether some point on secp256k1 has x-coordinate `x`.
fn is_curve_x(x: &[u8; 32]) -> bool {
    AffinePoint::decompress(FieldBytes::from_slice(x), Choice::from(0))
        .is_some()
        .into()
}

fn is_zero(word: &[u8; 32]) -> bool {
    word.iter().all(|b| *b == 0)
}

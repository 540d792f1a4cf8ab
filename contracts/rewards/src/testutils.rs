//! Off-chain signing helpers for tests of the rewards ledger and the
//! contracts that claim from it.

use k256::{ecdsa::SigningKey, elliptic_curve::sec1::ToEncodedPoint};
use soroban_sdk::{BytesN, Env};

use crate::{signature, ClaimSignature};

/// A distribution signer holding a secp256k1 key.
pub struct ClaimSigner {
    key: SigningKey,
}

impl ClaimSigner {
    /// Deterministic key whose 32 secret bytes are all `seed`. `seed` must be
    /// non-zero.
    pub fn from_seed(seed: u8) -> Self {
        let key = SigningKey::from_slice(&[seed; 32]).expect("valid secp256k1 secret");
        Self { key }
    }

    /// The Ethereum-style address the rewards contract stores as its signer.
    pub fn address(&self, env: &Env) -> BytesN<20> {
        let point = self.key.verifying_key().as_affine().to_encoded_point(false);
        let mut public_key = [0u8; 65];
        public_key.copy_from_slice(point.as_bytes());
        let address = signature::eth_address(env, &BytesN::from_array(env, &public_key));
        BytesN::from_array(env, &address)
    }

    /// Signs a typed-data digest as returned by `claim_digest`.
    pub fn sign(&self, env: &Env, digest: &BytesN<32>) -> ClaimSignature {
        let (sig, recovery_id) = self
            .key
            .sign_prehash_recoverable(&digest.to_array())
            .expect("prehash signing");
        let bytes = sig.to_bytes();

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        ClaimSignature {
            v: 27 + recovery_id.to_byte() as u32,
            r: BytesN::from_array(env, &r),
            s: BytesN::from_array(env, &s),
        }
    }
}

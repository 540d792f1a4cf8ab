//! Typed structured-data hashing for reward claims.
//!
//! Follows EIP-712 with two Soroban adaptations: the chain id is the 32-byte
//! network id, and addresses are committed to as `keccak256` of their XDR
//! encoding, so both appear as `bytes32` members.

use soroban_sdk::{crypto::Hash, xdr::ToXdr, Address, Bytes, BytesN, Env, String};

use crate::types::Recipient;

pub const DOMAIN_TYPE: &[u8] =
    b"EIP712Domain(string name,string version,bytes32 chainId,bytes32 verifyingContract)";

pub const RECIPIENT_TYPE: &[u8] =
    b"Recipient(bytes32 chainId,uint256 cycle,bytes32 wallet,uint256 amount)";

/// Longest domain name or version accepted, in bytes.
pub const MAX_DOMAIN_FIELD_LEN: usize = 64;

fn keccak(env: &Env, data: &Bytes) -> BytesN<32> {
    env.crypto().keccak256(data).to_bytes()
}

fn type_hash(env: &Env, encoded_type: &[u8]) -> BytesN<32> {
    keccak(env, &Bytes::from_slice(env, encoded_type))
}

/// # Panics
/// - If the string is longer than [`MAX_DOMAIN_FIELD_LEN`]
fn hash_string(env: &Env, value: &String) -> BytesN<32> {
    let len = value.len() as usize;
    assert!(len <= MAX_DOMAIN_FIELD_LEN, "domain field too long");

    let mut buf = [0u8; MAX_DOMAIN_FIELD_LEN];
    value.copy_into_slice(&mut buf[..len]);
    keccak(env, &Bytes::from_slice(env, &buf[..len]))
}

pub fn hash_address(env: &Env, address: &Address) -> BytesN<32> {
    keccak(env, &address.clone().to_xdr(env))
}

/// Left-pads an unsigned value into a 32-byte big-endian word.
fn uint_word(value: u128) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

pub fn domain_separator(
    env: &Env,
    name: &String,
    version: &String,
    chain_id: &BytesN<32>,
    verifying_contract: &Address,
) -> BytesN<32> {
    let mut encoded = Bytes::new(env);
    encoded.append(&type_hash(env, DOMAIN_TYPE).into());
    encoded.append(&hash_string(env, name).into());
    encoded.append(&hash_string(env, version).into());
    encoded.append(&chain_id.clone().into());
    encoded.append(&hash_address(env, verifying_contract).into());
    keccak(env, &encoded)
}

/// `hashStruct(Recipient)`. The amount must already be validated positive.
pub fn recipient_hash(env: &Env, recipient: &Recipient) -> BytesN<32> {
    let mut encoded = Bytes::new(env);
    encoded.append(&type_hash(env, RECIPIENT_TYPE).into());
    encoded.append(&recipient.chain_id.clone().into());
    encoded.extend_from_array(&uint_word(recipient.cycle as u128));
    encoded.append(&hash_address(env, &recipient.wallet).into());
    encoded.extend_from_array(&uint_word(recipient.amount as u128));
    keccak(env, &encoded)
}

/// `keccak256(0x19 0x01 ‖ domainSeparator ‖ hashStruct(message))`
pub fn typed_data_digest(env: &Env, separator: &BytesN<32>, recipient: &Recipient) -> Hash<32> {
    let mut encoded = Bytes::from_array(env, &[0x19, 0x01]);
    encoded.append(&separator.clone().into());
    encoded.append(&recipient_hash(env, recipient).into());
    env.crypto().keccak256(&encoded)
}

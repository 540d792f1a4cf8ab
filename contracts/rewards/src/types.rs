use soroban_sdk::{contracterror, contracttype, Address, BytesN, String};

/// Storage keys for the contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin address, may rotate the signer (instance storage).
    Admin,
    /// Reward token paid out by `claim` (instance storage).
    RewardToken,
    /// Ethereum-style address of the trusted distribution signer (instance storage).
    Signer,
    /// Typed-data domain, fixed at construction (instance storage).
    Domain,
    /// Claim record for a (wallet, cycle) pair (persistent storage).
    Claimed(Address, u64),
}

/// The typed-data domain every claim signature is scoped to.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Domain {
    pub name: String,
    pub version: String,
    /// Network id the separator was derived under.
    pub chain_id: BytesN<32>,
    pub separator: BytesN<32>,
}

/// The signed claim message: `amount` of rewards for `wallet` in `cycle`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Recipient {
    pub chain_id: BytesN<32>,
    pub cycle: u64,
    pub wallet: Address,
    pub amount: i128,
}

/// Recoverable secp256k1 signature. `v` is 27/28 (or the raw recovery id 0/1).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimSignature {
    pub v: u32,
    pub r: BytesN<32>,
    pub s: BytesN<32>,
}

/// Error codes, shared with the AutoCompounder vault so that a failed nested
/// claim surfaces with the same code.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RewardsError {
    NotOwner = 1,
    InvalidAmount = 2,
    InsufficientBalance = 5,
    InvalidSignature = 7,
    AlreadyClaimed = 8,
}

/// Emitted when a claim pays out.
///
/// # Topics
/// - `SymbolShort("claimed")`, recipient wallet
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimedEvent {
    pub cycle: u64,
    pub amount: i128,
}

/// Emitted when the admin rotates the trusted signer.
///
/// # Topics
/// - `SymbolShort("signer")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignerUpdatedEvent {
    pub old_signer: BytesN<20>,
    pub new_signer: BytesN<20>,
}

use soroban_sdk::{contracterror, contracttype, Address, BytesN};

/// Collaborator contracts, fixed at construction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultConfig {
    /// Token the owner deposits and withdraws (the pool's underlying).
    pub principal_token: Address,
    /// Token paid out by the rewards ledger.
    pub reward_token: Address,
    /// Share-accounting pool holding the vault's principal.
    pub pool: Address,
    /// Rewards ledger the vault claims from.
    pub rewards: Address,
    /// Cycle clock gating withdrawals.
    pub manager: Address,
    /// Venue converting rewards into principal.
    pub router: Address,
}

/// The single depositor's position.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositorAccount {
    /// The only address allowed to call mutating entry points.
    pub owner: Address,
    /// Net principal contributed: deposits minus executed withdrawals,
    /// floored at zero. Compounded rewards are not added here.
    pub principal: i128,
    /// Pool shares held by the vault on the owner's behalf.
    pub shares: i128,
}

/// The pending half of a two-phase withdrawal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalRequest {
    /// Principal still to be released.
    pub amount: i128,
    /// Cycle in which the request was made; release needs a later cycle.
    pub requested_at_cycle: u64,
    pub active: bool,
}

/// Recoverable secp256k1 signature forwarded to the rewards ledger.
/// Field-for-field identical to the ledger's own `ClaimSignature`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimSignature {
    pub v: u32,
    pub r: BytesN<32>,
    pub s: BytesN<32>,
}

/// Vault error codes.
///
/// `InvalidAmount`, `InsufficientBalance`, `InvalidSignature` and
/// `AlreadyClaimed` share their codes with the rewards ledger, so a failed
/// nested claim is returned to the caller unchanged.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    NotOwner = 1,
    InvalidAmount = 2,
    InvalidCycle = 3,
    InsufficientAllowance = 4,
    InsufficientBalance = 5,
    WithdrawInsufficientBalance = 6,
    InvalidSignature = 7,
    AlreadyClaimed = 8,
    /// The rewards ledger failed without a recognised error code.
    ClaimFailed = 20,
    /// The pool rejected a deposit or redemption.
    PoolFailed = 21,
    /// The router could not convert rewards into principal.
    SwapFailed = 22,
}

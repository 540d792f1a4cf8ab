use soroban_sdk::{contracterror, contracttype, Address};

/// Storage keys for the contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Underlying token address (instance storage).
    Underlying,
    /// Total shares outstanding (instance storage).
    TotalShares,
    /// Shares held per owner (persistent storage).
    Shares(Address),
}

/// Error codes. Codes below 20 match the AutoCompounder vault's taxonomy.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    InvalidAmount = 2,
    InsufficientBalance = 5,
    ZeroShares = 20,
    ZeroAssets = 21,
}

/// Emitted when shares are minted.
///
/// # Topics
/// - `SymbolShort("deposit")`, depositor address
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolDepositEvent {
    pub amount: i128,
    pub shares: i128,
}

/// Emitted when shares are burned for underlying.
///
/// # Topics
/// - `SymbolShort("redeem")`, share owner address
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolRedeemEvent {
    pub to: Address,
    pub shares: i128,
    pub amount: i128,
}

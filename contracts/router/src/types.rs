use soroban_sdk::{contracterror, contracttype};

/// Storage keys for the contract (instance storage).
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    /// Token accepted by `swap` (the reward token).
    TokenIn,
    /// Token paid out by `swap` (the principal token).
    TokenOut,
    Rate,
}

/// Conversion rate: `num` units out per `den` units in.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rate {
    pub num: i128,
    pub den: i128,
}

/// Error codes. Codes below 20 match the AutoCompounder vault's taxonomy.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RouterError {
    NotOwner = 1,
    InvalidAmount = 2,
    InvalidRate = 20,
    InsufficientLiquidity = 21,
}

/// Emitted on every swap.
///
/// # Topics
/// - `SymbolShort("swap")`, swapper address
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapEvent {
    pub amount_in: i128,
    pub amount_out: i128,
}

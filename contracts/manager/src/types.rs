use soroban_sdk::{contracterror, contracttype};

/// Storage keys for the contract (instance storage).
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Address allowed to advance the clock.
    Admin,
    /// The current cycle number.
    CurrentCycle,
}

/// Error codes. Codes 1-8 match the AutoCompounder vault's taxonomy.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ManagerError {
    NotOwner = 1,
    InvalidAmount = 2,
    CycleOverflow = 20,
}

/// Emitted when the admin advances the clock.
///
/// # Topics
/// - `SymbolShort("cycle")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CycleAdvancedEvent {
    pub previous: u64,
    pub current: u64,
}

//! Clients for the contracts the vault depends on.
//!
//! The vault never links against its collaborators; it talks to whatever
//! addresses it was constructed with, through these interfaces.

use soroban_sdk::{contractclient, Address, Env};

use crate::types::{ClaimSignature, VaultError};

#[contractclient(name = "RewardsClient")]
pub trait RewardsInterface {
    fn claim(
        env: Env,
        recipient: Address,
        cycle: u64,
        amount: i128,
        signature: ClaimSignature,
    ) -> Result<(), VaultError>;
}

/// Read-only view of the cycle clock.
#[contractclient(name = "CycleClockClient")]
pub trait CycleClock {
    fn current_cycle(env: Env) -> u64;
}

#[contractclient(name = "PoolClient")]
pub trait PoolInterface {
    fn deposit(env: Env, from: Address, amount: i128) -> i128;
    fn redeem(env: Env, from: Address, to: Address, shares: i128) -> i128;
    fn balance(env: Env, owner: Address) -> i128;
    fn preview_redeem(env: Env, shares: i128) -> i128;
    fn preview_withdraw(env: Env, assets: i128) -> i128;
    fn underlying(env: Env) -> Address;
}

#[contractclient(name = "SwapClient")]
pub trait SwapInterface {
    fn swap(env: Env, from: Address, amount_in: i128) -> i128;
}

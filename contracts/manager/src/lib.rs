//! # Manager Contract
//!
//! The cycle clock shared by the rewards distribution and the AutoCompounder
//! vault. A cycle is a monotonically non-decreasing counter; each increment
//! closes the previous distribution/settlement cycle.
//!
//! Only the admin advances the clock. Every other contract treats it as a
//! read-only capability and only calls [`Manager::current_cycle`].

#![no_std]

mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env};

pub use types::{CycleAdvancedEvent, ManagerError};

#[contract]
pub struct Manager;

#[contractimpl]
impl Manager {
    /// Creates the clock at `initial_cycle` with `admin` as the only party
    /// allowed to advance it.
    pub fn __constructor(env: Env, admin: Address, initial_cycle: u64) {
        storage::set_admin(&env, &admin);
        storage::set_current_cycle(&env, initial_cycle);
    }

    /// Returns the current cycle.
    pub fn current_cycle(env: Env) -> u64 {
        storage::get_current_cycle(&env)
    }

    /// Advances the clock by `by` cycles and returns the new cycle.
    ///
    /// # Errors
    /// - `NotOwner` if `caller` is not the admin
    /// - `InvalidAmount` if `by` is zero
    /// - `CycleOverflow` if the counter would wrap
    ///
    /// # Events
    /// Emits `CycleAdvancedEvent` under the `cycle` topic.
    pub fn increase_current_cycle(env: Env, caller: Address, by: u64) -> Result<u64, ManagerError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if by == 0 {
            return Err(ManagerError::InvalidAmount);
        }

        let previous = storage::get_current_cycle(&env);
        let current = previous
            .checked_add(by)
            .ok_or(ManagerError::CycleOverflow)?;
        storage::set_current_cycle(&env, current);

        env.events().publish(
            (symbol_short!("cycle"),),
            CycleAdvancedEvent { previous, current },
        );

        Ok(current)
    }

    /// Returns the address allowed to advance the cycle.
    pub fn get_admin(env: Env) -> Address {
        storage::get_admin(&env)
    }

    /// Transfers the admin role. Admin-only.
    pub fn set_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), ManagerError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;
        storage::set_admin(&env, &new_admin);
        Ok(())
    }

    #[inline]
    fn require_admin(env: &Env, caller: &Address) -> Result<(), ManagerError> {
        if *caller != storage::get_admin(env) {
            return Err(ManagerError::NotOwner);
        }
        Ok(())
    }
}

//! # Pool Contract
//!
//! A share-accounting venue over a single underlying token. Depositors hand
//! the pool principal and receive shares proportional to their contribution;
//! redeeming shares pays out the matching slice of everything the pool holds.
//!
//! ## Share Accounting Model
//!
//! ```text
//! shares_out = assets_in * total_shares / total_assets     (rounded down)
//! assets_out = shares_in * total_assets / total_shares     (rounded down)
//! ```
//!
//! An empty pool mints 1:1. `total_assets` is the pool's live token balance,
//! so tokens sent to the pool without minting shares raise the exchange rate
//! for every holder.
//!
//! Deposits pull funds with `transfer_from`, the pool acting as spender, so
//! callers approve the pool before calling [`Pool::deposit`].

#![no_std]

mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, symbol_short, token, Address, Env};

pub use types::{PoolDepositEvent, PoolError, PoolRedeemEvent};

#[contract]
pub struct Pool;

#[contractimpl]
impl Pool {
    pub fn __constructor(env: Env, underlying: Address) {
        storage::set_underlying(&env, &underlying);
        storage::set_total_shares(&env, 0);
    }

    // ==========================================================================
    // DEPOSIT / REDEEM
    // ==========================================================================

    /// Deposits `amount` of the underlying token from `from` and mints shares
    /// to `from`. Returns the shares minted.
    ///
    /// # Errors
    /// - `InvalidAmount` if `amount` is not positive
    /// - `ZeroShares` if `amount` is too small to mint a single share
    ///
    /// # Events
    /// Emits `PoolDepositEvent` under `("deposit", from)`.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, PoolError> {
        from.require_auth();

        if amount <= 0 {
            return Err(PoolError::InvalidAmount);
        }

        let shares = Self::preview_deposit(env.clone(), amount);
        if shares <= 0 {
            return Err(PoolError::ZeroShares);
        }

        let balance = storage::get_shares(&env, &from);
        storage::set_shares(&env, &from, balance + shares);
        storage::set_total_shares(&env, storage::get_total_shares(&env) + shares);

        let pool = env.current_contract_address();
        Self::underlying_client(&env).transfer_from(&pool, &from, &pool, &amount);

        env.events().publish(
            (symbol_short!("deposit"), from),
            PoolDepositEvent { amount, shares },
        );

        Ok(shares)
    }

    /// Burns `shares` held by `from` and pays the underlying to `to`.
    /// Returns the amount of underlying paid out.
    ///
    /// # Errors
    /// - `InvalidAmount` if `shares` is not positive
    /// - `InsufficientBalance` if `from` holds fewer than `shares`
    /// - `ZeroAssets` if the shares are worth nothing at the current rate
    ///
    /// # Events
    /// Emits `PoolRedeemEvent` under `("redeem", from)`.
    pub fn redeem(env: Env, from: Address, to: Address, shares: i128) -> Result<i128, PoolError> {
        from.require_auth();

        if shares <= 0 {
            return Err(PoolError::InvalidAmount);
        }

        let balance = storage::get_shares(&env, &from);
        if balance < shares {
            return Err(PoolError::InsufficientBalance);
        }

        let amount = Self::preview_redeem(env.clone(), shares);
        if amount <= 0 {
            return Err(PoolError::ZeroAssets);
        }

        storage::set_shares(&env, &from, balance - shares);
        storage::set_total_shares(&env, storage::get_total_shares(&env) - shares);

        Self::underlying_client(&env).transfer(&env.current_contract_address(), &to, &amount);

        env.events().publish(
            (symbol_short!("redeem"), from),
            PoolRedeemEvent { to, shares, amount },
        );

        Ok(amount)
    }

    // ==========================================================================
    // READ FUNCTIONS
    // ==========================================================================

    /// Shares held by `owner`.
    pub fn balance(env: Env, owner: Address) -> i128 {
        storage::get_shares(&env, &owner)
    }

    /// Shares outstanding across all holders.
    pub fn total_shares(env: Env) -> i128 {
        storage::get_total_shares(&env)
    }

    /// Underlying tokens held by the pool.
    pub fn total_assets(env: Env) -> i128 {
        Self::underlying_client(&env).balance(&env.current_contract_address())
    }

    /// Token the pool accepts and pays out.
    pub fn underlying(env: Env) -> Address {
        storage::get_underlying(&env)
    }

    /// Shares minted for depositing `assets` right now.
    pub fn preview_deposit(env: Env, assets: i128) -> i128 {
        let total_shares = storage::get_total_shares(&env);
        let total_assets = Self::total_assets(env);
        if total_shares == 0 || total_assets == 0 {
            return assets;
        }
        assets * total_shares / total_assets
    }

    /// Underlying paid out for redeeming `shares` right now.
    pub fn preview_redeem(env: Env, shares: i128) -> i128 {
        let total_shares = storage::get_total_shares(&env);
        if total_shares == 0 {
            return 0;
        }
        shares * Self::total_assets(env) / total_shares
    }

    /// Shares that must be redeemed to receive at least `assets`
    /// (rounded up).
    pub fn preview_withdraw(env: Env, assets: i128) -> i128 {
        let total_shares = storage::get_total_shares(&env);
        let total_assets = Self::total_assets(env);
        if total_shares == 0 || total_assets == 0 {
            return assets;
        }
        let numerator = assets * total_shares;
        let shares = numerator / total_assets;
        if numerator % total_assets == 0 {
            shares
        } else {
            shares + 1
        }
    }

    fn underlying_client(env: &Env) -> token::Client<'_> {
        token::Client::new(env, &storage::get_underlying(env))
    }
}

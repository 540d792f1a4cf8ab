//! # Swap Router Contract
//!
//! Converts the reward token into the vault's principal token at a rate set
//! by the admin. It stands in for the DEX router and liquidity zap that turn
//! distributed rewards into pool principal, and pays out of reserves the
//! admin funds up front.
//!
//! ```text
//! amount_out = amount_in * rate_num / rate_den   (rounded down)
//! ```

#![no_std]

mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, symbol_short, token, Address, Env};

pub use types::{Rate, RouterError, SwapEvent};

#[contract]
pub struct SwapRouter;

#[contractimpl]
impl SwapRouter {
    /// # Panics
    /// - If either side of the rate is not positive
    pub fn __constructor(
        env: Env,
        admin: Address,
        token_in: Address,
        token_out: Address,
        rate_num: i128,
        rate_den: i128,
    ) {
        assert!(rate_num > 0 && rate_den > 0, "swap rate must be positive");

        storage::set_admin(&env, &admin);
        storage::set_token_in(&env, &token_in);
        storage::set_token_out(&env, &token_out);
        storage::set_rate(&env, &Rate { num: rate_num, den: rate_den });
    }

    /// Swaps `amount_in` of `token_in` held by `from` for `token_out`.
    /// `from` must have approved the router for `amount_in`.
    ///
    /// # Errors
    /// - `InvalidAmount` if `amount_in` is not positive or quotes to zero
    /// - `InsufficientLiquidity` if reserves cannot cover the output
    ///
    /// # Events
    /// Emits `SwapEvent` under `("swap", from)`.
    pub fn swap(env: Env, from: Address, amount_in: i128) -> Result<i128, RouterError> {
        from.require_auth();

        if amount_in <= 0 {
            return Err(RouterError::InvalidAmount);
        }

        let amount_out = Self::quote(env.clone(), amount_in);
        if amount_out <= 0 {
            return Err(RouterError::InvalidAmount);
        }
        if Self::reserves(env.clone()) < amount_out {
            return Err(RouterError::InsufficientLiquidity);
        }

        let router = env.current_contract_address();
        token::Client::new(&env, &storage::get_token_in(&env))
            .transfer_from(&router, &from, &router, &amount_in);
        token::Client::new(&env, &storage::get_token_out(&env))
            .transfer(&router, &from, &amount_out);

        env.events().publish(
            (symbol_short!("swap"), from),
            SwapEvent { amount_in, amount_out },
        );

        Ok(amount_out)
    }

    /// `token_out` paid for `amount_in` at the current rate, rounded down.
    pub fn quote(env: Env, amount_in: i128) -> i128 {
        let rate = storage::get_rate(&env);
        amount_in * rate.num / rate.den
    }

    /// `token_out` available for swaps.
    pub fn reserves(env: Env) -> i128 {
        token::Client::new(&env, &storage::get_token_out(&env))
            .balance(&env.current_contract_address())
    }

    /// Returns the current conversion rate.
    pub fn get_rate(env: Env) -> Rate {
        storage::get_rate(&env)
    }

    /// Replaces the conversion rate. Admin-only.
    pub fn set_rate(env: Env, caller: Address, rate_num: i128, rate_den: i128) -> Result<(), RouterError> {
        caller.require_auth();
        if caller != storage::get_admin(&env) {
            return Err(RouterError::NotOwner);
        }
        if rate_num <= 0 || rate_den <= 0 {
            return Err(RouterError::InvalidRate);
        }
        storage::set_rate(&env, &Rate { num: rate_num, den: rate_den });
        Ok(())
    }
}

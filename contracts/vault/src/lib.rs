//! # AutoCompounder Vault Contract
//!
//! A single-owner vault that parks principal in a share-accounting pool and
//! keeps reinvesting the rewards that position earns.
//!
//! ## Architecture Overview
//!
//! The vault sits between one owner and four collaborator contracts, all
//! injected at construction:
//!
//! - **Pool** holds the principal and issues shares to the vault
//! - **Rewards** pays signed, per-cycle reward distributions to the vault
//! - **Router** converts the reward token into principal
//! - **Manager** is the cycle clock that gates withdrawals
//!
//! ## Asset Flow
//!
//! ```text
//! Deposit Flow:
//! Owner → approve(vault) → [Vault.deposit()] → [Principal Token] → [Pool]
//!                               ↓
//!                   Share delta credited to the account
//!                   DepositEvent emitted
//!
//! Autocompound Flow:
//! Owner → [Vault.autocompound(cycle, amount, sig)]
//!              ↓
//!         [Rewards.claim()] → reward tokens → [Router.swap()] → principal
//!              ↓
//!         [Pool.deposit()] → shares credited, principal ledger untouched
//!         CompoundEvent emitted
//!
//! Withdraw Flow (two phases):
//! Owner → [Vault.request_withdrawal(amount)]   recorded at cycle N
//!         ... Manager advances past N ...
//! Owner → [Vault.execute_withdrawal(amount)] → [Pool.redeem()] → Owner
//!         WithdrawalExecutedEvent emitted
//! ```
//!
//! ## Storage Layout
//!
//! ### Instance Storage
//! - `Config`: collaborator addresses (`VaultConfig`)
//! - `Account`: owner, net principal and pool shares (`DepositorAccount`)
//! - `Withdrawal`: the single pending withdrawal slot (`WithdrawalRequest`)
//!
//! ## Withdrawal State Machine
//!
//! ```text
//! NONE ──request_withdrawal──▶ PENDING ──execute_withdrawal──▶ NONE
//!                                 │    (current_cycle > requested_at_cycle)
//!                                 └──cancel_withdrawal──▶ NONE
//! ```
//!
//! A new request replaces a pending one and restarts its cycle. Partial
//! execution leaves the remainder pending under the original cycle.
//!
//! ## Failure Model
//!
//! Every entry point validates the caller, then its arguments, then state,
//! before any storage write or external call. Any error returned rolls the
//! whole invocation back, including nested claims and token transfers.
//! Bookkeeping is written before handing control to the pool on withdrawal.
//! Pool and router failures surface as `PoolFailed` and `SwapFailed`, never
//! as the collaborator's own error code.

#![no_std]

mod interfaces;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, token, Address, Env};

use interfaces::{CycleClockClient, PoolClient, RewardsClient, SwapClient};
pub use types::{ClaimSignature, DepositorAccount, VaultConfig, VaultError, WithdrawalRequest};


// ============================================================================
// STORAGE KEYS
// ============================================================================

/// Storage keys for vault state. All entries live in instance storage.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Collaborator contract addresses
    Config,
    /// The owner's position
    Account,
    /// Pending withdrawal, absent when none
    Withdrawal,
}


// ============================================================================
// EVENTS
// ============================================================================

/// Emitted when the owner deposits principal.
///
/// # Topics
/// - `SymbolShort("deposit")`, owner address
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositEvent {
    /// Principal moved into the pool
    pub amount: i128,
    /// Pool shares credited for it
    pub shares: i128,
}

/// Emitted when a reward cycle is claimed and reinvested.
///
/// # Topics
/// - `SymbolShort("compound")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompoundEvent {
    pub cycle: u64,
    /// Reward tokens claimed
    pub reward: i128,
    /// Principal obtained for them
    pub principal: i128,
    /// Pool shares credited
    pub shares: i128,
}

/// Emitted when a withdrawal is requested.
///
/// # Topics
/// - `SymbolShort("wd_req")`, owner address
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalRequestedEvent {
    pub amount: i128,
    /// Cycle the request was recorded in
    pub cycle: u64,
    /// Amount of the pending request this one replaced (0 if none)
    pub replaced: i128,
}

/// Emitted when a pending withdrawal is executed, in full or in part.
///
/// # Topics
/// - `SymbolShort("wd_exec")`, owner address
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalExecutedEvent {
    /// Principal requested
    pub amount: i128,
    /// Pool shares redeemed
    pub shares: i128,
    /// Principal actually paid to the owner
    pub released: i128,
    /// Amount left pending
    pub remaining: i128,
}

/// # Topics
/// - `SymbolShort("wd_cancel")`, owner address
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalCancelledEvent {
    pub amount: i128,
}

/// # Topics
/// - `SymbolShort("owner")`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub previous: Address,
    pub new_owner: Address,
}


// ============================================================================
// CONTRACT
// ============================================================================

/// AutoCompounder - single-owner reward-compounding vault
///
/// # Security Model
///
/// - Every mutating entry point takes the caller explicitly, requires its
///   authorization and rejects anyone but the owner with `NotOwner` before
///   looking at any other argument
/// - Reward claims are authorised by the rewards ledger's signer, never by
///   the vault
/// - Principal only leaves through the two-phase withdrawal, and only once
///   the cycle clock has moved past the request's cycle
#[contract]
pub struct AutoCompounder;

#[contractimpl]
impl AutoCompounder {

    // ==========================================================================
    // INITIALIZATION
    // ==========================================================================

    /// Creates the vault for `owner` on top of the given collaborators.
    ///
    /// # Panics
    /// - If the pool's underlying token is not `config.principal_token`
    pub fn __constructor(env: Env, owner: Address, config: VaultConfig) {
        let underlying = PoolClient::new(&env, &config.pool).underlying();
        assert!(
            underlying == config.principal_token,
            "pool underlying must be the principal token"
        );

        storage::set_config(&env, &config);
        storage::set_account(
            &env,
            &DepositorAccount {
                owner,
                principal: 0,
                shares: 0,
            },
        );
    }


    // ==========================================================================
    // CORE LIFECYCLE - DEPOSIT
    // ==========================================================================

    /// Moves `amount` of principal from the owner into the pool.
    ///
    /// The owner must first `approve` the vault for at least `amount` on the
    /// principal token. The account is credited with the shares the pool
    /// actually minted, which need not equal `amount`.
    ///
    /// # Arguments
    /// * `caller` - Must be the owner (must authorize)
    /// * `amount` - Principal to deposit
    ///
    /// # Errors
    /// - `NotOwner` if `caller` is not the owner
    /// - `InvalidAmount` if `amount` is not positive
    /// - `InsufficientAllowance` if the vault's allowance is below `amount`
    /// - `InsufficientBalance` if the owner holds less than `amount`
    /// - `PoolFailed` if the pool rejects the deposit (e.g. zero shares)
    ///
    /// # Events
    /// Emits `DepositEvent` under `("deposit", owner)`.
    pub fn deposit(env: Env, caller: Address, amount: i128) -> Result<(), VaultError> {
        let mut account = Self::require_owner(&env, &caller)?;
        Self::require_positive_amount(amount)?;

        let config = storage::get_config(&env);
        let this = env.current_contract_address();
        let principal = token::Client::new(&env, &config.principal_token);

        if principal.allowance(&caller, &this) < amount {
            return Err(VaultError::InsufficientAllowance);
        }
        if principal.balance(&caller) < amount {
            return Err(VaultError::InsufficientBalance);
        }

        principal.transfer_from(&this, &caller, &this, &amount);
        let shares = Self::supply_pool(&env, &config, amount)?;

        account.principal += amount;
        account.shares += shares;
        storage::set_account(&env, &account);

        env.events().publish(
            (symbol_short!("deposit"), caller),
            DepositEvent { amount, shares },
        );

        Ok(())
    }


    // ==========================================================================
    // CORE LIFECYCLE - AUTOCOMPOUND
    // ==========================================================================

    /// Claims the vault's reward distribution for `cycle` and reinvests it.
    ///
    /// The claim is made on the vault's own behalf; `signature` must be the
    /// rewards signer's signature over (vault, `cycle`, `amount`). The
    /// rewards are converted to principal and deposited into the pool. The
    /// new shares grow the position without touching the principal ledger.
    ///
    /// # Arguments
    /// * `caller` - Must be the owner (must authorize)
    /// * `cycle` - Distribution cycle; 0 is never a valid cycle
    /// * `amount` - Reward amount, exactly as signed
    /// * `signature` - Rewards signer's signature
    ///
    /// # Returns
    /// The pool shares credited.
    ///
    /// # Errors
    /// - `NotOwner` if `caller` is not the owner
    /// - `InvalidCycle` if `cycle` is 0
    /// - `InvalidAmount` if `amount` is not positive
    /// - Any rewards ledger error, unchanged (`InvalidSignature`,
    ///   `AlreadyClaimed`, `InsufficientBalance`)
    /// - `SwapFailed` if the router cannot convert the rewards
    /// - `PoolFailed` if the pool rejects the converted principal
    ///
    /// # Events
    /// Emits `CompoundEvent` under `("compound",)`.
    pub fn autocompound(
        env: Env,
        caller: Address,
        cycle: u64,
        amount: i128,
        signature: ClaimSignature,
    ) -> Result<i128, VaultError> {
        let mut account = Self::require_owner(&env, &caller)?;
        if cycle == 0 {
            return Err(VaultError::InvalidCycle);
        }
        Self::require_positive_amount(amount)?;

        let config = storage::get_config(&env);
        let this = env.current_contract_address();

        match RewardsClient::new(&env, &config.rewards).try_claim(&this, &cycle, &amount, &signature) {
            Ok(Ok(())) => {}
            Err(Ok(error)) => return Err(error),
            Ok(Err(_)) | Err(Err(_)) => return Err(VaultError::ClaimFailed),
        }

        let principal = Self::convert_rewards(&env, &config, amount)?;
        let shares = Self::supply_pool(&env, &config, principal)?;

        account.shares += shares;
        storage::set_account(&env, &account);

        env.events().publish(
            (symbol_short!("compound"),),
            CompoundEvent {
                cycle,
                reward: amount,
                principal,
                shares,
            },
        );

        Ok(shares)
    }


    // ==========================================================================
    // CORE LIFECYCLE - WITHDRAW
    // ==========================================================================

    /// Records a request to withdraw `amount` of principal, stamped with the
    /// current cycle. Replaces any pending request.
    ///
    /// # Errors
    /// - `NotOwner` if `caller` is not the owner
    /// - `InvalidAmount` if `amount` is not positive
    /// - `InsufficientBalance` if `amount` exceeds what the vault's shares
    ///   redeem for right now
    ///
    /// # Events
    /// Emits `WithdrawalRequestedEvent` under `("wd_req", owner)`.
    pub fn request_withdrawal(env: Env, caller: Address, amount: i128) -> Result<(), VaultError> {
        let account = Self::require_owner(&env, &caller)?;
        Self::require_positive_amount(amount)?;

        let config = storage::get_config(&env);
        let withdrawable = PoolClient::new(&env, &config.pool).preview_redeem(&account.shares);
        if amount > withdrawable {
            return Err(VaultError::InsufficientBalance);
        }

        let cycle = CycleClockClient::new(&env, &config.manager).current_cycle();
        let replaced = storage::get_withdrawal(&env)
            .filter(|request| request.active)
            .map_or(0, |request| request.amount);

        storage::set_withdrawal(
            &env,
            &WithdrawalRequest {
                amount,
                requested_at_cycle: cycle,
                active: true,
            },
        );

        env.events().publish(
            (symbol_short!("wd_req"), caller),
            WithdrawalRequestedEvent {
                amount,
                cycle,
                replaced,
            },
        );

        Ok(())
    }

    /// Releases `amount` of a pending withdrawal to the owner.
    ///
    /// Only possible once the cycle clock is strictly past the cycle the
    /// request was made in. A partial amount leaves the rest pending.
    ///
    /// # Returns
    /// The principal paid to the owner. Share rounding favours the owner, so
    /// this is at least `amount`.
    ///
    /// # Errors
    /// - `NotOwner` if `caller` is not the owner
    /// - `InvalidAmount` if `amount` is not positive
    /// - `WithdrawInsufficientBalance` if no pending request covers `amount`
    /// - `InvalidCycle` if the request's cycle has not closed yet
    /// - `InsufficientBalance` if the position no longer backs `amount`
    /// - `PoolFailed` if the pool rejects the redemption
    ///
    /// # Events
    /// Emits `WithdrawalExecutedEvent` under `("wd_exec", owner)`.
    ///
    /// # Security
    /// - The request, share and principal bookkeeping is committed before
    ///   the pool is called
    pub fn execute_withdrawal(env: Env, caller: Address, amount: i128) -> Result<i128, VaultError> {
        let mut account = Self::require_owner(&env, &caller)?;
        Self::require_positive_amount(amount)?;

        let mut request = match storage::get_withdrawal(&env) {
            Some(request) if request.active && amount <= request.amount => request,
            _ => return Err(VaultError::WithdrawInsufficientBalance),
        };

        let config = storage::get_config(&env);
        let current_cycle = CycleClockClient::new(&env, &config.manager).current_cycle();
        if current_cycle <= request.requested_at_cycle {
            return Err(VaultError::InvalidCycle);
        }

        let pool = PoolClient::new(&env, &config.pool);
        let shares = pool.preview_withdraw(&amount);
        if shares <= 0 || shares > account.shares {
            return Err(VaultError::InsufficientBalance);
        }

        request.amount -= amount;
        if request.amount == 0 {
            storage::clear_withdrawal(&env);
        } else {
            storage::set_withdrawal(&env, &request);
        }
        account.shares -= shares;
        account.principal = (account.principal - amount).max(0);
        storage::set_account(&env, &account);

        let released = match pool.try_redeem(&env.current_contract_address(), &caller, &shares) {
            Ok(Ok(released)) => released,
            _ => return Err(VaultError::PoolFailed),
        };

        env.events().publish(
            (symbol_short!("wd_exec"), caller),
            WithdrawalExecutedEvent {
                amount,
                shares,
                released,
                remaining: request.amount,
            },
        );

        Ok(released)
    }

    /// Drops the pending withdrawal request and returns its amount.
    ///
    /// # Errors
    /// - `NotOwner` if `caller` is not the owner
    /// - `WithdrawInsufficientBalance` if nothing is pending
    pub fn cancel_withdrawal(env: Env, caller: Address) -> Result<i128, VaultError> {
        Self::require_owner(&env, &caller)?;

        let request = match storage::get_withdrawal(&env) {
            Some(request) if request.active => request,
            _ => return Err(VaultError::WithdrawInsufficientBalance),
        };
        storage::clear_withdrawal(&env);

        env.events().publish(
            (symbol_short!("wd_cancel"), caller),
            WithdrawalCancelledEvent {
                amount: request.amount,
            },
        );

        Ok(request.amount)
    }


    // ==========================================================================
    // ADMINISTRATIVE - OWNERSHIP
    // ==========================================================================

    /// Hands the vault and its position to `new_owner`.
    ///
    /// A pending withdrawal belonged to the previous owner and is dropped.
    ///
    /// # Events
    /// Emits `OwnershipTransferredEvent` under `("owner",)`.
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), VaultError> {
        let mut account = Self::require_owner(&env, &caller)?;

        account.owner = new_owner.clone();
        storage::set_account(&env, &account);
        storage::clear_withdrawal(&env);

        env.events().publish(
            (symbol_short!("owner"),),
            OwnershipTransferredEvent {
                previous: caller,
                new_owner,
            },
        );

        Ok(())
    }


    // ==========================================================================
    // READ FUNCTIONS
    // ==========================================================================

    /// Returns the only address allowed to operate the vault.
    pub fn get_owner(env: Env) -> Address {
        storage::get_account(&env).owner
    }

    /// Returns the owner's position: net principal and pool shares.
    pub fn get_account(env: Env) -> DepositorAccount {
        storage::get_account(&env)
    }

    /// Returns the pending withdrawal, if any.
    pub fn get_withdrawal_request(env: Env) -> Option<WithdrawalRequest> {
        storage::get_withdrawal(&env).filter(|request| request.active)
    }

    /// Principal the vault's shares redeem for at the pool's current rate.
    /// Upper bound for `request_withdrawal`.
    pub fn withdrawable_balance(env: Env) -> i128 {
        let config = storage::get_config(&env);
        let shares = storage::get_account(&env).shares;
        PoolClient::new(&env, &config.pool).preview_redeem(&shares)
    }

    /// Returns the collaborator addresses fixed at construction.
    pub fn get_config(env: Env) -> VaultConfig {
        storage::get_config(&env)
    }


    // ==========================================================================
    // INTERNAL HELPERS
    // ==========================================================================

    /// Deposits `amount` of principal held by the vault into the pool and
    /// returns the pool's reported share delta.
    ///
    /// # Errors
    /// - `PoolFailed` if the pool rejects the deposit
    fn supply_pool(env: &Env, config: &VaultConfig, amount: i128) -> Result<i128, VaultError> {
        let this = env.current_contract_address();
        let pool = PoolClient::new(env, &config.pool);

        let before = pool.balance(&this);
        token::Client::new(env, &config.principal_token).approve(
            &this,
            &config.pool,
            &amount,
            &env.ledger().sequence(),
        );
        match pool.try_deposit(&this, &amount) {
            Ok(Ok(_)) => {}
            _ => return Err(VaultError::PoolFailed),
        }

        Ok(pool.balance(&this) - before)
    }

    /// Swaps `amount` of reward tokens held by the vault into principal.
    ///
    /// # Errors
    /// - `SwapFailed` if the router cannot fill the swap
    fn convert_rewards(env: &Env, config: &VaultConfig, amount: i128) -> Result<i128, VaultError> {
        let this = env.current_contract_address();

        token::Client::new(env, &config.reward_token).approve(
            &this,
            &config.router,
            &amount,
            &env.ledger().sequence(),
        );
        match SwapClient::new(env, &config.router).try_swap(&this, &amount) {
            Ok(Ok(principal)) => Ok(principal),
            _ => Err(VaultError::SwapFailed),
        }
    }

    /// Validates that `caller` is the owner and has authorized the call.
    /// Returns the account so callers can update it.
    ///
    /// # Errors
    /// - `NotOwner` if `caller` is not the owner
    #[inline]
    fn require_owner(env: &Env, caller: &Address) -> Result<DepositorAccount, VaultError> {
        caller.require_auth();

        let account = storage::get_account(env);
        if *caller != account.owner {
            return Err(VaultError::NotOwner);
        }
        Ok(account)
    }

    /// Validates that an amount is positive.
    ///
    /// # Errors
    /// - `InvalidAmount` if amount is <= 0
    #[inline]
    fn require_positive_amount(amount: i128) -> Result<(), VaultError> {
        if amount <= 0 {
            return Err(VaultError::InvalidAmount);
        }
        Ok(())
    }
}

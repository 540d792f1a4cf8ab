//! # Rewards Contract
//!
//! Pays out reward-token distributions authorised off-chain. For every
//! distribution cycle the distributor signs one typed-data message per
//! recipient:
//!
//! ```text
//! Recipient { chainId, cycle, wallet, amount }
//! ```
//!
//! scoped to a domain `{ name, version, chainId, verifyingContract }`. A
//! signature is only valid for this contract instance on this network, and
//! each (wallet, cycle) pair can be claimed at most once.
//!
//! ## Claim Flow
//!
//! ```text
//! Distributor signs Recipient off-chain
//!        ↓
//! Recipient (or a contract acting for itself) → [Rewards.claim()]
//!        ↓
//! amount > 0 → not yet claimed → signer recovered == trusted signer
//!        ↓
//! Claim record written, then reward token transferred
//! ClaimedEvent emitted
//! ```
//!
//! The trusted signer is an Ethereum-style 20-byte address derived from a
//! secp256k1 key. The admin can rotate it without redeploying.

#![no_std]

mod eip712;
mod signature;
mod storage;
mod types;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;


use soroban_sdk::{contract, contractimpl, symbol_short, token, Address, BytesN, Env, String};

pub use eip712::{DOMAIN_TYPE, RECIPIENT_TYPE};
pub use types::{ClaimSignature, ClaimedEvent, Domain, Recipient, RewardsError, SignerUpdatedEvent};

#[contract]
pub struct Rewards;

#[contractimpl]
impl Rewards {
    /// Configures the ledger and fixes its signing domain.
    ///
    /// The domain separator is derived here, once, from `name`, `version`,
    /// the ledger's network id and this contract's own address.
    ///
    /// # Panics
    /// - If `name` or `version` is longer than 64 bytes
    pub fn __constructor(
        env: Env,
        admin: Address,
        reward_token: Address,
        signer: BytesN<20>,
        name: String,
        version: String,
    ) {
        storage::set_admin(&env, &admin);
        storage::set_reward_token(&env, &reward_token);
        storage::set_signer(&env, &signer);

        let chain_id = env.ledger().network_id();
        let separator = eip712::domain_separator(
            &env,
            &name,
            &version,
            &chain_id,
            &env.current_contract_address(),
        );
        storage::set_domain(
            &env,
            &Domain {
                name,
                version,
                chain_id,
                separator,
            },
        );
    }

    // ==========================================================================
    // CLAIM
    // ==========================================================================

    /// Pays `amount` of the reward token to `recipient` for `cycle`, if the
    /// trusted signer authorised exactly that payout.
    ///
    /// # Arguments
    /// * `recipient` - The wallet being paid (must authorize)
    /// * `cycle` - Distribution cycle the payout belongs to
    /// * `amount` - Reward amount, as signed
    /// * `signature` - Distributor's signature over the typed-data digest
    ///
    /// # Errors
    /// - `InvalidAmount` if `amount` is not positive
    /// - `AlreadyClaimed` if (`recipient`, `cycle`) has already been paid
    /// - `InvalidSignature` if the signature is malformed or not from the signer
    /// - `InsufficientBalance` if the ledger holds less than `amount`
    ///
    /// # Events
    /// Emits `ClaimedEvent` under `("claimed", recipient)`.
    ///
    /// # Security
    /// - The claim record is written before the token transfer
    /// - Any failure leaves no record and moves no tokens
    pub fn claim(
        env: Env,
        recipient: Address,
        cycle: u64,
        amount: i128,
        signature: ClaimSignature,
    ) -> Result<(), RewardsError> {
        recipient.require_auth();

        if amount <= 0 {
            return Err(RewardsError::InvalidAmount);
        }
        if storage::is_claimed(&env, &recipient, cycle) {
            return Err(RewardsError::AlreadyClaimed);
        }

        let message = Recipient {
            chain_id: env.ledger().network_id(),
            cycle,
            wallet: recipient.clone(),
            amount,
        };
        let digest = eip712::typed_data_digest(&env, &storage::get_domain(&env).separator, &message);
        let recovered = signature::recover_signer(&env, &digest, &signature)?;
        if !signature::constant_time_eq(&recovered, &storage::get_signer(&env).to_array()) {
            return Err(RewardsError::InvalidSignature);
        }

        let token_client = token::Client::new(&env, &storage::get_reward_token(&env));
        let this = env.current_contract_address();
        if token_client.balance(&this) < amount {
            return Err(RewardsError::InsufficientBalance);
        }

        storage::set_claimed(&env, &recipient, cycle);
        token_client.transfer(&this, &recipient, &amount);

        env.events().publish(
            (symbol_short!("claimed"), recipient),
            ClaimedEvent { cycle, amount },
        );

        Ok(())
    }

    // ==========================================================================
    // ADMINISTRATIVE
    // ==========================================================================

    /// Rotates the trusted signer. Signatures from the previous signer stop
    /// verifying immediately.
    ///
    /// # Events
    /// Emits `SignerUpdatedEvent` under `("signer",)`.
    pub fn set_signer(env: Env, caller: Address, signer: BytesN<20>) -> Result<(), RewardsError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let old_signer = storage::get_signer(&env);
        storage::set_signer(&env, &signer);

        env.events().publish(
            (symbol_short!("signer"),),
            SignerUpdatedEvent {
                old_signer,
                new_signer: signer,
            },
        );
        Ok(())
    }

    /// Transfer admin to a new address. Admin-only.
    pub fn set_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), RewardsError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;
        storage::set_admin(&env, &new_admin);
        Ok(())
    }

    // ==========================================================================
    // READ FUNCTIONS
    // ==========================================================================

    /// Returns the EIP-712 domain separator fixed at construction.
    pub fn domain_separator(env: Env) -> BytesN<32> {
        storage::get_domain(&env).separator
    }

    /// Returns the signing domain: name, version, chain id and separator.
    pub fn domain(env: Env) -> Domain {
        storage::get_domain(&env)
    }

    /// The network id claims are currently verified against.
    pub fn chain_id(env: Env) -> BytesN<32> {
        env.ledger().network_id()
    }

    /// The digest the signer must sign to authorise paying `amount` to
    /// `wallet` for `cycle`.
    ///
    /// # Errors
    /// - `InvalidAmount` if `amount` is not positive
    pub fn claim_digest(
        env: Env,
        wallet: Address,
        cycle: u64,
        amount: i128,
    ) -> Result<BytesN<32>, RewardsError> {
        if amount <= 0 {
            return Err(RewardsError::InvalidAmount);
        }
        let message = Recipient {
            chain_id: env.ledger().network_id(),
            cycle,
            wallet,
            amount,
        };
        Ok(eip712::typed_data_digest(&env, &storage::get_domain(&env).separator, &message).to_bytes())
    }

    /// Whether `wallet` has already been paid for `cycle`.
    pub fn is_claimed(env: Env, wallet: Address, cycle: u64) -> bool {
        storage::is_claimed(&env, &wallet, cycle)
    }

    /// Returns the 20-byte address of the trusted distribution signer.
    pub fn get_signer(env: Env) -> BytesN<20> {
        storage::get_signer(&env)
    }

    /// Returns the address allowed to rotate the signer and admin.
    pub fn get_admin(env: Env) -> Address {
        storage::get_admin(&env)
    }

    /// Returns the token claims are paid in.
    pub fn get_reward_token(env: Env) -> Address {
        storage::get_reward_token(&env)
    }

    #[inline]
    fn require_admin(env: &Env, caller: &Address) -> Result<(), RewardsError> {
        if *caller != storage::get_admin(env) {
            return Err(RewardsError::NotOwner);
        }
        Ok(())
    }
}

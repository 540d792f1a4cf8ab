use soroban_sdk::{Address, BytesN, Env};

use crate::types::{DataKey, Domain};

/// Bump amount for storage entries (roughly 30 days in ledgers).
const LEDGER_BUMP: u32 = 518_400;
/// Threshold for bumping (roughly 15 days).
const LEDGER_THRESHOLD: u32 = 259_200;
/// Claim records must outlive any signature that could still be replayed,
/// so they are kept for roughly a year.
const CLAIM_BUMP: u32 = 6_307_200;

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD, LEDGER_BUMP);
}

// =============================================================================
// Admin / configuration
// =============================================================================

pub fn get_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("admin not set")
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    bump_instance(env);
}

pub fn get_reward_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::RewardToken)
        .expect("reward token not set")
}

pub fn set_reward_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::RewardToken, token);
    bump_instance(env);
}

pub fn get_signer(env: &Env) -> BytesN<20> {
    env.storage()
        .instance()
        .get(&DataKey::Signer)
        .expect("signer not set")
}

pub fn set_signer(env: &Env, signer: &BytesN<20>) {
    env.storage().instance().set(&DataKey::Signer, signer);
    bump_instance(env);
}

pub fn get_domain(env: &Env) -> Domain {
    env.storage()
        .instance()
        .get(&DataKey::Domain)
        .expect("domain not set")
}

pub fn set_domain(env: &Env, domain: &Domain) {
    env.storage().instance().set(&DataKey::Domain, domain);
    bump_instance(env);
}

// =============================================================================
// Claim records (persistent)
// =============================================================================

pub fn is_claimed(env: &Env, wallet: &Address, cycle: u64) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Claimed(wallet.clone(), cycle))
        .unwrap_or(false)
}

pub fn set_claimed(env: &Env, wallet: &Address, cycle: u64) {
    let key = DataKey::Claimed(wallet.clone(), cycle);
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD, CLAIM_BUMP);
}

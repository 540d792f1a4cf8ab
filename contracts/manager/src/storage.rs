use soroban_sdk::{Address, Env};

use crate::types::DataKey;

/// Bump amount for instance storage (roughly 30 days in ledgers).
const LEDGER_BUMP: u32 = 518_400;
/// Threshold for bumping (roughly 15 days).
const LEDGER_THRESHOLD: u32 = 259_200;

fn bump(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD, LEDGER_BUMP);
}

pub fn get_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("admin not set")
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    bump(env);
}

pub fn get_current_cycle(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CurrentCycle)
        .unwrap_or(0)
}

pub fn set_current_cycle(env: &Env, cycle: u64) {
    env.storage().instance().set(&DataKey::CurrentCycle, &cycle);
    bump(env);
}

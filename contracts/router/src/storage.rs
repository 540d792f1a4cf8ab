use soroban_sdk::{Address, Env, IntoVal, Val};

use crate::types::{DataKey, Rate};

/// Bump amount for instance storage (roughly 30 days in ledgers).
const LEDGER_BUMP: u32 = 518_400;
/// Threshold for bumping (roughly 15 days).
const LEDGER_THRESHOLD: u32 = 259_200;

fn get_address(env: &Env, key: &DataKey) -> Address {
    env.storage()
        .instance()
        .get(key)
        .expect("router not configured")
}

fn set<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().instance().set(key, value);
    env.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD, LEDGER_BUMP);
}

pub fn get_admin(env: &Env) -> Address {
    get_address(env, &DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    set(env, &DataKey::Admin, admin);
}

pub fn get_token_in(env: &Env) -> Address {
    get_address(env, &DataKey::TokenIn)
}

pub fn set_token_in(env: &Env, token: &Address) {
    set(env, &DataKey::TokenIn, token);
}

pub fn get_token_out(env: &Env) -> Address {
    get_address(env, &DataKey::TokenOut)
}

pub fn set_token_out(env: &Env, token: &Address) {
    set(env, &DataKey::TokenOut, token);
}

pub fn get_rate(env: &Env) -> Rate {
    env.storage()
        .instance()
        .get(&DataKey::Rate)
        .expect("rate not set")
}

pub fn set_rate(env: &Env, rate: &Rate) {
    set(env, &DataKey::Rate, rate);
}

use soroban_sdk::Env;

use crate::types::{DepositorAccount, VaultConfig, WithdrawalRequest};
use crate::DataKey;

/// Bump amount for instance storage (roughly 30 days in ledgers).
const LEDGER_BUMP: u32 = 518_400;
/// Threshold for bumping (roughly 15 days).
const LEDGER_THRESHOLD: u32 = 259_200;

fn bump(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD, LEDGER_BUMP);
}

pub fn get_config(env: &Env) -> VaultConfig {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("config not set")
}

pub fn set_config(env: &Env, config: &VaultConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump(env);
}

pub fn get_account(env: &Env) -> DepositorAccount {
    env.storage()
        .instance()
        .get(&DataKey::Account)
        .expect("account not set")
}

pub fn set_account(env: &Env, account: &DepositorAccount) {
    env.storage().instance().set(&DataKey::Account, account);
    bump(env);
}

pub fn get_withdrawal(env: &Env) -> Option<WithdrawalRequest> {
    env.storage().instance().get(&DataKey::Withdrawal)
}

pub fn set_withdrawal(env: &Env, request: &WithdrawalRequest) {
    env.storage().instance().set(&DataKey::Withdrawal, request);
    bump(env);
}

pub fn clear_withdrawal(env: &Env) {
    env.storage().instance().remove(&DataKey::Withdrawal);
}

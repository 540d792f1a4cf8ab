extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token::{StellarAssetClient, TokenClient},
    Address, Env, IntoVal, Symbol,
};

use crate::{Pool, PoolClient, PoolDepositEvent, PoolError};

/// Returns (env, pool_client, underlying_address, underlying_admin_client).
fn setup_env() -> (Env, PoolClient<'static>, Address, StellarAssetClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let token_admin = Address::generate(&env);
    let underlying = env
        .register_stellar_asset_contract_v2(token_admin)
        .address();
    let underlying_admin = StellarAssetClient::new(&env, &underlying);

    let pool_id = env.register(Pool, (&underlying,));
    let client = PoolClient::new(&env, &pool_id);

    (env, client, underlying, underlying_admin)
}

fn funded_depositor(
    env: &Env,
    client: &PoolClient,
    underlying: &Address,
    admin: &StellarAssetClient,
    amount: i128,
) -> Address {
    let depositor = Address::generate(env);
    admin.mint(&depositor, &amount);
    TokenClient::new(env, underlying).approve(
        &depositor,
        &client.address,
        &amount,
        &env.ledger().sequence(),
    );
    depositor
}

// =============================================================================
// Deposit
// =============================================================================

#[test]
fn test_first_deposit_mints_one_to_one() {
    let (env, client, underlying, admin) = setup_env();
    let alice = funded_depositor(&env, &client, &underlying, &admin, 1_000);

    assert_eq!(client.deposit(&alice, &1_000), 1_000);
    assert_eq!(client.balance(&alice), 1_000);
    assert_eq!(client.total_shares(), 1_000);
    assert_eq!(client.total_assets(), 1_000);
    assert_eq!(TokenClient::new(&env, &underlying).balance(&alice), 0);
}

#[test]
fn test_deposit_after_rate_change_is_proportional() {
    let (env, client, underlying, admin) = setup_env();
    let alice = funded_depositor(&env, &client, &underlying, &admin, 1_000);
    client.deposit(&alice, &1_000);

    // Yield lands in the pool without new shares: 1 share = 2 underlying.
    admin.mint(&client.address, &1_000);

    let bob = funded_depositor(&env, &client, &underlying, &admin, 500);
    assert_eq!(client.deposit(&bob, &500), 250);
    assert_eq!(client.preview_redeem(&250), 500);
    assert_eq!(client.preview_redeem(&1_000), 2_000);
}

#[test]
fn test_deposit_emits_event() {
    let (env, client, underlying, admin) = setup_env();
    let alice = funded_depositor(&env, &client, &underlying, &admin, 300);

    client.deposit(&alice, &300);

    let (_, topics, data) = env
        .events()
        .all()
        .iter()
        .rev()
        .find(|(contract, _, _)| *contract == client.address)
        .expect("deposit event");
    let topic: Symbol = topics.get(0).unwrap().into_val(&env);
    let who: Address = topics.get(1).unwrap().into_val(&env);
    assert_eq!(topic, symbol_short!("deposit"));
    assert_eq!(who, alice);

    let event: PoolDepositEvent = data.into_val(&env);
    assert_eq!(event, PoolDepositEvent { amount: 300, shares: 300 });
}

#[test]
fn test_deposit_rejects_non_positive_amount() {
    let (env, client, _, _) = setup_env();
    let alice = Address::generate(&env);

    assert_eq!(client.try_deposit(&alice, &0), Err(Ok(PoolError::InvalidAmount)));
    assert_eq!(client.try_deposit(&alice, &-5), Err(Ok(PoolError::InvalidAmount)));
}

#[test]
fn test_deposit_too_small_for_a_share() {
    let (env, client, underlying, admin) = setup_env();
    let alice = funded_depositor(&env, &client, &underlying, &admin, 10);
    client.deposit(&alice, &10);
    admin.mint(&client.address, &990);

    // 1 share = 100 underlying now.
    let bob = funded_depositor(&env, &client, &underlying, &admin, 50);
    assert_eq!(client.try_deposit(&bob, &50), Err(Ok(PoolError::ZeroShares)));
}

// =============================================================================
// Redeem
// =============================================================================

#[test]
fn test_redeem_pays_receiver() {
    let (env, client, underlying, admin) = setup_env();
    let alice = funded_depositor(&env, &client, &underlying, &admin, 1_000);
    let receiver = Address::generate(&env);
    client.deposit(&alice, &1_000);

    assert_eq!(client.redeem(&alice, &receiver, &400), 400);
    assert_eq!(client.balance(&alice), 600);
    assert_eq!(client.total_shares(), 600);
    assert_eq!(TokenClient::new(&env, &underlying).balance(&receiver), 400);
}

#[test]
fn test_redeem_more_than_held() {
    let (env, client, underlying, admin) = setup_env();
    let alice = funded_depositor(&env, &client, &underlying, &admin, 100);
    client.deposit(&alice, &100);

    assert_eq!(
        client.try_redeem(&alice, &alice, &101),
        Err(Ok(PoolError::InsufficientBalance))
    );
    assert_eq!(client.try_redeem(&alice, &alice, &0), Err(Ok(PoolError::InvalidAmount)));
    assert_eq!(client.balance(&alice), 100);
}

#[test]
fn test_preview_withdraw_rounds_up() {
    let (env, client, underlying, admin) = setup_env();
    let alice = funded_depositor(&env, &client, &underlying, &admin, 300);
    client.deposit(&alice, &300);
    admin.mint(&client.address, &100);

    // 300 shares back 400 underlying.
    assert_eq!(client.preview_withdraw(&400), 300);
    assert_eq!(client.preview_withdraw(&100), 75);
    assert_eq!(client.preview_withdraw(&101), 76);
    assert!(client.preview_redeem(&client.preview_withdraw(&101)) >= 101);
}

#[test]
fn test_empty_pool_previews() {
    let (_env, client, _, _) = setup_env();

    assert_eq!(client.preview_deposit(&50), 50);
    assert_eq!(client.preview_withdraw(&50), 50);
    assert_eq!(client.preview_redeem(&50), 0);
}

extern crate std;

use soroban_sdk::{testutils::Address as _, token, Address, Env, String};

use crate::escrow::{net_of_fee, platform_fee};
use crate::{Error, TaskBoard, TaskBoardClient};

fn setup() -> (
    Env,
    TaskBoardClient<'static>,
    token::Client<'static>,
    token::StellarAssetClient<'static>,
    Address,
) {
    let env = Env::default();
    env.mock_all_auths();

    let deployer = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(token_admin);
    let token_client = token::Client::new(&env, &sac.address());
    let token_sac = token::StellarAssetClient::new(&env, &sac.address());

    let contract_id = env.register(TaskBoard, ());
    let client = TaskBoardClient::new(&env, &contract_id);
    client.initialize(&token_client.address, &deployer);

    (env, client, token_client, token_sac, deployer)
}

fn create_task(
    env: &Env,
    client: &TaskBoardClient,
    token_sac: &token::StellarAssetClient,
    creator: &Address,
    amount: i128,
) -> u64 {
    token_sac.mint(creator, &amount);
    client.create_task(
        creator,
        &String::from_str(env, "Task"),
        &String::from_str(env, "Description"),
        &None,
        &amount,
        &(env.ledger().timestamp() + 86_400),
    )
}

#[test]
fn fee_math_floors() {
    assert_eq!(platform_fee(100), 3);
    assert_eq!(platform_fee(101), 3);
    assert_eq!(platform_fee(133), 3);
    assert_eq!(platform_fee(134), 4);
    assert_eq!(platform_fee(1), 0);
    assert_eq!(platform_fee(33), 0);
    assert_eq!(platform_fee(34), 1);
    assert_eq!(net_of_fee(100), 97);
    assert_eq!(net_of_fee(101), 98);
    assert_eq!(net_of_fee(1), 1);
}

#[test]
fn fees_accrue_per_creation() {
    let (env, client, _token, sac, _deployer) = setup();
    let creator = Address::generate(&env);

    assert_eq!(client.get_platform_fees(), 0);
    create_task(&env, &client, &sac, &creator, 100_000);
    assert_eq!(client.get_platform_fees(), 3_000);
    create_task(&env, &client, &sac, &creator, 101);
    assert_eq!(client.get_platform_fees(), 3_003);
    create_task(&env, &client, &sac, &creator, 33);
    // Small amounts floor to a zero fee; accumulator unchanged.
    assert_eq!(client.get_platform_fees(), 3_003);
}

#[test]
fn withdraw_transfers_exact_accumulator_and_resets() {
    let (env, client, token, sac, deployer) = setup();
    let creator = Address::generate(&env);
    create_task(&env, &client, &sac, &creator, 200_000);
    create_task(&env, &client, &sac, &creator, 300_000);

    let accrued = client.get_platform_fees();
    assert_eq!(accrued, 15_000);

    client.withdraw_platform_fees(&deployer);
    assert_eq!(token.balance(&deployer), accrued);
    assert_eq!(client.get_platform_fees(), 0);

    // Nothing left to withdraw.
    assert_eq!(
        client.try_withdraw_platform_fees(&deployer),
        Err(Ok(Error::InvalidState))
    );
    assert_eq!(token.balance(&deployer), accrued);
}

#[test]
fn withdraw_requires_deployer() {
    let (env, client, token, sac, _deployer) = setup();
    let creator = Address::generate(&env);
    create_task(&env, &client, &sac, &creator, 100_000);

    let intruder = Address::generate(&env);
    assert_eq!(
        client.try_withdraw_platform_fees(&intruder),
        Err(Ok(Error::NotAuthorized))
    );
    assert_eq!(client.get_platform_fees(), 3_000);
    assert_eq!(token.balance(&intruder), 0);
}

#[test]
fn fees_survive_refund_paths() {
    let (env, client, token, sac, deployer) = setup();
    let creator = Address::generate(&env);
    let amount = 100_000i128;

    // Cancelled task: creator gets net back, fee stays withdrawable.
    let task_id = create_task(&env, &client, &sac, &creator, amount);
    client.cancel_task(&creator, &task_id);
    assert_eq!(token.balance(&creator), net_of_fee(amount));
    assert_eq!(client.get_platform_fees(), platform_fee(amount));

    client.withdraw_platform_fees(&deployer);
    assert_eq!(token.balance(&deployer), platform_fee(amount));
    // Contract custody is now empty: net refunded, fee withdrawn.
    assert_eq!(token.balance(&client.address), 0);
}

#[test]
fn custody_balances_match_obligations_across_mixed_outcomes() {
    let (env, client, token, sac, deployer) = setup();
    let creator = Address::generate(&env);
    let worker = Address::generate(&env);

    let released = create_task(&env, &client, &sac, &creator, 400_000);
    let cancelled = create_task(&env, &client, &sac, &creator, 250_000);
    let _open = create_task(&env, &client, &sac, &creator, 150_000);

    client.assign_task(&creator, &released, &worker);
    client.complete_task(&worker, &released);
    client.release_funds(&creator, &released);
    client.cancel_task(&creator, &cancelled);

    let fee_total = platform_fee(400_000) + platform_fee(250_000) + platform_fee(150_000);
    assert_eq!(client.get_platform_fees(), fee_total);
    assert_eq!(token.balance(&worker), net_of_fee(400_000));
    assert_eq!(token.balance(&creator), net_of_fee(250_000));

    // Contract still holds the open task's net plus all fees.
    assert_eq!(
        token.balance(&client.address),
        net_of_fee(150_000) + fee_total
    );

    client.withdraw_platform_fees(&deployer);
    assert_eq!(token.balance(&deployer), fee_total);
    assert_eq!(token.balance(&client.address), net_of_fee(150_000));
}

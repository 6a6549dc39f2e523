extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{FeesWithdrawn, FundsReleased, TaskAssigned, TaskCreated, UserRegistered};
use crate::{TaskBoard, TaskBoardClient};

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
    deadline: u64,
) -> u64 {
    token_sac.mint(creator, &amount);
    client.create_task(
        creator,
        &String::from_str(env, "Task"),
        &String::from_str(env, "Description"),
        &None,
        &amount,
        &deadline,
    )
}

#[test]
fn task_created_event() {
    let (env, client, _token, sac, _deployer) = setup();
    let creator = Address::generate(&env);
    let amount = 100_000i128;
    let deadline = env.ledger().timestamp() + 86_400;

    let task_id = create_task(&env, &client, &sac, &creator, amount, deadline);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("created"), task_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("created").into_val(&env),
        task_id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: TaskCreated struct
    let event_data: TaskCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        TaskCreated {
            task_id,
            creator: creator.clone(),
            funding_amount: amount,
            fee: 3_000,
            deadline,
        }
    );
}

#[test]
fn task_assigned_event() {
    let (env, client, _token, sac, _deployer) = setup();
    let creator = Address::generate(&env);
    let assignee = Address::generate(&env);
    let task_id = create_task(
        &env,
        &client,
        &sac,
        &creator,
        100_000,
        env.ledger().timestamp() + 86_400,
    );

    client.assign_task(&creator, &task_id, &assignee);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("assigned").into_val(&env),
        task_id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: TaskAssigned = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        TaskAssigned {
            task_id,
            assignee: assignee.clone(),
        }
    );
}

#[test]
fn funds_released_event_carries_net_amount() {
    let (env, client, _token, sac, _deployer) = setup();
    let creator = Address::generate(&env);
    let assignee = Address::generate(&env);
    let task_id = create_task(
        &env,
        &client,
        &sac,
        &creator,
        100_000,
        env.ledger().timestamp() + 86_400,
    );

    client.assign_task(&creator, &task_id, &assignee);
    client.complete_task(&assignee, &task_id);
    client.release_funds(&creator, &task_id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("released").into_val(&env),
        task_id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundsReleased = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FundsReleased {
            task_id,
            assignee: assignee.clone(),
            amount: 97_000,
        }
    );
}

#[test]
fn fees_withdrawn_event() {
    let (env, client, _token, sac, deployer) = setup();
    let creator = Address::generate(&env);
    create_task(
        &env,
        &client,
        &sac,
        &creator,
        100_000,
        env.ledger().timestamp() + 86_400,
    );

    client.withdraw_platform_fees(&deployer);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("withdrawn").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FeesWithdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FeesWithdrawn {
            deployer: deployer.clone(),
            amount: 3_000,
        }
    );
}

#[test]
fn user_registered_event() {
    let (env, client, _token, _sac, _deployer) = setup();
    let user = Address::generate(&env);
    let username = String::from_str(&env, "alice");

    client.register_user(&user, &username);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("user_reg").into_val(&env),
        user.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: UserRegistered = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        UserRegistered {
            user: user.clone(),
            username,
        }
    );
}

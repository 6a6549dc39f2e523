//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by TaskBoard:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key            | Type      | Description                           |
//! |----------------|-----------|---------------------------------------|
//! | `TaskCounter`  | `u64`     | Last assigned task ID (0 = none yet)  |
//! | `Token`        | `Address` | Payment asset fixed at initialization |
//! | `Deployer`     | `Address` | Fee-withdrawal principal              |
//! | `PlatformFees` | `i128`    | Accumulated platform fees             |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                  | Type                   | Description                     |
//! |----------------------|------------------------|---------------------------------|
//! | `TaskConf(id)`       | `TaskConfig`           | Immutable task configuration    |
//! | `TaskState(id)`      | `TaskState`            | Mutable task state              |
//! | `Applications(id)`   | `Vec<TaskApplication>` | Applications for an open task   |
//! | `Profile(address)`   | `UserProfile`          | Registered username             |
//! | `CreatedTasks(addr)` | `Vec<u64>`             | IDs of tasks created by `addr`  |
//! | `AssignedTasks(addr)`| `Vec<u64>`             | IDs of tasks assigned to `addr` |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining.
//!
//! ## Why split TaskConfig and TaskState?
//!
//! Lifecycle transitions are the frequent writes. Rewriting the full task
//! struct — title, description, link — on every `start`/`complete`/`release`
//! is wasteful; the state entry is a handful of bytes.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{Task, TaskApplication, TaskConfig, TaskState, UserProfile};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
///
/// Instance-tier keys live as long as the contract and are extended
/// together. Persistent-tier keys hold per-task and per-address data with
/// independent TTLs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Last assigned task ID (Instance).
    TaskCounter,
    /// Payment token address (Instance).
    Token,
    /// Deployer / fee-withdrawal principal (Instance).
    Deployer,
    /// Accumulated platform fees (Instance).
    PlatformFees,
    /// Immutable task configuration keyed by ID (Persistent).
    TaskConf(u64),
    /// Mutable task state keyed by ID (Persistent).
    TaskState(u64),
    /// Applications for an open task keyed by ID (Persistent).
    Applications(u64),
    /// Registered user profile keyed by address (Persistent).
    Profile(Address),
    /// Append-only index of task IDs created by an address (Persistent).
    CreatedTasks(Address),
    /// Index of task IDs assigned to an address (Persistent).
    AssignedTasks(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// `true` once `initialize` has run.
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Token)
}

/// Write the bootstrap scalars fixed for the contract's lifetime.
pub fn init_instance(env: &Env, token: &Address, deployer: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    env.storage().instance().set(&DataKey::Deployer, deployer);
    env.storage().instance().set(&DataKey::TaskCounter, &0u64);
    env.storage().instance().set(&DataKey::PlatformFees, &0i128);
    bump_instance(env);
}

/// Atomically increments and stores the task counter.
/// Returns the ID to use for the *current* task (post-increment value, so
/// the first task gets 1).
pub fn get_and_increment_task_id(env: &Env) -> u64 {
    bump_instance(env);
    let last: u64 = env
        .storage()
        .instance()
        .get(&DataKey::TaskCounter)
        .unwrap_or(0);
    let id = last + 1;
    env.storage().instance().set(&DataKey::TaskCounter, &id);
    id
}

/// Total number of tasks ever created.
pub fn get_task_count(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::TaskCounter)
        .unwrap_or(0)
}

/// Retrieve the payment token address.
/// Panics if the contract has not been initialized.
pub fn get_token(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .expect("token not set")
}

/// Retrieve the deployer address captured at initialization.
pub fn get_deployer(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Deployer)
        .expect("deployer not set")
}

/// Current accumulated platform fees.
pub fn get_platform_fees(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::PlatformFees)
        .unwrap_or(0)
}

/// Overwrite the platform fee accumulator.
pub fn set_platform_fees(env: &Env, fees: &i128) {
    env.storage().instance().set(&DataKey::PlatformFees, fees);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// `true` if a task with this ID exists.
pub fn has_task(env: &Env, id: u64) -> bool {
    env.storage().persistent().has(&DataKey::TaskConf(id))
}

/// Save both the immutable config and initial mutable state for a new task.
pub fn save_task(env: &Env, config: &TaskConfig, state: &TaskState) {
    let config_key = DataKey::TaskConf(config.id);
    let state_key = DataKey::TaskState(config.id);
    env.storage().persistent().set(&config_key, config);
    env.storage().persistent().set(&state_key, state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

/// Load the full `Task` by combining config and state.
/// Returns `None` if the task does not exist.
pub fn try_load_task(env: &Env, id: u64) -> Option<Task> {
    let config = try_load_task_config(env, id)?;
    let state = try_load_task_state(env, id)?;
    Some(Task {
        id: config.id,
        title: config.title,
        description: config.description,
        github_link: config.github_link,
        funding_amount: config.funding_amount,
        deadline: config.deadline,
        creator: config.creator,
        assignee: state.assignee,
        status: state.status,
        created_at: config.created_at,
        completed_at: state.completed_at,
        creator_approved: state.creator_approved,
        assignee_approved: state.assignee_approved,
    })
}

/// Load only the immutable task configuration.
pub fn try_load_task_config(env: &Env, id: u64) -> Option<TaskConfig> {
    let key = DataKey::TaskConf(id);
    let config: Option<TaskConfig> = env.storage().persistent().get(&key);
    if config.is_some() {
        bump_persistent(env, &key);
    }
    config
}

/// Load only the mutable task state.
pub fn try_load_task_state(env: &Env, id: u64) -> Option<TaskState> {
    let key = DataKey::TaskState(id);
    let state: Option<TaskState> = env.storage().persistent().get(&key);
    if state.is_some() {
        bump_persistent(env, &key);
    }
    state
}

/// Save only the mutable task state (the common lifecycle write).
pub fn save_task_state(env: &Env, id: u64, state: &TaskState) {
    let key = DataKey::TaskState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

/// Applications recorded for a task; empty when none were made.
pub fn load_applications(env: &Env, id: u64) -> Vec<TaskApplication> {
    let key = DataKey::Applications(id);
    let apps: Option<Vec<TaskApplication>> = env.storage().persistent().get(&key);
    match apps {
        Some(apps) => {
            bump_persistent(env, &key);
            apps
        }
        None => Vec::new(env),
    }
}

/// Overwrite the application list for a task.
pub fn save_applications(env: &Env, id: u64, apps: &Vec<TaskApplication>) {
    let key = DataKey::Applications(id);
    env.storage().persistent().set(&key, apps);
    bump_persistent(env, &key);
}

/// Registered profile for an address, if any.
pub fn load_profile(env: &Env, address: &Address) -> Option<UserProfile> {
    let key = DataKey::Profile(address.clone());
    let profile: Option<UserProfile> = env.storage().persistent().get(&key);
    if profile.is_some() {
        bump_persistent(env, &key);
    }
    profile
}

/// Store a newly registered profile.
pub fn save_profile(env: &Env, profile: &UserProfile) {
    let key = DataKey::Profile(profile.address.clone());
    env.storage().persistent().set(&key, profile);
    bump_persistent(env, &key);
}

/// Task IDs created by an address; empty for unknown addresses.
pub fn load_created_tasks(env: &Env, address: &Address) -> Vec<u64> {
    load_index(env, DataKey::CreatedTasks(address.clone()))
}

/// Append a task ID to an address's created-task index.
pub fn push_created_task(env: &Env, address: &Address, id: u64) {
    push_index(env, DataKey::CreatedTasks(address.clone()), id);
}

/// Task IDs assigned to an address; empty for unknown addresses.
pub fn load_assigned_tasks(env: &Env, address: &Address) -> Vec<u64> {
    load_index(env, DataKey::AssignedTasks(address.clone()))
}

/// Append a task ID to an address's assigned-task index.
pub fn push_assigned_task(env: &Env, address: &Address, id: u64) {
    push_index(env, DataKey::AssignedTasks(address.clone()), id);
}

/// Remove a task ID from an address's assigned-task index (reassignment).
pub fn remove_assigned_task(env: &Env, address: &Address, id: u64) {
    let key = DataKey::AssignedTasks(address.clone());
    let mut ids: Vec<u64> = env.storage().persistent().get(&key).unwrap_or(Vec::new(env));
    if let Some(pos) = ids.iter().position(|v| v == id) {
        ids.remove(pos as u32);
        env.storage().persistent().set(&key, &ids);
        bump_persistent(env, &key);
    }
}

fn load_index(env: &Env, key: DataKey) -> Vec<u64> {
    let ids: Option<Vec<u64>> = env.storage().persistent().get(&key);
    match ids {
        Some(ids) => {
            bump_persistent(env, &key);
            ids
        }
        None => Vec::new(env),
    }
}

fn push_index(env: &Env, key: DataKey, id: u64) {
    let mut ids: Vec<u64> = env.storage().persistent().get(&key).unwrap_or(Vec::new(env));
    ids.push_back(id);
    env.storage().persistent().set(&key, &ids);
    bump_persistent(env, &key);
}

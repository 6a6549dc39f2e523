//! # Events
//!
//! Payload structs published by the contract. Each event goes out under a
//! `(symbol_short!(topic), subject_id)` topic pair with one of these structs
//! as data, so off-chain consumers (the indexer) can decode without custom
//! XDR walking.
//!
//! Topics: `created`, `applied`, `assigned`, `started`, `completed`,
//! `released`, `cancelled`, `expired`, `reclaimed`, `reassign`, `withdrawn`,
//! `user_reg`.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

/// `created` — a new task was funded and opened for applications.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaskCreated {
    pub task_id: u64,
    pub creator: Address,
    pub funding_amount: i128,
    pub fee: i128,
    pub deadline: u64,
}

/// `applied` — an applicant registered interest in an open task.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaskApplied {
    pub task_id: u64,
    pub applicant: Address,
}

/// `assigned` — the creator assigned the task.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaskAssigned {
    pub task_id: u64,
    pub assignee: Address,
}

/// `started` — the assignee began work.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaskStarted {
    pub task_id: u64,
    pub assignee: Address,
}

/// `completed` — the assignee attested completion (signature #1).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaskCompleted {
    pub task_id: u64,
    pub assignee: Address,
    pub completed_at: u64,
}

/// `released` — the creator approved and the net escrow was paid out
/// (signature #2).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsReleased {
    pub task_id: u64,
    pub assignee: Address,
    pub amount: i128,
}

/// `cancelled` — the creator cancelled; net escrow refunded.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaskCancelled {
    pub task_id: u64,
    pub creator: Address,
    pub refund: i128,
}

/// `expired` — the deadline passed before completion.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaskExpired {
    pub task_id: u64,
}

/// `reclaimed` — the creator reclaimed the net escrow of an expired task.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsReclaimed {
    pub task_id: u64,
    pub creator: Address,
    pub refund: i128,
}

/// `reassign` — an expired task went back to `Assigned` with a new assignee.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaskReassigned {
    pub task_id: u64,
    pub new_assignee: Address,
}

/// `withdrawn` — the deployer withdrew the fee accumulator.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesWithdrawn {
    pub deployer: Address,
    pub amount: i128,
}

/// `user_reg` — a username was permanently bound to an address.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserRegistered {
    pub user: Address,
    pub username: String,
}

pub fn task_created(env: &Env, data: TaskCreated) {
    env.events()
        .publish((symbol_short!("created"), data.task_id), data);
}

pub fn task_applied(env: &Env, data: TaskApplied) {
    env.events()
        .publish((symbol_short!("applied"), data.task_id), data);
}

pub fn task_assigned(env: &Env, data: TaskAssigned) {
    env.events()
        .publish((symbol_short!("assigned"), data.task_id), data);
}

pub fn task_started(env: &Env, data: TaskStarted) {
    env.events()
        .publish((symbol_short!("started"), data.task_id), data);
}

pub fn task_completed(env: &Env, data: TaskCompleted) {
    env.events()
        .publish((symbol_short!("completed"), data.task_id), data);
}

pub fn funds_released(env: &Env, data: FundsReleased) {
    env.events()
        .publish((symbol_short!("released"), data.task_id), data);
}

pub fn task_cancelled(env: &Env, data: TaskCancelled) {
    env.events()
        .publish((symbol_short!("cancelled"), data.task_id), data);
}

pub fn task_expired(env: &Env, data: TaskExpired) {
    env.events()
        .publish((symbol_short!("expired"), data.task_id), data);
}

pub fn funds_reclaimed(env: &Env, data: FundsReclaimed) {
    env.events()
        .publish((symbol_short!("reclaimed"), data.task_id), data);
}

pub fn task_reassigned(env: &Env, data: TaskReassigned) {
    env.events()
        .publish((symbol_short!("reassign"), data.task_id), data);
}

pub fn fees_withdrawn(env: &Env, data: FeesWithdrawn) {
    env.events()
        .publish((symbol_short!("withdrawn"),), data);
}

pub fn user_registered(env: &Env, data: UserRegistered) {
    env.events()
        .publish((symbol_short!("user_reg"), data.user.clone()), data);
}

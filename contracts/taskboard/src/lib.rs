//! # TaskBoard Contract
//!
//! This is the root crate of the **TaskBoard** escrowed task board. It
//! exposes the single Soroban contract `TaskBoard` whose entry points cover
//! the full task lifecycle:
//!
//! | Phase       | Entry Point(s)                                          |
//! |-------------|---------------------------------------------------------|
//! | Bootstrap   | [`TaskBoard::initialize`]                               |
//! | Creation    | [`TaskBoard::create_task`]                              |
//! | Matching    | `apply_for_task`, `assign_to_applicant`, `assign_task`  |
//! | Execution   | `start_task`, `complete_task`                           |
//! | Settlement  | `release_funds`, `cancel_task`                          |
//! | Expiry      | `mark_expired`, `reclaim_expired_funds`, `reassign_task`|
//! | Registry    | `register_user`, `get_user_profile`                     |
//! | Fees        | `get_platform_fees`, `withdraw_platform_fees`           |
//! | Queries     | `get_task`, `get_task_applications`, `get_user_tasks`, `get_assigned_tasks`, `get_task_count` |
//!
//! ## Architecture
//!
//! Principal checks are delegated to [`guard`], custody and fee accounting
//! to [`escrow`], and storage access to [`storage`]. This file holds the
//! public entry points, the state-machine checks, and event emissions.
//!
//! Every entry point runs as one atomic host invocation: an `Err` return
//! fails the invocation and reverts all storage writes and token transfers,
//! so a failed validation or transfer leaves no partial state behind.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String, Vec};

mod escrow;
mod events;
mod guard;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_escrow;
#[cfg(test)]
mod test_events;

use storage::{get_and_increment_task_id, save_task, save_task_state};
use types::{TaskConfig, TaskState};

pub use types::{Task, TaskApplication, TaskStatus, UserProfile};

/// Applications accepted per task before further `apply_for_task` calls are
/// rejected; keeps the per-task list bounded.
pub const MAX_APPLICATIONS_PER_TASK: u32 = 100;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Task, profile, or application does not exist.
    NotFound = 1,
    /// Caller does not match the required principal.
    NotAuthorized = 2,
    /// Operation not valid for the task's current status.
    InvalidState = 3,
    /// Empty text, non-positive amount, or non-future deadline.
    InvalidInput = 4,
    /// Double `initialize`, double `register_user`, or duplicate application.
    AlreadyExists = 5,
    /// `mark_expired` called before the deadline.
    NotExpiredYet = 6,
    /// The payment token rejected a debit or credit.
    TransferFailed = 7,
    /// `start_task`/`complete_task` called after the deadline.
    TaskExpired = 8,
}

#[contract]
pub struct TaskBoard;

#[contractimpl]
impl TaskBoard {
    // ─────────────────────────────────────────────────────────
    // Bootstrap
    // ─────────────────────────────────────────────────────────

    /// Initialize the contract, fixing the payment token and the
    /// fee-withdrawal principal for its lifetime.
    ///
    /// Must be called exactly once after deployment. Subsequent calls fail
    /// with `Error::AlreadyExists`.
    pub fn initialize(env: Env, token: Address, deployer: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyExists);
        }
        storage::init_instance(&env, &token, &deployer);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Task lifecycle
    // ─────────────────────────────────────────────────────────

    /// Create a new escrowed task, open for applications.
    ///
    /// Debits `funding_amount` (gross) from `creator` into contract custody
    /// and accrues the 3% platform fee immediately; the remainder is the
    /// amount later paid out or refunded. Returns the new task's ID.
    pub fn create_task(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        github_link: Option<String>,
        funding_amount: i128,
        deadline: u64,
    ) -> Result<u64, Error> {
        creator.require_auth();

        if title.is_empty() || description.is_empty() || funding_amount <= 0 {
            return Err(Error::InvalidInput);
        }
        if deadline <= env.ledger().timestamp() {
            return Err(Error::InvalidInput);
        }

        let id = get_and_increment_task_id(&env);
        let now = env.ledger().timestamp();

        let fee = escrow::collect(&env, &creator, funding_amount)?;

        let config = TaskConfig {
            id,
            title,
            description,
            github_link,
            funding_amount,
            deadline,
            creator: creator.clone(),
            created_at: now,
        };
        let state = TaskState {
            assignee: None,
            status: TaskStatus::Created,
            completed_at: None,
            creator_approved: false,
            assignee_approved: false,
        };
        save_task(&env, &config, &state);
        storage::push_created_task(&env, &creator, id);

        events::task_created(
            &env,
            events::TaskCreated {
                task_id: id,
                creator,
                funding_amount,
                fee,
                deadline,
            },
        );
        Ok(id)
    }

    /// Register interest in an open task. Valid only while the task is in
    /// `Created`; one application per address, capped per task.
    pub fn apply_for_task(
        env: Env,
        applicant: Address,
        task_id: u64,
        message: String,
    ) -> Result<(), Error> {
        applicant.require_auth();

        let state = load_state(&env, task_id)?;
        require_status(&state, &[TaskStatus::Created])?;

        let mut apps = storage::load_applications(&env, task_id);
        if apps.iter().any(|a| a.applicant == applicant) {
            return Err(Error::AlreadyExists);
        }
        if apps.len() >= MAX_APPLICATIONS_PER_TASK {
            return Err(Error::InvalidState);
        }

        apps.push_back(TaskApplication {
            applicant: applicant.clone(),
            message,
            applied_at: env.ledger().timestamp(),
        });
        storage::save_applications(&env, task_id, &apps);

        events::task_applied(&env, events::TaskApplied { task_id, applicant });
        Ok(())
    }

    /// Assign an open task to one of its applicants.
    ///
    /// Fails with `NotFound` if `applicant` never applied.
    pub fn assign_to_applicant(
        env: Env,
        creator: Address,
        task_id: u64,
        applicant: Address,
    ) -> Result<(), Error> {
        creator.require_auth();

        let config = load_config(&env, task_id)?;
        guard::require_creator(&creator, &config)?;

        let apps = storage::load_applications(&env, task_id);
        if !apps.iter().any(|a| a.applicant == applicant) {
            return Err(Error::NotFound);
        }

        Self::assign(&env, task_id, applicant)
    }

    /// Assign an open task directly to any address, bypassing applications.
    pub fn assign_task(
        env: Env,
        creator: Address,
        task_id: u64,
        assignee: Address,
    ) -> Result<(), Error> {
        creator.require_auth();

        let config = load_config(&env, task_id)?;
        guard::require_creator(&creator, &config)?;

        Self::assign(&env, task_id, assignee)
    }

    /// Begin work on an assigned task.
    pub fn start_task(env: Env, assignee: Address, task_id: u64) -> Result<(), Error> {
        assignee.require_auth();

        let config = load_config(&env, task_id)?;
        let mut state = load_state(&env, task_id)?;
        guard::require_assignee(&assignee, &state)?;
        require_status(&state, &[TaskStatus::Assigned])?;
        require_not_past_deadline(&env, &config)?;

        state.status = TaskStatus::InProgress;
        save_task_state(&env, task_id, &state);

        events::task_started(&env, events::TaskStarted { task_id, assignee });
        Ok(())
    }

    /// Attest completion as the assignee — signature #1 of the
    /// dual-signature release. Accepted from `InProgress`, or from
    /// `Assigned` when the start step was skipped.
    pub fn complete_task(env: Env, assignee: Address, task_id: u64) -> Result<(), Error> {
        assignee.require_auth();

        let config = load_config(&env, task_id)?;
        let mut state = load_state(&env, task_id)?;
        guard::require_assignee(&assignee, &state)?;
        require_status(&state, &[TaskStatus::Assigned, TaskStatus::InProgress])?;
        require_not_past_deadline(&env, &config)?;

        let now = env.ledger().timestamp();
        state.status = TaskStatus::Completed;
        state.assignee_approved = true;
        state.completed_at = Some(now);
        save_task_state(&env, task_id, &state);

        events::task_completed(
            &env,
            events::TaskCompleted {
                task_id,
                assignee,
                completed_at: now,
            },
        );
        Ok(())
    }

    /// Approve completion and pay the net escrow to the assignee —
    /// signature #2 of the dual-signature release.
    pub fn release_funds(env: Env, creator: Address, task_id: u64) -> Result<(), Error> {
        creator.require_auth();

        let config = load_config(&env, task_id)?;
        let mut state = load_state(&env, task_id)?;
        guard::require_creator(&creator, &config)?;
        require_status(&state, &[TaskStatus::Completed])?;

        let assignee = match state.assignee.clone() {
            Some(assignee) => assignee,
            // Completed implies an assignee; treat a missing one as corrupt
            // state rather than a payout target.
            None => return Err(Error::InvalidState),
        };

        state.status = TaskStatus::FundsReleased;
        state.creator_approved = true;
        save_task_state(&env, task_id, &state);

        let amount = escrow::net_of_fee(config.funding_amount);
        escrow::disburse(&env, &assignee, amount)?;

        events::funds_released(
            &env,
            events::FundsReleased {
                task_id,
                assignee,
                amount,
            },
        );
        Ok(())
    }

    /// Cancel a task that has not reached completion; refunds the net
    /// escrow to the creator. The fee accrued at creation is kept.
    pub fn cancel_task(env: Env, creator: Address, task_id: u64) -> Result<(), Error> {
        creator.require_auth();

        let config = load_config(&env, task_id)?;
        let mut state = load_state(&env, task_id)?;
        guard::require_creator(&creator, &config)?;
        require_status(
            &state,
            &[
                TaskStatus::Created,
                TaskStatus::Assigned,
                TaskStatus::InProgress,
            ],
        )?;

        state.status = TaskStatus::Cancelled;
        save_task_state(&env, task_id, &state);

        let refund = escrow::net_of_fee(config.funding_amount);
        escrow::disburse(&env, &creator, refund)?;

        events::task_cancelled(
            &env,
            events::TaskCancelled {
                task_id,
                creator,
                refund,
            },
        );
        Ok(())
    }

    /// Flag a task whose deadline has passed. Callable by anyone; expiry is
    /// evaluated lazily against the ledger clock, never by a timer.
    pub fn mark_expired(env: Env, task_id: u64) -> Result<(), Error> {
        let config = load_config(&env, task_id)?;
        let mut state = load_state(&env, task_id)?;
        require_status(
            &state,
            &[
                TaskStatus::Created,
                TaskStatus::Assigned,
                TaskStatus::InProgress,
                TaskStatus::Completed,
            ],
        )?;
        if env.ledger().timestamp() <= config.deadline {
            return Err(Error::NotExpiredYet);
        }

        state.status = TaskStatus::Expired;
        save_task_state(&env, task_id, &state);

        events::task_expired(&env, events::TaskExpired { task_id });
        Ok(())
    }

    /// Reclaim the net escrow of an expired task. Terminal; the fee accrued
    /// at creation is kept.
    pub fn reclaim_expired_funds(env: Env, creator: Address, task_id: u64) -> Result<(), Error> {
        creator.require_auth();

        let config = load_config(&env, task_id)?;
        let mut state = load_state(&env, task_id)?;
        guard::require_creator(&creator, &config)?;
        require_status(&state, &[TaskStatus::Expired])?;

        state.status = TaskStatus::Cancelled;
        save_task_state(&env, task_id, &state);

        let refund = escrow::net_of_fee(config.funding_amount);
        escrow::disburse(&env, &creator, refund)?;

        events::funds_reclaimed(
            &env,
            events::FundsReclaimed {
                task_id,
                creator,
                refund,
            },
        );
        Ok(())
    }

    /// Hand an expired task to a new assignee, re-entering `Assigned`. Both
    /// approval flags and the completion timestamp are cleared; the original
    /// deadline is preserved.
    pub fn reassign_task(
        env: Env,
        creator: Address,
        task_id: u64,
        new_assignee: Address,
    ) -> Result<(), Error> {
        creator.require_auth();

        let config = load_config(&env, task_id)?;
        let mut state = load_state(&env, task_id)?;
        guard::require_creator(&creator, &config)?;
        require_status(&state, &[TaskStatus::Expired])?;

        if let Some(old_assignee) = state.assignee.clone() {
            storage::remove_assigned_task(&env, &old_assignee, task_id);
        }
        storage::push_assigned_task(&env, &new_assignee, task_id);

        state.assignee = Some(new_assignee.clone());
        state.status = TaskStatus::Assigned;
        state.assignee_approved = false;
        state.creator_approved = false;
        state.completed_at = None;
        save_task_state(&env, task_id, &state);

        events::task_reassigned(&env, events::TaskReassigned { task_id, new_assignee });
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Platform fees
    // ─────────────────────────────────────────────────────────

    /// Current accumulated platform fees.
    pub fn get_platform_fees(env: Env) -> i128 {
        storage::get_platform_fees(&env)
    }

    /// Transfer the entire fee accumulator to the deployer and reset it.
    /// Only the deployer captured at initialization may call this.
    pub fn withdraw_platform_fees(env: Env, deployer: Address) -> Result<(), Error> {
        deployer.require_auth();
        guard::require_deployer(&env, &deployer)?;

        let amount = escrow::withdraw_fees(&env, &deployer)?;

        events::fees_withdrawn(&env, events::FeesWithdrawn { deployer, amount });
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // User registry
    // ─────────────────────────────────────────────────────────

    /// Permanently bind `username` to `user`. One profile per address; a
    /// username is never changed or cleared once set.
    pub fn register_user(env: Env, user: Address, username: String) -> Result<(), Error> {
        user.require_auth();

        if username.is_empty() {
            return Err(Error::InvalidInput);
        }
        if storage::load_profile(&env, &user).is_some() {
            return Err(Error::AlreadyExists);
        }

        let profile = UserProfile {
            address: user.clone(),
            username: username.clone(),
            created_at: env.ledger().timestamp(),
        };
        storage::save_profile(&env, &profile);

        events::user_registered(&env, events::UserRegistered { user, username });
        Ok(())
    }

    /// Registered profile for `user`, or `None`.
    pub fn get_user_profile(env: Env, user: Address) -> Option<UserProfile> {
        storage::load_profile(&env, &user)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Retrieve a task by its ID.
    pub fn get_task(env: Env, task_id: u64) -> Result<Task, Error> {
        storage::try_load_task(&env, task_id).ok_or(Error::NotFound)
    }

    /// Applications recorded for a task, in application order.
    pub fn get_task_applications(env: Env, task_id: u64) -> Result<Vec<TaskApplication>, Error> {
        if !storage::has_task(&env, task_id) {
            return Err(Error::NotFound);
        }
        Ok(storage::load_applications(&env, task_id))
    }

    /// IDs of tasks created by `user`; empty for unknown addresses.
    pub fn get_user_tasks(env: Env, user: Address) -> Vec<u64> {
        storage::load_created_tasks(&env, &user)
    }

    /// IDs of tasks assigned to `user`; empty for unknown addresses.
    pub fn get_assigned_tasks(env: Env, user: Address) -> Vec<u64> {
        storage::load_assigned_tasks(&env, &user)
    }

    /// Total number of tasks ever created.
    pub fn get_task_count(env: Env) -> u64 {
        storage::get_task_count(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Internal
    // ─────────────────────────────────────────────────────────

    /// Shared tail of both assignment entry points: `Created → Assigned`.
    fn assign(env: &Env, task_id: u64, assignee: Address) -> Result<(), Error> {
        let mut state = load_state(env, task_id)?;
        require_status(&state, &[TaskStatus::Created])?;

        state.assignee = Some(assignee.clone());
        state.status = TaskStatus::Assigned;
        save_task_state(env, task_id, &state);
        storage::push_assigned_task(env, &assignee, task_id);

        events::task_assigned(env, events::TaskAssigned { task_id, assignee });
        Ok(())
    }
}

fn load_config(env: &Env, task_id: u64) -> Result<TaskConfig, Error> {
    storage::try_load_task_config(env, task_id).ok_or(Error::NotFound)
}

fn load_state(env: &Env, task_id: u64) -> Result<TaskState, Error> {
    storage::try_load_task_state(env, task_id).ok_or(Error::NotFound)
}

fn require_status(state: &TaskState, valid: &[TaskStatus]) -> Result<(), Error> {
    if !valid.contains(&state.status) {
        return Err(Error::InvalidState);
    }
    Ok(())
}

fn require_not_past_deadline(env: &Env, config: &TaskConfig) -> Result<(), Error> {
    if env.ledger().timestamp() > config.deadline {
        return Err(Error::TaskExpired);
    }
    Ok(())
}

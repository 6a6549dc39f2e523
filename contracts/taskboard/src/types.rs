//! # Types
//!
//! Shared data structures used across all modules of the TaskBoard contract.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A `Task` is internally stored as two separate ledger entries:
//!
//! - [`TaskConfig`] — written once at creation; never mutated.
//! - [`TaskState`] — written on every lifecycle transition.
//!
//! The public API exposes the reconstructed [`Task`] struct for convenience.
//!
//! ### Status as a Finite-State Machine
//!
//! [`TaskStatus`] enforces a strict forward-only lifecycle:
//!
//! ```text
//! Created ──► Assigned ──► InProgress ──► Completed ──► FundsReleased
//!
//! any pre-terminal state ──► Expired          (after the deadline)
//! Created | Assigned | InProgress ──► Cancelled
//! Expired ──► Assigned                        (reassignment)
//! Expired ──► Cancelled                       (fund reclaim)
//! ```
//!
//! `FundsReleased` and `Cancelled` are terminal. The only backward edge is
//! `Expired ──► Assigned` via reassignment.

use soroban_sdk::{contracttype, Address, String};

/// Lifecycle status of a task.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TaskStatus {
    /// Funded and open for applications.
    Created,
    /// Assigned to a user; work not yet started.
    Assigned,
    /// Assignee working on the task.
    InProgress,
    /// Assignee attested completion (signature #1).
    Completed,
    /// Reserved discriminant; `release_funds` moves straight from
    /// `Completed` to `FundsReleased`, so this value is never stored.
    Approved,
    /// Net escrow paid out to the assignee (terminal).
    FundsReleased,
    /// Deadline passed before completion.
    Expired,
    /// Cancelled by the creator, or expired funds reclaimed (terminal).
    Cancelled,
}

/// Immutable task configuration, written once at creation.
///
/// Stored separately from mutable state so that lifecycle transitions only
/// rewrite the small [`TaskState`] entry, not the text-heavy config.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaskConfig {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub github_link: Option<String>,
    /// Gross escrowed amount in the smallest token unit; the 3% platform fee
    /// is carved out of this at creation.
    pub funding_amount: i128,
    pub deadline: u64,
    pub creator: Address,
    pub created_at: u64,
}

/// Mutable task state, rewritten on every lifecycle transition.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaskState {
    pub assignee: Option<Address>,
    pub status: TaskStatus,
    pub completed_at: Option<u64>,
    pub creator_approved: bool,
    pub assignee_approved: bool,
}

/// Full on-chain representation of a task.
///
/// Used as the public API return type; reconstructed internally from the
/// split `TaskConfig` + `TaskState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Task {
    /// Unique identifier (auto-incremented; the first task gets 1).
    pub id: u64,
    pub title: String,
    pub description: String,
    pub github_link: Option<String>,
    /// Gross escrowed amount, fixed at creation.
    pub funding_amount: i128,
    /// Ledger timestamp by which the task must be completed.
    pub deadline: u64,
    pub creator: Address,
    /// Set by assignment; replaced only by reassignment after expiry.
    pub assignee: Option<Address>,
    pub status: TaskStatus,
    pub created_at: u64,
    pub completed_at: Option<u64>,
    /// Signature #2 of the dual-signature release.
    pub creator_approved: bool,
    /// Signature #1 of the dual-signature release.
    pub assignee_approved: bool,
}

/// One applicant's interest in an open task. Immutable once recorded; only
/// meaningful while the task is in `Created`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaskApplication {
    pub applicant: Address,
    pub message: String,
    pub applied_at: u64,
}

/// Permanent identity binding. A username, once registered, is never
/// changed or cleared.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserProfile {
    pub address: Address,
    pub username: String,
    pub created_at: u64,
}

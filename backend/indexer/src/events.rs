//! Canonical event types emitted by the TaskBoard contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/taskboard/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the TaskBoard contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A new task was funded and opened (`created` topic).
    TaskCreated,
    /// An applicant registered interest (`applied` topic).
    TaskApplied,
    /// The creator assigned the task (`assigned` topic).
    TaskAssigned,
    /// The assignee began work (`started` topic).
    TaskStarted,
    /// The assignee attested completion (`completed` topic).
    TaskCompleted,
    /// Net escrow paid to the assignee (`released` topic).
    FundsReleased,
    /// The creator cancelled the task (`cancelled` topic).
    TaskCancelled,
    /// The deadline passed before completion (`expired` topic).
    TaskExpired,
    /// The creator reclaimed an expired escrow (`reclaimed` topic).
    FundsReclaimed,
    /// An expired task got a new assignee (`reassign` topic).
    TaskReassigned,
    /// The deployer withdrew accumulated fees (`withdrawn` topic).
    FeesWithdrawn,
    /// A username was registered (`user_reg` topic).
    UserRegistered,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "created" => Self::TaskCreated,
            "applied" => Self::TaskApplied,
            "assigned" => Self::TaskAssigned,
            "started" => Self::TaskStarted,
            "completed" => Self::TaskCompleted,
            "released" => Self::FundsReleased,
            "cancelled" => Self::TaskCancelled,
            "expired" => Self::TaskExpired,
            "reclaimed" => Self::FundsReclaimed,
            "reassign" => Self::TaskReassigned,
            "withdrawn" => Self::FeesWithdrawn,
            "user_reg" => Self::UserRegistered,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TaskCreated => "task_created",
            Self::TaskApplied => "task_applied",
            Self::TaskAssigned => "task_assigned",
            Self::TaskStarted => "task_started",
            Self::TaskCompleted => "task_completed",
            Self::FundsReleased => "funds_released",
            Self::TaskCancelled => "task_cancelled",
            Self::TaskExpired => "task_expired",
            Self::FundsReclaimed => "funds_reclaimed",
            Self::TaskReassigned => "task_reassigned",
            Self::FeesWithdrawn => "fees_withdrawn",
            Self::UserRegistered => "user_registered",
            Self::Unknown => "unknown",
        }
    }

    /// `true` when the event's second topic element is a task id.
    ///
    /// Fee withdrawals are contract-scoped and `user_reg` carries an address
    /// as its second topic, so neither maps to a task id column.
    pub fn is_task_scoped(&self) -> bool {
        !matches!(
            self,
            Self::FeesWithdrawn | Self::UserRegistered | Self::Unknown
        )
    }
}

/// A fully decoded TaskBoard event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEvent {
    pub event_type: String,
    pub task_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub task_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}

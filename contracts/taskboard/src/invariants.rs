#![allow(dead_code)]

extern crate std;

use crate::escrow;
use crate::types::{Task, TaskStatus};

/// INV-1: Escrow conservation — for a task that reached a terminal state,
/// paid + refunded + fee must equal the gross funding amount, and at most
/// one of paid/refunded may be non-zero.
pub fn assert_conservation(task: &Task, paid: i128, refunded: i128) {
    let fee = escrow::platform_fee(task.funding_amount);
    assert!(
        paid == 0 || refunded == 0,
        "INV-1 violated: task {} both paid ({}) and refunded ({})",
        task.id,
        paid,
        refunded
    );
    assert_eq!(
        paid + refunded + fee,
        task.funding_amount,
        "INV-1 violated: task {}: {} + {} + {} != {}",
        task.id,
        paid,
        refunded,
        fee,
        task.funding_amount
    );
}

/// INV-2: Funding amount must always be positive.
pub fn assert_funding_positive(task: &Task) {
    assert!(
        task.funding_amount > 0,
        "INV-2 violated: task {} has non-positive funding ({})",
        task.id,
        task.funding_amount
    );
}

/// INV-3: Status transition validity. The lifecycle only moves forward,
/// except the `Expired -> Assigned` reassignment edge:
///   Created    -> Assigned | Cancelled | Expired
///   Assigned   -> InProgress | Completed | Cancelled | Expired
///   InProgress -> Completed | Cancelled | Expired
///   Completed  -> FundsReleased | Expired
///   Expired    -> Assigned | Cancelled
///   FundsReleased, Cancelled -> (none)
pub fn assert_valid_status_transition(from: &TaskStatus, to: &TaskStatus) {
    let valid = matches!(
        (from, to),
        (TaskStatus::Created, TaskStatus::Assigned)
            | (TaskStatus::Created, TaskStatus::Cancelled)
            | (TaskStatus::Created, TaskStatus::Expired)
            | (TaskStatus::Assigned, TaskStatus::InProgress)
            | (TaskStatus::Assigned, TaskStatus::Completed)
            | (TaskStatus::Assigned, TaskStatus::Cancelled)
            | (TaskStatus::Assigned, TaskStatus::Expired)
            | (TaskStatus::InProgress, TaskStatus::Completed)
            | (TaskStatus::InProgress, TaskStatus::Cancelled)
            | (TaskStatus::InProgress, TaskStatus::Expired)
            | (TaskStatus::Completed, TaskStatus::FundsReleased)
            | (TaskStatus::Completed, TaskStatus::Expired)
            | (TaskStatus::Expired, TaskStatus::Assigned)
            | (TaskStatus::Expired, TaskStatus::Cancelled)
    );
    assert!(
        valid,
        "INV-3 violated: invalid status transition from {:?} to {:?}",
        from, to
    );
}

/// INV-4: Dual-signature ordering — `creator_approved` implies
/// `assignee_approved` unless the task was reassigned (which clears both).
pub fn assert_dual_signature_order(task: &Task) {
    if task.creator_approved {
        assert!(
            task.assignee_approved,
            "INV-4 violated: task {} creator-approved before assignee completion",
            task.id
        );
    }
}

/// INV-5: Fields fixed at creation (everything in the config entry) remain
/// unchanged for the task's whole life.
pub fn assert_immutable_fields(original: &Task, current: &Task) {
    assert_eq!(original.id, current.id, "INV-5 violated: task id changed");
    assert_eq!(
        original.title, current.title,
        "INV-5 violated: task title changed"
    );
    assert_eq!(
        original.description, current.description,
        "INV-5 violated: task description changed"
    );
    assert_eq!(
        original.github_link, current.github_link,
        "INV-5 violated: task github_link changed"
    );
    assert_eq!(
        original.funding_amount, current.funding_amount,
        "INV-5 violated: task funding_amount changed"
    );
    assert_eq!(
        original.deadline, current.deadline,
        "INV-5 violated: task deadline changed"
    );
    assert_eq!(
        original.creator, current.creator,
        "INV-5 violated: task creator changed"
    );
    assert_eq!(
        original.created_at, current.created_at,
        "INV-5 violated: task created_at changed"
    );
}

/// INV-6: Task IDs are sequential starting from 1.
pub fn assert_sequential_ids(tasks: &[Task]) {
    for (i, task) in tasks.iter().enumerate() {
        assert_eq!(
            task.id,
            i as u64 + 1,
            "INV-6 violated: expected id {}, got {}",
            i + 1,
            task.id
        );
    }
}

/// INV-7: A stored `Completed` task carries signature #1 and a completion
/// timestamp; `Approved` is never stored at all.
pub fn assert_completion_consistency(task: &Task) {
    assert_ne!(
        task.status,
        TaskStatus::Approved,
        "INV-7 violated: task {} stored with the unused Approved status",
        task.id
    );
    if task.status == TaskStatus::Completed {
        assert!(
            task.assignee_approved,
            "INV-7 violated: task {} Completed without assignee approval",
            task.id
        );
        assert!(
            task.completed_at.is_some(),
            "INV-7 violated: task {} Completed without completed_at",
            task.id
        );
    }
}

/// Run all stateless per-task invariants.
pub fn assert_all_task_invariants(task: &Task) {
    assert_funding_positive(task);
    assert_dual_signature_order(task);
    assert_completion_consistency(task);
}

//! # Access Control Guard
//!
//! Pure principal checks invoked first in every mutating entry point, before
//! any storage write. Each fails with [`Error::NotAuthorized`] when the
//! caller does not match the required principal.
//!
//! Transaction-level authorization (`require_auth`) is handled by the entry
//! points themselves; these guards bind the *authorized* caller to the
//! principal a task or the contract expects.

use soroban_sdk::{Address, Env};

use crate::storage;
use crate::types::{TaskConfig, TaskState};
use crate::Error;

/// Caller must be the task's creator.
pub fn require_creator(caller: &Address, config: &TaskConfig) -> Result<(), Error> {
    if config.creator != *caller {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

/// Caller must be the task's current assignee.
pub fn require_assignee(caller: &Address, state: &TaskState) -> Result<(), Error> {
    match &state.assignee {
        Some(assignee) if assignee == caller => Ok(()),
        _ => Err(Error::NotAuthorized),
    }
}

/// Caller must be the deployer captured at initialization.
pub fn require_deployer(env: &Env, caller: &Address) -> Result<(), Error> {
    if storage::get_deployer(env) != *caller {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

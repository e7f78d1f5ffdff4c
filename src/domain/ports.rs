use crate::domain::model::{ChildCommand, ChildStatus};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Spawns a child and waits for it to terminate.
///
/// An `Err` means the child could not be started at all; a child that ran
/// and exited nonzero is `Ok(ChildStatus::ChildFailed { .. })`.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, command: &ChildCommand) -> Result<ChildStatus>;
}

use crate::services::runner::CommandFailure;
use thiserror::Error;

/// Failure kinds of the Elastic IP association flow, each wrapping the
/// underlying command failure.
#[derive(Debug, Error)]
pub enum AssociationError {
    #[error("failed to get instance id: {0}")]
    InstanceId(CommandFailure),
    #[error("failed to get allocation id: {0}")]
    AllocationId(CommandFailure),
    #[error("failed to associate elastic ip: {0}")]
    Associate(CommandFailure),
}

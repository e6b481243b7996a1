use crate::domain::errors::AssociationError;
use crate::services::metadata;
use crate::services::runner::CommandRunner;

/// Resolve the allocation id backing an Elastic IP.
pub fn allocation_id(
    runner: &dyn CommandRunner,
    elastic_ip: &str,
) -> Result<String, AssociationError> {
    runner
        .run(
            "aws",
            &[
                "ec2",
                "describe-addresses",
                "--public-ips",
                elastic_ip,
                "--query",
                "Addresses[0].AllocationId",
                "--output",
                "text",
            ],
        )
        .map(|out| out.trim().to_string())
        .map_err(AssociationError::AllocationId)
}

/// Associate an Elastic IP with the running instance: resolve the allocation
/// id, resolve the instance id, then bind the two. No rollback on partial
/// completion. Returns the instance id on success.
pub fn associate_elastic_ip(
    runner: &dyn CommandRunner,
    elastic_ip: &str,
) -> Result<String, AssociationError> {
    let allocation_id = allocation_id(runner, elastic_ip)?;
    let instance_id = metadata::instance_id(runner)?;
    runner
        .run(
            "aws",
            &[
                "ec2",
                "associate-address",
                "--instance-id",
                &instance_id,
                "--allocation-id",
                &allocation_id,
            ],
        )
        .map_err(AssociationError::Associate)?;
    Ok(instance_id)
}

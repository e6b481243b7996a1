use crate::domain::errors::AssociationError;
use crate::services::runner::CommandRunner;

/// Resolve the local EC2 instance id from instance metadata.
pub fn instance_id(runner: &dyn CommandRunner) -> Result<String, AssociationError> {
    runner
        .run("ec2metadata", &["--instance-id"])
        .map(|out| out.trim().to_string())
        .map_err(AssociationError::InstanceId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::runner::testing::ScriptedRunner;

    #[test]
    fn trims_metadata_output() {
        let runner = ScriptedRunner::new().ok("ec2metadata --instance-id", "i-0abc123def456\n");
        assert_eq!(instance_id(&runner).unwrap(), "i-0abc123def456");
    }

    #[test]
    fn lookup_failure_is_instance_id_kind() {
        let runner = ScriptedRunner::new().fail("ec2metadata", "connection timed out");
        let err = instance_id(&runner).unwrap_err();
        assert!(matches!(err, AssociationError::InstanceId(_)));
        assert!(err.to_string().contains("connection timed out"));
    }
}

use crate::services::runner::{CommandFailure, CommandRunner};

pub const AWS_CLI: &str = "aws-cli";

/// Install a snap in classic confinement. The caller maps failure to status.
pub fn install(runner: &dyn CommandRunner, package: &str) -> Result<(), CommandFailure> {
    runner
        .run("snap", &["install", package, "--classic"])
        .map(|_| ())
}

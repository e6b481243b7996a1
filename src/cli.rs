use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "elastic-charm",
    version,
    about = "Elastic IP association charm for EC2 units"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output a machine-readable JSON report")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the AWS CLI snap.
    Install,
    /// Resolve the EC2 instance id and report readiness.
    Start,
    /// Associate the configured Elastic IP with the instance (leader only).
    ConfigChanged,
    /// Route the hook named by JUJU_DISPATCH_PATH.
    Dispatch,
}

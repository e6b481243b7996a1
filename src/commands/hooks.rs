use crate::cli::{Cli, Commands};
use crate::domain::models::{HookOutcome, HookReport, UnitStatus};
use crate::services::juju::HookTools;
use crate::services::runner::CommandRunner;
use crate::services::{aws, metadata, output, snap};
use tracing::{error, info};

const ELASTIC_IP_OPTION: &str = "elastic-ip";

/// Run the handler for the invoked hook and print its report. Subprocess
/// failures inside a handler become unit status, never an `Err` here; only
/// hook-tool breakage bubbles up.
pub fn handle_hook(cli: &Cli, runner: &dyn CommandRunner) -> anyhow::Result<HookOutcome> {
    let report = match &cli.command {
        Commands::Install => on_install(runner)?,
        Commands::Start => on_start(runner)?,
        Commands::ConfigChanged => on_config_changed(runner)?,
        Commands::Dispatch => dispatch(runner)?,
    };
    output::print_report(cli.json, &report)?;
    Ok(report.outcome)
}

/// Route the hook named by JUJU_DISPATCH_PATH, the way a charm's `dispatch`
/// shim would. Hooks this charm does not observe succeed as no-ops.
fn dispatch(runner: &dyn CommandRunner) -> anyhow::Result<HookReport> {
    let path = std::env::var("JUJU_DISPATCH_PATH").unwrap_or_default();
    let hook = path.strip_prefix("hooks/").unwrap_or(path.as_str());
    match hook {
        "install" => on_install(runner),
        "start" => on_start(runner),
        "config-changed" => on_config_changed(runner),
        other => {
            info!(hook = other, "no handler observed for hook");
            Ok(HookReport::skipped(other))
        }
    }
}

fn on_install(runner: &dyn CommandRunner) -> anyhow::Result<HookReport> {
    let tools = HookTools::new(runner);
    info!("install hook");
    tools.status_set(&UnitStatus::Maintenance("Installing AWS CLI".into()))?;
    if let Err(e) = snap::install(runner, snap::AWS_CLI) {
        error!("failed to install aws cli: {e}");
        let status = UnitStatus::Blocked("Failed to install aws cli".into());
        tools.status_set(&status)?;
        return Ok(HookReport::completed("install", &status));
    }
    info!("aws cli installed");
    let status = UnitStatus::Active;
    tools.status_set(&status)?;
    Ok(HookReport::completed("install", &status))
}

fn on_start(runner: &dyn CommandRunner) -> anyhow::Result<HookReport> {
    let tools = HookTools::new(runner);
    let instance_id = match metadata::instance_id(runner) {
        Ok(id) => id,
        Err(e) => {
            error!("failed to get instance id: {e}");
            let status = UnitStatus::Blocked("Failed to get instance id".into());
            tools.status_set(&status)?;
            return Ok(HookReport::completed("start", &status));
        }
    };
    info!(instance_id = %instance_id, "instance id resolved");
    let status = UnitStatus::Active;
    tools.status_set(&status)?;
    Ok(HookReport::completed("start", &status).with_instance_id(instance_id))
}

fn on_config_changed(runner: &dyn CommandRunner) -> anyhow::Result<HookReport> {
    let tools = HookTools::new(runner);
    info!("config changed");
    if !tools.is_leader()? {
        return Ok(HookReport::skipped("config-changed"));
    }
    let Some(elastic_ip) = tools.config_value(ELASTIC_IP_OPTION)? else {
        return Ok(HookReport::skipped("config-changed"));
    };

    tools.status_set(&UnitStatus::Maintenance("Associating Elastic IP".into()))?;
    match aws::associate_elastic_ip(runner, &elastic_ip) {
        Ok(instance_id) => {
            info!(elastic_ip = %elastic_ip, "elastic ip associated");
            let status = UnitStatus::Active;
            tools.status_set(&status)?;
            Ok(HookReport::completed("config-changed", &status).with_instance_id(instance_id))
        }
        Err(e) => {
            error!("failed to associate elastic ip: {e}");
            let status = UnitStatus::Blocked("Failed to associate elastic ip".into());
            tools.status_set(&status)?;
            Ok(HookReport::deferred("config-changed", &status))
        }
    }
}

use crate::domain::models::UnitStatus;
use crate::services::runner::CommandRunner;
use anyhow::Context;

/// Facade over the hook tools Juju puts on PATH for the duration of a hook.
///
/// Failures here mean the charm is running outside a hook context (or the
/// agent is broken) and propagate as plain errors instead of unit status.
pub struct HookTools<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> HookTools<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    pub fn status_set(&self, status: &UnitStatus) -> anyhow::Result<()> {
        let message = status.message();
        let result = if message.is_empty() {
            self.runner.run("status-set", &[status.level()])
        } else {
            self.runner.run("status-set", &[status.level(), message])
        };
        result.context("status-set failed")?;
        Ok(())
    }

    pub fn is_leader(&self) -> anyhow::Result<bool> {
        let out = self
            .runner
            .run("is-leader", &["--format=json"])
            .context("is-leader failed")?;
        let value: serde_json::Value =
            serde_json::from_str(out.trim()).context("is-leader output was not json")?;
        value
            .as_bool()
            .ok_or_else(|| anyhow::anyhow!("is-leader output was not a boolean"))
    }

    /// Value of a single charm config option. Absent key, JSON null, and an
    /// empty string all count as unset.
    pub fn config_value(&self, key: &str) -> anyhow::Result<Option<String>> {
        let out = self
            .runner
            .run("config-get", &["--format=json"])
            .context("config-get failed")?;
        let config: serde_json::Value =
            serde_json::from_str(out.trim()).context("config-get output was not json")?;
        let value = match config.get(key) {
            None | Some(serde_json::Value::Null) => return Ok(None),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };
        Ok((!value.is_empty()).then_some(value))
    }
}

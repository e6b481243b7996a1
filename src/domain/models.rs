use serde::Serialize;

/// Workload status as understood by the `status-set` hook tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitStatus {
    Active,
    Maintenance(String),
    Blocked(String),
}

impl UnitStatus {
    pub fn level(&self) -> &'static str {
        match self {
            UnitStatus::Active => "active",
            UnitStatus::Maintenance(_) => "maintenance",
            UnitStatus::Blocked(_) => "blocked",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            UnitStatus::Active => "",
            UnitStatus::Maintenance(m) | UnitStatus::Blocked(m) => m,
        }
    }
}

/// How a handler run ended. `Deferred` asks the controller to redeliver the
/// event and only ever comes out of the config-changed association flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HookOutcome {
    Completed,
    Deferred,
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Summary of one handler run, printed to stdout as text or `--json`.
#[derive(Debug, Serialize)]
pub struct HookReport {
    pub hook: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub outcome: HookOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
}

impl HookReport {
    pub fn completed(hook: &str, status: &UnitStatus) -> Self {
        Self::with_status(hook, status, HookOutcome::Completed)
    }

    pub fn deferred(hook: &str, status: &UnitStatus) -> Self {
        Self::with_status(hook, status, HookOutcome::Deferred)
    }

    /// A hook this charm observed but had nothing to do for (non-leader,
    /// option unset) or does not observe at all. Unit status is untouched.
    pub fn skipped(hook: &str) -> Self {
        Self {
            hook: hook.to_string(),
            status: None,
            message: None,
            outcome: HookOutcome::Completed,
            instance_id: None,
        }
    }

    pub fn with_instance_id(mut self, instance_id: String) -> Self {
        self.instance_id = Some(instance_id);
        self
    }

    fn with_status(hook: &str, status: &UnitStatus, outcome: HookOutcome) -> Self {
        Self {
            hook: hook.to_string(),
            status: Some(status.level().to_string()),
            message: (!status.message().is_empty()).then(|| status.message().to_string()),
            outcome,
            instance_id: None,
        }
    }
}

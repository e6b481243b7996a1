use crate::domain::models::{HookOutcome, HookReport, JsonOut};

pub fn print_report(json: bool, report: &HookReport) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: report
            })?
        );
        return Ok(());
    }

    let mut line = match (&report.status, &report.message) {
        (Some(status), Some(message)) => format!("{}: {} ({})", report.hook, status, message),
        (Some(status), None) => format!("{}: {}", report.hook, status),
        _ => format!("{}: no-op", report.hook),
    };
    if report.outcome == HookOutcome::Deferred {
        line.push_str(" [deferred]");
    }
    println!("{}", line);
    Ok(())
}

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated hook environment: a stub-only PATH standing in for the hook
/// tools and external CLIs, plus a call log per stubbed program.
pub struct TestEnv {
    _tmp: TempDir,
    bin: PathBuf,
    calls: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let bin = tmp.path().join("bin");
        let calls = tmp.path().join("calls");
        fs::create_dir_all(&bin).expect("create stub bin dir");
        fs::create_dir_all(&calls).expect("create call log dir");

        let env = Self {
            _tmp: tmp,
            bin,
            calls,
        };
        env.stub("status-set", "");
        env
    }

    /// Install a stub program. Every invocation appends its arguments to the
    /// call log before `body` runs.
    pub fn stub(&self, name: &str, body: &str) {
        let log = self.calls.join(name);
        let script = format!(
            "#!/bin/sh\necho \"$*\" >> {}\n{}\n",
            log.display(),
            body
        );
        let path = self.bin.join(name);
        fs::write(&path, script).expect("write stub script");
        let mut perms = fs::metadata(&path).expect("stat stub").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("mark stub executable");
    }

    pub fn cmd(&self, hook: &str) -> Command {
        let mut cmd = Command::cargo_bin("elastic-charm").expect("charm binary");
        cmd.env("PATH", &self.bin).arg(hook);
        cmd
    }

    /// Recorded invocations of a stub, one line of arguments per call.
    pub fn calls(&self, name: &str) -> Vec<String> {
        match fs::read_to_string(self.calls.join(name)) {
            Ok(log) => log.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}

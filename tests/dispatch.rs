use predicates::str::contains;

mod common;
use common::TestEnv;

#[test]
fn dispatch_routes_hook_from_dispatch_path() {
    let env = TestEnv::new();
    env.stub("ec2metadata", "echo i-0abc123");

    env.cmd("dispatch")
        .env("JUJU_DISPATCH_PATH", "hooks/start")
        .assert()
        .success()
        .stdout(contains("start: active"));

    assert_eq!(env.calls("ec2metadata"), ["--instance-id"]);
}

#[test]
fn dispatch_ignores_unobserved_hooks() {
    let env = TestEnv::new();

    env.cmd("dispatch")
        .env("JUJU_DISPATCH_PATH", "hooks/stop")
        .assert()
        .success()
        .stdout(contains("stop: no-op"));

    assert!(env.calls("status-set").is_empty());
}

#[test]
fn dispatch_without_path_is_a_no_op() {
    let env = TestEnv::new();

    env.cmd("dispatch").assert().success();

    assert!(env.calls("status-set").is_empty());
}

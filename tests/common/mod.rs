use assert_cmd::Command;

pub fn memomail_cmd() -> Command {
    let mut cmd = Command::cargo_bin("memomail").unwrap();
    cmd.env_remove("MEMOMAIL_CONFIG");
    cmd.env_remove("MEMOMAIL_LOG");
    cmd
}

use assert_cmd::Command;
use std::path::Path;

pub fn run_xit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("xit").expect("Failed to find xit binary");
    cmd.envs(vec![("NO_COLOR", "1")]);
    cmd.env_remove("XIT_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

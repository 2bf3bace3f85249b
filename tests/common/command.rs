use assert_cmd::Command;

/// Run the lessons binary with plain output and no environment overrides
pub fn run_lessons_command(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("bit-lessons").expect("Failed to find bit-lessons binary");
    cmd.env_remove("BIT_LESSONS_CAPACITY");
    cmd.env_remove("BIT_LESSONS_BRANCH");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

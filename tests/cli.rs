use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_shell(input: &str) -> Output {
    run_shell_bytes(Command::new(env!("CARGO_BIN_EXE_mini_shell")), input.as_bytes())
}

fn run_shell_bytes(mut command: Command, input: &[u8]) -> Output {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .env_remove("RUST_LOG")
        .spawn()
        .expect("spawn mini_shell");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input)
        .expect("write input");
    child.wait_with_output().expect("wait mini_shell")
}

#[test]
fn exit_terminates_with_status_zero() {
    let out = run_shell("echo hi\nexit 7\necho unreachable\n");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "$ hi\n$ ");
}

#[test]
fn end_of_input_terminates_with_status_zero() {
    let out = run_shell("echo a   b c\n");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "$ a b c\n$ ");
    assert!(out.stderr.is_empty());
}

#[test]
fn unknown_command_and_type_lookups() {
    let out = run_shell("foobarbaz\ntype type\ntype nonexistent_cmd_xyz\nexit\n");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "$ foobarbaz: command not found\n\
         $ type is a shell builtin\n\
         $ nonexistent_cmd_xyz: not found\n\
         $ "
    );
}

#[test]
#[cfg(unix)]
fn external_program_inherits_stdout() {
    let out = run_shell("printf %s- one two\necho done\nexit\n");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "$ one-two-$ done\n$ ");
}

#[test]
#[cfg(unix)]
fn type_reports_path_of_sh() {
    let out = run_shell("type sh\n");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("$ sh is /"), "unexpected output: {stdout}");
    assert!(stdout.ends_with("/sh\n$ "), "unexpected output: {stdout}");
}

#[test]
#[cfg(unix)]
fn non_unicode_environment_variable_is_tolerated_and_passed_on() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let mut command = Command::new(env!("CARGO_BIN_EXE_mini_shell"));
    command.env("MINI_SHELL_RAW_VAR", OsStr::from_bytes(b"\xff\xfe"));
    let out = run_shell_bytes(command, b"echo hi\nprintenv MINI_SHELL_RAW_VAR\nexit\n");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"$ hi\n$ \xff\xfe\n$ ");
}

#[test]
fn invalid_utf8_input_line_keeps_session_alive() {
    let out = run_shell_bytes(
        Command::new(env!("CARGO_BIN_EXE_mini_shell")),
        b"echo \xff\necho after\nexit\n",
    );
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "$ \u{FFFD}\n$ after\n$ "
    );
}

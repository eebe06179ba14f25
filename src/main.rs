use mini_shell::Interpreter;
use mini_shell::config::ShellArgs;

fn main() {
    let args: ShellArgs = argh::from_env();
    args.init_logging();
    log::debug!("starting with {args:?}");

    let code = Interpreter::default().repl();
    std::process::exit(code);
}

use argh::FromArgs;
use log::LevelFilter;

#[derive(FromArgs, Debug, Default, PartialEq)]
/// A minimal interactive shell with `exit`, `echo` and `type` builtins.
/// Commands are read from standard input, one per line.
pub struct ShellArgs {
    #[argh(switch, short = 'v')]
    /// log dispatch decisions to standard error. RUST_LOG takes precedence.
    pub verbose: bool,
}

impl ShellArgs {
    /// Default log level when `RUST_LOG` is not set.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    /// Install the global `env_logger` backend. Logs go to standard error.
    pub fn init_logging(&self) {
        let default = self.log_level().to_string().to_lowercase();
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
            .format_timestamp(None)
            .init();
    }
}

use std::collections::HashMap;
use std::env as stdenv;
use std::path::PathBuf;

/// Name of the variable holding the executable search path.
pub const PATH_VAR: &str = "PATH";

/// Mutable, user-level view of the process environment used by the interpreter.
///
/// The environment contains:
/// - `vars`: a map of environment variables that will be visible to executed commands.
/// - `current_dir`: the working directory for command execution.
/// - `should_exit`: a flag the dispatch loop checks to know when to terminate.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Key-value store of environment variables (e.g., PATH, HOME).
    pub vars: HashMap<String, String>,
    /// The current working directory for command execution.
    pub current_dir: PathBuf,
    /// When set to true, the dispatch loop stops before the next prompt.
    pub should_exit: bool,
}

impl Environment {
    /// Capture the current process state into a new `Environment` instance.
    ///
    /// This copies variables from `std::env::vars_os()` and initializes `current_dir`
    /// from `std::env::current_dir()`. The `should_exit` flag is initialized to `false`.
    ///
    /// Pairs that are not valid Unicode are left out of `vars`. Children still
    /// inherit them from the process environment.
    pub fn new() -> Self {
        let vars = stdenv::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        let current_dir = stdenv::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            vars,
            current_dir,
            should_exit: false,
        }
    }

    /// Get the value of an environment variable.
    ///
    /// Looks up the key in `self.vars` first, falling back to `std::env::var`.
    pub fn get_var(&self, key: &str) -> Option<String> {
        self.vars
            .get(key)
            .cloned()
            .or_else(|| stdenv::var(key).ok())
    }

    /// Set or override an environment variable in `self.vars`.
    pub fn set_var(&mut self, key: impl Into<String>, val: impl Into<String>) {
        self.vars.insert(key.into(), val.into());
    }

    /// Directories to search for executables, in lookup order.
    ///
    /// Derived from `PATH` on every call using the platform list separator.
    /// Empty entries are skipped; a missing `PATH` gives an empty list.
    pub fn search_path(&self) -> Vec<PathBuf> {
        match self.get_var(PATH_VAR) {
            Some(paths) => stdenv::split_paths(&paths)
                .filter(|dir| !dir.as_os_str().is_empty())
                .collect(),
            None => Vec::new(),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::env::Environment;
    use std::collections::HashMap;
    use std::env as stdenv;
    use std::path::PathBuf;

    fn empty_env() -> Environment {
        Environment {
            vars: HashMap::new(),
            current_dir: stdenv::current_dir().unwrap(),
            should_exit: false,
        }
    }

    #[test]
    fn test_env_set_and_get_var() {
        let mut env = empty_env();

        // initially absent
        assert_eq!(env.get_var("SOME_RANDOM_ENV_VAR_12345"), None);

        env.set_var("KEY", "VALUE");

        assert_eq!(env.get_var("KEY"), Some("VALUE".to_string()));
    }

    #[test]
    fn test_env_reads_from_process_env() {
        let env = Environment::new();
        assert!(env.get_var("PATH").is_some());
        assert!(!env.should_exit);
    }

    #[test]
    #[cfg(unix)]
    fn test_search_path_keeps_order_and_skips_empty_entries() {
        let mut env = empty_env();
        env.set_var("PATH", "/usr/local/bin::/usr/bin:/bin");

        assert_eq!(
            env.search_path(),
            vec![
                PathBuf::from("/usr/local/bin"),
                PathBuf::from("/usr/bin"),
                PathBuf::from("/bin"),
            ]
        );
    }

    #[test]
    fn test_search_path_empty_value() {
        let mut env = empty_env();
        env.set_var("PATH", "");
        assert!(env.search_path().is_empty());
    }
}

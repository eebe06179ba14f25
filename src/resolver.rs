use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve a command name to an executable file the way `type` reports it.
///
/// Behavior:
/// - Empty name: returns `None`.
/// - Name containing a path separator (e.g. `./foo`, `/bin/sh`): returns it if it is
///   an executable file, without consulting `search_paths`.
/// - Plain name: tries `dir/name` for each directory of `search_paths` in order and
///   returns the first executable file. Later directories are not searched.
///
/// Directories that do not exist or cannot be inspected count as "no match here".
pub fn find_executable(search_paths: &[PathBuf], name: &str) -> Option<PathBuf> {
    let path = Path::new(name);
    let mut components = path.components();
    match (components.next(), components.next()) {
        (None, _) => None,
        (Some(_), None) if !name.contains(std::path::MAIN_SEPARATOR) => {
            let found = search_paths
                .iter()
                .map(|dir| dir.join(name))
                .find(|candidate| is_executable(candidate));
            debug!("resolved {name:?} on search path: {found:?}");
            found
        }
        _ => is_executable(path).then(|| path.to_path_buf()),
    }
}

/// Whether `path` names an existing regular file with any execute bit set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    fs::metadata(path).map(|meta| meta.is_file()).unwrap_or(false)
}

use std::path::{Path, PathBuf};

/// Loads the `.env` files of `cwd` and all of its ancestors and returns the
/// ones that were applied, closest first.
///
/// A variable keeps the first value it gets, so files closer to `cwd` win and
/// variables already set in the environment are never overwritten.
pub fn load_dot_env(cwd: &Path) -> Vec<PathBuf> {
    let mut loaded = Vec::new();
    for dir in cwd.ancestors() {
        let env_file = dir.join(".env");
        if env_file.is_file() && dotenv::from_path(&env_file).is_ok() {
            loaded.push(env_file);
        }
    }
    loaded
}

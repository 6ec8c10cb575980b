// SPDX-License-Identifier: MPL-2.0
//! Application directory resolution.
//!
//! Two directories matter: the config directory (holding `settings.toml`)
//! and the data directory (holding `storage.cbor`). Both resolve in the
//! same order:
//!
//! 1. **Explicit override** passed to a `_with_override()` function (tests)
//! 2. **CLI arguments** `--config-dir` / `--data-dir`, see [`init_cli_overrides`]
//! 3. **Environment** `RECIPE_LENS_CONFIG_DIR` / `RECIPE_LENS_DATA_DIR`
//! 4. **Platform default** from the `dirs` crate, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name appended to platform defaults.
const APP_NAME: &str = "RecipeLens";

/// Environment variable overriding the data directory.
pub const ENV_DATA_DIR: &str = "RECIPE_LENS_DATA_DIR";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "RECIPE_LENS_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` arguments.
///
/// Only the first call has an effect; later calls are ignored with a
/// debug log so a second `App` in the same process (tests) cannot panic.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err()
        || CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
    {
        tracing::debug!("CLI directory overrides already initialized");
    }
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform.map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Directory holding persisted UI state.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir())
}

/// Directory holding `settings.toml`.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        &CLI_CONFIG_DIR,
        ENV_CONFIG_DIR,
        dirs::config_dir(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_data_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);

        if let Some(path) = get_app_data_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn override_path_takes_precedence() {
        let override_path = PathBuf::from("/custom/data/path");
        assert_eq!(
            get_app_data_dir_with_override(Some(override_path.clone())),
            Some(override_path.clone())
        );
        assert_eq!(
            get_app_config_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );
    }

    #[test]
    fn env_var_overrides_default_data_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/test/data/dir");

        assert_eq!(get_app_data_dir(), Some(PathBuf::from("/test/data/dir")));

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}

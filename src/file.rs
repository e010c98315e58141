//! Configuration file location.
//!
//! The effective path comes from the `config` flag when it is non-empty, and
//! from the caller's default otherwise. [`platform_config_path`] builds a
//! conventional default inside the platform configuration directory.

use std::path::{Path, PathBuf};

use crate::error::CfgFlagsError;

/// Pick the configuration file path.
///
/// A non-empty `flag_value` wins over `default_path`. An empty default counts
/// as absent; with neither available this is
/// [`MissingConfigPath`](CfgFlagsError::MissingConfigPath).
pub fn resolve_config_path(
    flag_value: &str,
    default_path: &Path,
) -> Result<PathBuf, CfgFlagsError> {
    if !flag_value.is_empty() {
        return Ok(PathBuf::from(flag_value));
    }
    if default_path.as_os_str().is_empty() {
        return Err(CfgFlagsError::MissingConfigPath);
    }
    Ok(default_path.to_path_buf())
}

/// `{platform config dir}/{file_name}` for `app_name`
/// (e.g. `~/.config/{app_name}/{file_name}` on Linux).
///
/// Returns `None` if the platform directory cannot be determined (e.g. no
/// home directory).
pub fn platform_config_path(app_name: &str, file_name: &str) -> Option<PathBuf> {
    let proj = directories::ProjectDirs::from("", "", app_name)?;
    Some(proj.config_dir().join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_value_wins() {
        let path = resolve_config_path("/etc/override.ini", Path::new("default.ini")).unwrap();
        assert_eq!(path, PathBuf::from("/etc/override.ini"));
    }

    #[test]
    fn default_used_when_flag_empty() {
        let path = resolve_config_path("", Path::new("default.ini")).unwrap();
        assert_eq!(path, PathBuf::from("default.ini"));
    }

    #[test]
    fn flag_used_without_default() {
        let path = resolve_config_path("only.ini", Path::new("")).unwrap();
        assert_eq!(path, PathBuf::from("only.ini"));
    }

    #[test]
    fn neither_is_an_error() {
        let result = resolve_config_path("", Path::new(""));
        assert!(matches!(result, Err(CfgFlagsError::MissingConfigPath)));
    }

    #[test]
    fn platform_path_ends_with_file_name() {
        if let Some(path) = platform_config_path("cfgflags-test", "app.ini") {
            assert!(path.ends_with("app.ini"));
            assert!(path.to_string_lossy().contains("cfgflags-test"));
        }
    }
}

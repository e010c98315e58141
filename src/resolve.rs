//! The load pipeline: resolve the path, read and parse the file, merge.

use std::path::Path;

use crate::error::CfgFlagsError;
use crate::file::resolve_config_path;
use crate::merge::merge;
use crate::parse::parse_file;
use crate::registry::{CONFIG_FLAG, Registry};

/// Fill flags not set on the command line from an INI configuration file.
///
/// The file is the one named by the registry's `config` flag, or
/// `default_path` when that flag is empty (pass `""` for no default). The
/// first error aborts the load; see [`merge()`](crate::merge()) for what
/// has been applied by then.
pub fn apply<R: Registry>(
    registry: &mut R,
    default_path: impl AsRef<Path>,
) -> Result<(), CfgFlagsError> {
    let flag_value = registry.current_value(CONFIG_FLAG).unwrap_or_default();
    let path = resolve_config_path(&flag_value, default_path.as_ref())?;
    tracing::debug!(path = %path.display(), "loading configuration file");

    let mapping = parse_file(&path)?;
    let changed = merge(&mapping, registry)?;
    tracing::debug!(
        path = %path.display(),
        entries = mapping.len(),
        changed = changed.len(),
        "configuration applied"
    );
    Ok(())
}

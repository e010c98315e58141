use std::collections::BTreeSet;

use crate::error::CfgFlagsError;
use crate::registry::Registry;
use crate::types::FileMapping;

/// Names of registered flags that were not assigned on the command line.
pub fn missing_flags<R: Registry>(registry: &R) -> BTreeSet<String> {
    let explicit: BTreeSet<&str> = registry.explicit_names().collect();
    registry
        .all_names()
        .filter(|name| !explicit.contains(name))
        .map(str::to_string)
        .collect()
}

/// Apply file values to every flag in the missing set.
///
/// Entries are visited in mapping order. A key naming no registered flag, or a
/// value the flag cannot convert, stops the merge; flags updated before that
/// point keep their new values. Returns the names of the flags that changed.
pub fn merge<R: Registry>(
    mapping: &FileMapping,
    registry: &mut R,
) -> Result<Vec<String>, CfgFlagsError> {
    let missing = missing_flags(&*registry);
    let mut changed = Vec::new();

    for entry in mapping {
        let Some(current) = registry.current_value(&entry.key) else {
            return Err(CfgFlagsError::UnknownFlag {
                key: entry.key.clone(),
                line: entry.line,
            });
        };

        if !missing.contains(&entry.key) {
            tracing::debug!(flag = %entry.key, "command-line value takes precedence");
            continue;
        }

        if current == entry.value {
            continue;
        }

        registry
            .set_value(&entry.key, &entry.value)
            .map_err(|e| CfgFlagsError::FlagConversion {
                name: entry.key.clone(),
                source: Box::new(e),
            })?;
        tracing::debug!(flag = %entry.key, value = %entry.value, "applied configuration value");
        changed.push(entry.key.clone());
    }

    Ok(changed)
}

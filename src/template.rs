//! Commented INI templates generated from a [`FlagSet`].
//!
//! The output is a valid configuration file for the same set: parsing it back
//! yields each flag's current value, minus any leading or trailing whitespace
//! (the parser trims every value).

use std::path::Path;

use crate::error::CfgFlagsError;
use crate::registry::{CONFIG_FLAG, FlagSet};

/// Render every flag except `config` as a commented `key = value` line.
pub fn generate_template(set: &FlagSet) -> String {
    let mut out = String::new();
    out.push_str(&format!("; {} configuration\n", set.name()));

    for flag in set.iter().filter(|f| f.name() != CONFIG_FLAG) {
        out.push('\n');
        for line in flag.usage().lines() {
            out.push_str(&format!("; {line}\n"));
        }
        out.push_str(&format!(
            "; default: {}\n",
            render_value(&flag.default_value().to_string())
        ));
        out.push_str(&format!(
            "{} = {}\n",
            flag.name(),
            render_value(&flag.value().to_string())
        ));
    }
    out
}

impl FlagSet {
    /// Write [`generate_template`] output to `path`.
    pub fn write_template(&self, path: &Path) -> Result<(), CfgFlagsError> {
        std::fs::write(path, generate_template(self)).map_err(|source| {
            CfgFlagsError::FileWrite {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}

/// Leave plain values bare; quote anything the parser would otherwise cut or
/// reject. Outer whitespace is trimmed on load either way.
fn render_value(value: &str) -> String {
    let needs_quotes = value
        .chars()
        .any(|c| matches!(c, '#' | ';' | '"' | '=' | '\\') || c.is_control());
    if !needs_quotes {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            // a data line may hold only one '='
            '=' => quoted.push_str("\\x3d"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

use std::path::PathBuf;

use thiserror::Error;

use crate::unquote::UnquoteError;

#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum CfgFlagsError {
    #[error("No configuration file path given: pass --config or a default path")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(cfgflags::missing_config_path),
            help("set --config=<file> on the command line")
        )
    )]
    MissingConfigPath,

    #[error("Failed to read configuration file {path}: {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(cfgflags::file_read)))]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(cfgflags::file_write)))]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Expected exactly one '=' on line {line} but found {found}: {text:?}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(cfgflags::malformed_line),
            help("data lines have the form `key = value` with a single '='")
        )
    )]
    MalformedLine {
        line: usize,
        text: String,
        found: usize,
    },

    #[error("Malformed quoted value on line {line} ({text:?}): {source}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(code(cfgflags::malformed_quoted_value))
    )]
    MalformedQuotedValue {
        line: usize,
        text: String,
        source: UnquoteError,
    },

    #[error("Unknown flag '{key}' in configuration file (line {line})")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(cfgflags::unknown_flag),
            help("every key in the file must name a registered flag")
        )
    )]
    UnknownFlag { key: String, line: usize },

    #[error("Invalid value for flag '{name}': {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(cfgflags::flag_conversion)))]
    FlagConversion {
        name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Flag '{0}' is already defined")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(cfgflags::duplicate_flag)))]
    DuplicateFlag(String),

    #[error("Invalid flag name {name:?}: {reason}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(cfgflags::invalid_flag_name),
            help("flag names must also work as `--name` and as an INI key")
        )
    )]
    InvalidFlagName { name: String, reason: &'static str },

    #[error("No such flag: {0}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(cfgflags::no_such_flag)))]
    NoSuchFlag(String),

    #[cfg(feature = "clap")]
    #[error(transparent)]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(cfgflags::args)))]
    Args(#[from] clap::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_line_formats_correctly() {
        let err = CfgFlagsError::MalformedLine {
            line: 7,
            text: "a=b=c".into(),
            found: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("a=b=c"));
        assert!(msg.contains("found 2"));
    }

    #[test]
    fn unknown_flag_formats() {
        let err = CfgFlagsError::UnknownFlag {
            key: "bogus".into(),
            line: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("bogus"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn missing_path_mentions_config_flag() {
        let err = CfgFlagsError::MissingConfigPath;
        assert!(err.to_string().contains("--config"));
    }

    #[test]
    fn invalid_flag_name_formats() {
        let err = CfgFlagsError::InvalidFlagName {
            name: "a b".into(),
            reason: "contains whitespace",
        };
        let msg = err.to_string();
        assert!(msg.contains("\"a b\""));
        assert!(msg.contains("contains whitespace"));
    }

    #[test]
    fn flag_conversion_keeps_source() {
        let err = CfgFlagsError::FlagConversion {
            name: "port".into(),
            source: "not a number".into(),
        };
        assert!(err.to_string().contains("port"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

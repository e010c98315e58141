//! Clap adapter for cfgflags.
//!
//! Compiled only with the `clap` Cargo feature (on by default). It offers two
//! integration paths:
//!
//! - [`FlagSet::parse_from`] builds a `clap::Command` from the registered
//!   flags, parses a command line and records which flags it assigned. This is
//!   what makes the precedence rule work: only those flags are protected from
//!   the configuration file.
//! - [`ConfigArg`] is a derive struct carrying the reserved `--config` flag
//!   for applications that define their own clap parser and implement
//!   [`Registry`] themselves.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, Args, Command};

use crate::error::CfgFlagsError;
use crate::file::resolve_config_path;
use crate::registry::{FlagSet, Registry};

impl FlagSet {
    /// A `clap::Command` with one `--name` option per registered flag.
    ///
    /// Bool flags accept a bare `--name` (true) or `--name=<bool>`; every other
    /// flag takes `--name <value>` or `--name=<value>`, where the value may
    /// start with `-` (`--offset -5`).
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(self.name().to_string());
        if self.lookup("help").is_some() {
            cmd = cmd.disable_help_flag(true);
        }

        for flag in self.iter() {
            let mut arg = Arg::new(flag.name().to_string())
                .long(flag.name().to_string())
                .help(flag.usage().to_string())
                .value_name(flag.value().kind().to_uppercase())
                .action(ArgAction::Set);
            arg = if flag.value().is_bool() {
                arg.num_args(0..=1)
                    .require_equals(true)
                    .default_missing_value("true")
            } else {
                arg.allow_hyphen_values(true)
            };
            cmd = cmd.arg(arg);
        }
        cmd
    }

    /// Parse a command line (program name first) into this set.
    ///
    /// Every flag given on the command line is converted and marked explicitly
    /// set. Unknown arguments and `--help` come back as
    /// [`CfgFlagsError::Args`].
    pub fn parse_from<I, T>(&mut self, args: I) -> Result<(), CfgFlagsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command().try_get_matches_from(args)?;
        let names: Vec<String> = self.all_names().map(str::to_string).collect();

        for name in names {
            if matches.value_source(&name) != Some(ValueSource::CommandLine) {
                continue;
            }
            if let Some(value) = matches.get_one::<String>(&name) {
                self.set(&name, value)?;
            }
        }
        Ok(())
    }

    /// Parse the command line, then fill the remaining flags from the
    /// configuration file (`--config`, else `default_path`).
    pub fn parse_with_config<I, T>(
        &mut self,
        args: I,
        default_path: impl AsRef<Path>,
    ) -> Result<(), CfgFlagsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.parse_from(args)?;
        self.apply(default_path)
    }
}

/// The reserved `--config` flag as a clap derive struct.
///
/// Flatten it into your own parser:
/// ```ignore
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     config: ConfigArg,
/// }
/// ```
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArg {
    /// Configuration file path
    #[arg(long, value_name = "FILE", default_value = "", hide_default_value = true)]
    pub config: String,
}

impl ConfigArg {
    /// The configuration file to load: `--config` if given, else `default_path`.
    pub fn resolve(&self, default_path: impl AsRef<Path>) -> Result<PathBuf, CfgFlagsError> {
        resolve_config_path(&self.config, default_path.as_ref())
    }
}

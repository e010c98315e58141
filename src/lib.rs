//! Fill unset command-line flags from an INI configuration file.
//!
//! A flag given on the command line always wins. Every flag the command line
//! left alone may be set from a configuration file, named either by the
//! reserved `--config` flag or by a default path supplied by the program.
//!
//! ```ignore
//! let mut flags = FlagSet::new("myapp");
//! flags
//!     .define("host", "localhost", "Server host")?
//!     .define("port", 8080, "Server port")?;
//! flags.parse_with_config(std::env::args_os(), "/etc/myapp.ini")?;
//! let port = flags.get_int("port");
//! ```
//!
//! # Precedence
//!
//! ```text
//! Flag defaults          FlagSet::define(name, default, usage)
//!        ↑ overridden by
//! Configuration file     --config <file>, else the default path
//!        ↑ overridden by
//! Command line           --name value
//! ```
//!
//! The command line is parsed first, so the merge knows which flags were
//! given explicitly. Those form no part of the *missing set* and are never
//! touched by the file. Every other flag whose current value differs from the
//! file's value is converted and updated. Running the merge again with the
//! same file changes nothing.
//!
//! # File format
//!
//! ```ini
//! ; comment
//! # also a comment
//! [section]            ; headers are skipped, keys are not scoped
//! host = example.org   # inline comments end unquoted values
//! motto = "keep # and ; inside quotes"
//! ```
//!
//! - Lines are trimmed, then skipped when empty or starting with `;`, `#` or
//!   `[`.
//! - A data line holds exactly one `=`. `novalue` and `a=b=c` are errors.
//! - Unquoted values end at the first `#` or `;`.
//! - Values starting with `"` must be a complete double-quoted literal;
//!   backslash escapes (`\n`, `\t`, `\"`, `\\`, `\xHH`, `\NNN`, `\uHHHH`,
//!   `\UHHHHHHHH`, ...) are decoded.
//! - Values are trimmed after cleaning, quoted ones included.
//! - A key appearing twice keeps its last value.
//!
//! # Strictness
//!
//! Every key in the file must name a registered flag. An unknown key is an
//! error carrying the key and its line number, which catches typos and stale
//! settings at startup:
//!
//! ```text
//! Unknown flag 'hots' in configuration file (line 3)
//! ```
//!
//! Errors stop the load at once. The merge is not transactional: flags
//! updated from earlier lines keep their new values.
//!
//! # Bring your own registry
//!
//! [`apply`], [`merge()`] and [`missing_flags`] are generic over
//! [`Registry`], a small trait for enumerating flags, reading their string
//! form and setting them by name. [`FlagSet`] is the bundled implementation;
//! any other flag store can take part by implementing the trait.
//!
//! # Clap adapter
//!
//! With the `clap` feature (on by default) [`FlagSet::parse_from`] parses a
//! command line through a `clap::Command` built from the registered flags,
//! and [`ConfigArg`] exposes `--config` to derive-based parsers.
//!
//! # Templates
//!
//! [`generate_template`] renders a flag set as a documented configuration
//! file that parses back to the set's current values.
//!
//! # Error handling
//!
//! All fallible operations return [`CfgFlagsError`]. With the `rich-errors`
//! feature the error also implements `miette::Diagnostic`.

pub mod error;
pub mod types;

#[cfg(feature = "clap")]
mod cli;
mod file;
mod flag;
mod merge;
mod parse;
mod registry;
mod resolve;
mod template;
mod unquote;

#[cfg(test)]
mod fixtures;

#[cfg(feature = "clap")]
pub use cli::ConfigArg;
pub use error::CfgFlagsError;
pub use file::{platform_config_path, resolve_config_path};
pub use flag::{Flag, FlagValue, ParseValueError};
pub use merge::{merge, missing_flags};
pub use parse::{parse_file, parse_str};
pub use registry::{CONFIG_FLAG, CONFIG_FLAG_USAGE, FlagSet, Registry, SetValueError};
pub use resolve::apply;
pub use template::generate_template;
pub use types::{Entry, FileMapping};
pub use unquote::{UnquoteError, unquote};

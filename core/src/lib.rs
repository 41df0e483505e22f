//! Composable command-line-argument descriptions and parsing.
//!
//! This crate turns small reusable building blocks into a description of
//! the arguments a program accepts, then parses a raw token list into a
//! strongly shaped value or a well-defined failure:
//!
//! - [`Opt`] — an immutable descriptor for one option: aliases, default and
//!   implicit values, validation checks, custom extraction, help text.
//! - [`Compound`] — a fixed set of descriptors parsed as a unit, built with
//!   the `|` operator; all members must succeed.
//! - [`Command`] / [`CommandSelector`] — named sub-parsers dispatched by
//!   first name match, producing a closed sum ([`Choice1`]..[`Choice6`]).
//! - [`SharedOptions`] — options valid for every subcommand, parsed from
//!   the tokens ahead of the command name.
//! - [`HelpCommand`] — the built-in `--help`/`-h`/`-?` branch producing
//!   [`ShowHelp`].
//! - [`ArgValue`] — the text↔value conversion seam; implement it to carry
//!   your own types in a descriptor.
//!
//! Everything is built once, by value, and never mutated afterwards:
//! parsing is a pure function of the description and the token list, so
//! descriptions can be shared freely across calls and threads.
//!
//! # Example
//!
//! ```
//! use optstack_core::{Choice3, Command, HelpCommand, Opt, Parse, SharedOptions};
//!
//! let shared = Opt::flag("--verbose").describe("Enable verbose output")
//!     | Opt::<u32>::named("--jobs").alias("-j")
//!         .default_to(1u32)
//!         .check(|jobs| *jobs > 0, "--jobs must be positive")
//!         .describe("Number of parallel jobs");
//!
//! let cli = SharedOptions::new(shared)
//!     | Command::new("build", Opt::<String>::named("--target").default_to("debug"))
//!     | Command::new("run", Opt::<String>::named("--bin"))
//!     | HelpCommand;
//!
//! let ((verbose, jobs), command) = cli
//!     .parse(&["--jobs=4", "build", "--target=release"])
//!     .unwrap();
//! assert!(!verbose);
//! assert_eq!(jobs, 4);
//! match command {
//!     Choice3::First(target) => assert_eq!(target, "release"),
//!     _ => panic!("expected the build command"),
//! }
//! ```

mod command;
mod compound;
mod error;
mod help;
mod opt;
mod parse;
mod shared;
mod value;

pub use command::{
    Choice1, Choice2, Choice3, Choice4, Choice5, Choice6, Command, CommandSelector, CommandSet,
    HELP_TOKENS, HelpCommand, ShowHelp, Subcommand,
};
pub use compound::{Compound, OptionSet};
pub use error::{ParseError, Result};
pub use help::{Describe, HELP_COLUMN, HelpEntry, render_entries};
pub use opt::Opt;
pub use parse::Parse;
pub use shared::{CommandWithSharedOptions, SharedOptions};
pub use value::ArgValue;

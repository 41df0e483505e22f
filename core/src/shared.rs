//! Options shared by every subcommand, parsed ahead of dispatch.
//!
//! [`SharedOptions`] wraps a parser for the options that are valid
//! regardless of which subcommand runs; composing it with commands via `|`
//! yields a [`CommandWithSharedOptions`] whose result is the pair
//! `(shared result, selected-command result)`.
//!
//! The argument list is split at the first token that matches any member
//! command name: tokens before it form the shared-option region, the
//! matching token onward forms the command region. The shared parser sees
//! only its region, so a subcommand's `alias=value` tokens can never
//! satisfy a shared option. Absence of any command token, including an
//! empty list, is a failure.

use std::ops::BitOr;

use tracing::trace;

use crate::command::{CommandSelector, CommandSet, Subcommand};
use crate::error::{ParseError, Result};
use crate::parse::Parse;

/// Starter for coupling shared options with commands.
///
/// # Examples
///
/// ```
/// use optstack_core::{Choice2, Command, Opt, Parse, SharedOptions};
///
/// let cli = SharedOptions::new(Opt::flag("--verbose"))
///     | Command::new("build", Opt::flag("--release"))
///     | Command::new("run", Opt::<String>::named("--bin"));
///
/// let (verbose, command) = cli.parse(&["--verbose", "run", "--bin=app"]).unwrap();
/// assert!(verbose);
/// match command {
///     Choice2::Second(bin) => assert_eq!(bin, "app"),
///     Choice2::First(_) => panic!("dispatched to the wrong command"),
/// }
/// ```
#[derive(Clone)]
pub struct SharedOptions<P> {
    parser: P,
}

impl<P: Parse> SharedOptions<P> {
    /// Wraps the parser for options every subcommand accepts.
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

/// Shared options coupled with a command selector.
///
/// Built by composing a [`SharedOptions`] with commands via `|`, or
/// directly from a parser and a selector with
/// [`new`](CommandWithSharedOptions::new).
#[derive(Clone)]
pub struct CommandWithSharedOptions<P, C> {
    shared: P,
    commands: CommandSelector<C>,
}

impl<P: Parse, C: CommandSet> CommandWithSharedOptions<P, C> {
    /// Couples a shared-option parser with an existing selector.
    pub fn new(shared: P, commands: CommandSelector<C>) -> Self {
        Self { shared, commands }
    }
}

impl<P: Parse, C: CommandSet> Parse for CommandWithSharedOptions<P, C> {
    type Output = (P::Output, C::Output);

    /// Splits at the first token any member command matches, parses the
    /// shared region, then dispatches the command region.
    fn parse(&self, args: &[&str]) -> Result<(P::Output, C::Output)> {
        let split = args
            .iter()
            .position(|&token| self.commands.matches(token))
            .ok_or(ParseError::MissingCommand)?;
        trace!(split, "splitting shared options from command tokens");

        let shared = self.shared.parse(&args[..split])?;
        let command = self.commands.parse(&args[split..])?;
        Ok((shared, command))
    }
}

impl<P: Parse, R: Subcommand> BitOr<R> for SharedOptions<P> {
    type Output = CommandWithSharedOptions<P, (R,)>;

    fn bitor(self, rhs: R) -> CommandWithSharedOptions<P, (R,)> {
        CommandWithSharedOptions {
            shared: self.parser,
            commands: CommandSelector::new((rhs,)),
        }
    }
}

macro_rules! impl_shared_extend {
    ($($member:ident . $idx:tt),+) => {
        impl<P: Parse, $($member: Subcommand,)+ R: Subcommand> BitOr<R>
            for CommandWithSharedOptions<P, ($($member,)+)>
        {
            type Output = CommandWithSharedOptions<P, ($($member,)+ R,)>;

            fn bitor(self, rhs: R) -> CommandWithSharedOptions<P, ($($member,)+ R,)> {
                let members = self.commands.into_commands();
                CommandWithSharedOptions {
                    shared: self.shared,
                    commands: CommandSelector::new(($(members.$idx,)+ rhs,)),
                }
            }
        }
    };
}

impl_shared_extend!(A.0);
impl_shared_extend!(A.0, B.1);
impl_shared_extend!(A.0, B.1, C.2);
impl_shared_extend!(A.0, B.1, C.2, D.3);
impl_shared_extend!(A.0, B.1, C.2, D.3, E.4);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Choice1, Choice2, Command, HelpCommand, ShowHelp};
    use crate::opt::Opt;

    fn cli() -> impl Parse<Output = ((bool, u32), Choice2<bool, String>)> {
        let shared = Opt::flag("--verbose") | Opt::<u32>::named("--jobs").default_to(1u32);
        SharedOptions::new(shared)
            | Command::new("build", Opt::flag("--release"))
            | Command::new("run", Opt::<String>::named("--bin"))
    }

    #[test]
    fn test_shared_options_split_before_command_token() {
        let ((verbose, jobs), command) = cli()
            .parse(&["--jobs=4", "run", "--bin=app"])
            .unwrap();
        assert!(!verbose);
        assert_eq!(jobs, 4);
        assert_eq!(command, Choice2::Second("app".to_string()));
    }

    #[test]
    fn test_shared_options_split_ignores_tokens_after_command() {
        // --verbose appears only in the command region, so the shared
        // parser never sees it and falls back to its default.
        let ((verbose, _), _) = cli()
            .parse(&["build", "--verbose", "--release"])
            .unwrap();
        assert!(!verbose);
    }

    #[test]
    fn test_missing_command_token_fails() {
        assert_eq!(
            cli().parse(&["--verbose"]).map(|_| ()),
            Err(ParseError::MissingCommand)
        );
        assert_eq!(cli().parse(&[]).map(|_| ()), Err(ParseError::MissingCommand));
    }

    #[test]
    fn test_shared_region_failure_fails_the_whole_parse() {
        assert_eq!(
            cli().parse(&["--jobs=many", "build"]).map(|_| ()),
            Err(ParseError::InvalidValue("many".to_string()))
        );
    }

    #[test]
    fn test_single_command_coupling() {
        let cli = SharedOptions::new(Opt::flag("--quiet"))
            | Command::new("sync", Opt::flag("--force"));
        assert_eq!(
            cli.parse(&["--quiet", "sync", "--force"]),
            Ok((true, Choice1::First(true)))
        );
    }

    #[test]
    fn test_help_requested_instead_of_subcommand() {
        let cli = SharedOptions::new(Opt::flag("--verbose"))
            | Command::new("build", Opt::flag("--release"))
            | HelpCommand;
        let (_, command) = cli.parse(&["--help"]).unwrap();
        assert_eq!(command, Choice2::Second(ShowHelp));
    }
}

//! Named subcommands and first-match dispatch.
//!
//! A [`Command`] binds a name to a sub-parser and consumes the leading
//! token before delegating. A [`CommandSelector`] holds a fixed, ordered
//! tuple of commands and dispatches to the first whose name equals the
//! first token, wrapping the result in the corresponding variant of a
//! closed sum type ([`Choice1`]..[`Choice6`]). Selectors are built with the
//! `|` operator and nest: a selector is itself a command branch, and a
//! command's sub-parser may be another selector.
//!
//! [`HelpCommand`] recognizes the canonical help tokens and always succeeds
//! with the [`ShowHelp`] marker, so help can be requested in place of any
//! subcommand.

use std::ops::BitOr;

use tracing::debug;

use crate::error::{ParseError, Result};
use crate::parse::Parse;

/// Tokens recognized by [`HelpCommand`].
pub const HELP_TOKENS: &[&str] = &["--help", "-h", "-?"];

/// A parser that can also be selected by its leading token.
///
/// Implemented by [`Command`], [`HelpCommand`], and [`CommandSelector`]
/// (a nested selector matches when any of its members match).
pub trait Subcommand: Parse {
    /// Whether this branch is selected by the given token.
    fn matches(&self, token: &str) -> bool;
}

/// A name bound to a sub-parser.
///
/// Parsing discards the leading token (the name that selected this
/// command) and delegates the remaining tokens to the sub-parser.
///
/// # Examples
///
/// ```
/// use optstack_core::{Command, Opt, Parse, Subcommand};
///
/// let run = Command::new("run", Opt::<String>::named("--bin"));
/// assert!(run.matches("run"));
/// assert!(!run.matches("runner"));
/// assert_eq!(run.parse(&["run", "--bin=app"]), Ok("app".to_string()));
/// ```
#[derive(Clone)]
pub struct Command<P> {
    name: String,
    parser: P,
}

impl<P: Parse> Command<P> {
    /// Binds `name` to `parser`.
    pub fn new(name: impl Into<String>, parser: P) -> Self {
        Self {
            name: name.into(),
            parser,
        }
    }

    /// The name this command is selected by.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<P: Parse> Parse for Command<P> {
    type Output = P::Output;

    fn parse(&self, args: &[&str]) -> Result<P::Output> {
        let rest = args.get(1..).unwrap_or(&[]);
        self.parser.parse(rest)
    }
}

impl<P: Parse> Subcommand for Command<P> {
    fn matches(&self, token: &str) -> bool {
        token == self.name
    }
}

/// Marker produced when help was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowHelp;

/// The built-in help command: matches [`HELP_TOKENS`] and always succeeds
/// with [`ShowHelp`], regardless of any further tokens.
///
/// # Examples
///
/// ```
/// use optstack_core::{HelpCommand, Parse, ShowHelp, Subcommand};
///
/// let help = HelpCommand;
/// assert!(help.matches("--help"));
/// assert!(help.matches("-?"));
/// assert_eq!(help.parse(&["--help", "whatever"]), Ok(ShowHelp));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpCommand;

impl Parse for HelpCommand {
    type Output = ShowHelp;

    fn parse(&self, _args: &[&str]) -> Result<ShowHelp> {
        Ok(ShowHelp)
    }
}

impl Subcommand for HelpCommand {
    fn matches(&self, token: &str) -> bool {
        HELP_TOKENS.contains(&token)
    }
}

/// Result of a one-command selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice1<A> {
    /// The first declared command ran.
    First(A),
}

/// Result of a two-command selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice2<A, B> {
    /// The first declared command ran.
    First(A),
    /// The second declared command ran.
    Second(B),
}

/// Result of a three-command selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice3<A, B, C> {
    /// The first declared command ran.
    First(A),
    /// The second declared command ran.
    Second(B),
    /// The third declared command ran.
    Third(C),
}

/// Result of a four-command selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice4<A, B, C, D> {
    /// The first declared command ran.
    First(A),
    /// The second declared command ran.
    Second(B),
    /// The third declared command ran.
    Third(C),
    /// The fourth declared command ran.
    Fourth(D),
}

/// Result of a five-command selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice5<A, B, C, D, E> {
    /// The first declared command ran.
    First(A),
    /// The second declared command ran.
    Second(B),
    /// The third declared command ran.
    Third(C),
    /// The fourth declared command ran.
    Fourth(D),
    /// The fifth declared command ran.
    Fifth(E),
}

/// Result of a six-command selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice6<A, B, C, D, E, F> {
    /// The first declared command ran.
    First(A),
    /// The second declared command ran.
    Second(B),
    /// The third declared command ran.
    Third(C),
    /// The fourth declared command ran.
    Fourth(D),
    /// The fifth declared command ran.
    Fifth(E),
    /// The sixth declared command ran.
    Sixth(F),
}

/// A fixed tuple of command branches dispatched by first name match.
///
/// Implemented for tuples of one through six [`Subcommand`]s.
pub trait CommandSet {
    /// Closed sum over every member's output, one variant per member.
    type Output;

    /// Whether any member matches the token.
    fn matches_any(&self, token: &str) -> bool;

    /// Dispatches to the first member matching the leading token.
    fn dispatch(&self, args: &[&str]) -> Result<Self::Output>;
}

macro_rules! impl_command_set {
    ($choice:ident: $(($member:ident, $idx:tt, $variant:ident)),+) => {
        impl<$($member: Subcommand),+> CommandSet for ($($member,)+) {
            type Output = $choice<$($member::Output),+>;

            fn matches_any(&self, token: &str) -> bool {
                false $(|| self.$idx.matches(token))+
            }

            fn dispatch(&self, args: &[&str]) -> Result<Self::Output> {
                let Some(&token) = args.first() else {
                    return Err(ParseError::MissingCommand);
                };
                $(
                    if self.$idx.matches(token) {
                        debug!(token, "dispatching to subcommand");
                        return self.$idx.parse(args).map($choice::$variant);
                    }
                )+
                debug!(token, "no subcommand matched");
                Err(ParseError::UnknownCommand(token.to_string()))
            }
        }
    };
}

impl_command_set!(Choice1: (A, 0, First));
impl_command_set!(Choice2: (A, 0, First), (B, 1, Second));
impl_command_set!(Choice3: (A, 0, First), (B, 1, Second), (C, 2, Third));
impl_command_set!(Choice4: (A, 0, First), (B, 1, Second), (C, 2, Third), (D, 3, Fourth));
impl_command_set!(
    Choice5: (A, 0, First), (B, 1, Second), (C, 2, Third), (D, 3, Fourth), (E, 4, Fifth)
);
impl_command_set!(
    Choice6: (A, 0, First), (B, 1, Second), (C, 2, Third), (D, 3, Fourth), (E, 4, Fifth),
    (F, 5, Sixth)
);

/// An ordered, fixed collection of commands dispatched by first name match.
///
/// Membership and order are fixed at construction. An empty argument list
/// is a failure (the subcommand token is mandatory), an unmatched first
/// token is a failure, and with duplicate names the first declared wins.
///
/// # Examples
///
/// ```
/// use optstack_core::{Choice2, Command, Opt, Parse};
///
/// let tool = Command::new("build", Opt::flag("--release"))
///     | Command::new("run", Opt::<String>::named("--bin"));
///
/// match tool.parse(&["run", "--bin=app"]).unwrap() {
///     Choice2::Second(bin) => assert_eq!(bin, "app"),
///     Choice2::First(_) => panic!("dispatched to the wrong command"),
/// }
/// ```
#[derive(Clone)]
pub struct CommandSelector<C> {
    commands: C,
}

impl<C: CommandSet> CommandSelector<C> {
    /// Wraps a command tuple directly, for shapes the `|` operator chain
    /// does not cover (including a selector nested as a member).
    pub fn new(commands: C) -> Self {
        Self { commands }
    }

    pub(crate) fn into_commands(self) -> C {
        self.commands
    }
}

impl<C: CommandSet> Parse for CommandSelector<C> {
    type Output = C::Output;

    fn parse(&self, args: &[&str]) -> Result<C::Output> {
        if args.is_empty() {
            return Err(ParseError::MissingCommand);
        }
        self.commands.dispatch(args)
    }
}

impl<C: CommandSet> Subcommand for CommandSelector<C> {
    /// True when any member matches; dispatch recomputes its own first
    /// match independently.
    fn matches(&self, token: &str) -> bool {
        self.commands.matches_any(token)
    }
}

impl<P: Parse, R: Subcommand> BitOr<R> for Command<P> {
    type Output = CommandSelector<(Command<P>, R)>;

    fn bitor(self, rhs: R) -> CommandSelector<(Command<P>, R)> {
        CommandSelector::new((self, rhs))
    }
}

impl<R: Subcommand> BitOr<R> for HelpCommand {
    type Output = CommandSelector<(HelpCommand, R)>;

    fn bitor(self, rhs: R) -> CommandSelector<(HelpCommand, R)> {
        CommandSelector::new((self, rhs))
    }
}

macro_rules! impl_selector_extend {
    ($($member:ident . $idx:tt),+) => {
        impl<$($member: Subcommand,)+ R: Subcommand> BitOr<R>
            for CommandSelector<($($member,)+)>
        {
            type Output = CommandSelector<($($member,)+ R,)>;

            fn bitor(self, rhs: R) -> CommandSelector<($($member,)+ R,)> {
                CommandSelector::new(($(self.commands.$idx,)+ rhs,))
            }
        }
    };
}

impl_selector_extend!(A.0);
impl_selector_extend!(A.0, B.1);
impl_selector_extend!(A.0, B.1, C.2);
impl_selector_extend!(A.0, B.1, C.2, D.3);
impl_selector_extend!(A.0, B.1, C.2, D.3, E.4);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opt::Opt;

    fn build_or_run() -> CommandSelector<(Command<Opt<bool>>, Command<Opt<String>>)> {
        Command::new("build", Opt::flag("--release"))
            | Command::new("run", Opt::<String>::named("--bin"))
    }

    #[test]
    fn test_dispatch_by_first_token() {
        let tool = build_or_run();
        assert_eq!(
            tool.parse(&["build", "--release"]),
            Ok(Choice2::First(true))
        );
        assert_eq!(
            tool.parse(&["run", "--bin=app"]),
            Ok(Choice2::Second("app".to_string()))
        );
    }

    #[test]
    fn test_empty_argument_list_fails() {
        let tool = build_or_run();
        assert_eq!(tool.parse(&[]), Err(ParseError::MissingCommand));
    }

    #[test]
    fn test_unknown_subcommand_fails() {
        let tool = build_or_run();
        assert_eq!(
            tool.parse(&["clean"]),
            Err(ParseError::UnknownCommand("clean".to_string()))
        );
    }

    #[test]
    fn test_duplicate_names_first_declared_wins() {
        let twice = Command::new("go", Opt::<u32>::named("--a").default_to(1u32))
            | Command::new("go", Opt::<u32>::named("--a").default_to(2u32));
        assert_eq!(twice.parse(&["go"]), Ok(Choice2::First(1)));
    }

    #[test]
    fn test_subcommand_failure_propagates() {
        let tool = build_or_run();
        // "run" matches, but its sub-parser requires --bin.
        assert_eq!(tool.parse(&["run"]), Err(ParseError::MissingOption));
    }

    #[test]
    fn test_help_command_always_succeeds() {
        let tool = build_or_run() | HelpCommand;
        assert_eq!(tool.parse(&["--help"]), Ok(Choice3::Third(ShowHelp)));
        assert_eq!(
            tool.parse(&["-?", "build", "junk"]),
            Ok(Choice3::Third(ShowHelp))
        );
    }

    #[test]
    fn test_nested_selector_matches_any_member() {
        let inner = Command::new("add", Opt::<String>::named("--url"))
            | Command::new("remove", Opt::<String>::named("--name"));
        let outer = CommandSelector::new((Command::new("fetch", Opt::flag("--all")), inner));

        assert_eq!(
            outer.parse(&["remove", "--name=origin"]),
            Ok(Choice2::Second(Choice2::Second("origin".to_string())))
        );
        assert_eq!(
            outer.parse(&["status"]),
            Err(ParseError::UnknownCommand("status".to_string()))
        );
    }

    #[test]
    fn test_named_command_group_with_selector_parser() {
        // A selector as a command's sub-parser: `remote add --url=…`.
        let remote_actions = Command::new("add", Opt::<String>::named("--url"))
            | Command::new("rm", Opt::<String>::named("--name"));
        let remote = Command::new("remote", remote_actions);

        assert_eq!(
            remote.parse(&["remote", "add", "--url=https://example.com"]),
            Ok(Choice2::First("https://example.com".to_string()))
        );
    }

    #[test]
    fn test_command_with_empty_remainder_delegates_empty_slice() {
        let build = Command::new("build", Opt::flag("--release"));
        assert_eq!(build.parse(&["build"]), Ok(false));
    }
}

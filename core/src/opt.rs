//! Option descriptors: recognize one argument form and produce its value.
//!
//! An [`Opt`] is built once through chained, value-returning builder steps
//! and never mutated afterwards, so a finished descriptor can be reused
//! across any number of parse calls. Capabilities are layered one at a
//! time:
//!
//! - [`alias`](Opt::alias) — one more recognized token (repeatable)
//! - [`default_to`](Opt::default_to) — value when the option never appears
//! - [`implicitly`](Opt::implicitly) — value when the alias appears bare
//! - [`check`](Opt::check) — validation predicate with a diagnostic message
//! - [`extract_with`](Opt::extract_with) — replace text-to-value conversion
//! - [`hint`](Opt::hint) / [`describe`](Opt::describe) — help text
//!
//! `describe`, `default_to`, and `implicitly` may each be applied at most
//! once; applying them twice is a construction-time panic.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{ParseError, Result};
use crate::help::{Describe, HelpEntry};
use crate::parse::Parse;
use crate::value::ArgValue;

type Extractor<T> = dyn Fn(&str) -> Option<T> + Send + Sync;
type Predicate<T> = dyn Fn(&T) -> bool + Send + Sync;

struct Check<T> {
    predicate: Arc<Predicate<T>>,
    message: String,
}

impl<T> Clone for Check<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            message: self.message.clone(),
        }
    }
}

/// Immutable description of one command-line option.
///
/// A token matches an alias exactly (flag form) or as `alias=value`. Parsing
/// scans the full argument list and consults only the first matching token;
/// later duplicates are ignored.
///
/// Descriptors are cheap to clone (stored closures are shared), so one
/// sub-description can be reused in multiple larger descriptions.
///
/// # Examples
///
/// ```
/// use optstack_core::{Opt, Parse, ParseError};
///
/// let count = Opt::<u32>::named("--count")
///     .default_to(0u32)
///     .check(|count| *count <= 100, "--count accepts at most 100")
///     .describe("How many times to run");
///
/// assert_eq!(count.parse(&["--count=5"]), Ok(5));
/// assert_eq!(count.parse(&[]), Ok(0));
/// assert_eq!(
///     count.parse(&["--count=500"]),
///     Err(ParseError::Rejected("--count accepts at most 100".to_string()))
/// );
/// ```
pub struct Opt<T: ArgValue> {
    aliases: Vec<String>,
    description: Option<String>,
    hint: Option<String>,
    default: Option<T>,
    implicit: Option<T>,
    checks: Vec<Check<T>>,
    extractor: Option<Arc<Extractor<T>>>,
}

impl<T: ArgValue> Clone for Opt<T> {
    fn clone(&self) -> Self {
        Self {
            aliases: self.aliases.clone(),
            description: self.description.clone(),
            hint: self.hint.clone(),
            default: self.default.clone(),
            implicit: self.implicit.clone(),
            checks: self.checks.clone(),
            extractor: self.extractor.clone(),
        }
    }
}

impl<T: ArgValue> Opt<T> {
    /// Creates a descriptor with no aliases. It never matches anything
    /// until at least one [`alias`](Opt::alias) is added.
    pub fn new() -> Self {
        Self {
            aliases: Vec::new(),
            description: None,
            hint: None,
            default: None,
            implicit: None,
            checks: Vec::new(),
            extractor: None,
        }
    }

    /// Creates a descriptor with one alias.
    pub fn named(alias: impl Into<String>) -> Self {
        Self::new().alias(alias)
    }

    /// Adds one more recognized alias. Aliases are tested in the order
    /// they were added.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Attaches the description used in help output.
    ///
    /// # Panics
    ///
    /// Panics if a description is already attached.
    pub fn describe(mut self, text: impl Into<String>) -> Self {
        assert!(self.description.is_none(), "option already has a description");
        self.description = Some(text.into());
        self
    }

    /// Sets the value produced when no alias appears in the input.
    ///
    /// # Panics
    ///
    /// Panics if a default value is already set.
    pub fn default_to(mut self, value: impl Into<T>) -> Self {
        assert!(self.default.is_none(), "option already has a default value");
        self.default = Some(value.into());
        self
    }

    /// Sets the value produced when an alias appears in bare flag form.
    /// The implicit path skips conversion and checks entirely.
    ///
    /// # Panics
    ///
    /// Panics if an implicit value is already set.
    pub fn implicitly(mut self, value: impl Into<T>) -> Self {
        assert!(self.implicit.is_none(), "option already has an implicit value");
        self.implicit = Some(value.into());
        self
    }

    /// Adds a validation check with its diagnostic message. Checks run in
    /// the order added, after successful extraction, short-circuiting on
    /// the first rejection.
    pub fn check(
        mut self,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        self.checks.push(Check {
            predicate: Arc::new(predicate),
            message: message.into(),
        });
        self
    }

    /// Replaces text-to-value conversion with a custom extractor. The
    /// extractor becomes the sole conversion rule; setting another one
    /// replaces the previous.
    pub fn extract_with(
        mut self,
        extractor: impl Fn(&str) -> Option<T> + Send + Sync + 'static,
    ) -> Self {
        self.extractor = Some(Arc::new(extractor));
        self
    }

    /// Overrides the value hint shown in help output in place of the value
    /// type's name.
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Matches a token against the aliases, returning the remainder text:
    /// empty for an exact (flag form) match, the text after `=` for a
    /// valued match, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use optstack_core::Opt;
    ///
    /// let jobs = Opt::<u32>::named("--jobs").alias("-j");
    /// assert_eq!(jobs.matches("--jobs"), Some(""));
    /// assert_eq!(jobs.matches("-j=4"), Some("4"));
    /// assert_eq!(jobs.matches("--jobsx"), None);
    /// ```
    pub fn matches<'a>(&self, token: &'a str) -> Option<&'a str> {
        for alias in &self.aliases {
            if token == alias {
                return Some("");
            }
            if let Some(rest) = token.strip_prefix(alias.as_str()) {
                if let Some(value) = rest.strip_prefix('=') {
                    return Some(value);
                }
            }
        }
        None
    }

    fn extract(&self, text: &str) -> Option<T> {
        match &self.extractor {
            Some(extractor) => extractor(text),
            None => T::parse_text(text),
        }
    }
}

impl<T: ArgValue> Default for Opt<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl Opt<bool> {
    /// The canonical boolean flag: defaults to `false`, a bare occurrence
    /// yields `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use optstack_core::{Opt, Parse};
    ///
    /// let verbose = Opt::flag("--verbose");
    /// assert_eq!(verbose.parse(&["--verbose"]), Ok(true));
    /// assert_eq!(verbose.parse(&[]), Ok(false));
    /// ```
    pub fn flag(alias: impl Into<String>) -> Self {
        Opt::named(alias).default_to(false).implicitly(true)
    }
}

impl<T: ArgValue> Parse for Opt<T> {
    type Output = T;

    /// Scans left to right and consults only the first matching token.
    /// A bare match with a configured implicit value short-circuits past
    /// conversion and checks; any other match must extract and pass every
    /// check. No match falls back to the default, if any.
    fn parse(&self, args: &[&str]) -> Result<T> {
        for &token in args {
            let Some(remainder) = self.matches(token) else {
                continue;
            };
            trace!(token, "token matched option alias");

            if remainder.is_empty() {
                if let Some(implicit) = &self.implicit {
                    return Ok(implicit.clone());
                }
            }

            let value = self
                .extract(remainder)
                .ok_or_else(|| ParseError::InvalidValue(remainder.to_string()))?;

            for check in &self.checks {
                if !(check.predicate)(&value) {
                    debug!(message = %check.message, "value rejected by check");
                    return Err(ParseError::Rejected(check.message.clone()));
                }
            }

            return Ok(value);
        }

        match &self.default {
            Some(value) => Ok(value.clone()),
            None => Err(ParseError::MissingOption),
        }
    }
}

impl<T: ArgValue> Describe for Opt<T> {
    fn help_entry(&self) -> HelpEntry {
        HelpEntry {
            aliases: self.aliases.clone(),
            hint: self
                .hint
                .clone()
                .unwrap_or_else(|| T::TYPE_HINT.to_string()),
            description: self.description.clone().unwrap_or_default(),
            default: self.default.as_ref().map(ArgValue::to_text),
            implicit: self.implicit.as_ref().map(ArgValue::to_text),
        }
    }
}

impl<T: ArgValue> Opt<T> {
    /// Renders this descriptor's help entry as text.
    pub fn help_text(&self) -> String {
        self.help_entry().render()
    }
}

//! Aggregation of independent option descriptors into one parser.
//!
//! A [`Compound`] holds a fixed tuple of descriptors and parses each of
//! them independently against the full argument list, succeeding with the
//! tuple of every member's value only when every member succeeds. Compounds
//! are built with the `|` operator, which flattens descriptors and other
//! compounds into one tuple up to eight members; [`Compound::new`] accepts
//! a member tuple directly.
//!
//! Member order is fixed at construction and significant for help display
//! and for which member's error surfaces first; matching itself is
//! member-order-independent because every member scans the same full list.

use std::ops::BitOr;

use crate::error::Result;
use crate::help::{Describe, HelpEntry, render_entries};
use crate::opt::Opt;
use crate::parse::Parse;
use crate::value::ArgValue;

/// A fixed tuple of option descriptors parsed as a unit.
///
/// Implemented for tuples of one through eight members; each member must
/// parse the full argument list and describe itself for help output.
pub trait OptionSet {
    /// Tuple of every member's output, in member order.
    type Output;

    /// Parses every member independently; fails on the first member (in
    /// declaration order) that fails.
    fn parse_members(&self, args: &[&str]) -> Result<Self::Output>;

    /// Appends every member's help entry, in member order.
    fn collect_help(&self, entries: &mut Vec<HelpEntry>);
}

macro_rules! impl_option_set {
    ($($member:ident . $idx:tt),+) => {
        impl<$($member: Parse + Describe),+> OptionSet for ($($member,)+) {
            type Output = ($($member::Output,)+);

            fn parse_members(&self, args: &[&str]) -> Result<Self::Output> {
                Ok(($(self.$idx.parse(args)?,)+))
            }

            fn collect_help(&self, entries: &mut Vec<HelpEntry>) {
                $(entries.push(self.$idx.help_entry());)+
            }
        }
    };
}

impl_option_set!(A.0);
impl_option_set!(A.0, B.1);
impl_option_set!(A.0, B.1, C.2);
impl_option_set!(A.0, B.1, C.2, D.3);
impl_option_set!(A.0, B.1, C.2, D.3, E.4);
impl_option_set!(A.0, B.1, C.2, D.3, E.4, F.5);
impl_option_set!(A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_option_set!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);

/// An unordered, fixed collection of option descriptors whose results are
/// combined into one aggregate tuple.
///
/// # Examples
///
/// ```
/// use optstack_core::{Opt, Parse};
///
/// let options = Opt::flag("--verbose")
///     | Opt::<u32>::named("--jobs").default_to(1u32)
///     | Opt::<String>::named("--target").default_to("debug");
///
/// let (verbose, jobs, target) = options.parse(&["--jobs=4"]).unwrap();
/// assert!(!verbose);
/// assert_eq!(jobs, 4);
/// assert_eq!(target, "debug");
/// ```
#[derive(Clone)]
pub struct Compound<S> {
    members: S,
}

impl<S: OptionSet> Compound<S> {
    /// Wraps a member tuple directly, for arities the `|` operator chain
    /// does not cover.
    pub fn new(members: S) -> Self {
        Self { members }
    }

    /// Consumes the compound and returns the member tuple.
    pub fn into_members(self) -> S {
        self.members
    }

    /// Structured help entries for every member, in declaration order.
    pub fn help_entries(&self) -> Vec<HelpEntry> {
        let mut entries = Vec::new();
        self.members.collect_help(&mut entries);
        entries
    }

    /// Help text for every member, concatenated in declaration order.
    /// Rendering never fails.
    pub fn help_text(&self) -> String {
        render_entries(&self.help_entries())
    }

    /// The help entries serialized as pretty-printed JSON.
    pub fn help_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.help_entries())
    }
}

impl<S: OptionSet> Parse for Compound<S> {
    type Output = S::Output;

    /// Succeeds with every member's value iff every member succeeds;
    /// otherwise surfaces the first failing member's error.
    fn parse(&self, args: &[&str]) -> Result<S::Output> {
        self.members.parse_members(args)
    }
}

impl<T: ArgValue, U: ArgValue> BitOr<Opt<U>> for Opt<T> {
    type Output = Compound<(Opt<T>, Opt<U>)>;

    fn bitor(self, rhs: Opt<U>) -> Compound<(Opt<T>, Opt<U>)> {
        Compound::new((self, rhs))
    }
}

macro_rules! impl_compound_extend {
    ($($member:ident . $idx:tt),+) => {
        impl<$($member: Parse + Describe,)+ T: ArgValue> BitOr<Opt<T>>
            for Compound<($($member,)+)>
        {
            type Output = Compound<($($member,)+ Opt<T>,)>;

            fn bitor(self, rhs: Opt<T>) -> Compound<($($member,)+ Opt<T>,)> {
                Compound::new(($(self.members.$idx,)+ rhs,))
            }
        }

        impl<$($member: Parse + Describe,)+ T: ArgValue> BitOr<Compound<($($member,)+)>>
            for Opt<T>
        {
            type Output = Compound<(Opt<T>, $($member,)+)>;

            fn bitor(self, rhs: Compound<($($member,)+)>) -> Compound<(Opt<T>, $($member,)+)> {
                Compound::new((self, $(rhs.members.$idx,)+))
            }
        }
    };
}

impl_compound_extend!(A.0);
impl_compound_extend!(A.0, B.1);
impl_compound_extend!(A.0, B.1, C.2);
impl_compound_extend!(A.0, B.1, C.2, D.3);
impl_compound_extend!(A.0, B.1, C.2, D.3, E.4);
impl_compound_extend!(A.0, B.1, C.2, D.3, E.4, F.5);
impl_compound_extend!(A.0, B.1, C.2, D.3, E.4, F.5, G.6);

macro_rules! impl_compound_concat {
    (($($a:ident . $ai:tt),+) | ($($b:ident . $bi:tt),+)) => {
        impl<$($a: Parse + Describe,)+ $($b: Parse + Describe),+>
            BitOr<Compound<($($b,)+)>> for Compound<($($a,)+)>
        {
            type Output = Compound<($($a,)+ $($b,)+)>;

            fn bitor(self, rhs: Compound<($($b,)+)>) -> Compound<($($a,)+ $($b,)+)> {
                Compound::new(($(self.members.$ai,)+ $(rhs.members.$bi,)+))
            }
        }
    };
}

impl_compound_concat!((A.0) | (B.0));
impl_compound_concat!((A.0) | (B.0, C.1));
impl_compound_concat!((A.0) | (B.0, C.1, D.2));
impl_compound_concat!((A.0) | (B.0, C.1, D.2, E.3));
impl_compound_concat!((A.0) | (B.0, C.1, D.2, E.3, F.4));
impl_compound_concat!((A.0) | (B.0, C.1, D.2, E.3, F.4, G.5));
impl_compound_concat!((A.0) | (B.0, C.1, D.2, E.3, F.4, G.5, H.6));
impl_compound_concat!((A.0, B.1) | (C.0));
impl_compound_concat!((A.0, B.1) | (C.0, D.1));
impl_compound_concat!((A.0, B.1) | (C.0, D.1, E.2));
impl_compound_concat!((A.0, B.1) | (C.0, D.1, E.2, F.3));
impl_compound_concat!((A.0, B.1) | (C.0, D.1, E.2, F.3, G.4));
impl_compound_concat!((A.0, B.1) | (C.0, D.1, E.2, F.3, G.4, H.5));
impl_compound_concat!((A.0, B.1, C.2) | (D.0));
impl_compound_concat!((A.0, B.1, C.2) | (D.0, E.1));
impl_compound_concat!((A.0, B.1, C.2) | (D.0, E.1, F.2));
impl_compound_concat!((A.0, B.1, C.2) | (D.0, E.1, F.2, G.3));
impl_compound_concat!((A.0, B.1, C.2) | (D.0, E.1, F.2, G.3, H.4));
impl_compound_concat!((A.0, B.1, C.2, D.3) | (E.0));
impl_compound_concat!((A.0, B.1, C.2, D.3) | (E.0, F.1));
impl_compound_concat!((A.0, B.1, C.2, D.3) | (E.0, F.1, G.2));
impl_compound_concat!((A.0, B.1, C.2, D.3) | (E.0, F.1, G.2, H.3));
impl_compound_concat!((A.0, B.1, C.2, D.3, E.4) | (F.0));
impl_compound_concat!((A.0, B.1, C.2, D.3, E.4) | (F.0, G.1));
impl_compound_concat!((A.0, B.1, C.2, D.3, E.4) | (F.0, G.1, H.2));
impl_compound_concat!((A.0, B.1, C.2, D.3, E.4, F.5) | (G.0));
impl_compound_concat!((A.0, B.1, C.2, D.3, E.4, F.5) | (G.0, H.1));
impl_compound_concat!((A.0, B.1, C.2, D.3, E.4, F.5, G.6) | (H.0));

//! The parser abstraction shared by every composable piece.

use crate::error::Result;

/// A parser over a full argument list.
///
/// Implemented by option descriptors, compounds, commands, selectors, and
/// shared-option couplings. Parsing is a pure function of the immutable
/// configuration and the token slice: no state is carried between calls, so
/// one value can serve any number of parses, concurrently if desired.
///
/// The slice is process-style `argv` with the program name already removed;
/// command dispatch shifts the window by one element per nesting level.
///
/// # Examples
///
/// ```
/// use optstack_core::{Opt, Parse};
///
/// let count = Opt::<u32>::named("--count").default_to(0u32);
/// assert_eq!(count.parse(&["--count=5"]), Ok(5));
/// assert_eq!(count.parse(&[]), Ok(0));
/// ```
pub trait Parse {
    /// The strongly shaped value a successful parse produces.
    type Output;

    /// Parses the full argument list into [`Self::Output`].
    fn parse(&self, args: &[&str]) -> Result<Self::Output>;
}

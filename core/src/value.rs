//! Text-to-value conversion for option values.
//!
//! Descriptors delegate the text after `alias=` to [`ArgValue::parse_text`]
//! and render default/implicit values for help output through
//! [`ArgValue::to_text`]. The trait is the seam between the engine and the
//! value types it carries: implement it for your own types to use them in an
//! [`Opt`](crate::Opt).
//!
//! Built-in coverage: the common integer widths, `f32`/`f64`, `bool`
//! (literal `true`/`false` only), `String` (pass-through), and fixed-size
//! arrays of any of these (whitespace-separated).

/// Per-type text↔value conversion used by option descriptors.
///
/// `parse_text` must accept exactly what `to_text` produces, so rendered
/// defaults in help output are valid inputs.
///
/// # Examples
///
/// ```
/// use optstack_core::ArgValue;
///
/// assert_eq!(u32::parse_text("17"), Some(17));
/// assert_eq!(u32::parse_text("17x"), None);
/// assert_eq!(17u32.to_text(), "17");
/// assert_eq!(u32::TYPE_HINT, "u32");
/// ```
pub trait ArgValue: Clone {
    /// Hint shown in help output when no custom hint is configured.
    const TYPE_HINT: &'static str;

    /// Converts text to a value; `None` on any mismatch, including
    /// trailing characters.
    fn parse_text(text: &str) -> Option<Self>;

    /// Renders the value back to text for help output.
    fn to_text(&self) -> String;
}

macro_rules! impl_numeric_arg_value {
    ($($ty:ty => $hint:literal),+ $(,)?) => {
        $(
            impl ArgValue for $ty {
                const TYPE_HINT: &'static str = $hint;

                fn parse_text(text: &str) -> Option<Self> {
                    text.parse().ok()
                }

                fn to_text(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

impl_numeric_arg_value! {
    i16 => "i16",
    u16 => "u16",
    i32 => "i32",
    u32 => "u32",
    i64 => "i64",
    u64 => "u64",
    f32 => "f32",
    f64 => "f64",
}

impl ArgValue for bool {
    const TYPE_HINT: &'static str = "bool";

    /// Only the literals `"true"` and `"false"` are accepted.
    fn parse_text(text: &str) -> Option<Self> {
        match text {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    fn to_text(&self) -> String {
        if *self { "true".to_string() } else { "false".to_string() }
    }
}

impl ArgValue for String {
    const TYPE_HINT: &'static str = "string";

    /// Pass-through; never fails.
    fn parse_text(text: &str) -> Option<Self> {
        Some(text.to_string())
    }

    fn to_text(&self) -> String {
        self.clone()
    }
}

/// Fixed-size multi-value support: exactly `N` whitespace-separated
/// elements. The hint is the element type's; set a custom hint on the
/// descriptor when the arity should be surfaced.
///
/// # Examples
///
/// ```
/// use optstack_core::ArgValue;
///
/// assert_eq!(<[u32; 3]>::parse_text("1 2 3"), Some([1, 2, 3]));
/// assert_eq!(<[u32; 3]>::parse_text("1 2"), None);
/// assert_eq!([1u32, 2, 3].to_text(), "1 2 3");
/// ```
impl<T: ArgValue, const N: usize> ArgValue for [T; N] {
    const TYPE_HINT: &'static str = T::TYPE_HINT;

    fn parse_text(text: &str) -> Option<Self> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        if parts.len() != N {
            return None;
        }
        let mut values = Vec::with_capacity(N);
        for part in parts {
            values.push(T::parse_text(part)?);
        }
        values.try_into().ok()
    }

    fn to_text(&self) -> String {
        self.iter()
            .map(ArgValue::to_text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_parse_rejects_trailing_characters() {
        assert_eq!(i32::parse_text("42"), Some(42));
        assert_eq!(i32::parse_text("42x"), None);
        assert_eq!(i32::parse_text(""), None);
    }

    #[test]
    fn test_unsigned_parse_rejects_negative() {
        assert_eq!(u16::parse_text("-1"), None);
        assert_eq!(u16::parse_text("65535"), Some(65535));
    }

    #[test]
    fn test_bool_accepts_only_literals() {
        assert_eq!(bool::parse_text("true"), Some(true));
        assert_eq!(bool::parse_text("false"), Some(false));
        assert_eq!(bool::parse_text("TRUE"), None);
        assert_eq!(bool::parse_text("1"), None);
    }

    #[test]
    fn test_string_is_pass_through() {
        assert_eq!(String::parse_text(""), Some(String::new()));
        assert_eq!(String::parse_text("a b"), Some("a b".to_string()));
    }

    #[test]
    fn test_builtin_round_trips() {
        assert_eq!(i64::parse_text(&(-7i64).to_text()), Some(-7));
        assert_eq!(f64::parse_text(&2.5f64.to_text()), Some(2.5));
        assert_eq!(bool::parse_text(&true.to_text()), Some(true));
        assert_eq!(
            String::parse_text(&"debug".to_string().to_text()),
            Some("debug".to_string())
        );
    }

    #[test]
    fn test_array_requires_exact_arity() {
        assert_eq!(<[i32; 2]>::parse_text("3 4"), Some([3, 4]));
        assert_eq!(<[i32; 2]>::parse_text("3"), None);
        assert_eq!(<[i32; 2]>::parse_text("3 4 5"), None);
        assert_eq!(<[i32; 2]>::parse_text("3 x"), None);
    }

    #[test]
    fn test_array_round_trip() {
        let values = [1u32, 2, 3];
        assert_eq!(<[u32; 3]>::parse_text(&values.to_text()), Some(values));
    }
}

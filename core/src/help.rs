//! Help-text model and rendering.
//!
//! Every descriptor can surface a [`HelpEntry`]: a structured record of its
//! aliases, value hint, description, and rendered default/implicit values.
//! Entries render to the fixed-column text format and serialize to JSON, so
//! callers can emit either a classic help screen or a machine-readable
//! description of the accepted options.

use serde::{Deserialize, Serialize};

/// Column at which descriptions (and continuation lines) start.
pub const HELP_COLUMN: usize = 40;

/// Structured help record for one option.
///
/// # Examples
///
/// ```
/// use optstack_core::{HelpEntry, HELP_COLUMN};
///
/// let entry = HelpEntry {
///     aliases: vec!["--jobs".into(), "-j".into()],
///     hint: "u32".into(),
///     description: "Number of parallel jobs".into(),
///     default: Some("1".into()),
///     implicit: None,
/// };
///
/// let text = entry.render();
/// assert!(text.starts_with("--jobs, -j <u32>"));
/// assert!(text.contains("Number of parallel jobs"));
/// assert!(text.contains("By default: 1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpEntry {
    /// Recognized aliases, in the order they were added.
    pub aliases: Vec<String>,
    /// Bracketed value hint (custom hint or the value type's name).
    pub hint: String,
    /// Description text; empty when none was attached.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Rendered default value, if configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Rendered implicit value, if configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implicit: Option<String>,
}

impl HelpEntry {
    /// Renders the entry as one help line plus continuation lines.
    ///
    /// Format: aliases joined with `", "`, the hint in angle brackets,
    /// padded with spaces to [`HELP_COLUMN`], then the description. A
    /// configured default or implicit value adds an indented
    /// `By default: …` / `Implicitly: …` line. Rendering never fails.
    pub fn render(&self) -> String {
        let mut out = format!("{} <{}>", self.aliases.join(", "), self.hint);
        while out.len() < HELP_COLUMN {
            out.push(' ');
        }
        out.push_str(&self.description);

        if let Some(value) = &self.default {
            out.push('\n');
            out.push_str(&" ".repeat(HELP_COLUMN));
            out.push_str("By default: ");
            out.push_str(value);
        }

        if let Some(value) = &self.implicit {
            out.push('\n');
            out.push_str(&" ".repeat(HELP_COLUMN));
            out.push_str("Implicitly: ");
            out.push_str(value);
        }

        out.push('\n');
        out
    }
}

/// Types that can describe themselves as a single help entry.
///
/// Implemented by option descriptors; compound parsers aggregate the
/// entries of their members instead.
pub trait Describe {
    /// Builds the structured help record for this option.
    fn help_entry(&self) -> HelpEntry;
}

/// Renders a sequence of entries in order, one after the other.
pub fn render_entries(entries: &[HelpEntry]) -> String {
    entries.iter().map(HelpEntry::render).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> HelpEntry {
        HelpEntry {
            aliases: vec!["--count".to_string()],
            hint: "u32".to_string(),
            description: "How many times to run".to_string(),
            default: None,
            implicit: None,
        }
    }

    #[test]
    fn test_description_starts_at_fixed_column() {
        let text = entry().render();
        assert_eq!(text.find("How many"), Some(HELP_COLUMN));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_default_and_implicit_continuation_lines() {
        let mut with_values = entry();
        with_values.default = Some("0".to_string());
        with_values.implicit = Some("1".to_string());

        let text = with_values.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], format!("{}By default: 0", " ".repeat(HELP_COLUMN)));
        assert_eq!(lines[2], format!("{}Implicitly: 1", " ".repeat(HELP_COLUMN)));
    }

    #[test]
    fn test_long_alias_list_is_not_truncated() {
        let mut wide = entry();
        wide.aliases = vec!["--a-very-long-alias-name-indeed".to_string(), "-x".to_string()];
        wide.hint = "string".to_string();

        let text = wide.render();
        assert!(text.starts_with("--a-very-long-alias-name-indeed, -x <string>"));
        assert!(text.contains("How many"));
    }

    #[test]
    fn test_entry_json_round_trip() {
        let mut with_values = entry();
        with_values.default = Some("0".to_string());

        let json = serde_json::to_string(&with_values).unwrap();
        let back: HelpEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, with_values);
    }
}

use anyhow::Context;
use regex::{NoExpand, Regex};
use std::borrow::Cow;

pub const WEB_PORT_MAPPING: &str = r#"- "${WEB_PORT:-80}:80""#;
pub const WEB_PORT_REPLACEMENT: &str = r#"- "8080:80""#;

pub const TLS_PORT_MAPPING: &str = r#"- "443:443""#;
pub const TLS_PORT_REPLACEMENT: &str = r#"- "8443:443""#;

/// A single literal substitution. The search text is regex-escaped before compiling, so only
/// the exact text matches: different quoting, spacing or default values are left alone.
#[derive(Clone, Debug)]
pub struct ReplaceRule {
    literal: String,
    search: Regex,
    replacement: String,
}

impl ReplaceRule {
    pub fn literal(search: &str, replacement: &str) -> anyhow::Result<Self> {
        let pattern = Regex::new(&regex::escape(search))
            .with_context(|| format!("Failed to compile search pattern for {search:?}"))?;
        Ok(Self {
            literal: search.to_owned(),
            search: pattern,
            replacement: replacement.to_owned(),
        })
    }

    pub fn search(&self) -> &str {
        &self.literal
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replaces every occurrence, returning the new text and the number of occurrences replaced.
    /// The text is borrowed unchanged when nothing matches.
    pub fn apply<'a>(&self, haystack: &'a str) -> (Cow<'a, str>, usize) {
        let count = self.search.find_iter(haystack).count();
        if count == 0 {
            return (Cow::Borrowed(haystack), 0);
        }
        // `$` in the replacement must not be treated as a capture group reference
        let replaced = self
            .search
            .replace_all(haystack, NoExpand(self.replacement.as_str()));
        (replaced, count)
    }
}

/// The two port mapping rewrites, in the order they are applied.
pub fn port_rules() -> anyhow::Result<Vec<ReplaceRule>> {
    Ok(vec![
        ReplaceRule::literal(WEB_PORT_MAPPING, WEB_PORT_REPLACEMENT)?,
        ReplaceRule::literal(TLS_PORT_MAPPING, TLS_PORT_REPLACEMENT)?,
    ])
}

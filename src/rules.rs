//! Allow/deny rule patterns and matching for constituent commands.

/// A single allow/deny rule pattern.
///
/// A pattern ending in the `:*` wildcard suffix matches its prefix exactly,
/// or the prefix followed by a space and anything: `git:*` matches `git`
/// and `git status`, but not `github-cli` or `github status`. Any other
/// pattern matches only on exact string equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Exact(String),
    Prefix(String),
}

impl Pattern {
    pub fn parse(raw: &str) -> Self {
        match raw.strip_suffix(":*") {
            Some(prefix) => Pattern::Prefix(prefix.to_string()),
            None => Pattern::Exact(raw.to_string()),
        }
    }

    /// Case-sensitive, byte-exact match against an already-trimmed part.
    pub fn matches(&self, part: &str) -> bool {
        match self {
            Pattern::Exact(p) => part == p,
            Pattern::Prefix(prefix) => {
                part == prefix
                    || part
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with(' '))
            }
        }
    }
}

/// True if any pattern matches the trimmed part; short-circuits on the
/// first hit.
pub fn matches_any(part: &str, patterns: &[Pattern]) -> bool {
    let part = part.trim();
    patterns.iter().any(|p| p.matches(part))
}

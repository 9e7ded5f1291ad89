//! Glob-like package pattern matching
//!
//! Patterns match dot-separated package names:
//! - `*` matches exactly one package segment
//! - `..` matches any number of segments; a trailing `..` means "this
//!   package and everything below it"
//! - `(*)` captures exactly one segment
//! - `(**)` captures all remaining segments, joined by `.`
//!
//! Patterns are compiled once into an anchored regex.

use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("invalid package pattern '{pattern}': {reason}")]
    Invalid { pattern: String, reason: String },
}

/// A compiled package pattern.
#[derive(Debug, Clone)]
pub struct PackagePattern {
    raw: String,
    regex: Regex,
}

impl PackagePattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = compile(pattern)?;
        Ok(Self {
            raw: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, package: &str) -> bool {
        self.regex.is_match(package)
    }

    /// Match a package name and return the captured groups in order.
    ///
    /// Returns `None` on no match; a match against a pattern without
    /// capture groups yields an empty list.
    pub fn capture(&self, package: &str) -> Option<Vec<String>> {
        self.regex.captures(package).map(|captures| {
            captures
                .iter()
                .skip(1)
                .flatten()
                .map(|group| group.as_str().to_string())
                .collect()
        })
    }
}

fn compile(pattern: &str) -> Result<Regex, PatternError> {
    let invalid = |reason: &str| PatternError::Invalid {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    };

    let mut regex = String::from("^");
    let mut i = 0;
    while i < pattern.len() {
        let rest = &pattern[i..];
        if let Some(after) = rest.strip_prefix("(**)") {
            regex.push_str(r"(\w+(?:\.\w+)*)");
            i = pattern.len() - after.len();
        } else if let Some(after) = rest.strip_prefix("(*)") {
            regex.push_str(r"(\w+)");
            i = pattern.len() - after.len();
        } else if rest.starts_with("..") {
            if rest[2..].starts_with('.') {
                return Err(invalid("more than two consecutive dots"));
            }
            let at_start = i == 0;
            let at_end = rest.len() == 2;
            regex.push_str(match (at_start, at_end) {
                (true, true) => r"(?:\w+(?:\.\w+)*)?",
                (true, false) => r"(?:\w+\.)*",
                (false, true) => r"(?:\.\w+)*",
                (false, false) => r"\.(?:\w+\.)*",
            });
            i += 2;
        } else if rest.starts_with("**") {
            return Err(invalid("'**' is only allowed as the capture group '(**)'"));
        } else {
            let c = rest.chars().next().ok_or_else(|| invalid("empty pattern"))?;
            match c {
                '.' => regex.push_str(r"\."),
                '*' => regex.push_str(r"\w+"),
                c if c.is_ascii_alphanumeric() || c == '_' => regex.push(c),
                c => return Err(invalid(&format!("unexpected character '{c}'"))),
            }
            i += c.len_utf8();
        }
    }
    regex.push('$');

    Regex::new(&regex).map_err(|e| invalid(&e.to_string()))
}

//! Label-set configuration for the annotation workbench.
//!
//! Operators type categories as a comma-separated list. That raw string
//! is validated once, at the boundary, into an ordered set of distinct
//! non-blank names; the selection widgets downstream only ever see the
//! validated value.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Reserved value meaning no category has been assigned yet.
///
/// Word-mode selectors always offer it first; sentence mode never uses
/// it.
pub const UNLABELED: &str = "unlabeled";

/// An ordered set of distinct category names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    /// Build from already-separated names.
    ///
    /// Blank entries are dropped; duplicates and an empty result are
    /// rejected. Names equal to the [`UNLABELED`] sentinel are rejected
    /// so the sentinel stays unambiguous.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut labels: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            if name == UNLABELED {
                return Err(Error::input(format!(
                    "'{UNLABELED}' is reserved and cannot be used as a category"
                )));
            }
            if labels.iter().any(|l| l == name) {
                return Err(Error::input(format!("duplicate category '{name}'")));
            }
            labels.push(name.to_string());
        }
        if labels.is_empty() {
            return Err(Error::input("label set must contain at least one category"));
        }
        Ok(Self { labels })
    }

    /// Parse a comma-separated list, e.g. `"人名,地名,其他"`.
    pub fn parse(input: &str) -> Result<Self> {
        Self::new(input.split(','))
    }

    /// Category names in configured order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// First configured category (the sentence-mode default).
    #[must_use]
    pub fn first(&self) -> &str {
        &self.labels[0]
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false: an empty set never validates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l == name)
    }

    /// Word-mode selector options: the sentinel followed by the
    /// categories in order.
    #[must_use]
    pub fn word_options(&self) -> Vec<&str> {
        std::iter::once(UNLABELED)
            .chain(self.labels.iter().map(String::as_str))
            .collect()
    }
}

impl std::fmt::Display for LabelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.labels.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_input() {
        let set = LabelSet::parse("人名,地名,其他").unwrap();
        assert_eq!(set.labels(), ["人名", "地名", "其他"]);
        assert_eq!(set.first(), "人名");
    }

    #[test]
    fn blank_entries_are_dropped() {
        let set = LabelSet::parse(" a , ,b, ").unwrap();
        assert_eq!(set.labels(), ["a", "b"]);
    }

    #[test]
    fn duplicates_rejected() {
        assert!(LabelSet::parse("a,b,a").is_err());
    }

    #[test]
    fn empty_input_rejected() {
        assert!(LabelSet::parse("").is_err());
        assert!(LabelSet::parse(" , ,").is_err());
    }

    #[test]
    fn sentinel_name_rejected() {
        assert!(LabelSet::parse("a,unlabeled").is_err());
    }

    #[test]
    fn word_options_lead_with_sentinel() {
        let set = LabelSet::parse("x,y").unwrap();
        assert_eq!(set.word_options(), [UNLABELED, "x", "y"]);
    }

    #[test]
    fn roundtrips_through_display() {
        let set = LabelSet::parse("甲,乙").unwrap();
        assert_eq!(LabelSet::parse(&set.to_string()).unwrap(), set);
    }
}

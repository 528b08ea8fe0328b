//! # Keyword Rules
//!
//! Decides whether a raw field-file line describes a control monument worth
//! keeping. A line is accepted when it contains at least one whitelisted
//! keyword and none of the blacklisted ones. Matching is a plain,
//! case-sensitive substring test, so keywords may carry the field
//! delimiter (`",CM"`) to anchor them to the start of a column.

use serde::{Deserialize, Serialize};

/// Whitelist/blacklist substring rules for record lines
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordRules {
    /// A line must contain at least one of these
    pub whitelist: Vec<String>,

    /// A line must contain none of these
    pub blacklist: Vec<String>,
}

impl KeywordRules {
    pub fn new<W, B>(whitelist: W, blacklist: B) -> Self
    where
        W: IntoIterator,
        W::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            whitelist: whitelist.into_iter().map(Into::into).collect(),
            blacklist: blacklist.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `line` passes both lists
    ///
    /// # Example
    /// ```
    /// use survey_consolidate::KeywordRules;
    /// let rules = KeywordRules::default();
    /// assert!(rules.accepts("1043,5000.1,2000.2,10.0,PCP 5/8 REBAR"));
    /// assert!(!rules.accepts("1044,5000.1,2000.2,10.0,PCP SET"));
    /// ```
    pub fn accepts(&self, line: &str) -> bool {
        let whitelisted = self.whitelist.iter().any(|k| line.contains(k.as_str()));
        let blacklisted = self.blacklist.iter().any(|k| line.contains(k.as_str()));
        whitelisted && !blacklisted
    }

    /// Keep only accepted lines, in order
    pub fn screen<'a, I>(&self, lines: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .filter(|line| {
                let keep = self.accepts(line);
                if !keep {
                    log::debug!("Discarded line: {}", line);
                }
                keep
            })
            .collect()
    }
}

impl Default for KeywordRules {
    /// Control point (`PCP`), county monument (`,CM`) and `NLD` codes;
    /// rejects iron rod caps (`,IRC`) and anything marked `SET` by the crew.
    fn default() -> Self {
        Self::new(["PCP", ",CM", "NLD"], [",IRC", "SET"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lists() {
        let rules = KeywordRules::default();
        assert_eq!(rules.whitelist, vec!["PCP", ",CM", "NLD"]);
        assert_eq!(rules.blacklist, vec![",IRC", "SET"]);
    }

    #[test]
    fn test_requires_whitelist() {
        let rules = KeywordRules::default();
        assert!(!rules.accepts("12,100.0,200.0,5.0,FENCE CORNER"));
        assert!(rules.accepts("12,100.0,200.0,5.0,NLD BRASS DISK"));
    }

    #[test]
    fn test_blacklist_wins() {
        let rules = KeywordRules::default();
        assert!(!rules.accepts("12,100.0,200.0,5.0,CM,IRC"));
    }

    #[test]
    fn test_delimiter_anchored_keyword() {
        let rules = KeywordRules::default();
        // "CM" without the leading comma is not a county monument
        assert!(!rules.accepts("12,100.0,200.0,5.0,SCM"));
        assert!(rules.accepts("12,100.0,200.0,5.0,CM FOUND"));
    }

    #[test]
    fn test_case_sensitive() {
        let rules = KeywordRules::default();
        assert!(!rules.accepts("12,100.0,200.0,5.0,pcp"));
    }

    #[test]
    fn test_screen_keeps_order() {
        let rules = KeywordRules::new(["A"], ["X"]);
        let kept = rules.screen(["A1", "B2", "A3X", "A4"]);
        assert_eq!(kept, vec!["A1", "A4"]);
    }

    #[test]
    fn test_empty_whitelist_rejects_everything() {
        let rules = KeywordRules::new(Vec::<String>::new(), Vec::<String>::new());
        assert!(!rules.accepts("PCP"));
    }
}

//! Compiled text-matching pattern leaves.
//!
//! A `PatternData` keeps the source text and flag string it was built from,
//! so the clone engine can always produce an equivalent fresh pattern.
//! Flags follow the usual scripting-language set (`d g i m s u y`); only
//! `i`, `m` and `s` affect compilation, the rest are carried verbatim.

use std::collections::HashSet;
use std::fmt;
use std::fmt::{Display, Formatter};

use regex::{Regex, RegexBuilder};

use crate::ds::error::GraphError;

lazy_static! {
    static ref KNOWN_FLAGS: HashSet<char> = "dgimsuy".chars().collect();
}

pub struct PatternData {
    source: String,
    flags: String,
    compiled: Regex,
}

impl PatternData {
    pub fn new(source: &str, flags: &str) -> Result<Self, GraphError> {
        let mut seen = HashSet::new();
        for flag in flags.chars() {
            if !KNOWN_FLAGS.contains(&flag) {
                return Err(GraphError::PatternFlagError(format!(
                    "unknown flag '{}'",
                    flag
                )));
            }
            if !seen.insert(flag) {
                return Err(GraphError::PatternFlagError(format!(
                    "repeated flag '{}'",
                    flag
                )));
            }
        }
        let compiled = RegexBuilder::new(source)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .build()
            .map_err(|e| GraphError::PatternSyntaxError(e.to_string()))?;
        Ok(PatternData {
            source: source.to_string(),
            flags: flags.to_string(),
            compiled,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.compiled.is_match(text)
    }
}

impl Clone for PatternData {
    fn clone(&self) -> Self {
        PatternData {
            source: self.source.to_string(),
            flags: self.flags.to_string(),
            compiled: self.compiled.clone(),
        }
    }
}

impl PartialEq for PatternData {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl Display for PatternData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

impl fmt::Debug for PatternData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PatternData({})", self)
    }
}

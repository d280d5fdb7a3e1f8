// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rewriting of shell-specific declaration syntax for the reference interpreter.
//!
//! The shell under test declares variables with a keyword (`let x=1`). The
//! reference interpreter only understands the bare assignment, so the keyword
//! is dropped wherever it starts a command: at the very beginning, or right
//! after `&&`, `||` or `;`.

use std::borrow::Cow;

/// Where a rule expects the declaration keyword
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// At the very start of the command
    Start,
    /// After a list separator, with optional spaces in between
    After(&'static str),
}

/// A structural rewrite dropping the declaration keyword at one kind of position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalizationRule {
    pub anchor: Anchor,
}

impl NormalizationRule {
    /// Rule for a declaration at the start of the command
    pub const fn start() -> Self {
        Self {
            anchor: Anchor::Start,
        }
    }

    /// Rule for a declaration following `separator`
    pub const fn after(separator: &'static str) -> Self {
        Self {
            anchor: Anchor::After(separator),
        }
    }

    /// Whether this rule rewrites anything in `command`
    pub fn matches(&self, command: &str, keyword: &str) -> bool {
        !self.spans(command, keyword).is_empty()
    }

    /// Apply the rule to every position it matches.
    pub fn apply(&self, command: &str, keyword: &str) -> String {
        let replacement = match self.anchor {
            Anchor::Start => String::new(),
            Anchor::After(separator) => format!("{} ", separator),
        };

        let mut out = String::with_capacity(command.len());
        let mut last = 0;
        for (start, end) in self.spans(command, keyword) {
            out.push_str(&command[last..start]);
            out.push_str(&replacement);
            last = end;
        }
        out.push_str(&command[last..]);
        out
    }

    /// Byte ranges to replace, in order and non-overlapping.
    fn spans(&self, command: &str, keyword: &str) -> Vec<(usize, usize)> {
        match self.anchor {
            Anchor::Start => match declaration_len(command, keyword) {
                Some(len) => vec![(0, len)],
                None => Vec::new(),
            },
            Anchor::After(separator) => {
                let mut spans = Vec::new();
                let mut pos = 0;
                while let Some(offset) = command[pos..].find(separator) {
                    let start = pos + offset;
                    let after = start + separator.len();
                    let rest = &command[after..];
                    let spaces = rest.len() - rest.trim_start_matches(' ').len();
                    let keyword_start = after + spaces;
                    match declaration_len(&command[keyword_start..], keyword) {
                        Some(len) => {
                            spans.push((start, keyword_start + len));
                            pos = keyword_start + len;
                        }
                        None => pos = after,
                    }
                }
                spans
            }
        }
    }
}

/// Length of `<keyword><space>` if `text` starts with it
fn declaration_len(text: &str, keyword: &str) -> Option<usize> {
    text.strip_prefix(keyword)
        .filter(|rest| rest.starts_with(' '))
        .map(|_| keyword.len() + 1)
}

/// Rewrites commands for the reference interpreter
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalizer {
    keyword: String,
    rules: Vec<NormalizationRule>,
}

impl Normalizer {
    /// Create a normalizer with the standard rule order for `keyword`.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            rules: vec![
                NormalizationRule::start(),
                NormalizationRule::after("&&"),
                NormalizationRule::after("||"),
                NormalizationRule::after(";"),
            ],
        }
    }

    /// The declaration keyword
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[NormalizationRule] {
        &self.rules
    }

    /// First rule that matches `command`, if any
    pub fn matching_rule(&self, command: &str) -> Option<&NormalizationRule> {
        self.rules
            .iter()
            .find(|rule| rule.matches(command, &self.keyword))
    }

    /// Rewrite `command` with the first matching rule; unchanged when none match.
    pub fn normalize<'a>(&self, command: &'a str) -> Cow<'a, str> {
        match self.matching_rule(command) {
            Some(rule) => Cow::Owned(rule.apply(command, &self.keyword)),
            None => Cow::Borrowed(command),
        }
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;

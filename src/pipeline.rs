//! Ordered application of substitution rules to a document.
//!
//! Control flow is strictly sequential: each rule operates on the output
//! of the previous one. A rule whose anchor fails to match is reported as
//! [`RuleStatus::Unchanged`], never an error. The only errors here are
//! pattern-compilation failures (a malformed rule) and document I/O.

use crate::cache;
use crate::document::{Document, DocumentError};
use crate::rules::{Action, Rule};
use regex::{NoExpand, Regex};
use std::fmt;
use thiserror::Error;

/// What a single rule did to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleStatus {
    /// The rule matched and changed the text.
    Rewritten,
    /// The rule's anchor did not occur; the text passed through untouched.
    Unchanged,
}

/// Per-rule application report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "RuleOutcome should be checked for rewritten/unchanged"]
pub struct RuleOutcome {
    pub id: &'static str,
    pub status: RuleStatus,
}

impl fmt::Display for RuleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            RuleStatus::Rewritten => write!(f, "{}: rewritten", self.id),
            RuleStatus::Unchanged => write!(f, "{}: unchanged (anchor not found)", self.id),
        }
    }
}

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("invalid pattern in rule '{rule}': {source}")]
    Pattern {
        rule: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Run the rule list over `text`, returning the final text and one
/// outcome per rule, in rule order.
pub fn rewrite(text: &str, rules: &[Rule]) -> Result<(String, Vec<RuleOutcome>), PatchError> {
    let mut current = text.to_string();
    let mut outcomes = Vec::with_capacity(rules.len());

    for rule in rules {
        let next = apply_action(&current, &rule.action).map_err(|source| PatchError::Pattern {
            rule: rule.id,
            source,
        })?;

        let status = if next == current {
            RuleStatus::Unchanged
        } else {
            RuleStatus::Rewritten
        };
        outcomes.push(RuleOutcome {
            id: rule.id,
            status,
        });

        current = next;
    }

    Ok((current, outcomes))
}

/// Run the rule list over a document's buffer in place.
///
/// The document is not persisted; that stays a separate, explicit step.
pub fn apply(document: &mut Document, rules: &[Rule]) -> Result<Vec<RuleOutcome>, PatchError> {
    let (text, outcomes) = rewrite(document.text(), rules)?;
    document.replace_text(text);
    Ok(outcomes)
}

fn apply_action(text: &str, action: &Action) -> Result<String, regex::Error> {
    match action {
        Action::InsertAfter { anchor, addition } => {
            Ok(text.replace(anchor, &format!("{anchor}\n{addition}")))
        }
        Action::StripLiteral { needle } => Ok(text.replace(needle, "")),
        Action::StripPattern { pattern } => {
            let re = cache::get_or_compile(pattern)?;
            Ok(re.replace_all(text, NoExpand("")).into_owned())
        }
        Action::RewritePattern {
            pattern,
            replacement,
        } => {
            let re = cache::get_or_compile(pattern)?;
            Ok(re.replace_all(text, NoExpand(replacement)).into_owned())
        }
        Action::StripUntil { start, stop } => {
            let start_re = cache::get_or_compile(start)?;
            let stop_re = cache::get_or_compile(stop)?;
            Ok(strip_until(text, &start_re, &stop_re))
        }
    }
}

/// Delete spans from each `start` match up to the earliest `stop` match
/// after it, leaving the stop text in place. A `start` with no following
/// `stop` stays untouched.
fn strip_until(text: &str, start: &Regex, stop: &Regex) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(m) = start.find(rest) {
        // An empty start match cannot bound a deletion and would not
        // advance the scan.
        if m.start() == m.end() {
            break;
        }

        match stop.find(&rest[m.end()..]) {
            Some(s) => {
                out.push_str(&rest[..m.start()]);
                rest = &rest[m.end() + s.start()..];
            }
            None => {
                out.push_str(&rest[..m.end()]);
                rest = &rest[m.end()..];
            }
        }
    }

    out.push_str(rest);
    out
}

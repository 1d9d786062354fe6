//! Dashboard Patcher: one-shot migration of the dashboard front-end.
//!
//! Rewires `client/src/components/Dashboard.js` around the gamification
//! dashboard: the parallel user+courses fetch collapses to a plain user
//! fetch, the dead courses state goes away, and the hand-rolled activity
//! and courses sections are cut out of the markup.
//!
//! # Architecture
//!
//! Every migration step is a [`Rule`] wrapping an [`Action`]: a literal
//! or pattern substitution over a [`Document`], a single in-memory text
//! buffer. The pipeline folds the fixed rule list over the buffer in
//! order and persists the result atomically. There is no other state.
//!
//! # Fragility
//!
//! The rules anchor on the exact source text of the pre-migration file.
//! A rule whose anchor is absent is a silent no-op: the pipeline reports
//! it as [`RuleStatus::Unchanged`] but raises no error, and the binary
//! prints its completion message regardless. Running the tool twice is
//! therefore not a no-op: the import anchor survives the first run, the
//! section markers do not.

pub mod cache;
pub mod document;
pub mod pipeline;
pub mod rules;

// Re-exports
pub use document::{Document, DocumentError};
pub use pipeline::{apply, rewrite, PatchError, RuleOutcome, RuleStatus};
pub use rules::{dashboard_rules, Action, Rule, COMPLETION_MESSAGE, TARGET_FILE};

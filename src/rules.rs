//! The substitution vocabulary and the fixed Dashboard.js migration.
//!
//! Every migration step is data: a [`Rule`] naming an [`Action`]. The
//! pipeline applies them in order, and order matters; later rules assume
//! earlier ones already ran.

/// Path of the one file this tool rewrites, relative to the web project
/// root the tool is run from.
pub const TARGET_FILE: &str = "client/src/components/Dashboard.js";

/// Printed on every successful run, whether or not anything matched.
pub const COMPLETION_MESSAGE: &str = "Dashboard.js updated successfully!";

/// A single substitution over the document text.
///
/// Literal variants match exact text; pattern variants are regex syntax
/// (with `(?s)` where a span must cross lines). Every variant is a silent
/// no-op when its anchor does not occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Insert `addition` on a new line immediately after each occurrence
    /// of the literal `anchor` line.
    InsertAfter {
        anchor: &'static str,
        addition: &'static str,
    },
    /// Remove every occurrence of a literal string.
    StripLiteral { needle: &'static str },
    /// Remove every span matching a pattern.
    StripPattern { pattern: &'static str },
    /// Replace every span matching a pattern with literal text.
    RewritePattern {
        pattern: &'static str,
        replacement: &'static str,
    },
    /// Remove spans from each `start` match up to, but not including, the
    /// earliest following `stop` match. A `start` with no `stop` after it
    /// is left intact.
    StripUntil {
        start: &'static str,
        stop: &'static str,
    },
}

/// A named migration step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub id: &'static str,
    pub action: Action,
}

impl Rule {
    pub const fn new(id: &'static str, action: Action) -> Self {
        Self { id, action }
    }
}

/// The Dashboard.js migration, in application order.
///
/// The dashboard hands its courses list and activity feed over to the
/// gamification dashboard: the parallel user+courses fetch collapses to a
/// user fetch, the dead state and derived values go away, and the two
/// hand-rolled sections are cut out of the markup.
pub fn dashboard_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "add-gamification-import",
            Action::InsertAfter {
                anchor: "import DashboardSkeleton from './dashboard/DashboardSkeleton';",
                addition: "import GamificationDashboard from './gamification/GamificationDashboard';",
            },
        ),
        Rule::new(
            "drop-courses-state",
            Action::StripPattern {
                pattern: r"\s*const \[courses, setCourses\] = useState\(\[\]\);",
            },
        ),
        Rule::new(
            "drop-expanded-course-state",
            Action::StripPattern {
                pattern: r"\s*const \[expandedCourseId, setExpandedCourseId\] = useState\(null\);",
            },
        ),
        Rule::new(
            "simplify-user-fetch",
            Action::RewritePattern {
                pattern: r"const \[userData, coursesData\] = await Promise\.all\(\[\s*getCurrentUser\(\),\s*getCourses\(\),\s*\]\);",
                replacement: "const userData = await getCurrentUser();",
            },
        ),
        Rule::new(
            "drop-set-courses-call",
            Action::StripLiteral {
                needle: "setCourses(coursesData);",
            },
        ),
        Rule::new(
            "drop-practice-time",
            Action::StripPattern {
                pattern: r"\s*const practiceTime = user\?\.practiceTime \|\| 0;",
            },
        ),
        // Cuts from the marker comment through the section's own pair of
        // closing tags, newlines included.
        Rule::new(
            "remove-activity-section",
            Action::StripPattern {
                pattern: r"(?s)\s*\{/\* Activity Section \*/\}.*?</div>\s*</div>",
            },
        ),
        // The courses section is the last child of the page containers, so
        // it is bounded by the container closers rather than its own.
        Rule::new(
            "remove-courses-section",
            Action::StripUntil {
                start: r"\s*\{/\* Courses Section \*/\}",
                stop: r"\s*</div>\s*</div>\s*\);\s*\};",
            },
        ),
        // Anchored on the closing tags ahead of the activity marker. The
        // preceding rule removes that marker, so against a file that still
        // carried both sections this never fires; it only lands on trees
        // where the activity section was already gone.
        Rule::new(
            "insert-gamification-dashboard",
            Action::RewritePattern {
                pattern: r"</div>\s*</div>\s*\{/\* Activity Section \*/\}",
                replacement: "</div>\n        </div>\n\n        {/* Gamification Dashboard */}\n        <GamificationDashboard onViewReport={() => alert('Detailed report coming soon!')} />",
            },
        ),
    ]
}

use anyhow::Result;
use colored::Colorize;
use dashboard_patcher::{apply, dashboard_rules, Document, COMPLETION_MESSAGE, TARGET_FILE};

/// One-shot migration: run from the web project root. Takes no arguments.
/// Anchor misses are deliberately not reported; the tool prints its
/// completion message whenever the file could be read and written back.
fn main() -> Result<()> {
    let mut document = Document::load(TARGET_FILE)?;

    let rules = dashboard_rules();
    let _outcomes = apply(&mut document, &rules)?;

    document.persist()?;

    println!("{}", COMPLETION_MESSAGE.green());

    Ok(())
}

// fault-core/src/export.rs
//! Plain-text report of a ranked result list

use crate::models::{FaultEntry, ScoredEntry};

/// Render one block per result; blocks are separated by a newline.
pub fn render_report(results: &[ScoredEntry]) -> String {
    results
        .iter()
        .map(|scored| render_block(&scored.entry, scored.score))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_block(entry: &FaultEntry, score: f64) -> String {
    let mut lines = vec![
        format!(
            "# {} ({}) [score {:.2}]",
            entry.display_name(),
            entry.models.join(", "),
            score
        ),
        entry.description().unwrap_or_default().to_string(),
    ];

    for cause in &entry.causes {
        lines.push(format!("- Cause: {}", cause.title));
        lines.extend(cause.checks.iter().map(|c| format!("  * Check: {c}")));
        lines.extend(cause.fixes.iter().map(|f| format!("  * Fix: {f}")));
    }

    lines.push(if entry.logs.is_empty() {
        String::new()
    } else {
        "Logs:".to_string()
    });
    lines.extend(entry.logs.iter().map(|log| match log.note() {
        Some(note) => format!("  - {} — {}", log.path, note),
        None => format!("  - {}", log.path),
    }));
    lines.push(String::new());

    lines.join("\n")
}

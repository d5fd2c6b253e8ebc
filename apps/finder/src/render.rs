//! Terminal presentation of ranked fault entries

use std::fmt::Write;

use fault_core::{FaultEntry, ScoredEntry};
use serde::Serialize;

pub const NO_MATCHES: &str = "No matches yet — try different keywords, or loosen filters.";

/// One card per result, separated by blank lines.
pub fn render_results(results: &[ScoredEntry], show_scores: bool) -> String {
    if results.is_empty() {
        return format!("{NO_MATCHES}\n");
    }

    results
        .iter()
        .map(|scored| render_card(&scored.entry, show_scores.then_some(scored.score)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_card(entry: &FaultEntry, score: Option<f64>) -> String {
    let mut out = String::new();

    out.push_str(entry.display_name());
    if let Some(score) = score {
        write!(out, "  [{score:.2}]").ok();
    }
    out.push('\n');

    let models = or_fallback(entry.models.join(", "), "NCR");
    let modules = or_fallback(entry.modules.join(", "), "Module");
    write!(out, "  ({models}) ({modules})").ok();
    if !entry.symptoms.is_empty() {
        write!(out, "  {}", entry.symptoms.join(" • ")).ok();
    }
    out.push('\n');

    if let Some(description) = entry.description() {
        writeln!(out, "  {description}").ok();
    }

    for cause in &entry.causes {
        writeln!(out, "  Cause: {}", cause.title).ok();
        if let Some(context) = cause.context() {
            writeln!(out, "    {context}").ok();
        }
        writeln!(out, "    Quick checks").ok();
        for check in &cause.checks {
            writeln!(out, "      - {check}").ok();
        }
        writeln!(out, "    Fix").ok();
        for fix in &cause.fixes {
            writeln!(out, "      - {fix}").ok();
        }
    }

    if !entry.logs.is_empty() {
        writeln!(out, "  Logs & traces").ok();
        for log in &entry.logs {
            write!(out, "    - {}", log.path).ok();
            if let Some(note) = log.note() {
                write!(out, " — {note}").ok();
            }
            out.push('\n');
        }
    }

    if !entry.notes.is_empty() {
        writeln!(out, "  Notes").ok();
        for note in &entry.notes {
            writeln!(out, "    - {note}").ok();
        }
    }

    out
}

fn or_fallback(joined: String, fallback: &str) -> String {
    if joined.is_empty() {
        fallback.to_string()
    } else {
        joined
    }
}

#[derive(Serialize)]
struct JsonHit<'a> {
    id: &'a str,
    title: &'a str,
    score: f64,
    entry: &'a FaultEntry,
}

/// Machine-readable results, highest score first
pub fn render_json(results: &[ScoredEntry]) -> serde_json::Result<String> {
    let hits: Vec<JsonHit<'_>> = results
        .iter()
        .map(|scored| JsonHit {
            id: &scored.entry.id,
            title: scored.entry.display_name(),
            score: scored.score,
            entry: &scored.entry,
        })
        .collect();
    serde_json::to_string_pretty(&hits)
}

//! Text rendering of ranked plates.

use chrono::{DateTime, Utc};
use platerank_scoring::ScoredPlate;
use uuid::Uuid;

pub const RULE_WIDTH: usize = 100;

/// Header metadata for a saved report.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub run_id: Uuid,
    pub source: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary<'a> {
    pub best: &'a ScoredPlate,
    pub worst: &'a ScoredPlate,
    pub mean: f64,
}

/// Highest, lowest and mean score; `None` when nothing was ranked.
/// Expects `ranked` sorted highest first.
pub fn summarize(ranked: &[ScoredPlate]) -> Option<Summary<'_>> {
    let best = ranked.first()?;
    let worst = ranked.last()?;
    let mean = ranked.iter().map(|p| p.total_score).sum::<f64>() / ranked.len() as f64;
    Some(Summary { best, worst, mean })
}

/// One ranked line: rank, plate, grid cell, total and the non-zero reasons.
pub fn format_line(rank: usize, plate: &ScoredPlate) -> String {
    let active: Vec<String> = plate
        .breakdown
        .iter()
        .filter(|r| !r.is_zero())
        .map(|r| format!("{}: {}", r.rule, r.reason))
        .collect();
    let reasons = if active.is_empty() {
        "no bonus items".to_string()
    } else {
        active.join(" | ")
    };

    format!(
        "{rank:2}. {:<12} | {:<7} | total: {:6.1} | {reasons}",
        plate.detection.text,
        plate.position.to_string(),
        plate.total_score
    )
}

pub fn ranked_lines(ranked: &[ScoredPlate]) -> Vec<String> {
    ranked
        .iter()
        .enumerate()
        .map(|(i, plate)| format_line(i + 1, plate))
        .collect()
}

/// Console report: ranked lines, statistics and the top `top_n` picks.
pub fn render_console(ranked: &[ScoredPlate], top_n: usize) -> String {
    let Some(summary) = summarize(ranked) else {
        return "no plates recognized\n".to_string();
    };

    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec!["ranked plates (highest score first)".to_string(), rule.clone()];
    lines.extend(ranked_lines(ranked));

    lines.push(String::new());
    lines.push(rule);
    lines.push("statistics:".to_string());
    lines.push(format!(
        "  highest: {:.1} ({})",
        summary.best.total_score, summary.best.detection.text
    ));
    lines.push(format!(
        "  lowest:  {:.1} ({})",
        summary.worst.total_score, summary.worst.detection.text
    ));
    lines.push(format!("  mean:    {:.1}", summary.mean));

    lines.push(String::new());
    lines.push("recommended:".to_string());
    lines.extend(ranked.iter().take(top_n).enumerate().map(|(i, plate)| {
        format!(
            "  {}. {} (score: {:.1})",
            i + 1,
            plate.detection.text,
            plate.total_score
        )
    }));

    join_lines(lines)
}

/// File report: metadata header followed by the ranked lines.
pub fn render_file(meta: &ReportMeta, ranked: &[ScoredPlate]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        "plate scoring results".to_string(),
        rule.clone(),
        format!("source: {}", meta.source),
        format!("run id: {}", meta.run_id),
        format!("generated: {}", meta.generated_at.to_rfc3339()),
        format!("plates: {}", ranked.len()),
        rule,
        String::new(),
    ];
    lines.extend(ranked_lines(ranked));
    join_lines(lines)
}

/// Newline-terminated text, one entry per line.
fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

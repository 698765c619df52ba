//! platerank-analyze — rank recognized licence plates from one image.
//!
//! Input is the recognizer's output for a single image: a JSON array of
//! `{text, confidence, bbox}` records. Plates are placed on a reading-order
//! grid, scored by the configured rules and printed highest first.

mod intake;
mod report;

use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Parser;
use platerank_common::error::PlateError;
use platerank_config::{init_tracing, parse_row_threshold, AppConfig};
use platerank_layout::GridConfig;
use platerank_scoring::{default_scorer, rank_detections, ScoringConfig};
use uuid::Uuid;

use crate::report::ReportMeta;

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Parser)]
#[command(name = "platerank-analyze")]
#[command(about = "Score and rank licence plates recognized in an image")]
#[command(version)]
struct Cli {
    /// Recognizer output for one image (JSON array of detections).
    detections: PathBuf,

    /// Write the text report to this file as well.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Write the ranked plates as JSON to this file.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Scoring rules document; overrides RULES_CONFIG_PATH.
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Row grouping threshold in pixels; overrides ROW_THRESHOLD.
    #[arg(long)]
    row_threshold: Option<String>,

    /// Number of recommendations to print; overrides TOP_N.
    #[arg(long)]
    top: Option<usize>,
}

#[tokio::main]
async fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_env()?;
    init_tracing(&config.log_level);

    let run_id = Uuid::new_v4();
    tracing::info!(service = "platerank-analyze", %run_id, "starting");

    if let Err(e) = run(&cli, config, run_id).await {
        tracing::error!(error = %e, %run_id, "analysis failed");
        return Err(e);
    }

    tracing::info!(%run_id, "analysis finished");
    Ok(())
}

async fn run(cli: &Cli, config: AppConfig, run_id: Uuid) -> CliResult<()> {
    let row_threshold = match &cli.row_threshold {
        Some(raw) => parse_row_threshold(raw)?,
        None => config.row_threshold,
    };
    let top_n = cli.top.unwrap_or(config.top_n);

    // Configuration is fully loaded and validated before any input is read.
    let scoring = match cli.rules.as_ref().or(config.rules_config_path.as_ref()) {
        Some(path) => load_scoring_config(path).await?,
        None => ScoringConfig::default(),
    };
    let scorer = default_scorer(&scoring)?;
    if scorer.is_empty() {
        tracing::warn!("no scoring rules enabled; every plate will score 0");
    }
    tracing::info!(
        rules = ?scorer.rule_names(),
        row_threshold,
        top_n,
        "scoring configured"
    );

    let raw = tokio::fs::read_to_string(&cli.detections)
        .await
        .map_err(|e| PlateError::Io(format!("{}: {e}", cli.detections.display())))?;
    let detections = intake::parse_detections(&raw)?;

    let ranked = rank_detections(&scorer, &detections, &GridConfig { row_threshold });
    print!("{}", report::render_console(&ranked, top_n));

    if let Some(out) = &cli.out {
        let meta = ReportMeta {
            run_id,
            source: cli.detections.display().to_string(),
            generated_at: Utc::now(),
        };
        tokio::fs::write(out, report::render_file(&meta, &ranked)).await?;
        tracing::info!(path = %out.display(), "report written");
    }

    if let Some(json_path) = &cli.json {
        let body = serde_json::to_string_pretty(&ranked)?;
        tokio::fs::write(json_path, body).await?;
        tracing::info!(path = %json_path.display(), "ranked plates written");
    }

    Ok(())
}

async fn load_scoring_config(path: &Path) -> CliResult<ScoringConfig> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        PlateError::Config(format!("cannot read scoring config {}: {e}", path.display()))
    })?;
    let config = ScoringConfig::from_json_str(&raw)?;
    tracing::info!(path = %path.display(), rules = config.rules.len(), "scoring config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    fn cli_for(detections: &Path) -> Cli {
        Cli::parse_from(["platerank-analyze", detections.to_str().expect("utf-8 path")])
    }

    #[test]
    fn cli_parses_overrides() {
        let cli = Cli::parse_from([
            "platerank-analyze",
            "shot.json",
            "--out",
            "report.txt",
            "--row-threshold",
            "30",
            "--top",
            "3",
        ]);
        assert_eq!(cli.detections, PathBuf::from("shot.json"));
        assert_eq!(cli.out, Some(PathBuf::from("report.txt")));
        assert_eq!(cli.row_threshold.as_deref(), Some("30"));
        assert_eq!(cli.top, Some(3));
    }

    #[tokio::test]
    async fn run_writes_text_and_json_reports() {
        let detections = write_temp(
            r#"[
                {"text": "CDP4444", "confidence": 0.91, "bbox": {"x": 10, "y": 10, "width": 90, "height": 30}},
                {"text": "CD88888", "confidence": 0.95, "bbox": {"x": 200, "y": 14, "width": 90, "height": 30}}
            ]"#,
        );
        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("report.txt");
        let json = dir.path().join("ranked.json");

        let mut cli = cli_for(detections.path());
        cli.out = Some(out.clone());
        cli.json = Some(json.clone());

        run(&cli, AppConfig::default(), Uuid::nil())
            .await
            .expect("analysis succeeds");

        let text = std::fs::read_to_string(&out).expect("report exists");
        assert!(text.contains(" 1. CD88888"));
        assert!(text.contains(" 2. CDP4444"));

        let ranked: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json).expect("json exists"))
                .expect("valid json");
        assert_eq!(ranked[0]["total_score"], 190.0);
        assert_eq!(ranked[0]["position"]["column"], 2);
    }

    #[tokio::test]
    async fn invalid_rules_abort_before_reading_detections() {
        let rules = write_temp(r#"{"score_weights": {"lucky_digit_score": "many"}}"#);
        let mut cli = cli_for(Path::new("/nonexistent/detections.json"));
        cli.rules = Some(rules.path().to_path_buf());

        let err = run(&cli, AppConfig::default(), Uuid::nil())
            .await
            .expect_err("config must fail");
        assert!(err.to_string().starts_with("configuration error"), "{err}");
    }
}

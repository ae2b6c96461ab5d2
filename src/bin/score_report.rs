use anyhow::{Context, Result};
use std::fs;

use shisei_score::config::Config;
use shisei_score::pose::{Landmark, LandmarkSet};
use shisei_score::scoring::PostureScorer;

const CONFIG_PATH: &str = "config.toml";

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("使い方: score_report <landmarks.json> [--json]")?;
    let as_json = std::env::args().any(|a| a == "--json");

    let config = Config::load_or_default(CONFIG_PATH);

    let content = fs::read_to_string(&path).with_context(|| format!("読み込み失敗: {}", path))?;
    let landmarks: Vec<Landmark> =
        serde_json::from_str(&content).context("ランドマークJSONの解析に失敗")?;
    let set = LandmarkSet::new(landmarks);

    let scorer = PostureScorer::from_config(&config);
    let report = scorer.evaluate(&set)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=== 姿勢評価レポート ===");
    println!("総合スコア: {:.0}点", report.total_score);
    println!();
    for detail in &report.details {
        println!(
            "  {}: {:.0}点 [{}]",
            detail.name,
            detail.score,
            detail.tier.label()
        );
        println!("    {}", detail.description);
    }

    Ok(())
}

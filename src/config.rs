use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::pose::Side;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// スコアリング定数。デフォルトがKendall評価の正準値
///
/// 距離しきい値は正規化座標、角度許容値は度、傾きはしきい値超過1単位あたりの減点
#[derive(Debug, Deserialize, Clone)]
pub struct ScoringConfig {
    /// 評価する体側
    #[serde(default)]
    pub side: Side,
    /// 頭部前方姿勢: 耳-肩の水平距離しきい値
    #[serde(default = "default_head_threshold")]
    pub head_threshold: f64,
    #[serde(default = "default_head_slope")]
    pub head_slope: f64,
    /// 肩の位置: 耳-腰中点からの偏差しきい値
    #[serde(default = "default_shoulder_threshold")]
    pub shoulder_threshold: f64,
    #[serde(default = "default_shoulder_slope")]
    pub shoulder_slope: f64,
    /// 脊柱アライメント: 鉛直からの許容角（度）
    #[serde(default = "default_spine_tolerance")]
    pub spine_tolerance: f64,
    #[serde(default = "default_spine_slope")]
    pub spine_slope: f64,
    /// 骨盤の傾き: 鉛直からの許容角（度）
    #[serde(default = "default_pelvis_tolerance")]
    pub pelvis_tolerance: f64,
    #[serde(default = "default_pelvis_slope")]
    pub pelvis_slope: f64,
    /// 膝の位置: 膝-腰の水平距離しきい値
    #[serde(default = "default_knee_threshold")]
    pub knee_threshold: f64,
    #[serde(default = "default_knee_slope")]
    pub knee_slope: f64,
    /// 足首アライメント: 足首-膝の水平距離しきい値
    #[serde(default = "default_ankle_threshold")]
    pub ankle_threshold: f64,
    #[serde(default = "default_ankle_slope")]
    pub ankle_slope: f64,
}

fn default_head_threshold() -> f64 { 0.03 }
fn default_head_slope() -> f64 { 2000.0 }
fn default_shoulder_threshold() -> f64 { 0.02 }
fn default_shoulder_slope() -> f64 { 2500.0 }
fn default_spine_tolerance() -> f64 { 5.0 }
fn default_spine_slope() -> f64 { 3.0 }
fn default_pelvis_tolerance() -> f64 { 5.0 }
fn default_pelvis_slope() -> f64 { 3.0 }
fn default_knee_threshold() -> f64 { 0.03 }
fn default_knee_slope() -> f64 { 2000.0 }
fn default_ankle_threshold() -> f64 { 0.03 }
fn default_ankle_slope() -> f64 { 2000.0 }

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            side: Side::default(),
            head_threshold: default_head_threshold(),
            head_slope: default_head_slope(),
            shoulder_threshold: default_shoulder_threshold(),
            shoulder_slope: default_shoulder_slope(),
            spine_tolerance: default_spine_tolerance(),
            spine_slope: default_spine_slope(),
            pelvis_tolerance: default_pelvis_tolerance(),
            pelvis_slope: default_pelvis_slope(),
            knee_threshold: default_knee_threshold(),
            knee_slope: default_knee_slope(),
            ankle_threshold: default_ankle_threshold(),
            ankle_slope: default_ankle_slope(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// ファイルがなければデフォルト設定で続行する
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_canonical_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.scoring.head_threshold, 0.03);
        assert_eq!(config.scoring.head_slope, 2000.0);
        assert_eq!(config.scoring.shoulder_threshold, 0.02);
        assert_eq!(config.scoring.shoulder_slope, 2500.0);
        assert_eq!(config.scoring.spine_tolerance, 5.0);
        assert_eq!(config.scoring.spine_slope, 3.0);
        assert_eq!(config.scoring.knee_threshold, 0.03);
        assert_eq!(config.scoring.ankle_threshold, 0.03);
        assert_eq!(config.scoring.side, Side::Left);
    }

    #[test]
    fn test_partial_override() {
        let toml_str = r#"
[scoring]
side = "right"
head_threshold = 0.01
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.scoring.side, Side::Right);
        assert_eq!(config.scoring.head_threshold, 0.01);
        // 未指定の項目は正準値のまま
        assert_eq!(config.scoring.shoulder_threshold, 0.02);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default("/nonexistent/config.toml");
        assert_eq!(config.scoring.head_threshold, 0.03);
    }
}

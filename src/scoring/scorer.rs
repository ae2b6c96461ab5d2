use serde::Serialize;

use crate::config::{Config, ScoringConfig};
use crate::error::ScoreError;
use crate::pose::{LandmarkIndex, LandmarkSet, Side};
use crate::scoring::criterion::{self, Criterion, CriterionResult};

/// 1回の解析で生成される評価レポート
///
/// detailsは固定順（頭部・肩・脊柱・骨盤・膝・足首）。UI側は行順に依存する
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostureReport {
    pub total_score: f64,
    pub details: Vec<CriterionResult>,
}

/// Kendall側面評価のスコアラー
///
/// 状態を持たない純粋な変換。同じ入力には常に同じレポートを返す
pub struct PostureScorer {
    config: ScoringConfig,
    side: Side,
}

impl PostureScorer {
    /// 正準定数・左側評価のスコアラー
    pub fn new() -> Self {
        Self {
            config: ScoringConfig::default(),
            side: Side::Left,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            config: config.scoring.clone(),
            side: config.scoring.side,
        }
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// ランドマーク一式を評価してレポートを組み立てる
    ///
    /// 33点に満たない入力は評価前に弾く（部分レポートは作らない）
    pub fn evaluate(&self, landmarks: &LandmarkSet) -> Result<PostureReport, ScoreError> {
        if landmarks.len() != LandmarkIndex::COUNT {
            return Err(ScoreError::LandmarkCount {
                expected: LandmarkIndex::COUNT,
                actual: landmarks.len(),
            });
        }

        let mut details = Vec::with_capacity(Criterion::ALL.len());
        for c in Criterion::ALL {
            details.push(criterion::evaluate(c, landmarks, self.side, &self.config)?);
        }

        let total_score =
            details.iter().map(|d| d.score).sum::<f64>() / details.len() as f64;

        Ok(PostureReport {
            total_score,
            details,
        })
    }
}

impl Default for PostureScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::Landmark;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    /// 左側面の主要5点を指定してLandmarkSetを作る
    fn make_lateral_set(
        ear: (f64, f64),
        shoulder: (f64, f64),
        hip: (f64, f64),
        knee: (f64, f64),
        ankle: (f64, f64),
    ) -> LandmarkSet {
        let mut landmarks = vec![Landmark::default(); LandmarkIndex::COUNT];
        landmarks[LandmarkIndex::LeftEar as usize] = Landmark::new(ear.0, ear.1);
        landmarks[LandmarkIndex::LeftShoulder as usize] = Landmark::new(shoulder.0, shoulder.1);
        landmarks[LandmarkIndex::LeftHip as usize] = Landmark::new(hip.0, hip.1);
        landmarks[LandmarkIndex::LeftKnee as usize] = Landmark::new(knee.0, knee.1);
        landmarks[LandmarkIndex::LeftAnkle as usize] = Landmark::new(ankle.0, ankle.1);
        LandmarkSet::new(landmarks)
    }

    fn perfect_posture() -> LandmarkSet {
        // 全ての点がx=0.40の鉛直線上
        make_lateral_set(
            (0.40, 0.15),
            (0.40, 0.30),
            (0.40, 0.55),
            (0.40, 0.75),
            (0.40, 0.95),
        )
    }

    #[test]
    fn test_perfect_posture_scores_100() {
        let scorer = PostureScorer::new();
        let report = scorer.evaluate(&perfect_posture()).unwrap();
        assert_eq!(report.details.len(), 6);
        for detail in &report.details {
            assert_eq!(detail.score, 100.0, "criterion {}", detail.name);
        }
        assert_eq!(report.total_score, 100.0);
    }

    #[test]
    fn test_details_fixed_order() {
        let scorer = PostureScorer::new();
        let report = scorer.evaluate(&perfect_posture()).unwrap();
        let names: Vec<&str> = report.details.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "頭部前方姿勢",
                "肩の位置",
                "脊柱アライメント",
                "骨盤の傾き",
                "膝の位置",
                "足首アライメント",
            ]
        );
    }

    #[test]
    fn test_total_is_unweighted_mean() {
        // 頭部だけ前方にずらす: 頭部60点 + 肩の中点も動く
        let scorer = PostureScorer::new();
        let report = scorer
            .evaluate(&make_lateral_set(
                (0.45, 0.15),
                (0.40, 0.30),
                (0.40, 0.55),
                (0.40, 0.75),
                (0.40, 0.95),
            ))
            .unwrap();
        let mean = report.details.iter().map(|d| d.score).sum::<f64>() / 6.0;
        assert!(approx_eq(report.total_score, mean, 1e-9));
        assert!(approx_eq(report.details[0].score, 60.0, 1e-9));
    }

    #[test]
    fn test_deterministic() {
        let scorer = PostureScorer::new();
        let set = make_lateral_set(
            (0.46, 0.17),
            (0.41, 0.31),
            (0.43, 0.56),
            (0.40, 0.76),
            (0.44, 0.94),
        );
        let first = scorer.evaluate(&set).unwrap();
        let second = scorer.evaluate(&set).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_not_mutated() {
        let scorer = PostureScorer::new();
        let set = perfect_posture();
        let copy = set.clone();
        scorer.evaluate(&set).unwrap();
        assert_eq!(set, copy);
    }

    #[test]
    fn test_all_scores_clamped() {
        // 極端な座標でも全項目が[0,100]に収まる
        let scorer = PostureScorer::new();
        let report = scorer
            .evaluate(&make_lateral_set(
                (1.0, 0.0),
                (0.0, 1.0),
                (1.0, 0.0),
                (0.0, 1.0),
                (1.0, 0.0),
            ))
            .unwrap();
        for detail in &report.details {
            assert!(detail.score >= 0.0 && detail.score <= 100.0);
        }
        assert!(report.total_score >= 0.0 && report.total_score <= 100.0);
    }

    #[test]
    fn test_too_few_landmarks_rejected() {
        let scorer = PostureScorer::new();
        let set = LandmarkSet::new(vec![Landmark::default(); 17]);
        let err = scorer.evaluate(&set).unwrap_err();
        assert_eq!(
            err,
            ScoreError::LandmarkCount {
                expected: 33,
                actual: 17
            }
        );
    }

    #[test]
    fn test_too_many_landmarks_rejected() {
        let scorer = PostureScorer::new();
        let set = LandmarkSet::new(vec![Landmark::default(); 34]);
        assert!(scorer.evaluate(&set).is_err());
    }

    #[test]
    fn test_spinal_scenario_total_in_report() {
        // 体幹の傾き（肩と腰のxが0.05ずれ）が脊柱の行に反映されること
        let scorer = PostureScorer::new();
        let report = scorer
            .evaluate(&make_lateral_set(
                (0.40, 0.15),
                (0.40, 0.30),
                (0.45, 0.60),
                (0.45, 0.80),
                (0.45, 0.95),
            ))
            .unwrap();
        let spinal = &report.details[2];
        assert!(approx_eq(spinal.raw_metric, 9.46, 1e-9));
        assert!(approx_eq(spinal.score, 86.62, 1e-9));
    }

    #[test]
    fn test_from_config_defaults_match_new() {
        let from_config = PostureScorer::from_config(&Config::default());
        let fresh = PostureScorer::new();
        let set = make_lateral_set(
            (0.45, 0.15),
            (0.40, 0.30),
            (0.40, 0.55),
            (0.40, 0.75),
            (0.40, 0.95),
        );
        assert_eq!(
            from_config.evaluate(&set).unwrap(),
            fresh.evaluate(&set).unwrap()
        );
    }
}

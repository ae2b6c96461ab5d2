use serde::Serialize;

use crate::config::ScoringConfig;
use crate::error::ScoreError;
use crate::pose::{Landmark, LandmarkIndex, LandmarkSet, Side};
use crate::scoring::curve::ScoringCurve;
use crate::scoring::geometry;
use crate::scoring::tier::{self, Tier};

/// Kendall側面評価の6項目。配列順がそのままレポートの行順になる
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Criterion {
    HeadPosture,
    ShoulderPosition,
    SpinalAlignment,
    PelvicTilt,
    KneePosition,
    AnkleAlignment,
}

impl Criterion {
    pub const ALL: [Criterion; 6] = [
        Criterion::HeadPosture,
        Criterion::ShoulderPosition,
        Criterion::SpinalAlignment,
        Criterion::PelvicTilt,
        Criterion::KneePosition,
        Criterion::AnkleAlignment,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Criterion::HeadPosture => "頭部前方姿勢",
            Criterion::ShoulderPosition => "肩の位置",
            Criterion::SpinalAlignment => "脊柱アライメント",
            Criterion::PelvicTilt => "骨盤の傾き",
            Criterion::KneePosition => "膝の位置",
            Criterion::AnkleAlignment => "足首アライメント",
        }
    }

    /// 設定値から項目ごとのスコアリングカーブを構成
    pub fn curve(&self, config: &ScoringConfig) -> ScoringCurve {
        match self {
            Criterion::HeadPosture => {
                ScoringCurve::new(config.head_threshold, config.head_slope)
            }
            Criterion::ShoulderPosition => {
                ScoringCurve::new(config.shoulder_threshold, config.shoulder_slope)
            }
            Criterion::SpinalAlignment => {
                ScoringCurve::new(config.spine_tolerance, config.spine_slope)
            }
            Criterion::PelvicTilt => {
                ScoringCurve::new(config.pelvis_tolerance, config.pelvis_slope)
            }
            Criterion::KneePosition => {
                ScoringCurve::new(config.knee_threshold, config.knee_slope)
            }
            Criterion::AnkleAlignment => {
                ScoringCurve::new(config.ankle_threshold, config.ankle_slope)
            }
        }
    }
}

/// 1項目の評価結果。生成後は不変
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionResult {
    pub name: String,
    pub score: f64,
    /// 距離指標（正規化座標, 小数3桁）または角度偏差（度, 小数2桁）
    pub raw_metric: f64,
    /// 参考情報: 2点間の方向角（度, 丸めなし）
    pub raw_angle: f64,
    pub tier: Tier,
    pub description: String,
}

/// 距離は小数3桁、角度偏差は小数2桁に丸めてからスコアリングする。
/// 2進浮動小数の誤差で「ちょうどしきい値」の入力が満点を外れるのを防ぐ
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn landmark(set: &LandmarkSet, index: LandmarkIndex) -> Result<&Landmark, ScoreError> {
    set.get(index).ok_or(ScoreError::LandmarkMissing { index })
}

/// 指標と参考方向角を計測する
///
/// visibilityは参照しない: 低信頼度のランドマークもそのまま評価する
fn measure(
    criterion: Criterion,
    set: &LandmarkSet,
    side: Side,
) -> Result<(f64, f64), ScoreError> {
    match criterion {
        Criterion::HeadPosture => offset_metric(set, side.ear(), side.shoulder()),
        Criterion::ShoulderPosition => {
            // 耳と腰の中点が肩の理想位置
            let ear = landmark(set, side.ear())?;
            let hip = landmark(set, side.hip())?;
            let shoulder = landmark(set, side.shoulder())?;
            let midpoint = Landmark::new((ear.x + hip.x) / 2.0, (ear.y + hip.y) / 2.0);
            let metric = round3(geometry::horizontal_distance(shoulder, &midpoint));
            let angle = geometry::directional_angle(shoulder, &midpoint);
            Ok((metric, angle))
        }
        Criterion::SpinalAlignment => angle_metric(set, side.shoulder(), side.hip()),
        Criterion::PelvicTilt => angle_metric(set, side.hip(), side.knee()),
        Criterion::KneePosition => offset_metric(set, side.knee(), side.hip()),
        Criterion::AnkleAlignment => offset_metric(set, side.ankle(), side.knee()),
    }
}

fn offset_metric(
    set: &LandmarkSet,
    a: LandmarkIndex,
    b: LandmarkIndex,
) -> Result<(f64, f64), ScoreError> {
    let a = landmark(set, a)?;
    let b = landmark(set, b)?;
    let metric = round3(geometry::horizontal_distance(a, b));
    let angle = geometry::directional_angle(a, b);
    Ok((metric, angle))
}

/// 上側→下側の方向角の鉛直(±90°)からの偏差を指標にする
///
/// |angle|を先に取ることで線分の向きに依存しない偏差になる
fn angle_metric(
    set: &LandmarkSet,
    upper: LandmarkIndex,
    lower: LandmarkIndex,
) -> Result<(f64, f64), ScoreError> {
    let upper = landmark(set, upper)?;
    let lower = landmark(set, lower)?;
    let angle = geometry::directional_angle(upper, lower);
    let difference = round2((angle.abs() - 90.0).abs());
    Ok((difference, angle))
}

pub(crate) fn evaluate(
    criterion: Criterion,
    set: &LandmarkSet,
    side: Side,
    config: &ScoringConfig,
) -> Result<CriterionResult, ScoreError> {
    let (metric, raw_angle) = measure(criterion, set, side)?;
    let score = criterion.curve(config).score(metric);
    let tier = Tier::from_score(score);
    Ok(CriterionResult {
        name: criterion.display_name().to_string(),
        score,
        raw_metric: metric,
        raw_angle,
        tier,
        description: tier::description(criterion, tier).to_string(),
    })
}

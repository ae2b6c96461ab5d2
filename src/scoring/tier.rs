use crate::scoring::criterion::Criterion;
use serde::Serialize;

/// スコアから導かれる4段階の定性評価
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tier {
    Excellent,
    Good,
    Caution,
    Poor,
}

impl Tier {
    /// 固定ブレークポイントによる判定: 90以上/70以上/50以上/それ未満
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Tier::Excellent
        } else if score >= 70.0 {
            Tier::Good
        } else if score >= 50.0 {
            Tier::Caution
        } else {
            Tier::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Excellent => "優秀",
            Tier::Good => "良好",
            Tier::Caution => "注意",
            Tier::Poor => "要改善",
        }
    }
}

/// 評価項目×ティアごとの定型説明文（計24本、静的データ）
pub fn description(criterion: Criterion, tier: Tier) -> &'static str {
    use Criterion::*;
    use Tier::*;
    match (criterion, tier) {
        (HeadPosture, Excellent) => "頭部の位置は理想的です。耳と肩が鉛直線上に揃っています。",
        (HeadPosture, Good) => "頭部はわずかに前方に出ていますが、良好な範囲です。",
        (HeadPosture, Caution) => "頭部が前方に偏位しています。顎を引く意識を持ちましょう。",
        (HeadPosture, Poor) => "顕著な頭部前方偏位（ストレートネック傾向）が見られます。専門家への相談を推奨します。",

        (ShoulderPosition, Excellent) => "肩の位置は理想的です。耳と腰の中間線上に収まっています。",
        (ShoulderPosition, Good) => "肩の位置はほぼ適正です。軽度のずれが見られます。",
        (ShoulderPosition, Caution) => "肩が基準線から外れています。巻き肩や胸郭の硬さが疑われます。",
        (ShoulderPosition, Poor) => "肩の位置に大きなずれがあります。肩甲骨まわりのストレッチを取り入れましょう。",

        (SpinalAlignment, Excellent) => "脊柱の並びは理想的です。肩から腰まで鉛直に整っています。",
        (SpinalAlignment, Good) => "脊柱はおおむね鉛直です。わずかな傾きがあります。",
        (SpinalAlignment, Caution) => "体幹の傾きが目立ちます。猫背または反り腰の可能性があります。",
        (SpinalAlignment, Poor) => "脊柱の配列が大きく乱れています。体幹の姿勢改善が必要です。",

        (PelvicTilt, Excellent) => "骨盤の位置は理想的です。腰と膝が鉛直に並んでいます。",
        (PelvicTilt, Good) => "骨盤の傾きは小さく、良好な範囲です。",
        (PelvicTilt, Caution) => "骨盤の前後傾が見られます。股関節まわりの柔軟性を確認しましょう。",
        (PelvicTilt, Poor) => "骨盤の傾きが顕著です。腰部への負担が大きい状態です。",

        (KneePosition, Excellent) => "膝の位置は理想的です。腰の真下に揃っています。",
        (KneePosition, Good) => "膝の位置はほぼ適正です。",
        (KneePosition, Caution) => "膝が基準線からずれています。膝の過伸展または屈曲位が疑われます。",
        (KneePosition, Poor) => "膝の位置に大きなずれがあります。下肢アライメントの確認を推奨します。",

        (AnkleAlignment, Excellent) => "足首の位置は理想的です。膝の真下で体重を支えています。",
        (AnkleAlignment, Good) => "足首の位置はほぼ適正です。",
        (AnkleAlignment, Caution) => "足首が膝に対して前後にずれています。重心の偏りに注意しましょう。",
        (AnkleAlignment, Poor) => "足首の位置が大きくずれています。立位の重心バランスが崩れています。",
    }
}

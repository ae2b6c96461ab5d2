/// 飽和型のスコアリングカーブ
///
/// 指標が limit 以下なら満点、超過分は slope の傾きで減点し0点で下げ止まる。
/// 距離しきい値型（limit = 距離T）と角度許容型（理想0°, limit = 許容角）の
/// 両方をこの1本で表す
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringCurve {
    pub limit: f64,
    pub slope: f64,
}

impl ScoringCurve {
    pub fn new(limit: f64, slope: f64) -> Self {
        Self { limit, slope }
    }

    pub fn score(&self, metric: f64) -> f64 {
        if metric <= self.limit {
            100.0
        } else {
            (100.0 - (metric - self.limit) * self.slope).max(0.0)
        }
    }
}

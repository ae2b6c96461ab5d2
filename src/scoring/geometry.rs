use crate::pose::Landmark;

/// 2点間の水平距離（正規化座標）
pub fn horizontal_distance(a: &Landmark, b: &Landmark) -> f64 {
    (a.x - b.x).abs()
}

/// 線分 a→b の鉛直軸からの偏差角（度）
///
/// 完全に鉛直なら0°、水平なら90°。2点が一致する場合は偏差の情報が
/// ないため0°を返す（atan2(0,0)に依存せず明示的に扱う）
pub fn vertical_deviation_angle(a: &Landmark, b: &Landmark) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    dx.atan2(dy).to_degrees()
}

/// a→b の方向角（度）: atan2(Δy, Δx)、範囲 (-180, 180]
///
/// 画像座標系（Y下向き正）のままの角度。真下方向が+90°
pub fn directional_angle(a: &Landmark, b: &Landmark) -> f64 {
    (b.y - a.y).atan2(b.x - a.x).to_degrees()
}

use crate::pose::LandmarkIndex;
use thiserror::Error;

/// スコアリングの失敗は全て呼び出し側の入力契約違反。リトライしても結果は変わらない
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("landmark count mismatch: got {actual}, expected {expected}")]
    LandmarkCount { expected: usize, actual: usize },

    #[error("required landmark {index:?} is missing from the set")]
    LandmarkMissing { index: LandmarkIndex },
}

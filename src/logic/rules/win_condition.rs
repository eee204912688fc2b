//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::card::{Card, ALL_RANKS};

/// 4つの組札すべてに13枚ずつ積まれていればクリア！
pub fn is_victory(foundation: &[Vec<Card>]) -> bool {
    foundation.iter().all(|pile| pile.len() == ALL_RANKS.len())
}

// src/logic/deck.rs

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use itertools::iproduct;
use rand::seq::SliceRandom;
use rand::Rng;

/// 標準デッキの枚数。
pub const DECK_SIZE: usize = 52;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// スート順 (Heart, Club, Diamond, Spade)、その中で A から K の順に並ぶ。
/// 生成された時点では、すべてのカードは裏向きで操作不可。
pub fn create_standard_deck() -> Vec<Card> {
    iproduct!(ALL_SUITS.iter(), ALL_RANKS.iter())
        .map(|(&suit, &rank)| Card::new(rank, suit))
        .collect()
}

/// カードデッキをシャッフルする関数だよ (Fisher-Yates)。
///
/// # 引数
/// * `deck` - シャッフルしたいカードデッキへの可変参照。
/// * `rng` - 使う乱数生成器。シード付きのものを渡せば結果を再現できる。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

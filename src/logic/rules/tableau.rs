//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use super::common::CardColor;

/// カード A をカード B の上に置けるかチェックする。
///
/// A のランクが B よりちょうど1小さくて、色 (スート番号の偶奇) が違うときだけ OK。
/// 1枚の移動でも、下に何枚も連なった移動でも、このルールひとつで判定する。
pub fn can_be_placed(card_a: &Card, card_b: &Card) -> bool {
    let colors_different = CardColor::from_suit(card_a.suit) != CardColor::from_suit(card_b.suit);
    let rank_is_one_less = card_a.rank.value() + 1 == card_b.rank.value();
    debug!(
        "[Tableau Rule] {} onto {}. Colors different: {}. Rank is one less: {}.",
        card_a.id(),
        card_b.id(),
        colors_different,
        rank_is_one_less
    );
    colors_different && rank_is_one_less
}

/// 空いた列 (スターター) に置けるかチェックする。置けるのは K だけ。
pub fn can_start_column(card: &Card, column: &[Card]) -> bool {
    card.rank == Rank::King && column.is_empty()
}

//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::Card;

/// 組札の山の数 (スートごとに1つ)。
pub const FOUNDATION_PILES: usize = 4;

/// カードが自分のスートの組札に置けるかチェックする。
///
/// 組札は A から順に積むので、置けるのは「ランク == 今の山の枚数」のときだけ。
/// 空の山には A (ランク 0) だけ、A が乗っていれば 2 (ランク 1) だけ。
pub fn can_move_to_foundation(card: &Card, foundation: &[Vec<Card>; FOUNDATION_PILES]) -> bool {
    let pile = &foundation[card.suit.foundation_index()];
    let result = card.rank.value() as usize == pile.len();
    debug!(
        "[Foundation Rule] {} onto pile {} (len {}): {}",
        card.id(),
        card.suit.foundation_index(),
        pile.len(),
        result
    );
    result
}

//! ルール判定で共通して使うヘルパーを置くよ。

use crate::components::card::{Card, Suit};

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する。スート番号の偶奇で決まる (奇数 = 赤)。
    pub fn from_suit(suit: Suit) -> Self {
        if suit.number() % 2 == 1 {
            CardColor::Red
        } else {
            CardColor::Black
        }
    }
}

/// 山 (Vec<Card>) の一番上、つまり最後のカード。
pub(crate) fn top_card(pile: &[Card]) -> Option<&Card> {
    pile.last()
}

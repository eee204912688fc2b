// src/components/card.rs

// serde を使う宣言！カードの状態を JSON にして JS 側の描画に渡すよ。
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

use crate::error::CardError;

/// カードのスート（マーク）を表す列挙型だよ！❤️♣️♦️♠️
///
/// 番号は 1..=4。奇数が赤 (Heart, Diamond)、偶数が黒 (Club, Spade) になるように
/// 並べてあるので、`number() % 2` の偶奇がそのまま色になる！
/// 組札 (Foundation) のインデックスは `number() - 1`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Suit {
    Heart = 1,   // ❤️
    Club = 2,    // ♣️
    Diamond = 3, // ♦️
    Spade = 4,   // ♠️
}

/// カードのランク（数字）を表す列挙型だよ！ A は 0、K は 12。
///
/// 組札のルールが「山の枚数 == ランク」で書けるように 0 始まりにしてるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

// 全スートと全ランクを配列として定義しておくと、ループで使うときに便利！
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Club, Suit::Diamond, Suit::Spade];

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Suit {
    /// 1..=4 のスート番号。
    pub fn number(self) -> u8 {
        self as u8
    }

    /// このスートの組札のインデックス (0..=3)。
    pub fn foundation_index(self) -> usize {
        (self.number() - 1) as usize
    }
}

impl Rank {
    /// 0..=12 のランク値。
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl From<Suit> for u8 {
    fn from(suit: Suit) -> Self {
        suit.number()
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        ALL_SUITS
            .iter()
            .copied()
            .find(|suit| suit.number() == n)
            .ok_or(CardError::InvalidSuit(n))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.value()
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        ALL_RANKS.get(n as usize).copied().ok_or(CardError::InvalidRank(n))
    }
}

/// カードが今どの場所にあるか。JS 側には "stock" みたいな小文字の文字列で渡るよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardPlace {
    Stock,
    Waste,
    Tableau,
    Foundation,
}

/// カードを識別するキー (ランク, スート)。
///
/// 52枚のデッキの中で同じ組み合わせは2枚ないので、スナップショットを
/// またいでも同じカードを指せる。表示は `"{rank}-{suit}"` (例: `"0-1"` はハートの A)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId {
    pub rank: Rank,
    pub suit: Suit,
}

impl CardId {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// JS から来た生の数値を CardId にする。範囲外なら CardError。
    pub fn from_raw(rank: u8, suit: u8) -> Result<Self, CardError> {
        Ok(Self {
            rank: Rank::try_from(rank)?,
            suit: Suit::try_from(suit)?,
        })
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.rank.value(), self.suit.number())
    }
}

/// カードそのものだよ！🃏
///
/// - `rank`, `suit`: カードの値 (変わらない)
/// - `place`: 今入っている場所。カードを持っている入れ物 (Field) が書き換える
/// - `hidden`: 裏向きなら true
/// - `interactable`: プレイヤーが今このカードを動かせるか
///
/// Copy は付けないよ。状態が変わるカードをうっかり複製しないように、複製は clone で明示する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    pub place: CardPlace,
    pub hidden: bool,
    pub interactable: bool,
}

impl Card {
    /// 配る前のカード。裏向き・操作不可で、置き場所はいったん山札扱い。
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            place: CardPlace::Stock,
            hidden: true,
            interactable: false,
        }
    }

    pub fn id(&self) -> CardId {
        CardId::new(self.rank, self.suit)
    }

    /// 同じ (ランク, スート) のカードか。
    pub fn is(&self, id: CardId) -> bool {
        self.rank == id.rank && self.suit == id.suit
    }

    /// 表向きにして動かせる状態にする。
    pub(crate) fn reveal(&mut self) {
        self.hidden = false;
        self.interactable = true;
    }
}

// src/components/mod.rs

// ゲームで使うデータ部品のモジュールだよ！
// ソリティアのコアはカードだけ持っていれば十分。
pub mod card;

pub use card::{Card, CardId, CardPlace, Rank, Suit, ALL_RANKS, ALL_SUITS};

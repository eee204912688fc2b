// src/error.rs
//! クレート全体で使うエラー型だよ。
//!
//! ゲームのルール違反 (置けない場所に置こうとした、など) はエラーじゃなくて
//! `false` で返すから、ここにあるのは設定まわりとカードの値変換だけ！

use thiserror::Error;

/// 設定 (GameSettings / FieldSettings) が読めない・使えないときのエラー。
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON として読めなかった
    #[error("failed to parse settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// 場札の列が 1 本もない
    #[error("tableau needs at least one column")]
    EmptyTableau,

    /// 高さ 0 の列がある
    #[error("tableau column {column} has height 0")]
    ZeroHeight { column: usize },

    /// 場札に配る枚数がデッキより多い
    #[error("tableau heights deal {requested} cards but the deck holds {available}")]
    TooManyCards { requested: usize, available: usize },

    /// デッキが 52 種類1枚ずつになっていない
    #[error("deck must hold each of the 52 cards exactly once (got {len} cards, {distinct} distinct)")]
    InvalidDeck { len: usize, distinct: usize },

    /// 制限時間 0 秒
    #[error("time limit must be positive")]
    ZeroTime,
}

/// 数値からランクやスートへ変換できなかったときのエラー。
/// JS 側から (rank, suit) の組を受け取るときに使うよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("rank {0} is out of range 0..=12")]
    InvalidRank(u8),
    #[error("suit {0} is out of range 1..=4")]
    InvalidSuit(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages() {
        let err = ConfigError::TooManyCards { requested: 60, available: 52 };
        assert_eq!(err.to_string(), "tableau heights deal 60 cards but the deck holds 52");
        assert_eq!(ConfigError::ZeroHeight { column: 3 }.to_string(), "tableau column 3 has height 0");
    }

    #[test]
    fn parse_error_converts_from_serde() {
        let serde_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ConfigError = serde_err.into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}

// src/config/settings.rs
//! ゲームのパラメータ (場札の高さ、制限時間など) を定義するよ！
//! JS 側の設定オブジェクトと同じ camelCase の JSON から読める。

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::logic::deck::DECK_SIZE;

/// 場 (Field) の作り方に関する設定。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSettings {
    /// 場札の各列に配る枚数。列の数 = この Vec の長さ。
    pub tableau_heights: Vec<usize>,
    /// 一度に山札からめくる枚数。今の移動ルールでは参照しない (予約)。
    pub draw_count: u32,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            tableau_heights: vec![1, 2, 3, 4, 5, 6, 7],
            draw_count: 1,
        }
    }
}

impl FieldSettings {
    /// 場札に配る合計枚数。
    pub fn dealt_cards(&self) -> usize {
        self.tableau_heights.iter().sum()
    }

    /// 配れる設定かチェックする。
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tableau_heights.is_empty() {
            return Err(ConfigError::EmptyTableau);
        }
        if let Some(column) = self.tableau_heights.iter().position(|&h| h == 0) {
            return Err(ConfigError::ZeroHeight { column });
        }
        let requested = self.dealt_cards();
        if requested > DECK_SIZE {
            return Err(ConfigError::TooManyCards {
                requested,
                available: DECK_SIZE,
            });
        }
        Ok(())
    }
}

/// ゲーム全体の設定。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameSettings {
    pub field_settings: FieldSettings,
    /// 制限時間 (秒)。
    pub time: u32,
    /// 山札を戻せる回数。今は参照しない (予約)。
    pub max_redeals: u32,
    /// ヒントを許可するか。今は参照しない (予約)。
    pub allow_hints: bool,
    /// 指定するとシャッフルが再現可能になる。
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_settings: FieldSettings::default(),
            max_redeals: 3,
            allow_hints: true,
            time: 60 * 15,
            seed: None,
        }
    }
}

impl GameSettings {
    /// JSON 文字列から設定を読む。足りないキーはデフォルト値で埋まる。
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: GameSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time == 0 {
            return Err(ConfigError::ZeroTime);
        }
        self.field_settings.validate()
    }
}

// src/logic/moves.rs
//! 場 (Field) に送る「手」を表す型だよ。
//!
//! 手は作られて、一回だけ適用されて、捨てられる。
//! どのカードのことかは (ランク, スート) の `CardId` で指す。

use serde::{Deserialize, Serialize};

use crate::components::card::CardId;

/// 8種類の手。移動元と移動先を決めるのに必要な情報だけを持つ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Move {
    /// 山札の一番上を捨て札へ
    StockToWaste,
    /// 捨て札の一番上を組札へ
    WasteToFoundation,
    /// 場札の一番下 (列の最後) のカードを組札へ
    TableauToFoundation { source: CardId },
    /// 捨て札の一番上を、場札の `target` の上へ
    WasteToTableau { target: CardId },
    /// 場札の `source` とその下に重なったカード全部を `target` の列へ
    TableauToTableau { source: CardId, target: CardId },
    /// 場札の K (とその下のカード) を空いた列 `column` へ
    TableauToStarter { source: CardId, column: usize },
    /// 捨て札の K を空いた列 `column` へ
    WasteToStarter { column: usize },
    /// 山札が空のとき、捨て札を裏返して山札に戻す
    RestoreStock,
}

//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

use crate::components::card::Card;

/// 捨て札を山札に戻せるかチェックする。山札が空のときだけ戻せる。
///
/// 捨て札も空なら何も起きないけど、それも成功扱い。
pub fn can_restore_stock(stock: &[Card]) -> bool {
    stock.is_empty()
}

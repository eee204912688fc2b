// src/logic/field.rs
//! カードの配置 (山札・捨て札・場札・組札) を持っている「場」だよ！
//!
//! カードを動かせるのはこのモジュールの `apply_move` だけ。
//! 得点やタイマーのことは何も知らない (それは GameState の仕事)。
//!
//! 場が守っていること:
//! - 52枚のカードはいつもどこか1か所にだけある
//! - 空でない場札の列の最後のカードは表向きで操作できる
//! - 山札・捨て札は一番上のカードだけ操作できる
//! - 組札の山の枚数 = 一番上のカードのランク + 1

use itertools::Itertools;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardId, CardPlace};
use crate::config::settings::FieldSettings;
use crate::error::ConfigError;
use crate::logic::deck::{create_standard_deck, shuffle_deck, DECK_SIZE};
use crate::logic::moves::Move;
use crate::logic::rules::{self, FOUNDATION_PILES};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    settings: FieldSettings,
    /// 山札。最後の要素が一番上。
    stock: Vec<Card>,
    /// 捨て札。最後の要素が一番上。
    waste: Vec<Card>,
    /// 場札の列。各列の最後の要素が一番手前。
    tableau: Vec<Vec<Card>>,
    /// 組札。インデックスは `Suit::foundation_index()`。
    foundation: [Vec<Card>; FOUNDATION_PILES],
}

impl Field {
    /// シャッフルした新しいデッキで場を作る。
    pub fn new(settings: &FieldSettings) -> Result<Self, ConfigError> {
        Self::with_rng(settings, &mut rand::thread_rng())
    }

    /// 渡された乱数生成器でシャッフルして場を作る。
    pub fn with_rng<R: Rng + ?Sized>(settings: &FieldSettings, rng: &mut R) -> Result<Self, ConfigError> {
        let mut deck = create_standard_deck();
        shuffle_deck(&mut deck, rng);
        Self::from_deck(settings, deck)
    }

    /// 並び順の決まったデッキをそのまま配る。
    ///
    /// デッキは 52 種類のカードがちょうど1枚ずつ入っていないとダメ。
    /// デッキの先頭から、列 i に `tableau_heights[i]` 枚ずつ順番に配り、
    /// 残りが山札になる (残りの最初のカードが山札の一番下)。
    pub fn from_deck(settings: &FieldSettings, deck: Vec<Card>) -> Result<Self, ConfigError> {
        settings.validate()?;
        let distinct = deck.iter().map(Card::id).unique().count();
        if deck.len() != DECK_SIZE || distinct != DECK_SIZE {
            return Err(ConfigError::InvalidDeck {
                len: deck.len(),
                distinct,
            });
        }

        let mut cards = deck.into_iter().map(|mut card| {
            card.hidden = true;
            card.interactable = false;
            card
        });

        let tableau: Vec<Vec<Card>> = settings
            .tableau_heights
            .iter()
            .map(|&height| {
                let mut column: Vec<Card> = cards
                    .by_ref()
                    .take(height)
                    .map(|mut card| {
                        card.place = CardPlace::Tableau;
                        card
                    })
                    .collect();
                if let Some(last) = column.last_mut() {
                    last.reveal();
                }
                column
            })
            .collect();

        let mut stock: Vec<Card> = cards
            .map(|mut card| {
                card.place = CardPlace::Stock;
                card
            })
            .collect();
        if let Some(top) = stock.last_mut() {
            top.interactable = true;
        }

        debug!(
            "[Field] dealt {} tableau columns, {} cards left in stock",
            tableau.len(),
            stock.len()
        );

        Ok(Self {
            settings: settings.clone(),
            stock,
            waste: Vec::new(),
            tableau,
            foundation: Default::default(),
        })
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    pub fn tableau(&self) -> &[Vec<Card>] {
        &self.tableau
    }

    pub fn foundation(&self) -> &[Vec<Card>; FOUNDATION_PILES] {
        &self.foundation
    }

    /// 場にある全カード (山札 → 捨て札 → 場札 → 組札 の順)。
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.tableau.iter().flatten())
            .chain(self.foundation.iter().flatten())
    }

    /// (ランク, スート) からカードを探す。
    pub fn find_card(&self, id: CardId) -> Option<&Card> {
        self.cards().find(|card| card.is(id))
    }

    /// 場札でカードを探して (列番号, 列の中の位置) を返す。
    pub fn find_column(&self, id: CardId) -> Option<(usize, usize)> {
        self.tableau.iter().enumerate().find_map(|(column_index, column)| {
            column
                .iter()
                .position(|card| card.is(id))
                .map(|card_index| (column_index, card_index))
        })
    }

    pub fn is_victory(&self) -> bool {
        rules::is_victory(&self.foundation)
    }

    /// 場を丸ごと複製する。コンテナもカードも全部新しく作るので、
    /// 複製側をいじっても元の場には影響しない。Undo 用。
    pub fn snapshot(&self) -> Field {
        self.clone()
    }

    /// 手を適用する。ルール違反なら何も変えずに false。
    pub fn apply_move(&mut self, mv: &Move) -> bool {
        let applied = match *mv {
            Move::StockToWaste => self.apply_stock_to_waste(),
            Move::WasteToFoundation => self.apply_waste_to_foundation(),
            Move::TableauToFoundation { source } => self.apply_tableau_to_foundation(source),
            Move::WasteToTableau { target } => self.apply_waste_to_tableau(target),
            Move::TableauToTableau { source, target } => self.apply_tableau_to_tableau(source, target),
            Move::TableauToStarter { source, column } => self.apply_tableau_to_starter(source, column),
            Move::WasteToStarter { column } => self.apply_waste_to_starter(column),
            Move::RestoreStock => self.apply_restore_stock(),
        };
        debug!("[Field] {:?} -> {}", mv, applied);
        applied
    }

    /// 山札が空なら何もしないけど、それでも true を返す。
    fn apply_stock_to_waste(&mut self) -> bool {
        if let Some(mut card) = self.stock.pop() {
            if let Some(top) = self.stock.last_mut() {
                top.interactable = true;
            }
            card.place = CardPlace::Waste;
            card.reveal();
            if let Some(previous) = self.waste.last_mut() {
                previous.interactable = false;
            }
            self.waste.push(card);
        }
        true
    }

    fn apply_waste_to_foundation(&mut self) -> bool {
        match rules::top_card(&self.waste) {
            Some(card) if rules::can_move_to_foundation(card, &self.foundation) => {}
            _ => return false,
        }
        match self.pop_waste() {
            Some(card) => {
                self.push_foundation(card);
                true
            }
            None => false,
        }
    }

    fn apply_tableau_to_foundation(&mut self, source: CardId) -> bool {
        let Some((column, index)) = self.find_column(source) else {
            return false;
        };
        if index + 1 != self.tableau[column].len()
            || !rules::can_move_to_foundation(&self.tableau[column][index], &self.foundation)
        {
            return false;
        }
        match self.tableau[column].pop() {
            Some(card) => {
                self.push_foundation(card);
                self.reveal_column_top(column);
                true
            }
            None => false,
        }
    }

    fn apply_waste_to_tableau(&mut self, target: CardId) -> bool {
        let Some(column) = self.top_of_column(target) else {
            return false;
        };
        let target_card = &self.tableau[column][self.tableau[column].len() - 1];
        match rules::top_card(&self.waste) {
            Some(card) if rules::can_be_placed(card, target_card) => {}
            _ => return false,
        }
        match self.pop_waste() {
            Some(mut card) => {
                card.place = CardPlace::Tableau;
                self.tableau[column].push(card);
                true
            }
            None => false,
        }
    }

    fn apply_tableau_to_tableau(&mut self, source: CardId, target: CardId) -> bool {
        let (Some((source_column, source_index)), Some(target_column)) =
            (self.find_column(source), self.top_of_column(target))
        else {
            return false;
        };
        if source_column == target_column {
            return false;
        }
        let source_card = &self.tableau[source_column][source_index];
        let target_card = &self.tableau[target_column][self.tableau[target_column].len() - 1];
        if source_card.hidden || !rules::can_be_placed(source_card, target_card) {
            return false;
        }
        self.move_run(source_column, source_index, target_column);
        true
    }

    fn apply_tableau_to_starter(&mut self, source: CardId, column: usize) -> bool {
        let Some((source_column, source_index)) = self.find_column(source) else {
            return false;
        };
        let Some(destination) = self.tableau.get(column) else {
            return false;
        };
        let source_card = &self.tableau[source_column][source_index];
        if source_card.hidden || !rules::can_start_column(source_card, destination) {
            return false;
        }
        self.move_run(source_column, source_index, column);
        true
    }

    fn apply_waste_to_starter(&mut self, column: usize) -> bool {
        let Some(destination) = self.tableau.get(column) else {
            return false;
        };
        match rules::top_card(&self.waste) {
            Some(card) if rules::can_start_column(card, destination) => {}
            _ => return false,
        }
        match self.pop_waste() {
            Some(mut card) => {
                card.place = CardPlace::Tableau;
                self.tableau[column].push(card);
                true
            }
            None => false,
        }
    }

    fn apply_restore_stock(&mut self) -> bool {
        if !rules::can_restore_stock(&self.stock) {
            return false;
        }
        self.stock = std::mem::take(&mut self.waste)
            .into_iter()
            .rev()
            .map(|mut card| {
                card.place = CardPlace::Stock;
                card.hidden = true;
                card.interactable = false;
                card
            })
            .collect();
        if let Some(top) = self.stock.last_mut() {
            top.interactable = true;
        }
        true
    }

    /// `id` が場札のどこかの列の最後のカードなら、その列番号。
    fn top_of_column(&self, id: CardId) -> Option<usize> {
        self.find_column(id)
            .filter(|&(column, index)| index + 1 == self.tableau[column].len())
            .map(|(column, _)| column)
    }

    /// 捨て札の一番上を取り出して、次のカードを操作可能にする。
    fn pop_waste(&mut self) -> Option<Card> {
        let card = self.waste.pop()?;
        if let Some(top) = self.waste.last_mut() {
            top.interactable = true;
        }
        Some(card)
    }

    fn push_foundation(&mut self, mut card: Card) {
        card.place = CardPlace::Foundation;
        let pile = card.suit.foundation_index();
        self.foundation[pile].push(card);
    }

    /// `from` 列の `index` 番目から下のカードを全部、順番を保ったまま `to` 列へ。
    fn move_run(&mut self, from: usize, index: usize, to: usize) {
        let run = self.tableau[from].split_off(index);
        debug!("[Field] moving {} card(s) from column {} to column {}", run.len(), from, to);
        self.tableau[to].extend(run);
        self.reveal_column_top(from);
    }

    fn reveal_column_top(&mut self, column: usize) {
        if let Some(last) = self.tableau[column].last_mut() {
            last.reveal();
        }
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;

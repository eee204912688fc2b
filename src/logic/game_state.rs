// src/logic/game_state.rs
//! ゲーム1回分のセッション状態だよ！🎮
//!
//! 場 (Field) をひとつ持って、その上に得点・制限時間・勝ち負け・Undo 用の
//! スナップショットを重ねる。描画側から来る「カードをクリックした」
//! 「AをBに落とした」みたいな操作を、具体的な `Move` に翻訳するのもここ。
//!
//! 状態遷移: Playing → Victory (全部組札に乗った) / Playing → Defeat (時間切れ)。
//! Victory と Defeat からは抜けない。やり直すときは `restart`。

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::components::card::{CardId, CardPlace};
use crate::config::settings::GameSettings;
use crate::error::ConfigError;
use crate::logic::field::Field;
use crate::logic::moves::Move;
use crate::storage::HighScoreStore;

/// 組札に1枚乗せたときの得点。
pub const FOUNDATION_POINTS: i32 = 100;
/// クリア時、残り1秒あたりのボーナス。
pub const TIME_BONUS_PER_SECOND: i32 = 10;

/// ゲームの進行状態。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Playing,
    Victory,
    Defeat,
}

pub struct GameState {
    settings: GameSettings,
    field: Field,
    score: i32,
    highscore: i32,
    /// 残り時間 (秒)
    time: u32,
    /// 成功した手の数
    moves: u32,
    status: GameStatus,
    /// 手を試すたびに積まれる、その直前の場
    state_stack: Vec<Field>,
    store: Box<dyn HighScoreStore>,
}

impl GameState {
    /// 設定どおりに新しく配ってゲームを始める。
    pub fn new(settings: GameSettings, store: Box<dyn HighScoreStore>) -> Result<Self, ConfigError> {
        settings.validate()?;
        let field = deal(&settings)?;
        Ok(Self::with_field(settings, field, store))
    }

    /// 配り済みの場からゲームを始める。
    pub fn with_field(settings: GameSettings, field: Field, store: Box<dyn HighScoreStore>) -> Self {
        let highscore = store.high_score();
        info!(
            "[GameState] new game: {} columns, {}s, high score {}",
            field.tableau().len(),
            settings.time,
            highscore
        );
        Self {
            time: settings.time,
            settings,
            field,
            score: 0,
            highscore,
            moves: 0,
            status: GameStatus::Playing,
            state_stack: Vec::new(),
            store,
        }
    }

    /// 同じ設定・同じ保存先で最初からやり直す。ハイスコアは読み直す。
    pub fn restart(&mut self) -> Result<(), ConfigError> {
        self.field = deal(&self.settings)?;
        self.score = 0;
        self.highscore = self.store.high_score();
        self.time = self.settings.time;
        self.moves = 0;
        self.status = GameStatus::Playing;
        self.state_stack.clear();
        info!("[GameState] restarted");
        Ok(())
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn time(&self) -> u32 {
        self.time
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn highscore(&self) -> i32 {
        self.highscore
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Undo で戻れる回数 (失敗した手の分も含む)。
    pub fn undo_depth(&self) -> usize {
        self.state_stack.len()
    }

    /// 得点を足す。ハイスコアを超えたらすぐ保存する。
    /// i32 の範囲で頭打ちになる。
    pub fn update_score(&mut self, points: i32) {
        self.score = self.score.saturating_add(points);
        if self.score > self.highscore {
            self.highscore = self.score;
            self.store.set_high_score(self.score);
            info!("[GameState] new high score {}", self.score);
        }
    }

    /// タイマーがまだ動いているか。
    pub fn is_timer_running(&self) -> bool {
        self.status == GameStatus::Playing && self.time > 0
    }

    /// 1秒進める。ホスト側のタイマーから毎秒呼ばれる。
    /// 0 になったら負け。ゲームが終わった後は何もしない。
    pub fn tick(&mut self) {
        if !self.is_timer_running() {
            return;
        }
        self.time -= 1;
        if self.time == 0 {
            self.status = GameStatus::Defeat;
            info!("[GameState] time is up, defeat");
        }
    }

    /// 場がクリア状態なら、残り時間ボーナスを足して勝ちにする。
    /// 手が成功するたびに描画側が呼ぶ。勝っていれば true。
    pub fn check_victory(&mut self) -> bool {
        if self.status == GameStatus::Playing && self.field.is_victory() {
            self.update_score(time_bonus(self.time));
            self.status = GameStatus::Victory;
            info!(
                "[GameState] victory after {}s, score {}",
                self.settings.time - self.time,
                self.score
            );
        }
        self.status == GameStatus::Victory
    }

    /// 今の場をスナップショットとして積んでから、手を適用する。
    /// 失敗する手でもスナップショットは積まれる。
    pub fn apply_move(&mut self, mv: Move) -> bool {
        self.state_stack.push(self.field.snapshot());
        let applied = self.field.apply_move(&mv);
        if applied {
            self.moves += 1;
        }
        applied
    }

    /// 直前のスナップショットに戻す。積まれていなければ何もしない。
    /// 得点や手数は戻さない。
    pub fn revert_move(&mut self) {
        if let Some(previous) = self.state_stack.pop() {
            self.field = previous;
            info!("[GameState] reverted, {} snapshot(s) left", self.state_stack.len());
        }
    }

    /// カード1枚だけの操作 (クリックなど)。
    ///
    /// - 山札 → 1枚めくる
    /// - 捨て札 → 組札へ (成功で 100 点)
    /// - 場札 → 組札へ (成功で 100 点)
    /// - 組札 → 何もしない
    pub fn handle_single_card_action(&mut self, card: CardId) -> bool {
        let Some(place) = self.place_of(card) else {
            return false;
        };
        match place {
            CardPlace::Stock => self.apply_move(Move::StockToWaste),
            CardPlace::Waste => self.apply_scored(Move::WasteToFoundation),
            CardPlace::Tableau => self.apply_scored(Move::TableauToFoundation { source: card }),
            CardPlace::Foundation => false,
        }
    }

    /// カード A をカード B の上に落とした。
    pub fn handle_two_cards_action(&mut self, card_a: CardId, card_b: CardId) -> bool {
        match (self.place_of(card_a), self.place_of(card_b)) {
            (Some(CardPlace::Waste), Some(CardPlace::Tableau)) => {
                self.apply_move(Move::WasteToTableau { target: card_b })
            }
            (Some(CardPlace::Tableau), Some(CardPlace::Tableau)) => {
                self.apply_move(Move::TableauToTableau {
                    source: card_a,
                    target: card_b,
                })
            }
            _ => false,
        }
    }

    /// カードを空いた列 `column` に落とした。
    pub fn handle_start_tableau(&mut self, card: CardId, column: usize) -> bool {
        match self.place_of(card) {
            Some(CardPlace::Tableau) => self.apply_move(Move::TableauToStarter { source: card, column }),
            Some(CardPlace::Waste) => self.apply_move(Move::WasteToStarter { column }),
            _ => false,
        }
    }

    fn apply_scored(&mut self, mv: Move) -> bool {
        let applied = self.apply_move(mv);
        if applied {
            self.update_score(FOUNDATION_POINTS);
        }
        applied
    }

    fn place_of(&self, card: CardId) -> Option<CardPlace> {
        let place = self.field.find_card(card).map(|c| c.place);
        if place.is_none() {
            debug!("[GameState] card {} is not on the field", card);
        }
        place
    }
}

/// 残り時間 (秒) に応じたクリアボーナス。とても長い制限時間でも溢れない。
fn time_bonus(remaining: u32) -> i32 {
    i32::try_from(remaining)
        .unwrap_or(i32::MAX)
        .saturating_mul(TIME_BONUS_PER_SECOND)
}

/// 設定にシードがあればそれで、無ければ thread_rng で配る。
fn deal(settings: &GameSettings) -> Result<Field, ConfigError> {
    match settings.seed {
        Some(seed) => Field::with_rng(&settings.field_settings, &mut StdRng::seed_from_u64(seed)),
        None => Field::new(&settings.field_settings),
    }
}

#[cfg(test)]
#[path = "game_state_tests.rs"]
mod tests;

// src/app/game_app.rs

// --- 必要なものをインポート ---
use std::sync::{Arc, Mutex, MutexGuard};

use js_sys::Error;
use log::{error, info};
use wasm_bindgen::prelude::*;

use crate::app::countdown::Countdown;
use crate::app::state_getter;
use crate::app::storage::LocalStorageHighScore;
use crate::components::card::CardId;
use crate::config::settings::GameSettings;
use crate::logic::game_state::GameState;
use crate::logic::moves::Move;
use crate::logic::timer::format_time;

/// JS 側の描画レイヤーから使う、ゲーム全体のハンドルだよ！
///
/// カードは (rank, suit) の数値の組で指定する (rank 0..=12, suit 1..=4)。
/// 操作系のメソッドはルール上動かせたかどうかを bool で返す。
/// 範囲外の数値を渡したときだけ Err になる。
#[wasm_bindgen]
pub struct GameApp {
    state: Arc<Mutex<GameState>>,
    // 毎秒 tick を呼ぶタイマー。restart で作り直す。
    countdown: Option<Countdown>,
}

#[wasm_bindgen]
impl GameApp {
    /// 設定 JSON (省略するとデフォルト設定) で新しいゲームを始める。
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Result<GameApp, JsValue> {
        let settings = match settings_json {
            Some(json) => GameSettings::from_json(&json).map_err(to_js_error)?,
            None => GameSettings::default(),
        };
        let state = GameState::new(settings, Box::new(LocalStorageHighScore::new())).map_err(to_js_error)?;
        let state = Arc::new(Mutex::new(state));
        let countdown = Countdown::start(Arc::clone(&state))?;
        info!("GameApp: initialized");
        Ok(Self {
            state,
            countdown: Some(countdown),
        })
    }

    /// カードをクリックした。
    pub fn handle_single_card_action(&self, rank: u8, suit: u8) -> Result<bool, JsValue> {
        let card = card_id(rank, suit)?;
        Ok(self.lock().handle_single_card_action(card))
    }

    /// カード A をカード B の上に落とした。
    pub fn handle_two_cards_action(
        &self,
        rank_a: u8,
        suit_a: u8,
        rank_b: u8,
        suit_b: u8,
    ) -> Result<bool, JsValue> {
        let card_a = card_id(rank_a, suit_a)?;
        let card_b = card_id(rank_b, suit_b)?;
        Ok(self.lock().handle_two_cards_action(card_a, card_b))
    }

    /// カードを空いた列に落とした。
    pub fn handle_start_tableau(&self, rank: u8, suit: u8, column: usize) -> Result<bool, JsValue> {
        let card = card_id(rank, suit)?;
        Ok(self.lock().handle_start_tableau(card, column))
    }

    /// `{"type": "restoreStock"}` みたいな JSON の手を直接適用する。
    pub fn apply_move(&self, move_json: String) -> Result<bool, JsValue> {
        let mv: Move = serde_json::from_str(&move_json).map_err(to_js_error)?;
        Ok(self.lock().apply_move(mv))
    }

    /// 山札ボタン: 捨て札を山札に戻す。
    pub fn restock(&self) -> bool {
        self.lock().apply_move(Move::RestoreStock)
    }

    pub fn revert_move(&self) {
        self.lock().revert_move();
    }

    /// 手が成功するたびに描画側から呼ぶ。
    pub fn check_victory(&self) -> bool {
        self.lock().check_victory()
    }

    /// 同じ設定で配り直す。タイマーも作り直す。
    pub fn restart(&mut self) -> Result<(), JsValue> {
        // 古いタイマーを先に止める
        self.countdown = None;
        self.lock().restart().map_err(to_js_error)?;
        self.countdown = Some(Countdown::start(Arc::clone(&self.state))?);
        Ok(())
    }

    pub fn get_state_json(&self) -> Result<String, JsValue> {
        state_getter::get_game_state_json(&self.lock()).map_err(|e| {
            error!("Failed to serialize game state: {}", e);
            to_js_error(e)
        })
    }

    pub fn get_time(&self) -> u32 {
        self.lock().time()
    }

    pub fn get_formatted_time(&self) -> String {
        format_time(self.lock().time())
    }

    pub fn get_score(&self) -> i32 {
        self.lock().score()
    }

    pub fn get_highscore(&self) -> i32 {
        self.lock().highscore()
    }

    /// "PLAYING" / "VICTORY" / "DEFEAT"
    pub fn get_status(&self) -> String {
        format!("{:?}", self.lock().status()).to_uppercase()
    }
}

impl GameApp {
    fn lock(&self) -> MutexGuard<'_, GameState> {
        lock_state(&self.state)
    }
}

/// GameState のロックを取る。poison していても中身を使って続ける。
pub(crate) fn lock_state(state: &Arc<Mutex<GameState>>) -> MutexGuard<'_, GameState> {
    match state.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            error!("GameState mutex poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

fn card_id(rank: u8, suit: u8) -> Result<CardId, JsValue> {
    CardId::from_raw(rank, suit).map_err(to_js_error)
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    Error::new(&err.to_string()).into()
}

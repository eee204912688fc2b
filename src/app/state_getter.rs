//! GameState を JSON にして描画側に渡すよ。

use serde::Serialize;

use crate::logic::field::Field;
use crate::logic::game_state::{GameState, GameStatus};
use crate::logic::timer::format_time;

/// 描画側が1フレーム描くのに必要な情報をまとめたもの。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateData<'a> {
    pub field: &'a Field,
    pub score: i32,
    pub highscore: i32,
    pub time: u32,
    pub formatted_time: String,
    pub moves: u32,
    pub status: GameStatus,
    pub can_undo: bool,
    pub allow_hints: bool,
}

impl<'a> GameStateData<'a> {
    pub fn from_state(state: &'a GameState) -> Self {
        Self {
            field: state.field(),
            score: state.score(),
            highscore: state.highscore(),
            time: state.time(),
            formatted_time: format_time(state.time()),
            moves: state.moves(),
            status: state.status(),
            can_undo: state.undo_depth() > 0,
            allow_hints: state.settings().allow_hints,
        }
    }
}

/// 今の状態を JSON 文字列にする。
pub fn get_game_state_json(state: &GameState) -> Result<String, serde_json::Error> {
    serde_json::to_string(&GameStateData::from_state(state))
}

// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！
pub mod app; // ブラウザ向けのバインディング
pub mod components; // カード
pub mod config; // 設定
pub mod error;
pub mod logic; // ルールとゲーム状態
pub mod storage; // ハイスコアの保存先

pub use app::game_app::GameApp;
pub use components::card::{Card, CardId, CardPlace, Rank, Suit};
pub use config::settings::{FieldSettings, GameSettings};
pub use error::{CardError, ConfigError};
pub use logic::{format_time, Field, GameState, GameStatus, Move};
pub use storage::{HighScoreStore, MemoryHighScore};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    app::logger::init(log::LevelFilter::Info);
    log::info!("Panic hook and logger set!");
}

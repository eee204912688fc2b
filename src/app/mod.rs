// src/app/mod.rs
//! ブラウザ (wasm) 側とゲームロジックを繋ぐモジュールだよ！
//! web_sys を触るのはここだけ。

pub mod countdown;
pub mod game_app;
pub mod logger;
pub mod state_getter;
pub mod storage;

// src/config/mod.rs
//! ゲーム設定まわり。

pub mod settings;

pub use settings::{FieldSettings, GameSettings};

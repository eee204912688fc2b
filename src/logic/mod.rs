// src/logic/mod.rs
//! ゲームのルールと状態を扱うモジュールたち！
//! 描画やブラウザのことは知らない、純粋なゲームロジックだけを置く。

pub mod deck;
pub mod field;
pub mod game_state;
pub mod moves;
pub mod rules;
pub mod timer;

pub use field::Field;
pub use game_state::{GameState, GameStatus};
pub use moves::Move;
pub use timer::format_time;

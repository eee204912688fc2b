// src/logic/rules/mod.rs
//! ソリティアのルール判定をまとめるよ！
//! どれも場の状態を読むだけの純粋な関数で、カードを動かすのは Field の仕事。

pub mod common;
pub mod foundation;
pub mod tableau;
pub mod stock_waste;
pub mod win_condition;


// 各モジュールから公開したい関数をここで再エクスポート！
pub use common::*;
pub use foundation::*;
pub use tableau::*;
pub use stock_waste::*;
pub use win_condition::*;

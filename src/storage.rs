// src/storage.rs
//! ハイスコアの保存先。
//!
//! ゲームが永続化するのはハイスコアの整数1個だけ。読むのは GameState を
//! 作るときの1回、書くのはハイスコアを更新したとき。
//! ブラウザでは `app::storage::LocalStorageHighScore` を使う。

use std::cell::Cell;
use std::rc::Rc;

/// ハイスコアを読み書きする相手。
pub trait HighScoreStore {
    /// 保存されているハイスコア。まだ無ければ 0。
    fn high_score(&self) -> i32;

    /// ハイスコアを保存する。
    fn set_high_score(&mut self, score: i32);
}

/// メモリ上だけのハイスコア。clone したハンドル同士で値を共有する。
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScore {
    value: Rc<Cell<i32>>,
}

impl MemoryHighScore {
    pub fn new(initial: i32) -> Self {
        Self {
            value: Rc::new(Cell::new(initial)),
        }
    }

    pub fn get(&self) -> i32 {
        self.value.get()
    }
}

impl HighScoreStore for MemoryHighScore {
    fn high_score(&self) -> i32 {
        self.value.get()
    }

    fn set_high_score(&mut self, score: i32) {
        self.value.set(score);
    }
}

// src/app/storage.rs
//! ブラウザの localStorage にハイスコアを保存するよ。

use log::warn;
use web_sys::{window, Storage};

use crate::storage::HighScoreStore;

/// localStorage のキー。
pub const HIGH_SCORE_KEY: &str = "high_score";

/// `window.localStorage` に置くハイスコア。
/// localStorage が使えないとき (プライベートモードなど) は、読むと 0、書き込みは捨てる。
pub struct LocalStorageHighScore {
    storage: Option<Storage>,
}

impl LocalStorageHighScore {
    pub fn new() -> Self {
        let storage = window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            warn!("localStorage is not available, high score will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalStorageHighScore {
    fn default() -> Self {
        Self::new()
    }
}

impl HighScoreStore for LocalStorageHighScore {
    fn high_score(&self) -> i32 {
        self.storage
            .as_ref()
            .and_then(|s| s.get_item(HIGH_SCORE_KEY).ok().flatten())
            .and_then(|value| value.parse().ok())
            .unwrap_or(0)
    }

    fn set_high_score(&mut self, score: i32) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(HIGH_SCORE_KEY, &score.to_string()) {
                warn!("Failed to save high score: {:?}", e);
            }
        }
    }
}

// src/logic/timer.rs

/// 秒数を `m:ss` 形式の文字列にするよ。残り時間の表示用。
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

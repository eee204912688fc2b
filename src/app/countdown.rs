// src/app/countdown.rs
//! `window.setInterval` で毎秒 `GameState::tick` を呼ぶタイマーだよ！⏱️

use std::sync::{Arc, Mutex};

use log::error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::app::game_app::lock_state;
use crate::logic::game_state::GameState;

const TICK_MS: i32 = 1000;

/// 動いている1秒タイマー。ゲームが PLAYING でなくなるか、
/// この値が drop されたら interval を止める。
pub(crate) struct Countdown {
    interval_id: Arc<Mutex<Option<i32>>>,
    // interval を止めるまで JS 側がこのクロージャを参照してるので持っておく
    _callback: Closure<dyn FnMut()>,
}

impl Countdown {
    pub(crate) fn start(state: Arc<Mutex<GameState>>) -> Result<Self, JsValue> {
        let window = window().ok_or("Failed to get window")?;
        let interval_id = Arc::new(Mutex::new(None));

        let interval_id_clone = Arc::clone(&interval_id);
        let callback = Closure::wrap(Box::new(move || {
            let running = {
                let mut state = lock_state(&state);
                state.tick();
                state.is_timer_running()
            };
            if !running {
                clear(&interval_id_clone);
            }
        }) as Box<dyn FnMut()>);

        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            TICK_MS,
        )?;
        match interval_id.lock() {
            Ok(mut slot) => *slot = Some(id),
            Err(e) => error!("Failed to store interval id: {}", e),
        }

        Ok(Self {
            interval_id,
            _callback: callback,
        })
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        clear(&self.interval_id);
    }
}

fn clear(interval_id: &Arc<Mutex<Option<i32>>>) {
    let id = match interval_id.lock() {
        Ok(mut slot) => slot.take(),
        Err(e) => {
            error!("Interval id mutex poisoned: {}", e);
            None
        }
    };
    if let (Some(id), Some(window)) = (id, window()) {
        window.clear_interval_with_handle(id);
    }
}

//! 定时器封装模块
//!
//! 使用 `web_sys` 的原生 `setTimeout`，用于自动隐藏提示。

use wasm_bindgen::prelude::*;

/// 一次性定时器
///
/// 当 `Timeout` 被 drop 时，未触发的定时器会被清除。
pub struct Timeout {
    handle: Option<i32>,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    /// 无法获取 window 或设置失败时回调不会触发
    pub fn new<F>(millis: u32, callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(cb) = callback.take() {
                cb();
            }
        });

        let handle = web_sys::window().and_then(|window| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    millis as i32,
                )
                .inspect_err(|e| log::warn!("setTimeout failed: {:?}", e))
                .ok()
        });

        Self {
            handle,
            _closure: closure,
        }
    }

    pub fn cancel(&mut self) {
        if let (Some(window), Some(handle)) = (web_sys::window(), self.handle.take()) {
            window.clear_timeout_with_handle(handle);
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}

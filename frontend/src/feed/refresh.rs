use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Browser interval that fires `on_tick` every `period_ms` until dropped.
pub struct RefreshTimer {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl RefreshTimer {
    pub fn start(period_ms: i32, on_tick: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut()>::new(on_tick);

        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms,
        ) {
            Ok(handle) => Some(Self {
                handle,
                _callback: callback,
            }),
            Err(e) => {
                log::warn!("Failed to start refresh timer: {e:?}");
                None
            }
        }
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

pub mod canvas;
pub mod dom;
pub mod frame_loop;
pub mod runner;

pub use canvas::CanvasStage;
pub use frame_loop::AnimationLoop;
pub use runner::DissolveRunner;

use dissolve_engine::DissolveError;
use wasm_bindgen::JsValue;

/// Route panics and `log` records to the browser console. Safe to call more than once.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Engine errors cross the wasm boundary as plain strings.
pub fn js_error(err: DissolveError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

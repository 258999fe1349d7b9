//! DOM lookup and event wiring.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, EventTarget, MouseEvent, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Look up an element by id and cast it to the expected type.
pub fn element_by_id<T: JsCast>(id: &str) -> Result<T, JsValue> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element '{}' has an unexpected type", id)))
}

/// Forward `mousemove` viewport coordinates (clientX/clientY) to `handler`.
pub fn on_pointer_move(
    target: &EventTarget,
    mut handler: impl FnMut(f32, f32) + 'static,
) -> Result<(), JsValue> {
    let on_move = Closure::wrap(Box::new(move |e: MouseEvent| {
        handler(e.client_x() as f32, e.client_y() as f32);
    }) as Box<dyn FnMut(MouseEvent)>);
    target.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();
    Ok(())
}

pub fn on_click(target: &EventTarget, mut handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    let on_click = Closure::wrap(Box::new(move |_: web_sys::Event| {
        handler();
    }) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

/// Run `handler` once when `target` fires `load` (e.g. an image finishing decode).
pub fn on_load(target: &EventTarget, handler: impl FnOnce() + 'static) -> Result<(), JsValue> {
    let on_load = Closure::once_into_js(handler);
    target.add_event_listener_with_callback("load", on_load.unchecked_ref())
}

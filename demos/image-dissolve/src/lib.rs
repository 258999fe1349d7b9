use std::cell::RefCell;

use dissolve_engine::{DissolveError, Effect, EffectConfig, InputEvent, Size};
use dissolve_web::{dom, js_error, AnimationLoop, CanvasStage, DissolveRunner};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlElement, HtmlImageElement};

struct App {
    runner: DissolveRunner,
    stage: CanvasStage,
    frame_loop: Option<AnimationLoop>,
}

impl App {
    fn frame(&mut self) -> bool {
        if !self.runner.tick() {
            return false;
        }
        self.stage.present(self.runner.render_buffer());
        true
    }

    fn stop(&mut self) {
        self.runner.stop();
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.stop();
        }
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

/// Runs `f` against the live app; `None` until `dissolve_start` has finished.
fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn push_input(event: InputEvent) {
    if with_app(|app| app.runner.handle_input(event)).is_none() {
        log::debug!("image-dissolve: input before start ignored");
    }
}

fn mount(canvas_id: &str, image_id: &str, warp_button_id: Option<&str>) -> Result<(), JsValue> {
    let window = dom::window()?;
    let canvas: HtmlCanvasElement = dom::element_by_id(canvas_id)?;
    let image: HtmlImageElement = dom::element_by_id(image_id)?;

    let mut stage = CanvasStage::new(canvas)?;
    let viewport = stage.fit_to_window(&window)?;
    let image_size = Size::new(image.width(), image.height());
    if image_size.is_empty() {
        return Err(js_error(DissolveError::ImageNotLoaded));
    }

    let effect = Effect::new(viewport, image_size, EffectConfig::default());
    let pixels = stage.sample_image(&image, effect.placement())?;
    let mut runner = DissolveRunner::new(effect);
    let count = runner.init_from_viewport(&pixels).map_err(js_error)?;

    dom::on_pointer_move(&window, |x, y| push_input(InputEvent::PointerMove { x, y }))?;
    if let Some(id) = warp_button_id {
        let button: HtmlElement = dom::element_by_id(id)?;
        dom::on_click(&button, || push_input(InputEvent::Warp))?;
    }

    // Replacing a running app drops its loop, which cancels it.
    APP.with(|cell| {
        *cell.borrow_mut() = Some(App {
            runner,
            stage,
            frame_loop: None,
        });
    });
    let frame_loop = AnimationLoop::start(|| with_app(App::frame).unwrap_or(false))?;
    with_app(|app| app.frame_loop = Some(frame_loop));

    log::info!(
        "image-dissolve: {} particles on a {} viewport",
        count,
        viewport
    );
    Ok(())
}

/// Start the effect once the image has decoded.
///
/// `warp_button_id` is optional; without it, warp is only reachable through `dissolve_warp`.
#[wasm_bindgen]
pub fn dissolve_start(
    canvas_id: String,
    image_id: String,
    warp_button_id: Option<String>,
) -> Result<(), JsValue> {
    dissolve_web::init_logging();

    let image: HtmlImageElement = dom::element_by_id(&image_id)?;
    if image.complete() && image.natural_width() > 0 {
        return mount(&canvas_id, &image_id, warp_button_id.as_deref());
    }

    log::info!("image-dissolve: waiting for '{}' to load", image_id);
    dom::on_load(&image, move || {
        if let Err(err) = mount(&canvas_id, &image_id, warp_button_id.as_deref()) {
            log::error!("image-dissolve: start failed: {:?}", err);
        }
    })
}

#[wasm_bindgen]
pub fn dissolve_warp() {
    push_input(InputEvent::Warp);
}

#[wasm_bindgen]
pub fn dissolve_pointer_move(x: f32, y: f32) {
    push_input(InputEvent::PointerMove { x, y });
}

#[wasm_bindgen]
pub fn dissolve_stop() {
    with_app(App::stop);
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_particle_count() -> u32 {
    with_app(|app| app.runner.particle_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_app(|app| app.runner.instances_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_app(|app| app.runner.instance_count()).unwrap_or(0)
}

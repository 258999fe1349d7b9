//! The 2D canvas the effect is sampled from and presented on.

use dissolve_engine::{ImagePlacement, PixelBuffer, RenderBuffer, Rgb, Size};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Window};

pub struct CanvasStage {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    /// Last fill style set, so runs of same-coloured squares skip the JS call.
    fill: Option<Rgb>,
}

impl CanvasStage {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            context,
            fill: None,
        })
    }

    /// Resize the canvas backing store to the window's inner size.
    pub fn fit_to_window(&mut self, window: &Window) -> Result<Size, JsValue> {
        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0);
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
        Ok(self.size())
    }

    pub fn size(&self) -> Size {
        Size::new(self.canvas.width(), self.canvas.height())
    }

    /// Draw `image` at `placement` and read the whole canvas back as RGBA.
    /// Leaves the canvas cleared.
    pub fn sample_image(
        &self,
        image: &HtmlImageElement,
        placement: &ImagePlacement,
    ) -> Result<PixelBuffer, JsValue> {
        let size = self.size();
        let (w, h) = (f64::from(size.width), f64::from(size.height));
        self.context.clear_rect(0.0, 0.0, w, h);
        self.context.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            f64::from(placement.offset.x),
            f64::from(placement.offset.y),
            f64::from(placement.size.x),
            f64::from(placement.size.y),
        )?;
        let data = self.context.get_image_data(0.0, 0.0, w, h)?.data().0;
        self.context.clear_rect(0.0, 0.0, w, h);
        PixelBuffer::from_rgba(size, data).map_err(crate::js_error)
    }

    /// Clear the canvas and paint every instance as a filled square.
    #[allow(deprecated)]
    pub fn present(&mut self, buffer: &RenderBuffer) {
        let size = self.size();
        self.context
            .clear_rect(0.0, 0.0, f64::from(size.width), f64::from(size.height));

        for instance in buffer.iter() {
            let color = instance.color();
            if self.fill != Some(color) {
                self.context.set_fill_style(&JsValue::from_str(&color.css()));
                self.fill = Some(color);
            }
            let edge = f64::from(instance.size);
            self.context
                .fill_rect(f64::from(instance.x), f64::from(instance.y), edge, edge);
        }
    }
}

use super::canvas;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, HtmlCanvasElement};

/// Snapshot of the drawing composited over an opaque white background,
/// PNG-encoded. The visible canvas stays transparent where untouched, so the
/// upload is flattened on an offscreen copy first.
///
/// `None` means there is nothing to send: missing document, unusable
/// context, or an encoder that produced no blob.
pub async fn flattened_png(source: &HtmlCanvasElement) -> Option<Blob> {
    let document = web_sys::window()?.document()?;
    let offscreen = document
        .create_element("canvas")
        .ok()?
        .dyn_into::<HtmlCanvasElement>()
        .ok()?;
    offscreen.set_width(source.width());
    offscreen.set_height(source.height());

    let context = canvas::drawing_context(&offscreen)?;
    canvas::paint_white(&context, offscreen.width(), offscreen.height());
    context
        .draw_image_with_html_canvas_element(source, 0.0, 0.0)
        .ok()?;

    png_blob(&offscreen).await
}

/// Bridges `HtmlCanvasElement::to_blob` into a future. The encoder calls
/// back with `null` on failure, which falls out as `None` here.
async fn png_blob(source: &HtmlCanvasElement) -> Option<Blob> {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let resolved = resolve.clone();
        let callback = Closure::once_into_js(move |blob: JsValue| {
            let _ = resolved.call1(&JsValue::NULL, &blob);
        });
        if source
            .to_blob_with_type(callback.unchecked_ref(), "image/png")
            .is_err()
        {
            let _ = resolve.call1(&JsValue::NULL, &JsValue::NULL);
        }
    });

    JsFuture::from(promise).await.ok()?.dyn_into::<Blob>().ok()
}
